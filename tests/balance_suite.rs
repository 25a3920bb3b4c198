use chrono::NaiveDate;
use hisaab_core::core::services::{
    ContactService, CreditService, ExpenseService, LoanService, SummaryService,
};
use hisaab_core::ledger::{balance, Book, DateRange, LoanFilter, LoanKind, PersonKey};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn spec_example_end_to_end() {
    let mut book = Book::new();
    CreditService::add(&mut book, date(1), 500.0, "Salary").expect("credit");
    ExpenseService::add(&mut book, date(2), 200.0, "groceries").expect("expense");
    assert_eq!(SummaryService::cash(&book).balance, 300.0);

    LoanService::add(&mut book, date(3), LoanKind::Given, "Sam", 1000.0, "loan").unwrap();
    LoanService::add(&mut book, date(4), LoanKind::ReceivedBack, "Sam", 400.0, "part").unwrap();
    let sam = PersonKey::fold("sam");
    assert_eq!(balance::net_for(book.loans(), &sam), 600.0, "Sam owes 600");

    // Offsetting taken/paid_back entries leave the net unchanged.
    LoanService::add(&mut book, date(5), LoanKind::Taken, "Sam", 600.0, "borrow").unwrap();
    LoanService::add(&mut book, date(6), LoanKind::PaidBack, "Sam", 600.0, "repay").unwrap();
    assert_eq!(balance::net_for(book.loans(), &sam), 600.0);
}

#[test]
fn net_is_independent_of_insertion_and_date_order() {
    let entries = [
        (LoanKind::Given, 9, 250.0),
        (LoanKind::Taken, 1, 120.0),
        (LoanKind::ReceivedBack, 28, 75.0),
        (LoanKind::PaidBack, 14, 40.0),
        (LoanKind::Given, 3, 60.0),
    ];

    let mut forward = Book::new();
    for (kind, day, amount) in entries {
        LoanService::add(&mut forward, date(day), kind, "Asha", amount, "x").unwrap();
    }
    let mut backward = Book::new();
    for (kind, day, amount) in entries.iter().rev() {
        LoanService::add(&mut backward, date(*day), *kind, "Asha", *amount, "x").unwrap();
    }

    let key = PersonKey::fold("asha");
    let expected = (250.0 + 60.0 - 75.0) - (120.0 - 40.0);
    assert_eq!(balance::net_for(forward.loans(), &key), expected);
    assert_eq!(balance::net_for(backward.loans(), &key), expected);
}

#[test]
fn compensating_delete_and_readd_is_idempotent() {
    let mut book = Book::new();
    LoanService::add(&mut book, date(1), LoanKind::Given, "Mira", 800.0, "deposit").unwrap();
    let id = LoanService::add(&mut book, date(2), LoanKind::Taken, "Mira", 300.0, "cab").unwrap();
    let key = PersonKey::fold("mira");
    let before = balance::net_for(book.loans(), &key);

    let removed = LoanService::remove(&mut book, id).expect("remove");
    assert_ne!(balance::net_for(book.loans(), &key), before);

    LoanService::add(
        &mut book,
        removed.date,
        removed.kind,
        &removed.person_display,
        removed.amount,
        &removed.purpose,
    )
    .expect("re-add");
    assert_eq!(balance::net_for(book.loans(), &key), before);
}

#[test]
fn rename_preserves_the_balance_under_the_new_key() {
    let mut book = Book::new();
    let id = ContactService::create(&mut book, "Bob", Some("98765")).unwrap();
    LoanService::add(&mut book, date(1), LoanKind::Given, "Bob", 1000.0, "loan").unwrap();
    LoanService::add(&mut book, date(2), LoanKind::ReceivedBack, "bob", 400.0, "part").unwrap();
    let before = ContactService::balance_for(&book, id).expect("balance");

    ContactService::rename(&mut book, id, "Robert", Some("98765")).expect("rename");
    assert_eq!(ContactService::balance_for(&book, id).expect("balance"), before);

    let people = SummaryService::people(&book);
    assert!(people.contains_key(&PersonKey::fold("robert")));
    assert!(!people.contains_key(&PersonKey::fold("bob")));
}

#[test]
fn date_end_filter_is_end_of_day_inclusive() {
    let mut book = Book::new();
    LoanService::add(&mut book, date(15), LoanKind::Given, "Sam", 10.0, "boundary").unwrap();
    LoanService::add(&mut book, date(16), LoanKind::Given, "Sam", 10.0, "after").unwrap();

    let filter = LoanFilter {
        range: DateRange::new(None, Some(date(15))),
        ..Default::default()
    };
    let matching = LoanService::filtered(&book, &filter);
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].purpose, "boundary");
}

#[test]
fn mutations_bump_the_revision_and_failures_do_not() {
    let mut book = Book::new();
    let before = book.revision();
    CreditService::add(&mut book, date(1), 100.0, "Gift").unwrap();
    assert_eq!(book.revision(), before + 1);

    let failed = CreditService::add(&mut book, date(1), 0.0, "Gift");
    assert!(failed.is_err());
    assert_eq!(book.revision(), before + 1, "failed validation must not touch the book");
}
