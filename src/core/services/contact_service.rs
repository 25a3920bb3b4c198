//! Contact resolution: binding free-text person names to stable contacts.
//!
//! Contacts and udhaar entries are joined by the case-folded name key, not a
//! stored foreign key. Everything that depends on that join lives here, so a
//! future stored-id design stays a local change.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{balance, filter, Book, Change, Contact, LoanFilter, LoanKind, LoanTransaction, PersonKey};

use super::{require_positive_amount, require_text, LoanService, ServiceResult};

/// Provides contact CRUD plus the name-key join operations.
pub struct ContactService;

impl ContactService {
    /// Saves a new contact; names must be unique case-insensitively.
    pub fn create(book: &mut Book, name: &str, phone: Option<&str>) -> ServiceResult<Uuid> {
        let name = require_text(name, "name")?;
        if Self::find_by_name(book, &name).is_some() {
            return Err(LedgerError::DuplicateName(name));
        }
        let phone = normalize_phone(phone);
        Ok(book.add_contact(Contact::new(name, phone)))
    }

    /// Case-insensitive exact match on the contact name.
    pub fn find_by_name<'a>(book: &'a Book, name: &str) -> Option<&'a Contact> {
        let key = PersonKey::fold(name);
        book.contacts().iter().find(|contact| contact.key() == key)
    }

    /// Renames a contact and rewrites its historical udhaar entries in place.
    ///
    /// Rejected when another contact already holds the case-folded target
    /// name; the phone number is replaced wholesale along with the name.
    pub fn rename(
        book: &mut Book,
        id: Uuid,
        new_name: &str,
        phone: Option<&str>,
    ) -> ServiceResult<()> {
        let new_name = require_text(new_name, "name")?;
        let new_key = PersonKey::fold(&new_name);
        let collision = book
            .contacts()
            .iter()
            .any(|contact| contact.id != id && contact.key() == new_key);
        if collision {
            return Err(LedgerError::DuplicateName(new_name));
        }
        let phone = normalize_phone(phone);
        let contact = book
            .contact_mut(id)
            .ok_or_else(|| LedgerError::NotFound(format!("contact {id}")))?;
        let old_key = contact.key();
        contact.name = new_name.clone();
        contact.phone = phone;
        let rewritten = book.rekey_loans(&old_key, &new_name);
        book.touch(Change::Contacts);
        tracing::debug!(%old_key, new = %new_name, rewritten, "contact renamed");
        Ok(())
    }

    /// Net position for the contact's key; positive means they owe the owner.
    pub fn balance_for(book: &Book, id: Uuid) -> ServiceResult<f64> {
        let contact = Self::get(book, id)?;
        Ok(balance::net_for(book.loans(), &contact.key()))
    }

    pub fn has_transactions(book: &Book, id: Uuid) -> ServiceResult<bool> {
        let contact = Self::get(book, id)?;
        let key = contact.key();
        Ok(book.loans().iter().any(|loan| loan.person == key))
    }

    /// The contact's udhaar history, newest first.
    pub fn history<'a>(book: &'a Book, id: Uuid) -> ServiceResult<Vec<&'a LoanTransaction>> {
        let contact = Self::get(book, id)?;
        let loan_filter = LoanFilter {
            person: Some(contact.key()),
            ..Default::default()
        };
        Ok(filter::filter_loans(book.loans(), &loan_filter))
    }

    /// Deletes the contact only; its udhaar entries stay under the key.
    pub fn delete(book: &mut Book, id: Uuid) -> ServiceResult<Contact> {
        book.remove_contact(id)
            .ok_or_else(|| LedgerError::NotFound(format!("contact {id}")))
    }

    /// Deletes the contact together with every entry under its key,
    /// returning how many entries were removed. The caller opts into this
    /// explicitly; a plain `delete` never cascades.
    pub fn delete_cascade(book: &mut Book, id: Uuid) -> ServiceResult<usize> {
        let contact = book
            .remove_contact(id)
            .ok_or_else(|| LedgerError::NotFound(format!("contact {id}")))?;
        let removed = book.remove_loans_for(&contact.key());
        tracing::debug!(contact = %contact.name, removed, "contact deleted with history");
        Ok(removed)
    }

    /// Quick-action entry recorded against a saved contact.
    pub fn record_transaction(
        book: &mut Book,
        contact_id: Uuid,
        kind: LoanKind,
        date: NaiveDate,
        amount: f64,
        purpose: &str,
    ) -> ServiceResult<Uuid> {
        let purpose = require_text(purpose, "purpose")?;
        let amount = require_positive_amount(amount)?;
        let name = Self::get(book, contact_id)?.name.clone();
        LoanService::add(book, date, kind, &name, amount, &purpose)
    }

    fn get(book: &Book, id: Uuid) -> ServiceResult<&Contact> {
        book.contact(id)
            .ok_or_else(|| LedgerError::NotFound(format!("contact {id}")))
    }
}

fn normalize_phone(phone: Option<&str>) -> Option<String> {
    phone
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    #[test]
    fn create_rejects_case_insensitive_duplicates() {
        let mut book = Book::new();
        ContactService::create(&mut book, "Alice", None).expect("first create");
        let err = ContactService::create(&mut book, "alice", None)
            .expect_err("case-insensitive duplicate must fail");
        assert!(matches!(err, LedgerError::DuplicateName(_)));
        assert_eq!(book.contacts().len(), 1);
    }

    #[test]
    fn find_by_name_ignores_case() {
        let mut book = Book::new();
        let id = ContactService::create(&mut book, "Bob Smith", Some("12345")).unwrap();
        let found = ContactService::find_by_name(&book, "  bob smith ").expect("found");
        assert_eq!(found.id, id);
        assert!(ContactService::find_by_name(&book, "someone else").is_none());
    }

    #[test]
    fn rename_rekeys_history_and_keeps_the_balance() {
        let mut book = Book::new();
        let id = ContactService::create(&mut book, "Bob", None).unwrap();
        LoanService::add(&mut book, date(1), LoanKind::Given, "Bob", 1000.0, "loan").unwrap();
        LoanService::add(&mut book, date(2), LoanKind::ReceivedBack, "bob", 400.0, "part").unwrap();
        let before = ContactService::balance_for(&book, id).unwrap();
        assert_eq!(before, 600.0);

        ContactService::rename(&mut book, id, "Robert", None).expect("rename");
        assert!(book
            .loans()
            .iter()
            .all(|loan| loan.person == PersonKey::fold("robert")));
        assert!(book
            .loans()
            .iter()
            .all(|loan| loan.person_display == "Robert"));
        assert_eq!(ContactService::balance_for(&book, id).unwrap(), before);
    }

    #[test]
    fn rename_to_another_contacts_name_is_rejected() {
        let mut book = Book::new();
        ContactService::create(&mut book, "Alice", None).unwrap();
        let id = ContactService::create(&mut book, "Bob", None).unwrap();
        let err = ContactService::rename(&mut book, id, "ALICE", None)
            .expect_err("collision must fail");
        assert!(matches!(err, LedgerError::DuplicateName(_)));
        assert_eq!(book.contact(id).unwrap().name, "Bob", "no partial mutation");
    }

    #[test]
    fn rename_to_own_name_changes_casing_only() {
        let mut book = Book::new();
        let id = ContactService::create(&mut book, "bob", None).unwrap();
        ContactService::rename(&mut book, id, "Bob", None).expect("same-key rename");
        assert_eq!(book.contact(id).unwrap().name, "Bob");
    }

    #[test]
    fn delete_cascade_reports_removed_entries() {
        let mut book = Book::new();
        let id = ContactService::create(&mut book, "Bob", None).unwrap();
        LoanService::add(&mut book, date(1), LoanKind::Given, "Bob", 100.0, "a").unwrap();
        LoanService::add(&mut book, date(2), LoanKind::Taken, "bob", 50.0, "b").unwrap();
        LoanService::add(&mut book, date(3), LoanKind::Given, "Carol", 75.0, "c").unwrap();

        let removed = ContactService::delete_cascade(&mut book, id).expect("cascade");
        assert_eq!(removed, 2);
        assert!(book.contacts().is_empty());
        assert_eq!(book.loans().len(), 1, "other people keep their history");
    }

    #[test]
    fn plain_delete_keeps_the_history() {
        let mut book = Book::new();
        let id = ContactService::create(&mut book, "Bob", None).unwrap();
        LoanService::add(&mut book, date(1), LoanKind::Given, "Bob", 100.0, "a").unwrap();
        ContactService::delete(&mut book, id).expect("delete");
        assert_eq!(book.loans().len(), 1);
    }

    #[test]
    fn record_transaction_uses_the_contact_name() {
        let mut book = Book::new();
        let id = ContactService::create(&mut book, "Bob Smith", None).unwrap();
        let txn_id =
            ContactService::record_transaction(&mut book, id, LoanKind::Given, date(5), 250.0, "rent")
                .expect("record");
        let loan = book.loan(txn_id).unwrap();
        assert_eq!(loan.person, PersonKey::fold("bob smith"));
        assert_eq!(loan.person_display, "Bob Smith");
    }

    #[test]
    fn history_is_newest_first() {
        let mut book = Book::new();
        let id = ContactService::create(&mut book, "Bob", None).unwrap();
        LoanService::add(&mut book, date(1), LoanKind::Given, "Bob", 100.0, "old").unwrap();
        LoanService::add(&mut book, date(9), LoanKind::Taken, "Bob", 50.0, "new").unwrap();
        let history = ContactService::history(&book, id).expect("history");
        let order: Vec<_> = history.iter().map(|loan| loan.purpose.as_str()).collect();
        assert_eq!(order, vec!["new", "old"]);
    }

    #[test]
    fn operations_on_unknown_contacts_report_not_found() {
        let mut book = Book::new();
        let missing = Uuid::new_v4();
        assert!(matches!(
            ContactService::balance_for(&book, missing),
            Err(LedgerError::NotFound(_))
        ));
        assert!(matches!(
            ContactService::delete_cascade(&mut book, missing),
            Err(LedgerError::NotFound(_))
        ));
    }
}
