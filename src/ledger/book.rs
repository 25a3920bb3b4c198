use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Contact, Credit, Expense, LoanTransaction, PersonKey};

/// Identifies what a successful mutation touched, so derived consumers know
/// which views to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Credits,
    Expenses,
    Loans,
    Contacts,
    /// Wholesale replacement, as after an import or a clear.
    All,
}

/// Owns the four record collections behind a hisaab ledger.
///
/// The book guarantees id-based access and the change signal; validation and
/// cross-collection rules live in the service layer. Every successful
/// mutation bumps `revision`, so a caller holding a stale revision knows
/// something changed without the store ever calling back into rendering.
#[derive(Debug, Clone)]
pub struct Book {
    credits: Vec<Credit>,
    expenses: Vec<Expense>,
    loans: Vec<LoanTransaction>,
    contacts: Vec<Contact>,
    revision: u64,
    last_change: Option<Change>,
    updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    /// Assembles a book from restored collections, e.g. out of storage.
    pub fn from_parts(
        credits: Vec<Credit>,
        expenses: Vec<Expense>,
        loans: Vec<LoanTransaction>,
        contacts: Vec<Contact>,
    ) -> Self {
        Self {
            credits,
            expenses,
            loans,
            contacts,
            revision: 0,
            last_change: None,
            updated_at: Utc::now(),
        }
    }

    pub fn credits(&self) -> &[Credit] {
        &self.credits
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn loans(&self) -> &[LoanTransaction] {
        &self.loans
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn add_credit(&mut self, credit: Credit) -> Uuid {
        let id = credit.id;
        self.credits.push(credit);
        self.touch(Change::Credits);
        id
    }

    pub fn credit(&self, id: Uuid) -> Option<&Credit> {
        self.credits.iter().find(|credit| credit.id == id)
    }

    pub fn credit_mut(&mut self, id: Uuid) -> Option<&mut Credit> {
        self.credits.iter_mut().find(|credit| credit.id == id)
    }

    pub fn remove_credit(&mut self, id: Uuid) -> Option<Credit> {
        let index = self.credits.iter().position(|credit| credit.id == id)?;
        let removed = self.credits.remove(index);
        self.touch(Change::Credits);
        Some(removed)
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch(Change::Expenses);
        id
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        let removed = self.expenses.remove(index);
        self.touch(Change::Expenses);
        Some(removed)
    }

    pub fn add_loan(&mut self, loan: LoanTransaction) -> Uuid {
        let id = loan.id;
        self.loans.push(loan);
        self.touch(Change::Loans);
        id
    }

    pub fn loan(&self, id: Uuid) -> Option<&LoanTransaction> {
        self.loans.iter().find(|loan| loan.id == id)
    }

    pub fn loan_mut(&mut self, id: Uuid) -> Option<&mut LoanTransaction> {
        self.loans.iter_mut().find(|loan| loan.id == id)
    }

    pub fn remove_loan(&mut self, id: Uuid) -> Option<LoanTransaction> {
        let index = self.loans.iter().position(|loan| loan.id == id)?;
        let removed = self.loans.remove(index);
        self.touch(Change::Loans);
        Some(removed)
    }

    /// Rewrites every entry under `old_key` to the new display name,
    /// refolding its key. Returns how many entries were rewritten.
    pub fn rekey_loans(&mut self, old_key: &PersonKey, new_display: &str) -> usize {
        let mut rewritten = 0;
        for loan in self.loans.iter_mut().filter(|loan| &loan.person == old_key) {
            loan.set_person(new_display);
            rewritten += 1;
        }
        if rewritten > 0 {
            self.touch(Change::Loans);
        }
        rewritten
    }

    /// Removes every entry under `key`, returning how many were removed.
    pub fn remove_loans_for(&mut self, key: &PersonKey) -> usize {
        let before = self.loans.len();
        self.loans.retain(|loan| &loan.person != key);
        let removed = before - self.loans.len();
        if removed > 0 {
            self.touch(Change::Loans);
        }
        removed
    }

    pub fn add_contact(&mut self, contact: Contact) -> Uuid {
        let id = contact.id;
        self.contacts.push(contact);
        self.touch(Change::Contacts);
        id
    }

    pub fn contact(&self, id: Uuid) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn contact_mut(&mut self, id: Uuid) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|contact| contact.id == id)
    }

    pub fn remove_contact(&mut self, id: Uuid) -> Option<Contact> {
        let index = self.contacts.iter().position(|contact| contact.id == id)?;
        let removed = self.contacts.remove(index);
        self.touch(Change::Contacts);
        Some(removed)
    }

    /// Replaces every collection wholesale, as when applying an import.
    pub fn replace_all(
        &mut self,
        credits: Vec<Credit>,
        expenses: Vec<Expense>,
        loans: Vec<LoanTransaction>,
        contacts: Vec<Contact>,
    ) {
        self.credits = credits;
        self.expenses = expenses;
        self.loans = loans;
        self.contacts = contacts;
        self.touch(Change::All);
    }

    /// Registers a mutation: bumps the revision and records what changed.
    pub fn touch(&mut self, change: Change) {
        self.revision += 1;
        self.last_change = Some(change);
        self.updated_at = Utc::now();
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_change(&self) -> Option<Change> {
        self.last_change
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}
