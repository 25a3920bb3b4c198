pub mod balance;
pub mod book;
pub mod contact;
pub mod credit;
pub mod expense;
pub mod filter;
pub mod loan;

pub use balance::{CashSummary, LoanTotals, PersonBalance};
pub use book::{Book, Change};
pub use contact::Contact;
pub use credit::Credit;
pub use expense::Expense;
pub use filter::{DateRange, LoanFilter};
pub use loan::{LoanKind, LoanTransaction, PersonKey};
