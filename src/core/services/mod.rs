pub mod contact_service;
pub mod credit_service;
pub mod expense_service;
pub mod loan_service;
pub mod summary_service;

pub use contact_service::ContactService;
pub use credit_service::CreditService;
pub use expense_service::ExpenseService;
pub use loan_service::LoanService;
pub use summary_service::SummaryService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, LedgerError>;

/// Rejects non-positive or non-finite amounts before any mutation happens.
pub(crate) fn require_positive_amount(amount: f64) -> ServiceResult<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::Validation(
            "amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}

/// Rejects blank required text fields, returning the trimmed value.
pub(crate) fn require_text(value: &str, field: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
