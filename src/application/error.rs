use thiserror::Error;

/// Validation failures. Every one of these is recoverable: the operation
/// that raised it is a no-op and the session keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Income amount must be greater than zero")]
    NonPositiveIncome,

    #[error("Expense amount must be greater than zero")]
    NonPositiveExpense,

    #[error("The number of dependents cannot be negative")]
    NegativeDependents,
}
