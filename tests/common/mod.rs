// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use kakebo::application::{
    BudgetService, CategoryDecision, ExpenseOutcome, ExpenseReceipt,
};
use kakebo::domain::Cents;

/// Fresh service, seeded exactly like a new session.
pub fn test_service() -> BudgetService {
    BudgetService::new()
}

/// Record an expense against a category that must already be known.
pub fn record_known_expense(
    service: &mut BudgetService,
    category: &str,
    amount_cents: Cents,
) -> ExpenseReceipt {
    match service
        .add_expense(category, amount_cents)
        .expect("amount should pass validation")
    {
        ExpenseOutcome::Recorded(receipt) => receipt,
        ExpenseOutcome::UnknownCategory(pending) => {
            panic!("category '{}' should already be known", pending.category)
        }
    }
}

/// Drive the two-phase flow for an unknown category to completion.
pub fn record_with_new_category(
    service: &mut BudgetService,
    category: &str,
    amount_cents: Cents,
) -> ExpenseReceipt {
    let pending = match service
        .add_expense(category, amount_cents)
        .expect("amount should pass validation")
    {
        ExpenseOutcome::UnknownCategory(pending) => pending,
        ExpenseOutcome::Recorded(_) => panic!("category '{}' should be unknown", category),
    };
    match service
        .confirm_category(pending, true)
        .expect("amount should pass validation")
    {
        CategoryDecision::Registered(receipt) => receipt,
        CategoryDecision::Declined => unreachable!("confirmation was accepted"),
    }
}
