use crate::domain::{Advice, Cents, Ledger, Transaction};

use super::AppError;

/// Application service providing high-level operations over the ledger.
/// This is the primary interface for any client (the interactive session,
/// tests, etc.): it owns the state, enforces the validation rules, and
/// returns plain data for the caller to present.
pub struct BudgetService {
    ledger: Ledger,
}

/// Result of recording an income entry
#[derive(Debug)]
pub struct IncomeReceipt {
    pub amount_cents: Cents,
    pub balance_cents: Cents,
}

/// Result of recording an expense entry
#[derive(Debug)]
pub struct ExpenseReceipt {
    pub category: String,
    pub amount_cents: Cents,
    pub balance_cents: Cents,
}

/// An expense held back because its category is not in the book yet.
/// Completing or abandoning it goes through `confirm_category`.
#[derive(Debug, Clone)]
pub struct PendingExpense {
    pub category: String,
    pub amount_cents: Cents,
}

/// Outcome of `add_expense`: either the entry was recorded, or the caller
/// must ask the user whether to register the unknown category first.
#[derive(Debug)]
pub enum ExpenseOutcome {
    Recorded(ExpenseReceipt),
    UnknownCategory(PendingExpense),
}

/// Outcome of `confirm_category`: the category was registered and the
/// expense recorded, or the whole operation was called off. A decline is a
/// cancellation, not an error.
#[derive(Debug)]
pub enum CategoryDecision {
    Registered(ExpenseReceipt),
    Declined,
}

impl BudgetService {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    // ========================
    // Dependents
    // ========================

    /// Store a new dependents count; the latest value wins.
    pub fn set_dependents(&mut self, count: i64) -> Result<(), AppError> {
        if count < 0 {
            return Err(AppError::NegativeDependents);
        }
        self.ledger.set_dependents(count);
        Ok(())
    }

    pub fn dependents(&self) -> i64 {
        self.ledger.dependents()
    }

    // ========================
    // Recording entries
    // ========================

    /// Record an income entry and return the updated balance.
    pub fn add_income(&mut self, amount_cents: Cents) -> Result<IncomeReceipt, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::NonPositiveIncome);
        }
        self.ledger.record(Transaction::income(amount_cents));
        Ok(IncomeReceipt {
            amount_cents,
            balance_cents: self.ledger.balance_cents(),
        })
    }

    /// Record an expense entry against a known category, or hand back a
    /// `PendingExpense` when the category is unknown. The amount is
    /// validated before the category is even looked at, so a bad amount
    /// never reaches the confirmation step.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount_cents: Cents,
    ) -> Result<ExpenseOutcome, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::NonPositiveExpense);
        }
        if !self.ledger.categories().contains(category) {
            return Ok(ExpenseOutcome::UnknownCategory(PendingExpense {
                category: category.to_string(),
                amount_cents,
            }));
        }
        Ok(ExpenseOutcome::Recorded(self.record_expense(
            category.to_string(),
            amount_cents,
        )))
    }

    /// Complete a pending expense. Accepting registers the category (the
    /// only way the book ever grows) and records the entry; declining
    /// leaves every piece of state untouched.
    pub fn confirm_category(
        &mut self,
        pending: PendingExpense,
        accept: bool,
    ) -> Result<CategoryDecision, AppError> {
        if pending.amount_cents <= 0 {
            return Err(AppError::NonPositiveExpense);
        }
        if !accept {
            return Ok(CategoryDecision::Declined);
        }
        self.ledger.register_category(pending.category.clone());
        Ok(CategoryDecision::Registered(
            self.record_expense(pending.category, pending.amount_cents),
        ))
    }

    fn record_expense(&mut self, category: String, amount_cents: Cents) -> ExpenseReceipt {
        let transaction = Transaction::expense(category, amount_cents);
        let category = transaction.category.clone();
        self.ledger.record(transaction);
        ExpenseReceipt {
            category,
            amount_cents,
            balance_cents: self.ledger.balance_cents(),
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn balance_cents(&self) -> Cents {
        self.ledger.balance_cents()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Known category names, in insertion order.
    pub fn categories(&self) -> &[String] {
        self.ledger.categories().names()
    }

    pub fn advice(&self) -> Advice {
        Advice::evaluate(self.ledger.balance_cents(), self.ledger.dependents())
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
