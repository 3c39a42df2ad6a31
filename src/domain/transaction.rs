use chrono::{DateTime, Utc};

use super::Cents;

/// Category recorded for income entries, which have no expense category.
pub const INCOME_CATEGORY: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ledger entry. Entries are immutable once recorded and are never
/// edited or deleted; the ledger is an append-only sequence.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub category: String,
    /// Amount in cents (always positive; the sign is carried by `kind`)
    pub amount_cents: Cents,
    /// When the entry was recorded in this session
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub fn income(amount_cents: Cents) -> Self {
        Self::new(TransactionKind::Income, INCOME_CATEGORY.to_string(), amount_cents)
    }

    pub fn expense(category: impl Into<String>, amount_cents: Cents) -> Self {
        Self::new(TransactionKind::Expense, category.into(), amount_cents)
    }

    fn new(kind: TransactionKind, category: String, amount_cents: Cents) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            kind,
            category,
            amount_cents,
            recorded_at: Utc::now(),
        }
    }

    /// Signed contribution of this entry to the running balance.
    pub fn signed_amount(&self) -> Cents {
        match self.kind {
            TransactionKind::Income => self.amount_cents,
            TransactionKind::Expense => -self.amount_cents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_uses_sentinel_category() {
        let t = Transaction::income(50000);
        assert_eq!(t.kind, TransactionKind::Income);
        assert_eq!(t.category, INCOME_CATEGORY);
        assert_eq!(t.amount_cents, 50000);
        assert_eq!(t.signed_amount(), 50000);
    }

    #[test]
    fn test_expense_keeps_its_category() {
        let t = Transaction::expense("Groceries", 20000);
        assert_eq!(t.kind, TransactionKind::Expense);
        assert_eq!(t.category, "Groceries");
        assert_eq!(t.signed_amount(), -20000);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
    }

    #[test]
    #[should_panic(expected = "Transaction amount must be positive")]
    fn test_zero_amount_is_rejected() {
        Transaction::income(0);
    }
}
