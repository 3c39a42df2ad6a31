use super::{CategoryBook, Cents, Transaction};

/// Recompute a balance from scratch by folding over the transaction list.
/// Balance = sum of income amounts - sum of expense amounts.
pub fn compute_balance(transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .fold(0, |balance, t| balance + t.signed_amount())
}

/// The in-memory financial state for one session: the append-only
/// transaction list, the running balance, the category book, and the
/// dependents count. The ledger itself only holds state; input validation
/// is the service layer's job.
#[derive(Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    balance_cents: Cents,
    categories: CategoryBook,
    dependents: i64,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            balance_cents: 0,
            categories: CategoryBook::with_defaults(),
            dependents: 0,
        }
    }

    /// Append an entry and fold its signed amount into the running balance.
    pub fn record(&mut self, transaction: Transaction) {
        self.balance_cents += transaction.signed_amount();
        self.transactions.push(transaction);
        debug_assert_eq!(self.balance_cents, compute_balance(&self.transactions));
    }

    pub fn balance_cents(&self) -> Cents {
        self.balance_cents
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &CategoryBook {
        &self.categories
    }

    /// Add a category to the book; the only mutation path the book has.
    pub fn register_category(&mut self, name: impl Into<String>) -> bool {
        self.categories.register(name)
    }

    pub fn dependents(&self) -> i64 {
        self.dependents
    }

    /// Store a new dependents count. The caller has already validated that
    /// `count` is non-negative; the latest value wins.
    pub fn set_dependents(&mut self, count: i64) {
        debug_assert!(count >= 0);
        self.dependents = count;
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
