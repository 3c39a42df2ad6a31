use super::Cents;

/// Balance above which the advice switches to the comfortable tier,
/// in cents (1000.00).
pub const COMFORTABLE_THRESHOLD: Cents = 100_000;

/// Advice tier derived from the current balance. Tiers are mutually
/// exclusive and checked in order: overdrawn, comfortable, steady.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTier {
    /// Balance below zero
    Overdrawn,
    /// Balance between zero and the comfortable threshold, inclusive
    Steady,
    /// Balance above the comfortable threshold
    Comfortable,
}

impl BalanceTier {
    pub fn classify(balance_cents: Cents) -> Self {
        if balance_cents < 0 {
            BalanceTier::Overdrawn
        } else if balance_cents > COMFORTABLE_THRESHOLD {
            BalanceTier::Comfortable
        } else {
            BalanceTier::Steady
        }
    }
}

/// The advice for a given ledger state: one balance tier plus the
/// dependents count for the dependents tier. Plain data; message text is
/// the display layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub tier: BalanceTier,
    pub dependents: i64,
}

impl Advice {
    pub fn evaluate(balance_cents: Cents, dependents: i64) -> Self {
        Self {
            tier: BalanceTier::classify(balance_cents),
            dependents,
        }
    }

    pub fn has_dependents(&self) -> bool {
        self.dependents > 0
    }
}
