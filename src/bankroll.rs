//! Session-long balance and win tally.

/// Running money balance and win count for one session.
///
/// The balance has no floor and may go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bankroll {
    balance: i64,
    wins: u32,
}

impl Bankroll {
    /// Creates a bankroll with zero balance and no wins.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            balance: 0,
            wins: 0,
        }
    }

    /// Adds `amount` to the balance.
    pub fn credit(&mut self, amount: u32) {
        self.balance += i64::from(amount);
    }

    /// Subtracts `amount` from the balance.
    pub fn debit(&mut self, amount: u32) {
        self.balance -= i64::from(amount);
    }

    /// Counts one more won round.
    pub const fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }
}
