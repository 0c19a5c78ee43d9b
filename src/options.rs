//! Game configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shuffle_interval(4)
///     .with_reshuffle_threshold(20)
///     .with_max_bet(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Reshuffle before every round whose 0-based index is a multiple of
    /// this value. 0 disables the periodic reshuffle.
    pub shuffle_interval: u32,
    /// Reshuffle before a round when this many cards or fewer remain.
    pub reshuffle_threshold: usize,
    /// Smallest accepted bet. See [`GameOptions::bet_limits`].
    pub min_bet: u32,
    /// Largest accepted bet. See [`GameOptions::bet_limits`].
    pub max_bet: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle_interval: 6,
            reshuffle_threshold: 15,
            min_bet: 1,
            max_bet: 9,
        }
    }
}

impl GameOptions {
    /// Sets the periodic reshuffle interval.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_interval(3);
    /// assert_eq!(options.shuffle_interval, 3);
    /// ```
    #[must_use]
    pub const fn with_shuffle_interval(mut self, rounds: u32) -> Self {
        self.shuffle_interval = rounds;
        self
    }

    /// Sets the low-water mark that forces a reshuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(10);
    /// assert_eq!(options.reshuffle_threshold, 10);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, cards: usize) -> Self {
        self.reshuffle_threshold = cards;
        self
    }

    /// Sets the smallest accepted bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(2);
    /// assert_eq!(options.min_bet, 2);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, amount: u32) -> Self {
        self.min_bet = amount;
        self
    }

    /// Sets the largest accepted bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bet(5);
    /// assert_eq!(options.max_bet, 5);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, amount: u32) -> Self {
        self.max_bet = amount;
        self
    }

    /// Returns the effective `(min, max)` table limits.
    ///
    /// The minimum is at least 1 and the maximum is never below the minimum,
    /// so at least one bet is always accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(5).with_max_bet(2);
    /// assert_eq!(options.bet_limits(), (5, 5));
    ///
    /// let options = GameOptions::default().with_min_bet(0).with_max_bet(0);
    /// assert_eq!(options.bet_limits(), (1, 1));
    /// ```
    #[must_use]
    pub const fn bet_limits(&self) -> (u32, u32) {
        let min = if self.min_bet == 0 { 1 } else { self.min_bet };
        let max = if self.max_bet < min { min } else { self.max_bet };
        (min, max)
    }

    /// Returns whether `amount` is within the table limits.
    #[must_use]
    pub const fn accepts_bet(&self, amount: u32) -> bool {
        let (min, max) = self.bet_limits();
        amount >= min && amount <= max
    }
}
