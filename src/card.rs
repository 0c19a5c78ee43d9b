//! Card identifiers and their rank/suit projections.
//!
//! A card is a single integer identifier. Rank and suit are derived from it
//! with `id % 13` and `id % 4`, so suits are cosmetic and interleave with
//! ranks rather than forming four contiguous runs.

use core::fmt;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of distinct ranks.
pub const RANK_COUNT: u8 = 13;

/// Number of distinct suits.
pub const SUIT_COUNT: u8 = 4;

/// Card suit. Has no effect on value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// Returns the suit encoded by `index % 4`.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % SUIT_COUNT {
            0 => Self::Clubs,
            1 => Self::Diamonds,
            2 => Self::Spades,
            _ => Self::Hearts,
        }
    }

    /// Returns the single display character for this suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Spades => 'S',
            Self::Hearts => 'H',
        }
    }
}

/// Card rank as an index in `0..13`.
///
/// Index 0 is the Ace, indices 1 through 8 are Two through Nine, and
/// indices 9 through 12 are all worth ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// The Ace.
    pub const ACE: Self = Self(0);
    /// The Six, which pairs with an Ace to form a soft seventeen.
    pub const SIX: Self = Self(5);

    /// Returns the rank encoded by `index % 13`.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        Self(index % RANK_COUNT)
    }

    /// Returns the rank index in `0..13`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns whether this rank is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.0 == Self::ACE.0
    }

    /// Returns the value of this rank with an Ace counted as one.
    #[must_use]
    pub const fn min_value(self) -> u8 {
        match self.0 {
            0 => 1,
            1..=8 => self.0 + 1,
            _ => 10,
        }
    }

    /// Returns the single display character for this rank.
    ///
    /// Indices 11 and 12 both render as `K`. Valuation is unaffected.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self.0 {
            0 => 'A',
            1 => '2',
            2 => '3',
            3 => '4',
            4 => '5',
            5 => '6',
            6 => '7',
            7 => '8',
            8 => '9',
            9 => 'J',
            10 => 'Q',
            _ => 'K',
        }
    }
}

/// A playing card, identified by an integer in `0..52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Creates a card from its identifier.
    ///
    /// Note: This function does not validate the identifier. Values outside
    /// `0..52` still project onto a rank and suit but never appear in a deck.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::from_index(self.0)
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::from_index(self.0)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().glyph(), self.suit().glyph())
    }
}
