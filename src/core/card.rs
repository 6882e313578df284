//! Playing cards: rank, suit, identity and visibility.
//!
//! Rank and suit are fixed when a card is created. Only the visibility flag
//! changes during play, and only the engine flips it.

use serde::{Deserialize, Serialize};

use super::id::CardId;

/// Card rank, ordered Ace (low) through King (high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value: Ace = 1 .. King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// The next higher rank, `None` for King.
    #[must_use]
    pub fn larger(self) -> Option<Rank> {
        Self::ALL.get(self as usize + 1).copied()
    }

    /// The next lower rank, `None` for Ace.
    #[must_use]
    pub fn smaller(self) -> Option<Rank> {
        (self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Signed distance in ranks (`self - other`).
    #[must_use]
    pub const fn distance(self, other: Rank) -> i8 {
        self.value() as i8 - other.value() as i8
    }

    fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Spade,
    Club,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Heart => "heart",
            Suit::Diamond => "diamond",
            Suit::Spade => "spade",
            Suit::Club => "club",
        };
        f.write_str(name)
    }
}

/// A single card on the table or in the stock.
///
/// Two cards with the same `id` are the same physical card; rank and suit
/// alone do not identify a card since a Spider deck holds duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    id: CardId,
    visible: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit, id: CardId) -> Self {
        Self {
            rank,
            suit,
            id,
            visible: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(rank: Rank, suit: Suit, id: CardId) -> Self {
        Self {
            rank,
            suit,
            id,
            visible: true,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// True if `next` may sit directly on this card inside one movable run:
    /// same suit, exactly one rank lower, both face up.
    #[must_use]
    pub fn continues_run(&self, next: &Card) -> bool {
        self.visible && next.visible && self.suit == next.suit && self.rank.smaller() == Some(next.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face = if self.visible { "Visible" } else { "Hidden" };
        write!(f, "{} {} of {}s", face, self.rank, self.suit)
    }
}
