//! Stock batches and completed-set trophies.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Suit};
use crate::core::config::{COLUMN_COUNT, SET_LENGTH};
use crate::core::id::{CardId, DrawId, SetId};

/// Ten stock cards dealt together, one onto each column.
///
/// `cards[i]` lands on column `i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Draw {
    id: DrawId,
    cards: [Card; COLUMN_COUNT],
}

impl Draw {
    /// Create a draw. All cards are turned face down.
    #[must_use]
    pub fn new(id: DrawId, mut cards: [Card; COLUMN_COUNT]) -> Self {
        for card in &mut cards {
            card.set_visible(false);
        }
        Self { id, cards }
    }

    #[must_use]
    pub fn id(&self) -> DrawId {
        self.id
    }

    /// The card destined for `column`.
    ///
    /// Panics if `column >= COLUMN_COUNT`.
    #[must_use]
    pub fn card(&self, column: usize) -> &Card {
        assert!(column < COLUMN_COUNT, "Column index {} out of range", column);
        &self.cards[column]
    }

    #[must_use]
    pub fn cards(&self) -> &[Card; COLUMN_COUNT] {
        &self.cards
    }

    /// Consume the draw, yielding its cards turned face up.
    pub(crate) fn into_revealed(mut self) -> [Card; COLUMN_COUNT] {
        for card in &mut self.cards {
            card.set_visible(true);
        }
        self.cards
    }
}

/// A King→Ace run removed from the tableau.
///
/// Carries only the suit and the ids of the removed cards so undo can put
/// the same cards back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletedSet {
    suit: Suit,
    id: SetId,
    cards: [CardId; SET_LENGTH],
}

impl CompletedSet {
    /// Record a set. `cards` are listed King first, Ace last.
    #[must_use]
    pub fn new(suit: Suit, id: SetId, cards: [CardId; SET_LENGTH]) -> Self {
        Self { suit, id, cards }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn id(&self) -> SetId {
        self.id
    }

    /// Ids of the removed cards, King first.
    #[must_use]
    pub fn card_ids(&self) -> &[CardId; SET_LENGTH] {
        &self.cards
    }

    /// Rebuild the removed cards face up in King→Ace order.
    #[must_use]
    pub fn rebuild(&self) -> Vec<Card> {
        crate::core::card::Rank::ALL
            .iter()
            .rev()
            .zip(self.cards.iter())
            .map(|(rank, id)| Card::face_up(*rank, self.suit, *id))
            .collect()
    }
}
