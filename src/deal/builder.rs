//! Explicit layouts.
//!
//! `StateBuilder` assembles a `GameState` card by card. It backs scenario
//! tests, preview screens and anything else that needs a specific position
//! rather than a shuffled deal.
//!
//! ```
//! use spider_engine::core::{Rank, Suit};
//! use spider_engine::deal::StateBuilder;
//!
//! let state = StateBuilder::new()
//!     .hidden(0, Rank::Two, Suit::Club)
//!     .run(0, Suit::Spade, Rank::Nine, Rank::Six)
//!     .visible(1, Rank::Seven, Suit::Heart)
//!     .build();
//!
//! assert_eq!(state.column(0).run_start(), Some(1));
//! assert_eq!(state.column(1).len(), 1);
//! ```

use crate::core::card::{Card, Rank, Suit};
use crate::core::config::COLUMN_COUNT;
use crate::core::id::IdAllocator;
use crate::core::state::GameState;
use crate::tableau::{Column, Draw};

/// Builder for hand-made layouts.
#[derive(Clone, Debug, Default)]
pub struct StateBuilder {
    ids: IdAllocator,
    columns: [Vec<Card>; COLUMN_COUNT],
    stock: Vec<Draw>,
    seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, column: usize, rank: Rank, suit: Suit, visible: bool) -> Self {
        assert!(column < COLUMN_COUNT, "Column index {} out of range", column);
        let id = self.ids.card();
        let card = if visible {
            Card::face_up(rank, suit, id)
        } else {
            Card::new(rank, suit, id)
        };
        self.columns[column].push(card);
        self
    }

    /// Append a face-down card to `column`.
    pub fn hidden(self, column: usize, rank: Rank, suit: Suit) -> Self {
        self.push(column, rank, suit, false)
    }

    /// Append a face-up card to `column`.
    pub fn visible(self, column: usize, rank: Rank, suit: Suit) -> Self {
        self.push(column, rank, suit, true)
    }

    /// Append face-up cards of one suit descending from `high` to `low`
    /// inclusive.
    pub fn run(mut self, column: usize, suit: Suit, high: Rank, low: Rank) -> Self {
        assert!(high >= low, "Run must descend from {} to {}", high, low);
        for rank in Rank::ALL[low as usize..=high as usize].iter().rev() {
            self = self.visible(column, *rank, suit);
        }
        self
    }

    /// Append a full face-up King→Ace set to `column`.
    pub fn full_set(self, column: usize, suit: Suit) -> Self {
        self.run(column, suit, Rank::King, Rank::Ace)
    }

    /// Push a stock batch. The batch pushed last is dealt first.
    pub fn draw(mut self, cards: [(Rank, Suit); COLUMN_COUNT]) -> Self {
        let batch = cards.map(|(rank, suit)| Card::new(rank, suit, self.ids.card()));
        let id = self.ids.draw();
        self.stock.push(Draw::new(id, batch));
        self
    }

    /// Push a stock batch of ten identical rank/suit cards.
    pub fn uniform_draw(self, rank: Rank, suit: Suit) -> Self {
        self.draw([(rank, suit); COLUMN_COUNT])
    }

    /// Record a seed on the resulting state.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the state. Cards keep the visibility they were given.
    pub fn build(self) -> GameState {
        let columns = self.columns.map(Column::from_cards);
        GameState::new(columns, self.stock, self.seed, self.ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_layout() {
        let state = StateBuilder::new()
            .hidden(2, Rank::King, Suit::Spade)
            .run(2, Suit::Spade, Rank::Queen, Rank::Ace)
            .seed(3)
            .build();

        let column = state.column(2);
        assert_eq!(column.len(), 13);
        assert!(!column.cards()[0].is_visible());
        assert_eq!(column.cards()[1].rank(), Rank::Queen);
        assert_eq!(column.cards()[12].rank(), Rank::Ace);
        assert_eq!(column.run_start(), Some(1));
        assert_eq!(state.seed(), Some(3));
    }

    #[test]
    fn test_builder_draws() {
        let state = StateBuilder::new()
            .uniform_draw(Rank::Two, Suit::Heart)
            .uniform_draw(Rank::Three, Suit::Heart)
            .build();

        assert_eq!(state.stock().len(), 2);
        assert_eq!(state.stock()[1].card(0).rank(), Rank::Three);
        assert!(state.stock()[0].cards().iter().all(|c| !c.is_visible()));
    }

    #[test]
    fn test_builder_ids_are_unique() {
        let state = StateBuilder::new()
            .full_set(0, Suit::Club)
            .full_set(1, Suit::Club)
            .uniform_draw(Rank::Ace, Suit::Club)
            .build();

        let mut ids: Vec<_> = state
            .columns()
            .iter()
            .flat_map(|c| c.cards().iter().map(Card::id))
            .chain(state.stock().iter().flat_map(|d| d.cards().iter().map(Card::id)))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    #[should_panic(expected = "must descend")]
    fn test_ascending_run_panics() {
        let _ = StateBuilder::new().run(0, Suit::Club, Rank::Two, Rank::Five);
    }
}
