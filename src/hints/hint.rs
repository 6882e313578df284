//! Hint values.

use serde::{Deserialize, Serialize};

use crate::core::action::Action;

/// A suggestion for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    /// Move the run starting at `card_index` onto a tail one rank higher.
    Move {
        source: usize,
        card_index: usize,
        destination: usize,
    },

    /// Break up a run in `source` so the cards from `card_index` extend the
    /// King-headed run in `destination` toward a complete set.
    FeedRun {
        source: usize,
        card_index: usize,
        destination: usize,
    },

    /// Move any movable run into this empty column to dig out hidden cards.
    MoveToFreeColumn { free_column: usize },

    /// Nothing else to do: deal from the stock.
    DrawFromStock,
}

impl Hint {
    /// The action this hint stands for, when it names one.
    ///
    /// `MoveToFreeColumn` leaves the choice of run to the player and has no
    /// single action.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        match *self {
            Hint::Move {
                source,
                card_index,
                destination,
            }
            | Hint::FeedRun {
                source,
                card_index,
                destination,
            } => Some(Action::move_cards(source, card_index, destination)),
            Hint::MoveToFreeColumn { .. } => None,
            Hint::DrawFromStock => Some(Action::Draw),
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Move {
                source,
                card_index,
                destination,
            } => write!(f, "move {}[{}..] onto {}", source, card_index, destination),
            Hint::FeedRun {
                source,
                card_index,
                destination,
            } => write!(f, "feed {}[{}..] into the run in {}", source, card_index, destination),
            Hint::MoveToFreeColumn { free_column } => write!(f, "move a run into empty column {}", free_column),
            Hint::DrawFromStock => f.write_str("draw from the stock"),
        }
    }
}
