//! Player commands.
//!
//! An `Action` is what a presentation layer asks the engine to do. The
//! engine can enumerate the legal ones (`Engine::legal_actions`) and apply
//! any of them through a single entry point (`Engine::apply_action`).

use serde::{Deserialize, Serialize};

/// A player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the cards from `card_index` to the tail of `source` onto
    /// `destination`.
    Move {
        source: usize,
        card_index: usize,
        destination: usize,
    },
    /// Deal the next stock batch.
    Draw,
    /// Undo the last player action.
    Undo,
}

impl Action {
    /// Shorthand for `Action::Move`.
    #[must_use]
    pub const fn move_cards(source: usize, card_index: usize, destination: usize) -> Self {
        Action::Move {
            source,
            card_index,
            destination,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move {
                source,
                card_index,
                destination,
            } => write!(f, "move {}[{}..] -> {}", source, card_index, destination),
            Action::Draw => f.write_str("draw"),
            Action::Undo => f.write_str("undo"),
        }
    }
}
