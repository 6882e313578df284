//! Core engine types: ids, cards, RNG, configuration, errors, actions, state.
//!
//! This module holds the vocabulary shared by every other module. It knows
//! nothing about the rules beyond card-level facts like rank adjacency.

pub mod id;
pub mod card;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use id::{CardId, DrawId, IdAllocator, SetId};
pub use card::{Card, Rank, Suit};
pub use rng::GameRng;
pub use config::{GameConfig, SuitVariant, COLUMN_COUNT, DECK_SIZE, DRAW_COUNT, SETS_TO_WIN, SET_LENGTH};
pub use error::{EngineError, MoveRejection};
pub use action::Action;
pub use state::GameState;
