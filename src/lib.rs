//! # spider-engine
//!
//! The rule engine of a Spider Solitaire game: game state, move validation,
//! completed-set detection, undo and hints.
//!
//! ## Design Principles
//!
//! 1. **Pure State + Rules**: The engine never renders. Each mutating call
//!    returns an outcome descriptor and presentation animates from that.
//!
//! 2. **All or Nothing**: Every operation validates before it mutates. A
//!    rejected call leaves the state exactly as it was.
//!
//! 3. **Everything Reversible**: Each action is logged with enough detail to
//!    invert it, including which cards it turned face up.
//!
//! ## Modules
//!
//! - `core`: Ids, cards, RNG, configuration, errors, actions, game state
//! - `tableau`: Columns with their cached movable-run boundary, stock batches
//! - `history`: The undo log
//! - `deal`: Shuffled deals and hand-built layouts
//! - `rules`: The `Engine`: moves, draws, set extraction, undo
//! - `hints`: Hint computation and caching
//!
//! ## Example
//!
//! ```
//! use spider_engine::{Action, Engine, GameConfig, SuitVariant};
//!
//! let mut engine = Engine::new_game(GameConfig::new(SuitVariant::One).with_seed(7));
//!
//! if let Some(action) = engine.hints().iter().find_map(|hint| hint.action()) {
//!     engine.apply_action(action).unwrap();
//! }
//! assert!(engine.legal_actions().contains(&Action::Draw));
//! ```

pub mod core;
pub mod tableau;
pub mod history;
pub mod deal;
pub mod rules;
pub mod hints;

// Re-export commonly used types
pub use crate::core::{
    CardId, DrawId, SetId,
    Card, Rank, Suit,
    GameRng,
    GameConfig, SuitVariant,
    EngineError, MoveRejection,
    Action,
    GameState,
    COLUMN_COUNT, DECK_SIZE, DRAW_COUNT, SETS_TO_WIN, SET_LENGTH,
};

pub use crate::tableau::{Column, CompletedSet, Draw};

pub use crate::history::{MoveLog, MoveRecord};

pub use crate::deal::{deal, StateBuilder};

pub use crate::rules::{
    Engine,
    ActionOutcome, CompletedRun, DrawOutcome, MoveOutcome, RestoredSet, UndoOutcome,
};

pub use crate::hints::{compute_hints, compute_hints_with, Hint, HintCache};
