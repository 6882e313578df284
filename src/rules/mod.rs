//! The rules: validating and applying moves, draws and undo.
//!
//! `Engine` is the single owner of a `GameState`. Each mutating call either
//! commits completely or returns an `EngineError` with the state untouched,
//! and successful calls return an outcome descriptor for presentation to
//! animate.

pub mod completion;
pub mod engine;
pub mod outcome;
mod undo;

pub use engine::Engine;
pub use outcome::{ActionOutcome, CompletedRun, DrawOutcome, MoveOutcome, RestoredSet, UndoOutcome};
