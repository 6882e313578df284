//! Recoverable engine errors.
//!
//! Every variant is an expected gameplay condition: the engine state is left
//! untouched and the caller decides how to present it. Bad column or card
//! indices are not represented here; those are contract violations and panic.

use thiserror::Error;

use crate::history::MoveRecord;

/// Why a requested move was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The chosen card sits above the column's movable run.
    #[error("card is not part of the movable run")]
    NotARun,
    /// The destination tail is not exactly one rank above the moving card.
    #[error("destination does not accept the run")]
    DestinationRejects,
    /// Source and destination are the same column.
    #[error("source and destination are the same column")]
    SameColumn,
}

/// Errors returned by `Engine` operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The stock is empty.
    #[error("no draws available")]
    NoDrawsAvailable,
    /// The move log is empty, so there is nothing to undo.
    #[error("no previous moves available")]
    NoPreviousMovesAvailable,
    /// A move failed validation.
    #[error("illegal move: {0}")]
    IllegalMove(MoveRejection),
    /// Strict draws are on and `column` is empty.
    #[error("cannot draw while column {column} is empty")]
    EmptyColumnOnDraw { column: usize },
    /// The last log entry cannot be reversed on the current layout.
    #[error("move history does not match the layout: {0:?}")]
    HistoryMismatch(MoveRecord),
}
