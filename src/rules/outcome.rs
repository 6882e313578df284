//! Outcome descriptors returned by engine operations.
//!
//! The engine never calls back into presentation. Instead each mutating
//! operation returns a plain value listing what changed, so a renderer can
//! animate flips, set removals and undo restorations after the fact.

use smallvec::SmallVec;

use crate::core::card::Suit;
use crate::core::config::COLUMN_COUNT;
use crate::core::id::{CardId, DrawId, SetId};
use crate::history::MoveRecord;

/// A completed set removed from a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletedRun {
    /// Column the set was removed from.
    pub column: usize,
    pub suit: Suit,
    /// Trophy id in the completed-set collection.
    pub set: SetId,
    /// True if the removal turned the column's new tail face up.
    pub revealed: bool,
}

/// Result of a successful `move_cards`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub source: usize,
    pub destination: usize,
    /// Moved cards, bottom first.
    pub moved: Vec<CardId>,
    /// True if the move turned the new tail of the source face up.
    pub source_revealed: bool,
    /// Sets completed as a consequence, in extraction order.
    pub completed: SmallVec<[CompletedRun; 2]>,
}

impl MoveOutcome {
    /// True if the move completed at least one set.
    #[must_use]
    pub fn completed_any(&self) -> bool {
        !self.completed.is_empty()
    }

    /// Completed sets removed from `column`.
    pub fn completed_in(&self, column: usize) -> impl Iterator<Item = &CompletedRun> {
        self.completed.iter().filter(move |run| run.column == column)
    }
}

/// Result of `apply_draw`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub draw: DrawId,
    /// Index at which the drawn card landed in each column. Each of these
    /// cards is newly visible.
    pub landed: [usize; COLUMN_COUNT],
    /// Sets completed once all ten cards landed, in column order.
    pub completed: SmallVec<[CompletedRun; 2]>,
}

/// A completed set put back into a column by undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestoredSet {
    pub column: usize,
    pub suit: Suit,
    pub set: SetId,
    /// True if the column's tail was turned face down before the set was
    /// put back.
    pub rehidden: bool,
}

/// Result of `undo_last_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoOutcome {
    /// The player action that was reverted (a `Move` or a `Draw`).
    pub undone: MoveRecord,
    /// Sets restored before reverting it, most recent first.
    pub restored_sets: SmallVec<[RestoredSet; 2]>,
}

/// Result of `Engine::apply_action`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved(MoveOutcome),
    Drew(DrawOutcome),
    Undone(UndoOutcome),
}
