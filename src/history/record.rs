//! Undo history.
//!
//! `MoveLog` is append-only until undo pops from its end. Each record holds
//! exactly what is needed to invert the action it describes; nothing else in
//! the state has to be consulted except the columns themselves.

use serde::{Deserialize, Serialize};

use crate::core::id::DrawId;

/// One reversible action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRecord {
    /// A stock batch was dealt onto the columns.
    Draw { draw: DrawId },

    /// `count` cards moved from the tail of `source` to the tail of
    /// `destination`. `revealed` is true when the move turned the new tail
    /// of `source` face up.
    Move {
        source: usize,
        count: usize,
        destination: usize,
        revealed: bool,
    },

    /// A King→Ace set was removed from `column`. `revealed` is true when the
    /// removal turned the new tail face up.
    CompletedSet { column: usize, revealed: bool },
}

impl MoveRecord {
    /// True for records that stand for a player action on their own.
    ///
    /// Completed-set records always follow the move or draw that triggered
    /// them and are undone together with it.
    #[must_use]
    pub fn is_player_action(&self) -> bool {
        !matches!(self, MoveRecord::CompletedSet { .. })
    }
}

/// Ordered history of reversible actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveLog {
    entries: Vec<MoveRecord>,
}

impl MoveLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.entries.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.entries.pop()
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter()
    }

    /// Number of player actions (draws and moves) in the log.
    #[must_use]
    pub fn player_actions(&self) -> usize {
        self.entries.iter().filter(|r| r.is_player_action()).count()
    }
}
