//! Opaque identifiers for cards, stock draws and completed sets.
//!
//! Every card carries a `CardId` that stays stable for the whole game, no
//! matter how often the card moves or flips. Presentation layers correlate
//! animations through these ids; the engine never interprets them beyond
//! equality.
//!
//! All three id kinds are allocated from a single `IdAllocator` owned by the
//! `GameState`, so an id is unique within one game.
//!
//! ```
//! use spider_engine::core::IdAllocator;
//!
//! let mut ids = IdAllocator::default();
//! let card = ids.card();
//! let draw = ids.draw();
//! assert_ne!(card.raw(), draw.raw());
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of a batch of ten stock cards.
///
/// Survives a draw/undo cycle: undoing a draw rebuilds the batch under the
/// same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawId(pub u32);

impl DrawId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DrawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Draw({})", self.0)
    }
}

/// Identifier of a completed set trophy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetId(pub u32);

impl SetId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Monotonic id source shared by all id kinds of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Resume allocation after the given raw id.
    ///
    /// Used when a layout was assembled from existing cards.
    #[must_use]
    pub const fn starting_after(raw: u32) -> Self {
        Self { next: raw + 1 }
    }

    fn bump(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Allocate a card id.
    pub fn card(&mut self) -> CardId {
        CardId(self.bump())
    }

    /// Allocate a draw id.
    pub fn draw(&mut self) -> DrawId {
        DrawId(self.bump())
    }

    /// Allocate a completed set id.
    pub fn set(&mut self) -> SetId {
        SetId(self.bump())
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub const fn allocated(&self) -> u32 {
        self.next
    }
}
