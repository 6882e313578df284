//! Tableau building blocks: columns, stock draws and completed sets.
//!
//! These types own no rules beyond their own invariants. `Column` keeps its
//! movable-run boundary current; the engine in `rules` decides which
//! mutations are legal.

pub mod column;
pub mod draw;

pub use column::{run_start_of, Column};
pub use draw::{CompletedSet, Draw};
