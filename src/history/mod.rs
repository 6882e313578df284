//! Move history for undo.

pub mod record;

pub use record::{MoveLog, MoveRecord};
