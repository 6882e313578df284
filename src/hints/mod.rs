//! Move hints.
//!
//! Hints never mutate state. `compute_hints` derives them from a layout and
//! `HintCache` remembers the last result until the layout changes.

pub mod cache;
pub mod generator;
pub mod hint;

pub use cache::HintCache;
pub use generator::{compute_hints, compute_hints_with};
pub use hint::Hint;
