//! Producing game states: shuffled deals and hand-built layouts.

pub mod builder;
pub mod deck;

pub use builder::StateBuilder;
pub use deck::{build_deck, deal, OPENING_HEIGHTS};
