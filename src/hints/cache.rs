//! Hint cache keyed by the layout hash.

use crate::core::state::GameState;

use super::generator::compute_hints_with;
use super::hint::Hint;

/// Last computed hints and the layout they belong to.
#[derive(Clone, Debug, Default)]
pub struct HintCache {
    key: Option<u64>,
    hints: Vec<Hint>,
    computations: u64,
    strict_draws: bool,
}

impl HintCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache whose draw hint follows the strict-draw rule.
    #[must_use]
    pub fn with_strict_draws(strict_draws: bool) -> Self {
        Self {
            strict_draws,
            ..Self::default()
        }
    }

    /// Hints for `state`, recomputed only when the layout hash differs from
    /// the cached one.
    pub fn get_or_compute(&mut self, state: &GameState) -> &[Hint] {
        let key = state.layout_hash();
        if self.key != Some(key) {
            self.hints = compute_hints_with(state, self.strict_draws);
            self.key = Some(key);
            self.computations += 1;
            log::trace!("computed {} hints for layout {:016x}", self.hints.len(), key);
        }
        &self.hints
    }

    /// Drop the cached hints.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.hints.clear();
    }

    /// True if the cache holds hints for this exact layout.
    #[must_use]
    pub fn is_valid_for(&self, state: &GameState) -> bool {
        self.key == Some(state.layout_hash())
    }

    /// How many times hints were actually computed.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
