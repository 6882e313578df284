//! Game configuration.
//!
//! A `GameConfig` is handed to the engine when a game starts. It fixes the
//! suit variant and seed of the deal plus a couple of rule toggles.
//!
//! The variant table is closed: every variant deals the same 104 cards
//! (eight 13-card suits) and only differs in how many distinct suits appear.

use serde::{Deserialize, Serialize};

use super::card::Suit;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 10;

/// Cards in a full Spider deck (8 × 13).
pub const DECK_SIZE: usize = 104;

/// Cards in one complete King→Ace set.
pub const SET_LENGTH: usize = 13;

/// Stock batches dealt at game start.
pub const DRAW_COUNT: usize = 5;

/// Completed sets needed to win.
pub const SETS_TO_WIN: usize = DECK_SIZE / SET_LENGTH;

/// How many distinct suits appear in the deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitVariant {
    /// Eight club suits.
    #[default]
    One,
    /// Four clubs, four hearts.
    Two,
    /// Two of each suit.
    Four,
}

impl SuitVariant {
    /// The suit of each of the eight 13-card packs making up the deck.
    #[must_use]
    pub const fn packs(self) -> [Suit; SETS_TO_WIN] {
        use Suit::{Club, Diamond, Heart, Spade};
        match self {
            SuitVariant::One => [Club, Club, Club, Club, Club, Club, Club, Club],
            SuitVariant::Two => [Club, Club, Club, Club, Heart, Heart, Heart, Heart],
            SuitVariant::Four => [Club, Club, Heart, Heart, Spade, Spade, Diamond, Diamond],
        }
    }

    /// Number of distinct suits in play.
    #[must_use]
    pub const fn suit_count(self) -> usize {
        match self {
            SuitVariant::One => 1,
            SuitVariant::Two => 2,
            SuitVariant::Four => 4,
        }
    }
}

impl std::fmt::Display for SuitVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit_count() {
            1 => f.write_str("1 suit"),
            n => write!(f, "{} suits", n),
        }
    }
}

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Suit variant of the deal.
    pub variant: SuitVariant,

    /// Seed for the shuffle. `None` draws one from entropy; the seed actually
    /// used is recorded on the resulting `GameState`.
    pub seed: Option<u64>,

    /// Refuse to deal from the stock while any column is empty.
    ///
    /// Off by default: drawing is always allowed while the stock has cards.
    pub strict_draws: bool,

    /// Cache computed hints until the layout changes.
    pub cache_hints: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: SuitVariant::One,
            seed: None,
            strict_draws: false,
            cache_hints: true,
        }
    }
}

impl GameConfig {
    /// Create a config for the given variant with defaults elsewhere.
    #[must_use]
    pub fn new(variant: SuitVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Use a fixed seed for the deal.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Require every column to be filled before drawing.
    #[must_use]
    pub fn strict_draws(mut self) -> Self {
        self.strict_draws = true;
        self
    }

    /// Recompute hints on every request.
    #[must_use]
    pub fn without_hint_cache(mut self) -> Self {
        self.cache_hints = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_packs() {
        for variant in [SuitVariant::One, SuitVariant::Two, SuitVariant::Four] {
            let packs = variant.packs();
            assert_eq!(packs.len() * SET_LENGTH, DECK_SIZE);

            let mut distinct: Vec<_> = packs.to_vec();
            distinct.sort_by_key(|s| *s as u8);
            distinct.dedup();
            assert_eq!(distinct.len(), variant.suit_count());
        }
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(SuitVariant::Four)
            .with_seed(99)
            .strict_draws()
            .without_hint_cache();

        assert_eq!(config.variant, SuitVariant::Four);
        assert_eq!(config.seed, Some(99));
        assert!(config.strict_draws);
        assert!(!config.cache_hints);
    }

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.variant, SuitVariant::One);
        assert_eq!(config.seed, None);
        assert!(!config.strict_draws);
        assert!(config.cache_hints);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(SuitVariant::One.to_string(), "1 suit");
        assert_eq!(SuitVariant::Four.to_string(), "4 suits");
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(SuitVariant::Two).with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
