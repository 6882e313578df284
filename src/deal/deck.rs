//! Deck generation and the opening deal.
//!
//! Every variant deals 104 cards: 54 to the tableau (four columns of six,
//! six columns of five) and the remaining 50 as five stock batches of ten.
//! Cards come out of the deal face down; the engine turns the column tails
//! up when the game starts.

use crate::core::card::{Card, Rank};
use crate::core::config::{SuitVariant, COLUMN_COUNT, DECK_SIZE, DRAW_COUNT};
use crate::core::id::IdAllocator;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::tableau::{Column, Draw};

/// Height of each column after the opening deal.
pub const OPENING_HEIGHTS: [usize; COLUMN_COUNT] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// Build an unshuffled, face-down deck for `variant`.
#[must_use]
pub fn build_deck(variant: SuitVariant, ids: &mut IdAllocator) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in variant.packs() {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit, ids.card()));
        }
    }
    deck
}

/// Shuffle a fresh deck and lay it out.
///
/// Panics if the variant table ever yields anything other than 104 cards and
/// five stock batches; that is a configuration bug, not a game condition.
#[must_use]
pub fn deal(variant: SuitVariant, rng: &mut GameRng) -> GameState {
    let mut ids = IdAllocator::default();
    let mut deck = build_deck(variant, &mut ids);
    assert_eq!(deck.len(), DECK_SIZE, "Deck for {} must hold {} cards", variant, DECK_SIZE);

    rng.shuffle(&mut deck);

    let mut cursor = 0;
    let columns: [Column; COLUMN_COUNT] = std::array::from_fn(|col| {
        let height = OPENING_HEIGHTS[col];
        let cards = deck[cursor..cursor + height].to_vec();
        cursor += height;
        Column::from_cards(cards)
    });

    let stock: Vec<Draw> = deck[cursor..]
        .chunks_exact(COLUMN_COUNT)
        .map(|chunk| Draw::new(ids.draw(), std::array::from_fn(|i| chunk[i])))
        .collect();
    assert_eq!(stock.len(), DRAW_COUNT, "Deal for {} must leave {} draws", variant, DRAW_COUNT);

    log::info!("dealt {} game with seed {}", variant, rng.seed());

    GameState::new(columns, stock, Some(rng.seed()), ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_deck_sizes_for_all_variants() {
        for variant in [SuitVariant::One, SuitVariant::Two, SuitVariant::Four] {
            let mut ids = IdAllocator::default();
            let deck = build_deck(variant, &mut ids);

            assert_eq!(deck.len(), DECK_SIZE);
            assert!(deck.iter().all(|c| !c.is_visible()));

            let unique: FxHashSet<_> = deck.iter().map(Card::id).collect();
            assert_eq!(unique.len(), DECK_SIZE);
        }
    }

    #[test]
    fn test_suit_counts() {
        let mut ids = IdAllocator::default();
        let deck = build_deck(SuitVariant::Two, &mut ids);

        let clubs = deck.iter().filter(|c| c.suit() == Suit::Club).count();
        let hearts = deck.iter().filter(|c| c.suit() == Suit::Heart).count();
        assert_eq!(clubs, 52);
        assert_eq!(hearts, 52);
    }

    #[test]
    fn test_deal_layout() {
        for variant in [SuitVariant::One, SuitVariant::Two, SuitVariant::Four] {
            let mut rng = GameRng::new(42);
            let state = deal(variant, &mut rng);

            for (i, column) in state.columns().iter().enumerate() {
                assert_eq!(column.len(), OPENING_HEIGHTS[i]);
                assert!(column.cards().iter().all(|c| !c.is_visible()));
            }
            assert_eq!(state.stock().len(), DRAW_COUNT);

            let on_table: usize = state.columns().iter().map(Column::len).sum();
            assert_eq!(on_table + state.stock().len() * COLUMN_COUNT, DECK_SIZE);
        }
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = deal(SuitVariant::Four, &mut GameRng::new(7));
        let b = deal(SuitVariant::Four, &mut GameRng::new(7));
        let c = deal(SuitVariant::Four, &mut GameRng::new(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.seed(), Some(7));
    }
}
