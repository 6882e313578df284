//! Hint integration tests.
//!
//! Covers hint ordering, the draw fallback and the engine's hint cache.

use spider_engine::core::{GameConfig, SuitVariant};
use spider_engine::deal::StateBuilder;
use spider_engine::hints::{compute_hints, Hint};
use spider_engine::rules::Engine;
use spider_engine::{Action, GameState, Rank, Suit};

fn engine_with(state: GameState) -> Engine {
    Engine::from_state(GameConfig::default(), state)
}

// =============================================================================
// Ordering Tests
// =============================================================================

/// Test the full ordering: plain moves, feed moves, then free columns.
#[test]
fn test_hint_precedence() {
    let state = StateBuilder::new()
        // King-headed run waiting for the 10♥
        .run(0, Suit::Heart, Rank::King, Rank::Jack)
        // 10♣ fits on the Jack by rank alone
        .hidden(1, Rank::Two, Suit::Club)
        .visible(1, Rank::Ten, Suit::Club)
        // 10♥ sits below the J♥ head of this run
        .run(2, Suit::Heart, Rank::Jack, Rank::Nine)
        .visible(3, Rank::Five, Suit::Spade)
        .visible(4, Rank::Five, Suit::Spade)
        .visible(5, Rank::Five, Suit::Spade)
        .visible(6, Rank::Five, Suit::Spade)
        .visible(7, Rank::Five, Suit::Spade)
        .visible(8, Rank::Five, Suit::Spade)
        .build();

    let hints = compute_hints(&state);

    assert_eq!(
        hints,
        vec![
            Hint::Move {
                source: 1,
                card_index: 1,
                destination: 0
            },
            Hint::FeedRun {
                source: 2,
                card_index: 1,
                destination: 0
            },
            Hint::MoveToFreeColumn { free_column: 9 },
        ]
    );
}

/// Test that no feed hint duplicates a plain hint for a run head.
#[test]
fn test_feed_skips_run_heads() {
    let state = StateBuilder::new()
        .run(0, Suit::Club, Rank::King, Rank::Eight)
        .visible(1, Rank::Seven, Suit::Club)
        .build();

    let hints = compute_hints(&state);

    assert_eq!(
        hints,
        vec![Hint::Move {
            source: 1,
            card_index: 0,
            destination: 0
        }]
    );
}

/// Test that a run not headed by a King is never fed.
#[test]
fn test_feed_requires_king_head() {
    let state = StateBuilder::new()
        .run(0, Suit::Club, Rank::Queen, Rank::Eight)
        .run(1, Suit::Club, Rank::Nine, Rank::Seven)
        .build();

    assert!(compute_hints(&state)
        .iter()
        .all(|hint| !matches!(hint, Hint::FeedRun { .. })));
}

/// Test that the draw hint appears only when nothing else applies.
#[test]
fn test_draw_hint_fallback() {
    let mut builder = StateBuilder::new().uniform_draw(Rank::Ace, Suit::Heart);
    for column in 0..10 {
        builder = builder.visible(column, Rank::King, Suit::Club);
    }
    let mut engine = engine_with(builder.build());

    assert_eq!(engine.hints(), &[Hint::DrawFromStock]);
    assert_eq!(Hint::DrawFromStock.action(), Some(Action::Draw));

    engine.draw().unwrap();
    assert!(engine.hints().is_empty());
}

/// Test that a strict engine never suggests a draw it would refuse.
#[test]
fn test_strict_draws_suppress_draw_hint() {
    let layout = StateBuilder::new()
        .visible(0, Rank::King, Suit::Club)
        .uniform_draw(Rank::Two, Suit::Heart)
        .build();
    let mut lenient = engine_with(layout.clone());
    let mut strict = Engine::from_state(GameConfig::default().strict_draws(), layout);

    assert_eq!(lenient.hints(), &[Hint::DrawFromStock]);
    assert!(strict.hints().iter().all(|hint| *hint != Hint::DrawFromStock));
    assert!(!strict.legal_actions().contains(&Action::Draw));
    assert!(strict.apply_action(Action::Draw).is_err());
}

/// Test that every concrete hint is a legal action.
#[test]
fn test_hint_actions_are_legal() {
    for seed in 0..10 {
        let mut engine = Engine::new_game(GameConfig::new(SuitVariant::Four).with_seed(seed));
        let legal = engine.legal_actions();

        for hint in engine.hints().to_vec() {
            if let Some(action) = hint.action() {
                assert!(legal.contains(&action), "{} is not legal (seed {})", hint, seed);
            }
        }
    }
}

// =============================================================================
// Cache Tests
// =============================================================================

/// Test that repeated requests are served from the cache.
#[test]
fn test_hints_cached_between_mutations() {
    let mut engine = Engine::new_game(GameConfig::new(SuitVariant::Two).with_seed(12));

    let first = engine.hints().to_vec();
    let second = engine.hints().to_vec();

    assert_eq!(first, second);
    assert_eq!(engine.hint_cache().computations(), 1);
    assert!(engine.hint_cache().is_valid_for(engine.state()));
}

/// Test that the clock does not invalidate hints.
#[test]
fn test_tick_keeps_cache() {
    let mut engine = Engine::new_game(GameConfig::default().with_seed(12));
    engine.hints();

    engine.tick(60);
    engine.hints();

    assert_eq!(engine.hint_cache().computations(), 1);
}

/// Test that every mutation invalidates the cache.
#[test]
fn test_mutations_invalidate_cache() {
    let mut engine = engine_with(
        StateBuilder::new()
            .visible(0, Rank::Four, Suit::Club)
            .visible(1, Rank::Five, Suit::Heart)
            .uniform_draw(Rank::Two, Suit::Spade)
            .build(),
    );

    engine.hints();
    engine.move_cards(0, 0, 1).unwrap();
    assert!(!engine.hint_cache().is_valid_for(engine.state()));
    assert!(engine.hints().iter().all(|h| !matches!(h, Hint::Move { source: 0, .. })));

    engine.draw().unwrap();
    assert!(!engine.hint_cache().is_valid_for(engine.state()));
    engine.hints();

    engine.undo_last_move().unwrap();
    assert!(!engine.hint_cache().is_valid_for(engine.state()));
    engine.hints();

    assert_eq!(engine.hint_cache().computations(), 4);
}

/// Test that disabling the cache recomputes every time.
#[test]
fn test_uncached_hints() {
    let mut engine = Engine::new_game(GameConfig::default().with_seed(3).without_hint_cache());

    let first = engine.hints().to_vec();
    let second = engine.hints().to_vec();

    assert_eq!(first, second);
    assert_eq!(engine.hint_cache().computations(), 2);
}
