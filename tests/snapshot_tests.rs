//! Snapshot integration tests.
//!
//! A `GameState` serialized mid-game must reload into an engine that plays
//! on exactly like the original.

use spider_engine::core::{GameConfig, SuitVariant};
use spider_engine::rules::Engine;
use spider_engine::{Action, GameState};

fn played_engine(seed: u64, steps: usize) -> Engine {
    let mut engine = Engine::new_game(GameConfig::new(SuitVariant::Two).with_seed(seed));
    for _ in 0..steps {
        let Some(action) = engine.legal_actions().into_iter().find(|a| *a != Action::Undo) else {
            break;
        };
        engine.apply_action(action).unwrap();
    }
    engine.tick(95);
    engine
}

/// Test a JSON round trip of a state mid-game.
#[test]
fn test_state_json_round_trip() {
    let engine = played_engine(8, 12);

    let json = serde_json::to_string(engine.state()).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, engine.state());
    assert_eq!(restored.elapsed_seconds(), 95);
}

/// Test that a reloaded engine continues like the original.
#[test]
fn test_resumed_engine_matches() {
    let mut original = played_engine(21, 8);
    let json = serde_json::to_string(original.state()).unwrap();
    let mut resumed = Engine::from_state(original.config().clone(), serde_json::from_str(&json).unwrap());

    assert_eq!(resumed.legal_actions(), original.legal_actions());
    assert_eq!(resumed.hints().to_vec(), original.hints().to_vec());

    for _ in 0..3 {
        let a = original.undo_last_move();
        let b = resumed.undo_last_move();
        assert_eq!(a, b);
    }
    assert_eq!(resumed.state(), original.state());
}

/// Test that snapshots without a seed still load.
#[test]
fn test_snapshot_without_seed() {
    let engine = played_engine(2, 3);
    let mut value = serde_json::to_value(engine.state()).unwrap();
    value.as_object_mut().unwrap().remove("seed");

    let restored: GameState = serde_json::from_value(value).unwrap();

    assert_eq!(restored.seed(), None);
    assert_eq!(restored.columns(), engine.state().columns());
}
