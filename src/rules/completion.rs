//! Completed-set extraction.

use crate::core::config::SET_LENGTH;
use crate::core::id::CardId;
use crate::core::state::GameState;
use crate::history::MoveRecord;
use crate::tableau::CompletedSet;

use super::outcome::CompletedRun;

/// Remove one complete King→Ace set from the tail of `column`, if present.
///
/// Moves the set into the completed collection, turns the new tail face up,
/// and logs a `CompletedSet` record so undo can put it back.
pub(crate) fn extract_completed_set(state: &mut GameState, column: usize) -> Option<CompletedRun> {
    let suit = state.column(column).completed_set_suit()?;

    let target = state.column_mut(column);
    let removed = target.split_off(target.len() - SET_LENGTH);
    let revealed = target.reveal_tail();

    let cards: [CardId; SET_LENGTH] = std::array::from_fn(|i| removed[i].id());
    let set = state.alloc_set_id();
    state.push_completed_set(CompletedSet::new(suit, set, cards));
    state.record(MoveRecord::CompletedSet { column, revealed });

    log::debug!("completed {} set in column {} (revealed: {})", suit, column, revealed);

    Some(CompletedRun {
        column,
        suit,
        set,
        revealed,
    })
}

/// Extract every complete set sitting at the tail of `column`.
pub(crate) fn extract_all(state: &mut GameState, column: usize, out: &mut impl Extend<CompletedRun>) {
    while let Some(run) = extract_completed_set(state, column) {
        out.extend(Some(run));
    }
}
