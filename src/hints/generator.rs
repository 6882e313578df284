//! Hint computation.
//!
//! `compute_hints` is a pure function of the layout. Hints come out in a
//! fixed order:
//!
//! 1. Plain moves: each column's run head onto every other tail exactly one
//!    rank higher, by source column then destination column.
//! 2. Feed moves: for each column whose movable run is headed by a King, the
//!    card that would extend it, taken from inside another column's run.
//! 3. Free columns: one hint per empty column, only while hidden cards
//!    remain anywhere.
//! 4. Draw from stock, only when nothing above applies and a draw would be
//!    accepted: the stock has cards left and, under strict draws, no column
//!    is empty.

use crate::core::card::Rank;
use crate::core::state::GameState;

use super::hint::Hint;

/// Compute every hint for `state`, in display order, under the default
/// draw rule.
#[must_use]
pub fn compute_hints(state: &GameState) -> Vec<Hint> {
    compute_hints_with(state, false)
}

/// Compute every hint for `state`. With `strict_draws` the draw fallback is
/// withheld while any column is empty.
#[must_use]
pub fn compute_hints_with(state: &GameState, strict_draws: bool) -> Vec<Hint> {
    let mut hints = Vec::new();

    plain_moves(state, &mut hints);
    feed_moves(state, &mut hints);

    if state.has_hidden_cards() {
        hints.extend(state.empty_columns().map(|free_column| Hint::MoveToFreeColumn { free_column }));
    }

    let blocked = strict_draws && state.empty_columns().next().is_some();
    let can_draw = !state.stock().is_empty() && !blocked;
    if hints.is_empty() && can_draw {
        hints.push(Hint::DrawFromStock);
    }

    hints
}

fn plain_moves(state: &GameState, hints: &mut Vec<Hint>) {
    let columns = state.columns();

    for (source, column) in columns.iter().enumerate() {
        let (Some(card_index), Some(head)) = (column.run_start(), column.run_head()) else {
            continue;
        };
        let Some(wanted) = head.rank().larger() else {
            continue;
        };

        for (destination, target) in columns.iter().enumerate() {
            if destination == source {
                continue;
            }
            if target.tail().map(|tail| tail.rank()) == Some(wanted) {
                hints.push(Hint::Move {
                    source,
                    card_index,
                    destination,
                });
            }
        }
    }
}

fn feed_moves(state: &GameState, hints: &mut Vec<Hint>) {
    let columns = state.columns();

    for (destination, target) in columns.iter().enumerate() {
        if target.run_head().map(|head| head.rank()) != Some(Rank::King) {
            continue;
        }
        let Some(tail) = target.tail() else {
            continue;
        };
        let Some(wanted) = tail.rank().smaller() else {
            continue;
        };

        for (source, donor) in columns.iter().enumerate() {
            let Some(start) = donor.run_start() else {
                continue;
            };
            if source == destination {
                continue;
            }

            // The run head itself is already covered by a plain move
            let found = donor.cards()[start + 1..]
                .iter()
                .position(|card| card.rank() == wanted && card.suit() == tail.suit());
            if let Some(offset) = found {
                let hint = Hint::FeedRun {
                    source,
                    card_index: start + 1 + offset,
                    destination,
                };
                if !hints.contains(&hint) {
                    hints.push(hint);
                }
            }
        }
    }
}
