//! Undo.
//!
//! One logical undo reverts the most recent player action (a move or a draw)
//! together with every completed set it triggered. Completed-set records sit
//! after their trigger in the log, so they are peeled first, most recent
//! first, and the trigger last.
//!
//! All of this happens on a scratch copy of the state. The copy replaces the
//! live state only once every record has been inverted.

use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::config::COLUMN_COUNT;
use crate::core::error::EngineError;
use crate::core::state::GameState;
use crate::history::MoveRecord;
use crate::tableau::Draw;

use super::engine::Engine;
use super::outcome::{RestoredSet, UndoOutcome};

impl Engine {
    /// Revert the last player action.
    ///
    /// Restores exact prior visibility, puts back any set the action
    /// completed, and returns a drawn batch to the stock. Counts as one
    /// move.
    pub fn undo_last_move(&mut self) -> Result<UndoOutcome, EngineError> {
        if !self.can_undo() {
            return Err(EngineError::NoPreviousMovesAvailable);
        }

        let mut scratch = self.state.clone();
        let mut restored_sets = SmallVec::new();

        let undone = loop {
            let record = scratch.pop_record().ok_or(EngineError::NoPreviousMovesAvailable)?;
            match record {
                MoveRecord::CompletedSet { column, revealed } => {
                    restored_sets.push(restore_set(&mut scratch, column, revealed, record)?);
                }
                MoveRecord::Move {
                    source,
                    count,
                    destination,
                    revealed,
                } => {
                    revert_move(&mut scratch, source, count, destination, revealed, record)?;
                    break record;
                }
                MoveRecord::Draw { draw } => {
                    let cards = take_tails(&mut scratch, record)?;
                    scratch.push_draw(Draw::new(draw, cards));
                    break record;
                }
            }
        };

        scratch.count_move();
        self.state = scratch;
        self.hints.invalidate();

        log::debug!("undid {:?} (restored {} sets)", undone, restored_sets.len());

        Ok(UndoOutcome { undone, restored_sets })
    }
}

fn restore_set(
    state: &mut GameState,
    column: usize,
    revealed: bool,
    record: MoveRecord,
) -> Result<RestoredSet, EngineError> {
    let set = state.pop_completed_set().ok_or(EngineError::HistoryMismatch(record))?;
    let target = state.column_mut(column);
    if revealed {
        if target.is_empty() {
            return Err(EngineError::HistoryMismatch(record));
        }
        target.hide_tail();
    }
    target.extend(set.rebuild());

    Ok(RestoredSet {
        column,
        suit: set.suit(),
        set: set.id(),
        rehidden: revealed,
    })
}

fn revert_move(
    state: &mut GameState,
    source: usize,
    count: usize,
    destination: usize,
    revealed: bool,
    record: MoveRecord,
) -> Result<(), EngineError> {
    let height = state.column(destination).len();
    if count == 0 || count > height {
        return Err(EngineError::HistoryMismatch(record));
    }
    if revealed {
        if state.column(source).is_empty() {
            return Err(EngineError::HistoryMismatch(record));
        }
        state.column_mut(source).hide_tail();
    }

    let cards = state.column_mut(destination).split_off(height - count);
    state.column_mut(source).extend(cards);
    Ok(())
}

/// Take the tail card of every column, turned face down, as a stock batch.
fn take_tails(state: &mut GameState, record: MoveRecord) -> Result<[Card; COLUMN_COUNT], EngineError> {
    if state.empty_columns().next().is_some() {
        return Err(EngineError::HistoryMismatch(record));
    }

    let mut tails = Vec::with_capacity(COLUMN_COUNT);
    for column in state.columns_mut().iter_mut() {
        tails.extend(column.pop());
    }
    tails.try_into().map_err(|_| EngineError::HistoryMismatch(record))
}
