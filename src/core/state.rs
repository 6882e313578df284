//! Game state: the ten columns, the stock, trophies, history and counters.
//!
//! ## Ownership
//!
//! `GameState` exclusively owns every column, the stock and the move log.
//! Outside the crate it is read-only: all mutation flows through `Engine`,
//! which keeps run boundaries, history and counters consistent.
//!
//! ## Snapshots
//!
//! The whole record derives serde so an external persistence layer can
//! store and reload it wholesale. `Engine::from_state` re-derives every
//! cached run boundary on load.

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::config::{COLUMN_COUNT, SETS_TO_WIN};
use super::id::{IdAllocator, SetId};
use crate::history::{MoveLog, MoveRecord};
use crate::tableau::{Column, CompletedSet, Draw};

/// Complete state of one Spider game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    columns: [Column; COLUMN_COUNT],

    /// Remaining batches; the last one is dealt next.
    stock: Vec<Draw>,

    completed_sets: Vec<CompletedSet>,

    move_log: MoveLog,

    move_count: u32,

    elapsed_seconds: u64,

    /// Seed of the shuffle, if this state came from a seeded deal.
    #[serde(default)]
    seed: Option<u64>,

    ids: IdAllocator,
}

impl GameState {
    pub(crate) fn new(columns: [Column; COLUMN_COUNT], stock: Vec<Draw>, seed: Option<u64>, ids: IdAllocator) -> Self {
        Self {
            columns,
            stock,
            completed_sets: Vec::new(),
            move_log: MoveLog::new(),
            move_count: 0,
            elapsed_seconds: 0,
            seed,
            ids,
        }
    }

    // === Columns ===

    /// All ten columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column; COLUMN_COUNT] {
        &self.columns
    }

    /// One column.
    ///
    /// Panics if `index >= COLUMN_COUNT`.
    #[must_use]
    pub fn column(&self, index: usize) -> &Column {
        assert!(index < COLUMN_COUNT, "Column index {} out of range", index);
        &self.columns[index]
    }

    pub(crate) fn column_mut(&mut self, index: usize) -> &mut Column {
        assert!(index < COLUMN_COUNT, "Column index {} out of range", index);
        &mut self.columns[index]
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column; COLUMN_COUNT] {
        &mut self.columns
    }

    /// True if any column still holds a face-down card.
    #[must_use]
    pub fn has_hidden_cards(&self) -> bool {
        self.columns.iter().any(Column::has_hidden)
    }

    /// Indices of empty columns.
    pub fn empty_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    // === Stock ===

    /// Remaining stock batches; the last is dealt next.
    #[must_use]
    pub fn stock(&self) -> &[Draw] {
        &self.stock
    }

    pub(crate) fn push_draw(&mut self, draw: Draw) {
        self.stock.push(draw);
    }

    pub(crate) fn pop_draw(&mut self) -> Option<Draw> {
        self.stock.pop()
    }

    // === Completed sets ===

    #[must_use]
    pub fn completed_sets(&self) -> &[CompletedSet] {
        &self.completed_sets
    }

    pub(crate) fn push_completed_set(&mut self, set: CompletedSet) {
        self.completed_sets.push(set);
    }

    pub(crate) fn pop_completed_set(&mut self) -> Option<CompletedSet> {
        self.completed_sets.pop()
    }

    pub(crate) fn alloc_set_id(&mut self) -> SetId {
        self.ids.set()
    }

    /// True once all eight sets have been completed.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.completed_sets.len() >= SETS_TO_WIN
    }

    // === History and counters ===

    #[must_use]
    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    pub(crate) fn record(&mut self, record: MoveRecord) {
        self.move_log.push(record);
    }

    pub(crate) fn pop_record(&mut self) -> Option<MoveRecord> {
        self.move_log.pop()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn count_move(&mut self) {
        self.move_count += 1;
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub(crate) fn add_seconds(&mut self, seconds: u64) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
    }

    /// Seed of the deal, when known.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    // === Derived ===

    /// Hash of everything hints depend on: the columns and the stock.
    ///
    /// Counters and history are excluded, so ticking the clock does not
    /// invalidate cached hints.
    #[must_use]
    pub fn layout_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.columns.hash(&mut hasher);
        self.stock.hash(&mut hasher);
        hasher.finish()
    }

    /// Turn the tail of every column face up. Used once at game start.
    pub(crate) fn reveal_tails(&mut self) {
        for column in &mut self.columns {
            column.reveal_tail();
        }
    }

    /// Recompute every cached run boundary.
    pub(crate) fn refresh_columns(&mut self) {
        for column in &mut self.columns {
            column.refresh();
        }
    }
}
