//! The Spider rule engine.
//!
//! `Engine` owns a `GameState` and is the only thing that mutates it. Every
//! operation runs synchronously to completion: it either validates and fully
//! commits, or rejects before touching anything.
//!
//! ## Usage
//!
//! ```
//! use spider_engine::core::{GameConfig, SuitVariant};
//! use spider_engine::rules::Engine;
//!
//! let mut engine = Engine::new_game(GameConfig::new(SuitVariant::Two).with_seed(42));
//!
//! // Every column tail is face up at the start
//! assert!(engine.state().columns().iter().all(|c| c.tail().unwrap().is_visible()));
//!
//! let outcome = engine.draw().unwrap();
//! assert_eq!(engine.state().stock().len(), 4);
//! assert_eq!(outcome.landed[0], 6);
//!
//! engine.undo_last_move().unwrap();
//! assert_eq!(engine.state().stock().len(), 5);
//! ```
//!
//! ## Threading
//!
//! The engine has no interior synchronisation. Treat it as owned by a single
//! logical actor (one UI event loop) and never interleave calls.

use smallvec::SmallVec;

use crate::core::action::Action;
use crate::core::card::Card;
use crate::core::config::{GameConfig, COLUMN_COUNT};
use crate::core::error::{EngineError, MoveRejection};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::deal::deal;
use crate::hints::{Hint, HintCache};
use crate::history::MoveRecord;
use crate::tableau::Draw;

use super::completion::extract_all;
use super::outcome::{ActionOutcome, DrawOutcome, MoveOutcome};

/// Stateful rule engine for one game.
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
    pub(super) state: GameState,
    pub(super) hints: HintCache,
}

impl Engine {
    /// Deal a new game.
    ///
    /// Uses the configured seed, or draws one from entropy. The tail of every
    /// column is turned face up.
    #[must_use]
    pub fn new_game(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut state = deal(config.variant, &mut rng);
        state.reveal_tails();

        Self {
            hints: HintCache::with_strict_draws(config.strict_draws),
            config,
            state,
        }
    }

    /// Resume from an existing state, such as a loaded snapshot.
    ///
    /// Cached run boundaries are re-derived; visibility is taken as stored.
    #[must_use]
    pub fn from_state(config: GameConfig, mut state: GameState) -> Self {
        state.refresh_columns();
        log::info!(
            "resumed game: {} moves, {} draws left, {} sets completed",
            state.move_count(),
            state.stock().len(),
            state.completed_sets().len()
        );

        Self {
            hints: HintCache::with_strict_draws(config.strict_draws),
            config,
            state,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Give up the engine and keep the state (e.g. to persist it).
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    // === Queries ===

    /// Index of the first movable card in `column`.
    ///
    /// Panics if `column >= COLUMN_COUNT`.
    #[must_use]
    pub fn run_start(&self, column: usize) -> Option<usize> {
        self.state.column(column).run_start()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.state.move_log().is_empty()
    }

    /// Remaining stock batches.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.state.stock().len()
    }

    #[must_use]
    pub fn completed_set_count(&self) -> usize {
        self.state.completed_sets().len()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Check whether a move would be accepted, without applying it.
    ///
    /// Panics if any index is out of range; those are caller bugs, not
    /// gameplay conditions.
    pub fn check_move(&self, source: usize, card_index: usize, destination: usize) -> Result<(), EngineError> {
        let from = self.state.column(source);
        let to = self.state.column(destination);
        assert!(
            card_index < from.len(),
            "Card index {} out of range for column {} ({} cards)",
            card_index,
            source,
            from.len()
        );

        if source == destination {
            return Err(EngineError::IllegalMove(MoveRejection::SameColumn));
        }
        match from.run_start() {
            Some(start) if card_index >= start => {}
            _ => return Err(EngineError::IllegalMove(MoveRejection::NotARun)),
        }
        if !to.accepts(from.cards()[card_index].rank()) {
            return Err(EngineError::IllegalMove(MoveRejection::DestinationRejects));
        }
        Ok(())
    }

    /// Check whether the stock may be dealt now.
    pub fn check_draw(&self) -> Result<(), EngineError> {
        if self.state.stock().is_empty() {
            return Err(EngineError::NoDrawsAvailable);
        }
        if self.config.strict_draws {
            if let Some(column) = self.state.empty_columns().next() {
                return Err(EngineError::EmptyColumnOnDraw { column });
            }
        }
        Ok(())
    }

    // === Moves ===

    /// Move the cards from `card_index` to the tail of `source` onto
    /// `destination`.
    ///
    /// On success the source's new tail is turned face up, the move is
    /// logged and counted, and any set completed in either column is
    /// extracted. On rejection nothing changes.
    pub fn move_cards(
        &mut self,
        source: usize,
        card_index: usize,
        destination: usize,
    ) -> Result<MoveOutcome, EngineError> {
        if let Err(err) = self.check_move(source, card_index, destination) {
            log::debug!("rejected move {}[{}..] -> {}: {}", source, card_index, destination, err);
            return Err(err);
        }

        let moved = self.state.column_mut(source).split_off(card_index);
        let count = moved.len();
        let moved_ids = moved.iter().map(Card::id).collect();
        self.state.column_mut(destination).extend(moved);
        let source_revealed = self.state.column_mut(source).reveal_tail();

        self.state.record(MoveRecord::Move {
            source,
            count,
            destination,
            revealed: source_revealed,
        });
        self.state.count_move();

        let mut completed = SmallVec::new();
        extract_all(&mut self.state, source, &mut completed);
        extract_all(&mut self.state, destination, &mut completed);

        self.hints.invalidate();
        log::debug!(
            "moved {} cards {} -> {} (revealed: {}, sets: {})",
            count,
            source,
            destination,
            source_revealed,
            completed.len()
        );

        Ok(MoveOutcome {
            source,
            destination,
            moved: moved_ids,
            source_revealed,
            completed,
        })
    }

    // === Stock ===

    /// Take the next batch off the stock.
    ///
    /// The batch must be handed to `apply_draw`; the engine does not keep
    /// it.
    pub fn pop_draw(&mut self) -> Result<Draw, EngineError> {
        self.check_draw()?;
        let draw = self.state.pop_draw().ok_or(EngineError::NoDrawsAvailable)?;
        self.hints.invalidate();
        Ok(draw)
    }

    /// Deal a batch onto the columns, one face-up card each.
    ///
    /// Sets are only looked for once all ten cards have landed, so a single
    /// draw can complete several.
    pub fn apply_draw(&mut self, draw: Draw) -> DrawOutcome {
        let id = draw.id();
        let landed: [usize; COLUMN_COUNT] = std::array::from_fn(|i| self.state.column(i).len());

        for (column, card) in self.state.columns_mut().iter_mut().zip(draw.into_revealed()) {
            column.push(card);
        }
        self.state.record(MoveRecord::Draw { draw: id });
        self.state.count_move();

        let mut completed = SmallVec::new();
        for column in 0..COLUMN_COUNT {
            extract_all(&mut self.state, column, &mut completed);
        }

        self.hints.invalidate();
        log::debug!("dealt {} ({} draws left, sets: {})", id, self.state.stock().len(), completed.len());

        DrawOutcome { draw: id, landed, completed }
    }

    /// `pop_draw` followed by `apply_draw`.
    pub fn draw(&mut self) -> Result<DrawOutcome, EngineError> {
        let draw = self.pop_draw()?;
        Ok(self.apply_draw(draw))
    }

    // === Clock ===

    /// Advance the game clock. Called by an external timer.
    pub fn tick(&mut self, seconds: u64) {
        self.state.add_seconds(seconds);
    }

    // === Hints ===

    /// Hints for the current layout.
    ///
    /// Cached against the layout hash unless caching is disabled in the
    /// config.
    pub fn hints(&mut self) -> &[Hint] {
        if !self.config.cache_hints {
            self.hints.invalidate();
        }
        self.hints.get_or_compute(&self.state)
    }

    #[must_use]
    pub fn hint_cache(&self) -> &HintCache {
        &self.hints
    }

    // === Actions ===

    /// Every action that would currently succeed.
    ///
    /// Moves are listed for each suffix of each movable run onto each
    /// accepting column, then a draw, then undo.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        for (source, column) in self.state.columns().iter().enumerate() {
            let Some(start) = column.run_start() else {
                continue;
            };
            for card_index in start..column.len() {
                let rank = column.cards()[card_index].rank();
                for (destination, target) in self.state.columns().iter().enumerate() {
                    if destination != source && target.accepts(rank) {
                        actions.push(Action::move_cards(source, card_index, destination));
                    }
                }
            }
        }

        if self.check_draw().is_ok() {
            actions.push(Action::Draw);
        }
        if self.can_undo() {
            actions.push(Action::Undo);
        }

        actions
    }

    /// Apply any action.
    pub fn apply_action(&mut self, action: Action) -> Result<ActionOutcome, EngineError> {
        match action {
            Action::Move {
                source,
                card_index,
                destination,
            } => self.move_cards(source, card_index, destination).map(ActionOutcome::Moved),
            Action::Draw => self.draw().map(ActionOutcome::Drew),
            Action::Undo => self.undo_last_move().map(ActionOutcome::Undone),
        }
    }
}
