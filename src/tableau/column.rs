//! A single tableau column and its movable-run boundary.
//!
//! `Column` keeps its cards in bottom-to-tail order (index 0 is the card
//! furthest from the player, the last card is the exposed tail). Alongside
//! the cards it caches `run_start`, the index of the first card of the
//! movable run: the longest suffix that is face up, strictly descending by
//! one rank toward the tail and of a single suit.
//!
//! Every mutator recomputes `run_start` before returning, so the cached value
//! can never go stale.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank, Suit};
use crate::core::config::SET_LENGTH;

/// Compute the run start of a card sequence.
///
/// Returns `None` for an empty sequence or when the tail card is face down;
/// neither has a movable card.
#[must_use]
pub fn run_start_of(cards: &[Card]) -> Option<usize> {
    let tail = cards.last()?;
    if !tail.is_visible() {
        return None;
    }

    let mut start = cards.len() - 1;
    while start > 0 && cards[start - 1].continues_run(&cards[start]) {
        start -= 1;
    }
    Some(start)
}

/// Ordered stack of cards forming one tableau column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    cards: Vec<Card>,
    run_start: Option<usize>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column from cards in bottom-to-tail order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut column = Self {
            cards,
            run_start: None,
        };
        column.refresh();
        column
    }

    /// Cards in bottom-to-tail order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The exposed tail card.
    #[must_use]
    pub fn tail(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Index of the first card of the movable run.
    ///
    /// `None` when the column is empty or its tail is face down.
    #[must_use]
    pub fn run_start(&self) -> Option<usize> {
        self.run_start
    }

    /// The movable run itself (empty when there is none).
    #[must_use]
    pub fn run(&self) -> &[Card] {
        match self.run_start {
            Some(start) => &self.cards[start..],
            None => &[],
        }
    }

    /// First card of the movable run.
    #[must_use]
    pub fn run_head(&self) -> Option<&Card> {
        self.run_start.map(|start| &self.cards[start])
    }

    /// True if any card in the column is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|card| !card.is_visible())
    }

    /// True if a run headed by a card of `rank` may be placed here.
    ///
    /// Suit is irrelevant across columns: only the tail's rank must be one
    /// above the arriving card.
    #[must_use]
    pub fn accepts(&self, rank: Rank) -> bool {
        match self.tail() {
            None => true,
            Some(tail) => rank.larger() == Some(tail.rank()),
        }
    }

    /// Suit of a complete King→Ace set sitting at the tail, if any.
    ///
    /// All 13 cards must be face up and share one suit; rank adjacency with
    /// mixed suits never qualifies.
    #[must_use]
    pub fn completed_set_suit(&self) -> Option<Suit> {
        if self.cards.len() < SET_LENGTH {
            return None;
        }
        let tail_set = &self.cards[self.cards.len() - SET_LENGTH..];
        let suit = tail_set[0].suit();
        let complete = tail_set
            .iter()
            .zip(Rank::ALL.iter().rev())
            .all(|(card, rank)| card.is_visible() && card.suit() == suit && card.rank() == *rank);
        complete.then_some(suit)
    }

    // === Mutation (engine only) ===

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.refresh();
    }

    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.refresh();
    }

    /// Remove and return the cards from `index` to the tail.
    pub(crate) fn split_off(&mut self, index: usize) -> Vec<Card> {
        let removed = self.cards.split_off(index);
        self.refresh();
        removed
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        self.refresh();
        card
    }

    /// Turn the tail face up.
    ///
    /// Returns true only if the tail was face down before.
    pub(crate) fn reveal_tail(&mut self) -> bool {
        let revealed = match self.cards.last_mut() {
            Some(tail) if !tail.is_visible() => {
                tail.set_visible(true);
                true
            }
            _ => false,
        };
        if revealed {
            self.refresh();
        }
        revealed
    }

    /// Turn the tail face down again.
    pub(crate) fn hide_tail(&mut self) {
        if let Some(tail) = self.cards.last_mut() {
            tail.set_visible(false);
        }
        self.refresh();
    }

    /// Recompute the cached run start.
    pub(crate) fn refresh(&mut self) {
        self.run_start = run_start_of(&self.cards);
        log::trace!("run start now {:?} over {} cards", self.run_start, self.cards.len());
    }
}
