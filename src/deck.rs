//! The process-wide deck: an ordered multiset of cards with a per-card copy
//! limit.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::config::MAX_COPIES;
use crate::models::Card;

// ---------------------------------------------------------------------------
// AddOutcome
// ---------------------------------------------------------------------------

/// Result of [`DeckStore::add`]. Hitting the copy limit is an ordinary
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The card was appended; `count` is its number of copies afterwards.
    Added { count: usize },
    /// The deck already holds the maximum number of copies.
    LimitReached,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }
}

// ---------------------------------------------------------------------------
// DeckStore
// ---------------------------------------------------------------------------

/// Deck contents in insertion order, guarded by a mutex.
///
/// Every mutation checks and changes the list under one lock acquisition, so
/// `count(id) <= max_copies` holds after every call regardless of how many
/// workers mutate concurrently.
#[derive(Debug)]
pub struct DeckStore {
    cards: Mutex<Vec<Card>>,
    max_copies: usize,
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::with_max_copies(MAX_COPIES)
    }
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_copies(max_copies: usize) -> Self {
        Self {
            cards: Mutex::new(Vec::new()),
            max_copies,
        }
    }

    pub fn max_copies(&self) -> usize {
        self.max_copies
    }

    // A panic inside a critical section cannot leave the Vec half-edited:
    // each mutation is a single push or remove.
    fn lock(&self) -> MutexGuard<'_, Vec<Card>> {
        self.cards.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one copy of `card` unless the limit is already reached.
    pub fn add(&self, card: Card) -> AddOutcome {
        let mut cards = self.lock();
        let count = cards.iter().filter(|c| c.id == card.id).count();
        if count >= self.max_copies {
            debug!(card_id = card.id, count, "deck copy limit reached");
            return AddOutcome::LimitReached;
        }
        debug!(card_id = card.id, count = count + 1, "card added to deck");
        cards.push(card);
        AddOutcome::Added { count: count + 1 }
    }

    /// Remove the first copy of `id`, keeping the order of the rest.
    ///
    /// Returns `false` and leaves the deck untouched when `id` is absent.
    pub fn remove(&self, id: u64) -> bool {
        let mut cards = self.lock();
        match cards.iter().position(|c| c.id == id) {
            Some(index) => {
                cards.remove(index);
                debug!(card_id = id, "card removed from deck");
                true
            }
            None => false,
        }
    }

    /// Owned copy of the deck in insertion order.
    pub fn list(&self) -> Vec<Card> {
        self.lock().clone()
    }

    /// Copies of `id` currently in the deck.
    pub fn count(&self, id: u64) -> usize {
        self.lock().iter().filter(|c| c.id == id).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
