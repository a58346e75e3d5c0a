//! Holder of the most recently fetched catalog snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::{Card, CatalogPage, CatalogSnapshot};
use crate::pagination::{paginate, PageRequest};

/// Latest catalog snapshot, shared by every request worker.
///
/// The snapshot sits behind an `Arc`, so [`replace`](Self::replace) swaps a
/// pointer under the write lock and readers keep whatever snapshot they
/// already cloned out. A reader therefore sees either the whole old snapshot
/// or the whole new one.
#[derive(Debug, Default)]
pub struct CatalogCache {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `snapshot`, discarding the previous one.
    pub fn replace(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(snapshot);
        // The guarded value is a single Arc, so a poisoned lock still holds a
        // complete snapshot.
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&snapshot);
        snapshot
    }

    /// The latest snapshot, or an empty one before the first fetch.
    pub fn current(&self) -> Arc<CatalogSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Look up a card by identifier in the current snapshot.
    pub fn find(&self, id: u64) -> Option<Card> {
        self.current().find(id).cloned()
    }

    /// Paginate the current snapshot.
    pub fn page(&self, request: &PageRequest) -> CatalogPage {
        let snapshot = self.current();
        let (cards, page_info) = paginate(&snapshot.cards, request);
        CatalogPage {
            cards: cards.to_vec(),
            page_info,
            cards_per_page: request.page_size(),
        }
    }
}
