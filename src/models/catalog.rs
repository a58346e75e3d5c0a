use super::card::Card;
use crate::filter::FilterSpec;

// ---------------------------------------------------------------------------
// CatalogSnapshot — Result set of one successful fetch
// ---------------------------------------------------------------------------

/// The ordered cards of one catalog fetch, together with the filter that
/// produced them. Order is exactly the upstream order.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub query: FilterSpec,
    pub cards: Vec<Card>,
}

impl CatalogSnapshot {
    pub fn new(query: FilterSpec, cards: Vec<Card>) -> Self {
        Self { query, cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// First card carrying `id`, if any.
    pub fn find(&self, id: u64) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}
