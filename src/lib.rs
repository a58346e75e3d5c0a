//! YGOPRODeck SDK for Rust.
//!
//! Fetches card data from the YGOPRODeck catalog API, keeps the latest result
//! set as a shared snapshot for paginated browsing, and maintains a single
//! in-memory deck capped at three copies per card.
//!
//! One [`YgoDeckSdk`] is meant to be shared (behind an `Arc`) by every request
//! worker of a server; all of its methods take `&self`.
//!
//! # Quick start
//!
//! ```no_run
//! use ygodeck_sdk::{PageRequest, YgoDeckSdk};
//!
//! let sdk = YgoDeckSdk::builder().build().unwrap();
//!
//! // Fetch and browse
//! sdk.search("Dark Magician").unwrap();
//! let page = sdk.catalog_page(&PageRequest::from_query(Some("1"), Some("20")));
//!
//! // Build a deck from the current snapshot
//! if let Some(card) = page.cards.first() {
//!     sdk.add_to_deck(&card.id.to_string()).unwrap();
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod client;
pub mod config;
pub mod deck;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;

#[cfg(feature = "async")]
pub use async_client::AsyncYgoDeckSdk;
pub use catalog::CatalogCache;
pub use client::{CatalogClient, CatalogSource};
pub use deck::{AddOutcome, DeckStore};
pub use error::{Result, YgoError};
pub use filter::{FilterBuilder, FilterSpec};
pub use models::{Card, CatalogPage, CatalogSnapshot, PageInfo};
pub use pagination::{paginate, PageRequest};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

// ---------------------------------------------------------------------------
// YgoDeckSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`YgoDeckSdk`] instance.
///
/// Use [`YgoDeckSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](YgoDeckSdkBuilder::build) to create the SDK.
pub struct YgoDeckSdkBuilder {
    base_url: String,
    timeout: Duration,
    source: Option<Box<dyn CatalogSource>>,
}

impl Default for YgoDeckSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            source: None,
        }
    }
}

impl YgoDeckSdkBuilder {
    /// Point the HTTP client at a different API root.
    ///
    /// Defaults to [`config::API_BASE`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the timeout applied to every catalog request.
    ///
    /// Defaults to 30 seconds. A request that exceeds it fails like any other
    /// fetch failure.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom catalog source instead of the HTTP client.
    ///
    /// `base_url` and `timeout` are ignored when a source is supplied.
    pub fn source<S: CatalogSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build the SDK with an empty catalog and an empty deck.
    ///
    /// Nothing is fetched until the first call to
    /// [`refresh`](YgoDeckSdk::refresh) or one of its wrappers.
    pub fn build(self) -> Result<YgoDeckSdk> {
        let source = match self.source {
            Some(source) => source,
            None => Box::new(CatalogClient::new(self.base_url, self.timeout)?),
        };
        Ok(YgoDeckSdk {
            source,
            catalog: CatalogCache::new(),
            deck: DeckStore::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// YgoDeckSdk
// ---------------------------------------------------------------------------

/// The main entry point: a catalog source, the catalog snapshot cache and the
/// deck store.
///
/// The catalog cache and the deck store are independent; no operation locks
/// both at once.
pub struct YgoDeckSdk {
    source: Box<dyn CatalogSource>,
    catalog: CatalogCache,
    deck: DeckStore,
}

impl YgoDeckSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> YgoDeckSdkBuilder {
        YgoDeckSdkBuilder::default()
    }

    // -- Catalog -----------------------------------------------------------

    /// Fetch `filter` from the source and install the result as the current
    /// snapshot.
    ///
    /// On failure the previous snapshot stays in place and the error is
    /// returned.
    pub fn refresh(&self, filter: FilterSpec) -> Result<Arc<CatalogSnapshot>> {
        match self.source.fetch(&filter) {
            Ok(snapshot) => {
                info!(cards = snapshot.len(), query = ?snapshot.query, "catalog snapshot replaced");
                Ok(self.catalog.replace(snapshot))
            }
            Err(e) => {
                warn!(query = ?filter, error = %e, "catalog fetch failed; keeping previous snapshot");
                Err(e)
            }
        }
    }

    /// Fetch the full catalog.
    pub fn load_all(&self) -> Result<Arc<CatalogSnapshot>> {
        self.refresh(FilterSpec::All)
    }

    /// Fetch cards whose name matches `query`.
    ///
    /// A blank query fails with [`YgoError::EmptyQuery`] without fetching.
    pub fn search(&self, query: &str) -> Result<Arc<CatalogSnapshot>> {
        self.refresh(FilterSpec::search(query)?)
    }

    /// Fetch cards matching category/level/attribute selections.
    ///
    /// Fails with [`YgoError::EmptyQuery`] without fetching when all three
    /// lists are empty.
    pub fn filter<S: AsRef<str>>(
        &self,
        categories: &[S],
        levels: &[S],
        attributes: &[S],
    ) -> Result<Arc<CatalogSnapshot>> {
        let spec = FilterBuilder::new()
            .categories(categories)
            .levels(levels)
            .attributes(attributes)
            .build()?;
        self.refresh(spec)
    }

    /// Fetch a single card by identifier.
    ///
    /// The result replaces the snapshot like any other fetch, so the card can
    /// be added to the deck afterwards. Fails with [`YgoError::NotFound`] if
    /// the upstream returns no card.
    pub fn card_info(&self, raw_id: &str) -> Result<Card> {
        let snapshot = self.refresh(FilterSpec::by_id(raw_id)?)?;
        snapshot
            .cards
            .first()
            .cloned()
            .ok_or_else(|| YgoError::NotFound(format!("card {raw_id}")))
    }

    /// The current catalog snapshot.
    pub fn catalog(&self) -> Arc<CatalogSnapshot> {
        self.catalog.current()
    }

    /// One page of the current catalog snapshot.
    pub fn catalog_page(&self, request: &PageRequest) -> CatalogPage {
        self.catalog.page(request)
    }

    // -- Deck --------------------------------------------------------------

    /// Add one copy of the card with identifier `raw_id`, taken from the
    /// current catalog snapshot.
    ///
    /// # Errors
    ///
    /// * [`YgoError::InvalidIdentifier`] if `raw_id` is not numeric.
    /// * [`YgoError::NotFound`] if the current snapshot has no such card.
    ///
    /// Reaching the copy limit is reported as [`AddOutcome::LimitReached`].
    pub fn add_to_deck(&self, raw_id: &str) -> Result<AddOutcome> {
        let id = models::parse_card_id(raw_id)?;
        let card = self
            .catalog
            .find(id)
            .ok_or_else(|| YgoError::NotFound(format!("card {id} is not in the current catalog")))?;
        Ok(self.deck.add(card))
    }

    /// Remove one copy of the card with identifier `raw_id`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_from_deck(&self, raw_id: &str) -> Result<bool> {
        let id = models::parse_card_id(raw_id)?;
        Ok(self.deck.remove(id))
    }

    /// The deck contents in insertion order.
    pub fn deck(&self) -> Vec<Card> {
        self.deck.list()
    }

    /// Direct access to the deck store.
    pub fn deck_store(&self) -> &DeckStore {
        &self.deck
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for YgoDeckSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.catalog.current();
        write!(
            f,
            "YgoDeckSdk(catalog={} cards, deck={} cards)",
            snapshot.len(),
            self.deck.len()
        )
    }
}
