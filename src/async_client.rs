//! Async wrapper around [`YgoDeckSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Catalog fetches use a blocking HTTP client, so they run on the blocking
//! thread pool via [`tokio::task::spawn_blocking`]. Cache and deck operations
//! are short critical sections and can be called directly through
//! [`sdk()`](AsyncYgoDeckSdk::sdk).
//!
//! # Example
//!
//! ```no_run
//! use ygodeck_sdk::{AsyncYgoDeckSdk, PageRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncYgoDeckSdk::builder().build().await.unwrap();
//!
//!     sdk.search("Blue-Eyes").await.unwrap();
//!     let page = sdk.sdk().catalog_page(&PageRequest::default());
//!     println!("{} cards on page 1", page.cards.len());
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, YgoError};
use crate::models::{Card, CatalogSnapshot};
use crate::{config, FilterSpec, YgoDeckSdk};

// ---------------------------------------------------------------------------
// AsyncYgoDeckSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncYgoDeckSdk`] instance.
pub struct AsyncYgoDeckSdkBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for AsyncYgoDeckSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncYgoDeckSdkBuilder {
    /// Point the HTTP client at a different API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the timeout applied to every catalog request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool;
    /// building it inside an async context would otherwise panic.
    pub async fn build(self) -> Result<AsyncYgoDeckSdk> {
        tokio::task::spawn_blocking(move || {
            let sdk = YgoDeckSdk::builder()
                .base_url(self.base_url)
                .timeout(self.timeout)
                .build()?;
            Ok(AsyncYgoDeckSdk::from_sdk(sdk))
        })
        .await
        .map_err(|e| YgoError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncYgoDeckSdk
// ---------------------------------------------------------------------------

/// Async wrapper around a shared [`YgoDeckSdk`].
///
/// Cloning is cheap; every clone refers to the same catalog and deck.
#[derive(Clone)]
pub struct AsyncYgoDeckSdk {
    inner: Arc<YgoDeckSdk>,
}

impl AsyncYgoDeckSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncYgoDeckSdkBuilder {
        AsyncYgoDeckSdkBuilder::default()
    }

    /// Wrap an already built SDK, e.g. one with a custom catalog source.
    pub fn from_sdk(sdk: YgoDeckSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// The wrapped SDK, for operations that never block.
    pub fn sdk(&self) -> &YgoDeckSdk {
        &self.inner
    }

    /// Run a blocking SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&YgoDeckSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| YgoError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Async form of [`YgoDeckSdk::refresh`].
    pub async fn refresh(&self, filter: FilterSpec) -> Result<Arc<CatalogSnapshot>> {
        self.run(move |s| s.refresh(filter)).await
    }

    /// Async form of [`YgoDeckSdk::load_all`].
    pub async fn load_all(&self) -> Result<Arc<CatalogSnapshot>> {
        self.run(|s| s.load_all()).await
    }

    /// Async form of [`YgoDeckSdk::search`].
    pub async fn search(&self, query: &str) -> Result<Arc<CatalogSnapshot>> {
        let spec = FilterSpec::search(query)?;
        self.refresh(spec).await
    }

    /// Async form of [`YgoDeckSdk::card_info`].
    pub async fn card_info(&self, raw_id: &str) -> Result<Card> {
        let raw_id = raw_id.to_string();
        self.run(move |s| s.card_info(&raw_id)).await
    }
}
