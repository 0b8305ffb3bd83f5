//! Async wrapper around [`DeckEvaluator`] for use in async runtimes (Tokio, etc.).
//!
//! The evaluator's HTTP client is blocking, so every operation runs on the
//! blocking thread pool via [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```no_run
//! use deck_evaluator::AsyncDeckEvaluator;
//!
//! #[tokio::main]
//! async fn main() {
//!     let evaluator = AsyncDeckEvaluator::builder().build().await.unwrap();
//!
//!     let deck = evaluator
//!         .import_url("https://archidekt.com/decks/123456")
//!         .await
//!         .unwrap();
//!     let enriched = evaluator
//!         .run(move |e| e.cards().enrich_deck(&deck))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::enrich::EnrichmentResult;
use crate::error::{DeckError, Result};
use crate::models::DeckData;
use crate::{DeckEvaluator, DeckEvaluatorBuilder};

// ---------------------------------------------------------------------------
// AsyncDeckEvaluatorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDeckEvaluator`].
#[derive(Debug, Clone, Default)]
pub struct AsyncDeckEvaluatorBuilder {
    inner: DeckEvaluatorBuilder,
}

impl AsyncDeckEvaluatorBuilder {
    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Override the Scryfall API base URL.
    pub fn scryfall_base(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.scryfall_base(url);
        self
    }

    /// Override the Archidekt API base URL.
    pub fn archidekt_base(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.archidekt_base(url);
        self
    }

    /// Override the Moxfield API base URL.
    pub fn moxfield_base(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.moxfield_base(url);
        self
    }

    /// Build the evaluator on the blocking pool, where the blocking HTTP
    /// client is allowed to start.
    pub async fn build(self) -> Result<AsyncDeckEvaluator> {
        tokio::task::spawn_blocking(move || {
            let evaluator = self.inner.build()?;
            Ok(AsyncDeckEvaluator {
                inner: Arc::new(evaluator),
            })
        })
        .await
        .map_err(|e| DeckError::Task(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDeckEvaluator
// ---------------------------------------------------------------------------

/// Async wrapper around [`DeckEvaluator`].
///
/// Cheap to clone; clones share one HTTP client.
#[derive(Clone)]
pub struct AsyncDeckEvaluator {
    inner: Arc<DeckEvaluator>,
}

impl AsyncDeckEvaluator {
    /// Create a new builder for configuring the async evaluator.
    pub fn builder() -> AsyncDeckEvaluatorBuilder {
        AsyncDeckEvaluatorBuilder::default()
    }

    /// Run a sync evaluator operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DeckEvaluator) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let evaluator = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&evaluator))
            .await
            .map_err(|e| DeckError::Task(format!("Task join error: {e}")))?
    }

    /// Enrich a list of card names asynchronously.
    pub async fn enrich(&self, names: Vec<String>) -> Result<EnrichmentResult> {
        self.run(move |e| e.cards().enrich(&names)).await
    }

    /// Import a deck from an Archidekt or Moxfield URL asynchronously.
    pub async fn import_url(&self, url: &str) -> Result<DeckData> {
        let url = url.to_string();
        self.run(move |e| e.decks().import_url(&url)).await
    }
}
