//! Magic: The Gathering deck import and analysis.
//!
//! Parses pasted decklists (or imports them from Archidekt and Moxfield),
//! enriches every card with data from the Scryfall card database, and derives
//! deck analytics: mana curve, color distribution, mana-base metrics and
//! functional tags.
//!
//! The parsing and analysis layers ([`parse`], [`normalize`], [`analysis`])
//! are pure and need no client. The [`DeckEvaluator`] adds the HTTP side.
//!
//! # Quick start
//!
//! ```no_run
//! use deck_evaluator::analysis::{compute_mana_curve, compute_mana_base_metrics};
//! use deck_evaluator::DeckEvaluator;
//!
//! let evaluator = DeckEvaluator::builder().build().unwrap();
//!
//! let deck = evaluator
//!     .decks()
//!     .parse_text("COMMANDER:\n1 Atraxa, Praetors' Voice\n\nMAINBOARD:\n1 Sol Ring")
//!     .unwrap();
//! let enriched = evaluator.cards().enrich_deck(&deck).unwrap();
//!
//! let curve = compute_mana_curve(&deck, &enriched.cards, None);
//! let metrics = compute_mana_base_metrics(&deck, &enriched.cards);
//! ```

pub mod analysis;
pub mod api;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod enrich;
pub mod error;
pub mod models;
pub mod normalize;
pub mod parse;
pub mod providers;
pub mod queries;

pub use analysis::CardMap;
pub use api::ApiClient;
#[cfg(feature = "async")]
pub use async_client::AsyncDeckEvaluator;
pub use config::Endpoints;
pub use enrich::EnrichmentResult;
pub use error::{DeckError, Result};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DeckEvaluatorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DeckEvaluator`].
///
/// Use [`DeckEvaluator::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DeckEvaluatorBuilder::build).
#[derive(Debug, Clone)]
pub struct DeckEvaluatorBuilder {
    endpoints: Endpoints,
    timeout: Duration,
}

impl Default for DeckEvaluatorBuilder {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl DeckEvaluatorBuilder {
    /// Set the HTTP request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the Scryfall API base URL (no trailing slash).
    pub fn scryfall_base(mut self, url: impl Into<String>) -> Self {
        self.endpoints.scryfall = url.into();
        self
    }

    /// Override the Archidekt API base URL (no trailing slash).
    pub fn archidekt_base(mut self, url: impl Into<String>) -> Self {
        self.endpoints.archidekt = url.into();
        self
    }

    /// Override the Moxfield API base URL (no trailing slash).
    pub fn moxfield_base(mut self, url: impl Into<String>) -> Self {
        self.endpoints.moxfield = url.into();
        self
    }

    /// Build the evaluator and its HTTP client. No request is made.
    pub fn build(self) -> Result<DeckEvaluator> {
        let api = ApiClient::new(self.endpoints, self.timeout)?;
        Ok(DeckEvaluator { api })
    }
}

// ---------------------------------------------------------------------------
// DeckEvaluator
// ---------------------------------------------------------------------------

/// The main entry point for deck import and card enrichment.
///
/// Wraps an [`ApiClient`] and exposes the query interfaces as lightweight
/// borrowing wrappers. Analysis itself lives in [`analysis`] and works on
/// the values these queries return.
pub struct DeckEvaluator {
    api: ApiClient,
}

impl DeckEvaluator {
    /// Create a new builder for configuring the evaluator.
    pub fn builder() -> DeckEvaluatorBuilder {
        DeckEvaluatorBuilder::default()
    }

    /// Access the card lookup interface.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(&self.api)
    }

    /// Access the deck import interface.
    pub fn decks(&self) -> queries::decks::DeckQuery<'_> {
        queries::decks::DeckQuery::new(&self.api)
    }

    /// Return a reference to the underlying [`ApiClient`].
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DeckEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let endpoints = self.api.endpoints();
        write!(
            f,
            "DeckEvaluator(scryfall={}, archidekt={}, moxfield={})",
            endpoints.scryfall, endpoints.archidekt, endpoints.moxfield
        )
    }
}
