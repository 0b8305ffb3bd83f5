//! Card lookups against the Scryfall card database.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::config;
use crate::enrich::{key_by_requested_name, prepare_card_names, EnrichmentResult};
use crate::error::Result;
use crate::models::{DeckData, EnrichedCard, ScryfallCard};
use crate::normalize::normalize_card;

const SERVICE: &str = "Scryfall";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct CollectionRequest<'a> {
    identifiers: Vec<NameIdentifier<'a>>,
}

#[derive(Debug, Serialize)]
struct NameIdentifier<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct CollectionResponse {
    #[serde(default)]
    data: Vec<ScryfallCard>,
    #[serde(default)]
    not_found: Vec<serde_json::Value>,
}

/// Raw records returned for a set of names, plus the names that matched nothing.
#[derive(Debug, Clone, Default)]
pub struct CollectionResult {
    pub cards: Vec<ScryfallCard>,
    pub not_found: Vec<String>,
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for card data.
pub struct CardQuery<'a> {
    api: &'a ApiClient,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given client.
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch raw records for the given names via `/cards/collection`.
    ///
    /// Names are sent in batches of [`config::COLLECTION_BATCH_SIZE`]. Any
    /// failed batch fails the whole call.
    pub fn fetch_collection(&self, names: &[String]) -> Result<CollectionResult> {
        let url = format!("{}/cards/collection", self.api.endpoints().scryfall);
        let mut result = CollectionResult::default();

        for (i, batch) in names.chunks(config::COLLECTION_BATCH_SIZE).enumerate() {
            debug!(batch = i, size = batch.len(), "fetching card collection");
            let body = CollectionRequest {
                identifiers: batch.iter().map(|n| NameIdentifier { name: n }).collect(),
            };
            let resp: CollectionResponse = self.api.post_json(SERVICE, &url, &body)?;
            result.cards.extend(resp.data);
            result.not_found.extend(
                resp.not_found
                    .iter()
                    .filter_map(|id| id.get("name").and_then(|v| v.as_str()))
                    .map(str::to_string),
            );
        }

        if !result.not_found.is_empty() {
            warn!(names = ?result.not_found, "cards not found");
        }
        Ok(result)
    }

    /// Look up and normalize a list of names, keyed by the requested spelling.
    ///
    /// Names are cleaned with [`prepare_card_names`] first, so invalid input
    /// fails before any request is made.
    pub fn enrich<S: AsRef<str>>(&self, names: &[S]) -> Result<EnrichmentResult> {
        let requested = prepare_card_names(names)?;
        let collection = self.fetch_collection(&requested)?;
        Ok(key_by_requested_name(
            &requested,
            &collection.cards,
            collection.not_found,
        ))
    }

    /// Enrich every distinct card named in a deck.
    pub fn enrich_deck(&self, deck: &DeckData) -> Result<EnrichmentResult> {
        self.enrich(&deck.unique_names())
    }

    /// Fetch a single card by exact name. Returns `None` if no card has that name.
    pub fn get_by_name(&self, name: &str) -> Result<Option<EnrichedCard>> {
        let url = format!("{}/cards/named", self.api.endpoints().scryfall);
        let request = self.api.get(&url).query(&[("exact", name)]);
        let card: Option<ScryfallCard> = self.api.get_json_opt(SERVICE, request)?;
        Ok(card.as_ref().map(normalize_card))
    }
}
