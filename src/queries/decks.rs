//! Deck import from pasted text or a deck-hosting URL.

use tracing::warn;

use crate::api::ApiClient;
use crate::enrich::parse_decklist_checked;
use crate::error::{DeckError, Result};
use crate::models::{ArchidektDeck, DeckData, MoxfieldDeck};
use crate::providers::{archidekt, moxfield, DeckUrl};

// ---------------------------------------------------------------------------
// DeckQuery
// ---------------------------------------------------------------------------

/// Query interface for importing decks.
pub struct DeckQuery<'a> {
    api: &'a ApiClient,
}

impl<'a> DeckQuery<'a> {
    /// Create a new `DeckQuery` bound to the given client.
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Parse pasted decklist text. See [`parse_decklist_checked`].
    pub fn parse_text(&self, text: &str) -> Result<DeckData> {
        parse_decklist_checked(text)
    }

    /// Fetch the raw Archidekt payload for a deck id.
    pub fn fetch_archidekt(&self, deck_id: &str) -> Result<ArchidektDeck> {
        let url = format!("{}/decks/{}/", self.api.endpoints().archidekt, deck_id);
        self.api.get_json("Archidekt", &url)
    }

    /// Fetch the raw Moxfield payload for a deck id.
    pub fn fetch_moxfield(&self, deck_id: &str) -> Result<MoxfieldDeck> {
        let url = format!("{}/decks/all/{}", self.api.endpoints().moxfield, deck_id);
        self.api.get_json("Moxfield", &url)
    }

    /// Import a deck from an Archidekt or Moxfield URL.
    ///
    /// The returned deck carries the service's deck name, its source, and
    /// the trimmed URL.
    pub fn import_url(&self, url: &str) -> Result<DeckData> {
        let url = url.trim();
        match DeckUrl::parse(url) {
            Some(DeckUrl::Archidekt(id)) => {
                let raw = self.fetch_archidekt(id)?;
                Ok(archidekt::normalize_deck(&raw, url))
            }
            Some(DeckUrl::Moxfield(id)) => {
                let raw = self.fetch_moxfield(id)?;
                Ok(moxfield::normalize_deck(&raw, url))
            }
            None => {
                warn!(url, "unsupported deck URL");
                Err(DeckError::UnsupportedUrl(url.to_string()))
            }
        }
    }
}
