//! Deck-hosting services: URL recognition and payload normalization.
//!
//! Fetching lives in [`DeckQuery`](crate::queries::DeckQuery); everything here
//! is pure so it can be exercised against recorded payloads.

pub mod archidekt;
pub mod moxfield;

use crate::models::{DeckCard, DeckSource};

/// A recognized deck URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckUrl<'a> {
    Archidekt(&'a str),
    Moxfield(&'a str),
}

impl<'a> DeckUrl<'a> {
    /// Recognize a deck URL and extract its deck id.
    pub fn parse(url: &'a str) -> Option<Self> {
        archidekt::extract_deck_id(url)
            .map(DeckUrl::Archidekt)
            .or_else(|| moxfield::extract_deck_id(url).map(DeckUrl::Moxfield))
    }

    pub fn source(&self) -> DeckSource {
        match self {
            DeckUrl::Archidekt(_) => DeckSource::Archidekt,
            DeckUrl::Moxfield(_) => DeckSource::Moxfield,
        }
    }

    pub fn deck_id(&self) -> &'a str {
        match self {
            DeckUrl::Archidekt(id) | DeckUrl::Moxfield(id) => id,
        }
    }
}

/// Case-insensitive name order, as both services' web UIs list cards.
pub(crate) fn sort_by_name(cards: &mut [DeckCard]) {
    cards.sort_by_cached_key(|c| c.name.to_lowercase());
}
