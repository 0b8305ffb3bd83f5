//! Request-side rules around card enrichment and text import.
//!
//! These run before and after the card-database call: cleaning the requested
//! names, keying the returned records by the spelling the caller asked for,
//! and guarding decklist text before it reaches the parser.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::analysis::CardMap;
use crate::config;
use crate::error::{DeckError, Result};
use crate::models::{DeckData, ScryfallCard};
use crate::normalize::normalize_card;
use crate::parse::{front_face, parse_decklist};

/// Enriched cards keyed by requested name, plus the names the database did not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    pub cards: CardMap,
    pub not_found: Vec<String>,
}

/// Trim, drop blanks, and case-insensitively deduplicate requested card names.
///
/// The first spelling of each name is kept. Fails when a name is longer than
/// [`config::MAX_NAME_LENGTH`], when nothing is left, or when more than
/// [`config::MAX_UNIQUE_NAMES`] distinct names remain.
pub fn prepare_card_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for name in names {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.chars().count() > config::MAX_NAME_LENGTH {
            return Err(DeckError::InvalidArgument(format!(
                "Card name exceeds maximum length of {} characters",
                config::MAX_NAME_LENGTH
            )));
        }
        if seen.insert(trimmed.to_lowercase()) {
            unique.push(trimmed.to_string());
        }
    }

    if unique.is_empty() {
        return Err(DeckError::InvalidArgument(
            "No valid card names provided".to_string(),
        ));
    }
    if unique.len() > config::MAX_UNIQUE_NAMES {
        return Err(DeckError::InvalidArgument(format!(
            "Too many unique card names ({}). Maximum is {}.",
            unique.len(),
            config::MAX_UNIQUE_NAMES
        )));
    }

    Ok(unique)
}

/// Normalize returned records and key each one by the name that was requested.
///
/// A record matches a requested name (case-insensitively) by its full name,
/// its front-face name, or its flavor name; records matching nothing are keyed
/// by their own name.
pub fn key_by_requested_name(
    requested: &[String],
    records: &[ScryfallCard],
    not_found: Vec<String>,
) -> EnrichmentResult {
    let by_lower: HashMap<String, &str> = requested
        .iter()
        .map(|n| (n.to_lowercase(), n.as_str()))
        .collect();

    let mut cards = CardMap::new();
    for record in records {
        let candidates = [
            Some(record.name.as_str()),
            Some(front_face(&record.name)),
            record.flavor_name.as_deref(),
            record.front_face().and_then(|f| f.flavor_name.as_deref()),
        ];
        let key = candidates
            .into_iter()
            .flatten()
            .find_map(|c| by_lower.get(&c.to_lowercase()).copied())
            .unwrap_or(record.name.as_str());
        cards.insert(key.to_string(), normalize_card(record));
    }

    if !not_found.is_empty() {
        debug!(count = not_found.len(), "card names not resolved");
    }

    EnrichmentResult { cards, not_found }
}

/// Validate pasted decklist text and parse it.
///
/// The text is trimmed first. Empty or oversized text is rejected, and a
/// decklist with no card lines at all is reported as [`DeckError::NotFound`].
pub fn parse_decklist_checked(text: &str) -> Result<DeckData> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DeckError::InvalidArgument(
            "Decklist text must not be empty".to_string(),
        ));
    }
    if text.chars().count() > config::MAX_TEXT_LENGTH {
        return Err(DeckError::InvalidArgument(format!(
            "Decklist text exceeds maximum length of {} characters",
            config::MAX_TEXT_LENGTH
        )));
    }

    let deck = parse_decklist(text);
    if deck.is_empty() {
        return Err(DeckError::NotFound(
            "No cards found in the provided decklist".to_string(),
        ));
    }
    Ok(deck)
}
