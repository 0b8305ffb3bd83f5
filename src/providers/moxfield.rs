use regex::Regex;
use std::sync::LazyLock;

use super::sort_by_name;
use crate::models::{DeckCard, DeckData, DeckSource, MoxfieldDeck, MoxfieldSection};

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?moxfield\.com/decks/([A-Za-z0-9_-]+)").expect("Invalid regex")
});

pub fn is_moxfield_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

pub fn extract_deck_id(url: &str) -> Option<&str> {
    URL_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Flatten one named section into name-sorted entries. Missing quantities count as one.
pub fn normalize_section(section: &MoxfieldSection) -> Vec<DeckCard> {
    let mut cards: Vec<DeckCard> = section
        .values()
        .map(|entry| DeckCard::new(entry.card.name.clone(), entry.quantity.unwrap_or(1)))
        .collect();
    sort_by_name(&mut cards);
    cards
}

pub fn normalize_deck(raw: &MoxfieldDeck, url: &str) -> DeckData {
    let mut deck = DeckData::new(raw.name.clone(), DeckSource::Moxfield, url);
    deck.commanders = normalize_section(&raw.commanders);
    deck.mainboard = normalize_section(&raw.mainboard);
    deck.sideboard = normalize_section(&raw.sideboard);
    deck
}
