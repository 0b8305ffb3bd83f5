use regex::Regex;
use std::sync::LazyLock;

use super::sort_by_name;
use crate::models::{ArchidektDeck, DeckCard, DeckData, DeckSource};

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?archidekt\.com/decks/([0-9]+)").expect("Invalid regex")
});

const COMMANDER_CATEGORIES: [&str; 3] = ["Commander", "Oathbreaker", "Signature Spell"];
const SIDEBOARD_CATEGORIES: [&str; 3] = ["Sideboard", "Maybeboard", "Considering"];

pub fn is_archidekt_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

pub fn extract_deck_id(url: &str) -> Option<&str> {
    URL_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Sort Archidekt's flat card list into zones by category label.
///
/// A commander category wins over a sideboard one; uncategorized cards are
/// mainboard. Each zone is sorted by name.
pub fn normalize_deck(raw: &ArchidektDeck, url: &str) -> DeckData {
    let mut deck = DeckData::new(raw.name.clone(), DeckSource::Archidekt, url);

    for entry in &raw.cards {
        let card = DeckCard::new(entry.card.oracle_card.name.clone(), entry.quantity);
        let in_any = |labels: &[&str]| entry.categories.iter().any(|c| labels.contains(&c.as_str()));

        if in_any(&COMMANDER_CATEGORIES) {
            deck.commanders.push(card);
        } else if in_any(&SIDEBOARD_CATEGORIES) {
            deck.sideboard.push(card);
        } else {
            deck.mainboard.push(card);
        }
    }

    sort_by_name(&mut deck.commanders);
    sort_by_name(&mut deck.mainboard);
    sort_by_name(&mut deck.sideboard);
    deck
}
