//! Parser for pasted decklists.
//!
//! Accepts the common export format:
//!
//! ```text
//! COMMANDER:
//! 1 Atraxa, Praetors' Voice
//!
//! MAINBOARD:
//! 1 Sol Ring
//! 4x Island
//! ```
//!
//! A zone header stays in effect until the next header; blank lines do not
//! reset it. Lines that are neither headers nor card lines are ignored.

use regex::Regex;
use std::sync::LazyLock;

use crate::config;
use crate::models::{DeckCard, DeckData, DeckSource, Zone};

static CARD_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)x?\s+(.+)$").expect("Invalid regex"));
static ZONE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(commander|sideboard|mainboard|companion):?\s*$").expect("Invalid regex")
});

fn zone_for_header(header: &str) -> Zone {
    match header.to_ascii_lowercase().as_str() {
        "commander" => Zone::Commanders,
        "sideboard" | "companion" => Zone::Sideboard,
        _ => Zone::Mainboard,
    }
}

/// Parse decklist text into a [`DeckData`] named "Imported Decklist".
///
/// Repeated names are kept as separate entries.
pub fn parse_decklist(text: &str) -> DeckData {
    let mut deck = DeckData::new(config::TEXT_DECK_NAME, DeckSource::Text, "");
    let mut zone = Zone::Mainboard;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = ZONE_LINE_RE.captures(line) {
            zone = zone_for_header(&caps[1]);
            continue;
        }

        if let Some(caps) = CARD_LINE_RE.captures(line) {
            // Overflowing or zero counts are treated like any other unparseable line
            let quantity = match caps[1].parse::<u32>() {
                Ok(q) if q > 0 => q,
                _ => continue,
            };
            deck.zone_mut(zone)
                .push(DeckCard::new(caps[2].trim(), quantity));
        }
    }

    deck
}
