//! Shared fixtures for the deck-evaluator integration tests.
//!
//! Provides an [`EnrichedCard`] builder with blank defaults, a few real cards,
//! and helpers for assembling decks and card maps.

#![allow(dead_code)]

use deck_evaluator::analysis::CardMap;
use deck_evaluator::models::{DeckCard, DeckData, DeckSource, EnrichedCard};
use deck_evaluator::parse::parse_mana_pips;

/// A blank creature named `name`. Override fields with struct update syntax.
pub fn card(name: &str) -> EnrichedCard {
    EnrichedCard {
        name: name.to_string(),
        mana_cost: String::new(),
        cmc: 0.0,
        color_identity: Vec::new(),
        colors: Vec::new(),
        type_line: "Creature".to_string(),
        supertypes: Vec::new(),
        subtypes: Vec::new(),
        oracle_text: String::new(),
        keywords: Vec::new(),
        power: None,
        toughness: None,
        loyalty: None,
        rarity: "common".to_string(),
        image_uris: None,
        mana_pips: Default::default(),
        produced_mana: Vec::new(),
        flavor_name: None,
    }
}

/// A card with type line, mana cost (pips derived) and mana value.
pub fn spell(name: &str, type_line: &str, mana_cost: &str, cmc: f64) -> EnrichedCard {
    EnrichedCard {
        type_line: type_line.to_string(),
        mana_cost: mana_cost.to_string(),
        mana_pips: parse_mana_pips(mana_cost),
        cmc,
        ..card(name)
    }
}

/// A land producing the given mana letters.
pub fn land(name: &str, type_line: &str, produced: &[&str]) -> EnrichedCard {
    EnrichedCard {
        type_line: type_line.to_string(),
        produced_mana: strings(produced),
        ..card(name)
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn entries(cards: &[(&str, u32)]) -> Vec<DeckCard> {
    cards.iter().map(|(n, q)| DeckCard::new(*n, *q)).collect()
}

pub fn deck(
    commanders: &[(&str, u32)],
    mainboard: &[(&str, u32)],
    sideboard: &[(&str, u32)],
) -> DeckData {
    DeckData {
        name: "Test Deck".to_string(),
        source: DeckSource::Text,
        url: String::new(),
        commanders: entries(commanders),
        mainboard: entries(mainboard),
        sideboard: entries(sideboard),
    }
}

pub fn card_map(cards: Vec<EnrichedCard>) -> CardMap {
    cards.into_iter().map(|c| (c.name.clone(), c)).collect()
}

// ---------------------------------------------------------------------------
// Real cards
// ---------------------------------------------------------------------------

pub fn sol_ring() -> EnrichedCard {
    EnrichedCard {
        oracle_text: "{T}: Add {C}{C}.".to_string(),
        produced_mana: strings(&["C"]),
        ..spell("Sol Ring", "Artifact", "{1}", 1.0)
    }
}

pub fn command_tower() -> EnrichedCard {
    EnrichedCard {
        oracle_text: "{T}: Add one mana of any color in your commander's color identity."
            .to_string(),
        ..land("Command Tower", "Land", &["W", "U", "B", "R", "G"])
    }
}

pub fn atraxa() -> EnrichedCard {
    EnrichedCard {
        color_identity: strings(&["W", "U", "B", "G"]),
        keywords: strings(&["Flying", "Vigilance", "Deathtouch", "Lifelink", "Proliferate"]),
        ..spell(
            "Atraxa, Praetors' Voice",
            "Legendary Creature \u{2014} Phyrexian Angel Horror",
            "{G}{W}{U}{B}",
            4.0,
        )
    }
}

pub fn forest() -> EnrichedCard {
    EnrichedCard {
        oracle_text: "({T}: Add {G}.)".to_string(),
        ..land("Forest", "Basic Land \u{2014} Forest", &["G"])
    }
}

pub fn island() -> EnrichedCard {
    EnrichedCard {
        oracle_text: "({T}: Add {U}.)".to_string(),
        ..land("Island", "Basic Land \u{2014} Island", &["U"])
    }
}
