//! Mapping from raw card-database records to [`EnrichedCard`].

use crate::models::{EnrichedCard, ScryfallCard};
use crate::parse::{parse_mana_pips, parse_type_line};

/// Build the enriched snapshot of one raw card record.
///
/// Mana cost, oracle text and images fall back to the first face when the
/// top-level field is absent, which is where double-faced and split cards
/// keep them. Supertypes and subtypes come from the front face of the
/// top-level type line. Missing list fields become empty lists.
pub fn normalize_card(card: &ScryfallCard) -> EnrichedCard {
    let front = card.front_face();

    let mana_cost = card
        .mana_cost
        .clone()
        .or_else(|| front.and_then(|f| f.mana_cost.clone()))
        .unwrap_or_default();
    let oracle_text = card
        .oracle_text
        .clone()
        .or_else(|| front.and_then(|f| f.oracle_text.clone()))
        .unwrap_or_default();
    let image_uris = card
        .image_uris
        .clone()
        .or_else(|| front.and_then(|f| f.image_uris.clone()));

    let type_line = parse_type_line(&card.type_line);
    let mana_pips = parse_mana_pips(&mana_cost);

    EnrichedCard {
        name: card.name.clone(),
        mana_cost,
        cmc: card.cmc,
        color_identity: card.color_identity.clone(),
        colors: card.colors.clone().unwrap_or_default(),
        type_line: card.type_line.clone(),
        supertypes: type_line.supertypes,
        subtypes: type_line.subtypes,
        oracle_text,
        keywords: card.keywords.clone(),
        power: card.power.clone(),
        toughness: card.toughness.clone(),
        loyalty: card.loyalty.clone(),
        rarity: card.rarity.clone(),
        image_uris,
        mana_pips,
        produced_mana: card.produced_mana.clone().unwrap_or_default(),
        flavor_name: card.flavor_name.clone(),
    }
}

impl From<&ScryfallCard> for EnrichedCard {
    fn from(card: &ScryfallCard) -> Self {
        normalize_card(card)
    }
}
