//! Mana source supply versus pip demand, and the mana-base metrics built on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::CardMap;
use crate::models::{Color, ColorCounts, DeckData};

/// Colorless mana as it appears in `produced_mana`.
const COLORLESS: &str = "C";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDistribution {
    /// Copies that can produce each color.
    pub sources: ColorCounts,
    /// Colored pips across every mana cost in the deck.
    pub pips: ColorCounts,
    /// Copies whose only output is colorless mana.
    pub colorless_sources: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManaBaseMetrics {
    pub land_count: u32,
    pub total_cards: u32,
    pub land_percentage: f64,
    pub average_cmc: f64,
    pub colorless_sources: u32,
    /// Sources per pip. `INFINITY` for a color with sources but no demand,
    /// `0.0` for a color with neither.
    pub source_to_demand_ratio: ColorCounts<f64>,
}

/// Union of the color identities of every commander found in the map.
pub fn resolve_commander_identity(deck: &DeckData, card_map: &CardMap) -> BTreeSet<Color> {
    deck.commanders
        .iter()
        .filter_map(|cmd| card_map.get(&cmd.name))
        .flat_map(|card| card.color_identity.iter())
        .filter_map(|letter| Color::from_letter(letter))
        .collect()
}

fn produces_all_five(produced: &[String]) -> bool {
    Color::ALL
        .iter()
        .all(|c| produced.iter().any(|p| p == c.as_str()))
}

/// Per-color source counts and pip demand across all zones.
///
/// A card producing all five colors (Command Tower and friends) only counts
/// toward the commander's colors when the deck has a commander identity.
/// Producers of a fixed subset are never rescoped. Counts saturate at `u32::MAX`.
pub fn compute_color_distribution(deck: &DeckData, card_map: &CardMap) -> ColorDistribution {
    let identity = resolve_commander_identity(deck, card_map);
    let mut dist = ColorDistribution::default();

    for card in deck.all_cards() {
        let Some(enriched) = card_map.get(&card.name) else {
            continue;
        };

        if !enriched.produced_mana.is_empty() {
            let effective: Vec<Color> =
                if produces_all_five(&enriched.produced_mana) && !identity.is_empty() {
                    identity.iter().copied().collect()
                } else {
                    enriched
                        .produced_mana
                        .iter()
                        .filter_map(|p| Color::from_letter(p))
                        .collect()
                };

            for color in &effective {
                let sources = dist.sources.get_mut(*color);
                *sources = sources.saturating_add(card.quantity);
            }

            if effective.is_empty() && enriched.produced_mana.iter().any(|p| p == COLORLESS) {
                dist.colorless_sources = dist.colorless_sources.saturating_add(card.quantity);
            }
        }

        for color in Color::ALL {
            let demand = enriched.mana_pips.get(color).saturating_mul(card.quantity);
            let pips = dist.pips.get_mut(color);
            *pips = pips.saturating_add(demand);
        }
    }

    dist
}

fn ratio(sources: u32, pips: u32) -> f64 {
    match (sources, pips) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        (s, p) => f64::from(s) / f64::from(p),
    }
}

/// Land ratio, average mana value and source-to-demand ratios for a deck.
///
/// `total_cards` counts every copy in every zone, including cards missing
/// from the map; land and mana-value figures only cover mapped cards.
pub fn compute_mana_base_metrics(deck: &DeckData, card_map: &CardMap) -> ManaBaseMetrics {
    let dist = compute_color_distribution(deck, card_map);

    let mut land_count = 0u32;
    let mut total_cards = 0u32;
    let mut total_cmc = 0.0f64;
    let mut non_land_count = 0u32;

    for card in deck.all_cards() {
        total_cards = total_cards.saturating_add(card.quantity);
        let Some(enriched) = card_map.get(&card.name) else {
            continue;
        };
        if enriched.type_line.contains("Land") {
            land_count = land_count.saturating_add(card.quantity);
        } else {
            total_cmc += enriched.cmc * f64::from(card.quantity);
            non_land_count = non_land_count.saturating_add(card.quantity);
        }
    }

    let land_percentage = if total_cards > 0 {
        f64::from(land_count) / f64::from(total_cards) * 100.0
    } else {
        0.0
    };
    let average_cmc = if non_land_count > 0 {
        total_cmc / f64::from(non_land_count)
    } else {
        0.0
    };

    ManaBaseMetrics {
        land_count,
        total_cards,
        land_percentage,
        average_cmc,
        colorless_sources: dist.colorless_sources,
        source_to_demand_ratio: ColorCounts::from_fn(|c| {
            ratio(dist.sources.get(c), dist.pips.get(c))
        }),
    }
}
