use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::card_type::{extract_card_type, is_non_permanent, CardType};
use super::CardMap;
use crate::models::DeckData;

pub const BUCKET_LABELS: [&str; 8] = ["0", "1", "2", "3", "4", "5", "6", "7+"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManaCurveBucket {
    pub cmc: String,
    pub permanents: u32,
    pub non_permanents: u32,
}

impl ManaCurveBucket {
    pub fn total(&self) -> u32 {
        self.permanents + self.non_permanents
    }
}

fn bucket_index(cmc: f64) -> usize {
    // `as` saturates: NaN and negatives land in bucket 0
    (cmc.floor() as usize).min(BUCKET_LABELS.len() - 1)
}

/// Bucket every classified, non-land card in the deck by mana value.
///
/// `enabled_types` restricts the curve to the given types; `None` admits all
/// of them and an empty set yields an all-zero curve. The result always has
/// one bucket per label in [`BUCKET_LABELS`]. Counts saturate at `u32::MAX`.
pub fn compute_mana_curve(
    deck: &DeckData,
    card_map: &CardMap,
    enabled_types: Option<&HashSet<CardType>>,
) -> [ManaCurveBucket; 8] {
    let mut permanents = [0u32; 8];
    let mut non_permanents = [0u32; 8];

    for card in deck.all_cards() {
        let Some(enriched) = card_map.get(&card.name) else {
            continue;
        };
        let Some(card_type) = extract_card_type(&enriched.type_line) else {
            continue;
        };
        if let Some(enabled) = enabled_types {
            if !enabled.contains(&card_type) {
                continue;
            }
        }

        let idx = bucket_index(enriched.cmc);
        let slot = if is_non_permanent(&enriched.type_line) {
            &mut non_permanents[idx]
        } else {
            &mut permanents[idx]
        };
        *slot = slot.saturating_add(card.quantity);
    }

    std::array::from_fn(|i| ManaCurveBucket {
        cmc: BUCKET_LABELS[i].to_string(),
        permanents: permanents[i],
        non_permanents: non_permanents[i],
    })
}
