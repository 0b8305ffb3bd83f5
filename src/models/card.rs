use serde::{Deserialize, Serialize};

use super::mana::ManaPips;

// ---------------------------------------------------------------------------
// ImageUris: card image links at three sizes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: String,
    pub normal: String,
    pub large: String,
}

// ---------------------------------------------------------------------------
// ScryfallCard: raw card record as returned by the card database
// ---------------------------------------------------------------------------

/// One face of a multi-faced card (transform, modal DFC, split, adventure).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScryfallCardFace {
    #[serde(default)]
    pub name: String,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub image_uris: Option<ImageUris>,
    pub flavor_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScryfallCard {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    #[serde(default)]
    pub rarity: String,
    pub image_uris: Option<ImageUris>,
    pub produced_mana: Option<Vec<String>>,
    pub flavor_name: Option<String>,
    pub card_faces: Option<Vec<ScryfallCardFace>>,
}

impl ScryfallCard {
    /// The first entry of `card_faces`, if the record has any.
    pub fn front_face(&self) -> Option<&ScryfallCardFace> {
        self.card_faces.as_deref().and_then(|faces| faces.first())
    }
}

// ---------------------------------------------------------------------------
// EnrichedCard: gameplay-relevant snapshot of one card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCard {
    pub name: String,
    pub mana_cost: String,
    pub cmc: f64,
    pub color_identity: Vec<String>,
    pub colors: Vec<String>,
    pub type_line: String,
    pub supertypes: Vec<String>,
    pub subtypes: Vec<String>,
    pub oracle_text: String,
    pub keywords: Vec<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub rarity: String,
    pub image_uris: Option<ImageUris>,
    pub mana_pips: ManaPips,
    pub produced_mana: Vec<String>,
    pub flavor_name: Option<String>,
}
