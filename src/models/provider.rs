use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Archidekt: flat card list tagged with category labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchidektDeck {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<ArchidektCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchidektCard {
    pub quantity: u32,
    pub card: ArchidektCardRef,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchidektCardRef {
    pub oracle_card: ArchidektOracleCard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchidektOracleCard {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Moxfield: named sections keyed by card name
// ---------------------------------------------------------------------------

pub type MoxfieldSection = HashMap<String, MoxfieldEntry>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoxfieldDeck {
    pub name: String,
    #[serde(default)]
    pub mainboard: MoxfieldSection,
    #[serde(default)]
    pub commanders: MoxfieldSection,
    #[serde(default)]
    pub sideboard: MoxfieldSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoxfieldEntry {
    pub quantity: Option<u32>,
    pub card: MoxfieldCardRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoxfieldCardRef {
    pub name: String,
}
