use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DeckCard: one decklist entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCard {
    pub name: String,
    pub quantity: u32,
}

impl DeckCard {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

// ---------------------------------------------------------------------------
// DeckSource / Zone
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckSource {
    Moxfield,
    Archidekt,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Commanders,
    Mainboard,
    Sideboard,
}

// ---------------------------------------------------------------------------
// DeckData: a deck split into commander, main and side zones
// ---------------------------------------------------------------------------

/// A deck as imported from text or a deck-hosting service.
///
/// Zones may hold several entries with the same name; aggregations sum them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckData {
    pub name: String,
    pub source: DeckSource,
    pub url: String,
    pub commanders: Vec<DeckCard>,
    pub mainboard: Vec<DeckCard>,
    pub sideboard: Vec<DeckCard>,
}

impl DeckData {
    /// An empty deck with the given name, source and URL.
    pub fn new(name: impl Into<String>, source: DeckSource, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source,
            url: url.into(),
            commanders: Vec::new(),
            mainboard: Vec::new(),
            sideboard: Vec::new(),
        }
    }

    pub fn zone(&self, zone: Zone) -> &[DeckCard] {
        match zone {
            Zone::Commanders => &self.commanders,
            Zone::Mainboard => &self.mainboard,
            Zone::Sideboard => &self.sideboard,
        }
    }

    pub fn zone_mut(&mut self, zone: Zone) -> &mut Vec<DeckCard> {
        match zone {
            Zone::Commanders => &mut self.commanders,
            Zone::Mainboard => &mut self.mainboard,
            Zone::Sideboard => &mut self.sideboard,
        }
    }

    /// Every entry across commanders, mainboard and sideboard, in that order.
    pub fn all_cards(&self) -> impl Iterator<Item = &DeckCard> {
        self.commanders
            .iter()
            .chain(&self.mainboard)
            .chain(&self.sideboard)
    }

    /// Number of entries (not copies) across all zones.
    pub fn entry_count(&self) -> usize {
        self.commanders.len() + self.mainboard.len() + self.sideboard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Every distinct card name in the deck, first occurrence order.
    pub fn unique_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.all_cards()
            .filter(|c| seen.insert(c.name.as_str()))
            .map(|c| c.name.clone())
            .collect()
    }
}
