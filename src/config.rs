use std::time::Duration;

pub const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";
pub const ARCHIDEKT_API_BASE: &str = "https://archidekt.com/api";
pub const MOXFIELD_API_BASE: &str = "https://api2.moxfield.com/v2";

/// Moxfield rejects requests without a browser-like agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; deck-evaluator/1.0)";

/// Upper bound on distinct names in a single enrichment request.
pub const MAX_UNIQUE_NAMES: usize = 250;
pub const MAX_NAME_LENGTH: usize = 200;

/// Identifiers accepted per `/cards/collection` call.
pub const COLLECTION_BATCH_SIZE: usize = 75;

pub const MAX_TEXT_LENGTH: usize = 50_000;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Name given to decks parsed from pasted text.
pub const TEXT_DECK_NAME: &str = "Imported Decklist";

/// Base URLs of the external services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub scryfall: String,
    pub archidekt: String,
    pub moxfield: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            scryfall: SCRYFALL_API_BASE.to_string(),
            archidekt: ARCHIDEKT_API_BASE.to_string(),
            moxfield: MOXFIELD_API_BASE.to_string(),
        }
    }
}
