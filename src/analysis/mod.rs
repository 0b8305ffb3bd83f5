//! Deck analytics computed from a [`DeckData`](crate::models::DeckData) and a
//! [`CardMap`] of enriched cards.
//!
//! All functions are pure. Cards missing from the map are skipped, so a
//! partially enriched deck can be analysed at any time.

pub mod card_type;
pub mod colors;
pub mod curve;
pub mod tags;

pub use card_type::{extract_card_type, is_non_permanent, CardType};
pub use colors::{
    compute_color_distribution, compute_mana_base_metrics, resolve_commander_identity,
    ColorDistribution, ManaBaseMetrics,
};
pub use curve::{compute_mana_curve, ManaCurveBucket, BUCKET_LABELS};
pub use tags::{generate_tags, tag_counts, CardTag, TagCount};

use std::collections::HashMap;

use crate::models::EnrichedCard;

/// Enriched cards keyed by the name the deck asked for.
pub type CardMap = HashMap<String, EnrichedCard>;
