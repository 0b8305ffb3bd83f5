use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parse::{front_face, parse_type_line};

/// Spell type used for curve grouping. Lands have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Creature,
    Instant,
    Sorcery,
    Artifact,
    Enchantment,
    Planeswalker,
    Battle,
}

impl CardType {
    /// Every type, in classification priority order.
    pub const ALL: [CardType; 7] = [
        CardType::Creature,
        CardType::Instant,
        CardType::Sorcery,
        CardType::Artifact,
        CardType::Enchantment,
        CardType::Planeswalker,
        CardType::Battle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Creature => "Creature",
            CardType::Instant => "Instant",
            CardType::Sorcery => "Sorcery",
            CardType::Artifact => "Artifact",
            CardType::Enchantment => "Enchantment",
            CardType::Planeswalker => "Planeswalker",
            CardType::Battle => "Battle",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a type line by its front face.
///
/// Returns `None` for anything containing "Land" and for type lines that match
/// none of the known types. Multi-type cards resolve by [`CardType::ALL`] order,
/// so an artifact creature is a `Creature`.
pub fn extract_card_type(type_line: &str) -> Option<CardType> {
    let card_type = parse_type_line(type_line).card_type;
    if card_type.contains("Land") {
        return None;
    }
    CardType::ALL
        .into_iter()
        .find(|t| card_type.contains(t.as_str()))
}

/// Instants and sorceries; everything else is a permanent.
pub fn is_non_permanent(type_line: &str) -> bool {
    let front = front_face(type_line);
    front.contains("Instant") || front.contains("Sorcery")
}
