use serde::{Deserialize, Serialize};

/// Supertypes recognized on a type line; every other word before the dash is part of the card type.
pub const SUPERTYPES: [&str; 6] = ["Legendary", "Basic", "Snow", "World", "Ongoing", "Host"];

const FACE_SEPARATOR: &str = " // ";
const SUBTYPE_SEPARATOR: &str = " \u{2014} ";

/// A type line broken into its three parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeLine {
    pub supertypes: Vec<String>,
    /// Space-joined card types, e.g. `"Artifact Creature"`.
    pub card_type: String,
    pub subtypes: Vec<String>,
}

/// The front-face portion of a multi-faced string (`"A // B"` gives `"A"`).
///
/// Used for type lines and card names alike; strings without a separator
/// are returned unchanged.
pub fn front_face(s: &str) -> &str {
    match s.find(FACE_SEPARATOR) {
        Some(idx) => s[..idx].trim_end(),
        None => s,
    }
}

/// Parse `"[Supertypes] <Types> [— Subtypes]"`, front face only.
pub fn parse_type_line(type_line: &str) -> TypeLine {
    let front = front_face(type_line);

    let mut parts = front.split(SUBTYPE_SEPARATOR);
    let types_part = parts.next().unwrap_or_default();
    let subtypes_part = parts.next();

    let mut supertypes = Vec::new();
    let mut card_type_words = Vec::new();
    for word in types_part.split_whitespace() {
        if SUPERTYPES.contains(&word) {
            supertypes.push(word.to_string());
        } else {
            card_type_words.push(word);
        }
    }

    let subtypes = subtypes_part
        .map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    TypeLine {
        supertypes,
        card_type: card_type_words.join(" "),
        subtypes,
    }
}
