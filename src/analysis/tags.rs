//! Functional gameplay tags derived from oracle text and keywords.
//!
//! Each tag is decided by its own predicate over a [`TagInput`]. The rules are
//! heuristics: they are deliberately non-exhaustive, and a few carry
//! exclusions to keep common false positives out (basic lands are not Ramp,
//! land searches are not Tutors, "withdraw" is not Card Draw).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

use super::CardMap;
use crate::models::{DeckData, EnrichedCard};

// ---------------------------------------------------------------------------
// CardTag
// ---------------------------------------------------------------------------

/// Declared in alphabetical order of the display names, so sorted sets of
/// tags come out alphabetized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardTag {
    #[serde(rename = "Board Wipe")]
    BoardWipe,
    #[serde(rename = "Card Draw")]
    CardDraw,
    Counterspell,
    Protection,
    Ramp,
    Recursion,
    Removal,
    Tutor,
}

impl CardTag {
    pub const ALL: [CardTag; 8] = [
        CardTag::BoardWipe,
        CardTag::CardDraw,
        CardTag::Counterspell,
        CardTag::Protection,
        CardTag::Ramp,
        CardTag::Recursion,
        CardTag::Removal,
        CardTag::Tutor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CardTag::BoardWipe => "Board Wipe",
            CardTag::CardDraw => "Card Draw",
            CardTag::Counterspell => "Counterspell",
            CardTag::Protection => "Protection",
            CardTag::Ramp => "Ramp",
            CardTag::Recursion => "Recursion",
            CardTag::Removal => "Removal",
            CardTag::Tutor => "Tutor",
        }
    }
}

impl fmt::Display for CardTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

struct TagPatterns {
    ramp_tap_add: Regex,
    ramp_multi_mana: Regex,
    ramp_land_search: Regex,
    card_draw: Regex,
    removal_target: Regex,
    removal_bounce: Regex,
    removal_damage: Regex,
    board_wipe: Regex,
    board_wipe_minus: Regex,
    counter: Regex,
    tutor: Regex,
    tutor_land_exclusion: Regex,
    protection_oracle: Regex,
    recursion: Regex,
}

// Mana-symbol patterns are case-sensitive; prose patterns are not.
static PATTERNS: LazyLock<TagPatterns> = LazyLock::new(|| TagPatterns {
    ramp_tap_add: Regex::new(r"\{T\}.*?[Aa]dd\s+\{[WUBRGC]\}").expect("Invalid regex"),
    ramp_multi_mana: Regex::new(r"[Aa]dd\s+\{[WUBRGC]\}.*?\{[WUBRGC]\}").expect("Invalid regex"),
    ramp_land_search: Regex::new(r"[Ss]earch your library for.+(?:basic )?land")
        .expect("Invalid regex"),
    card_draw: Regex::new(r"(?i)\bdraw\b.+?\bcards?\b|\bdraw a card\b").expect("Invalid regex"),
    removal_target: Regex::new(r"(?i)\b(?:destroy|exile)\s+target\b").expect("Invalid regex"),
    removal_bounce: Regex::new(r"(?i)\breturn target.+?to its owner's hand\b")
        .expect("Invalid regex"),
    removal_damage: Regex::new(r"(?i)\bdeals?\s+\d+\s+damage to\b.+?\btarget\b")
        .expect("Invalid regex"),
    board_wipe: Regex::new(r"(?i)\b(?:destroy|exile)\s+all\b").expect("Invalid regex"),
    board_wipe_minus: Regex::new(r"(?i)\ball creatures get -\d+/-\d+").expect("Invalid regex"),
    counter: Regex::new(r"(?i)\bcounter target\b.+?\bspell\b").expect("Invalid regex"),
    tutor: Regex::new(r"(?i)\bsearch your library\b").expect("Invalid regex"),
    tutor_land_exclusion: Regex::new(r"(?i)search your library for.+?land\b")
        .expect("Invalid regex"),
    protection_oracle: Regex::new(
        r"(?i)\bgains?\b.+?\b(?:hexproof|indestructible|protection|shroud)\b",
    )
    .expect("Invalid regex"),
    recursion: Regex::new(r"(?i)\breturn\b.+?\bfrom\b.+?\bgraveyard\b").expect("Invalid regex"),
});

const BASIC_LAND: &str = "Basic Land";
const PROTECTION_KEYWORDS: [&str; 4] = ["Hexproof", "Indestructible", "Shroud", "Ward"];

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// The card fields the tag rules look at.
#[derive(Debug, Clone, Copy)]
pub struct TagInput<'a> {
    pub oracle_text: &'a str,
    pub keywords: &'a [String],
    pub type_line: &'a str,
}

impl<'a> From<&'a EnrichedCard> for TagInput<'a> {
    fn from(card: &'a EnrichedCard) -> Self {
        Self {
            oracle_text: &card.oracle_text,
            keywords: &card.keywords,
            type_line: &card.type_line,
        }
    }
}

fn is_basic_land(type_line: &str) -> bool {
    type_line
        .get(..BASIC_LAND.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BASIC_LAND))
}

/// Basic lands are never Ramp, even though their reminder text taps for mana.
pub fn is_ramp(card: &TagInput<'_>) -> bool {
    if is_basic_land(card.type_line) {
        return false;
    }
    let p = &*PATTERNS;
    p.ramp_tap_add.is_match(card.oracle_text)
        || p.ramp_multi_mana.is_match(card.oracle_text)
        || p.ramp_land_search.is_match(card.oracle_text)
}

pub fn is_card_draw(card: &TagInput<'_>) -> bool {
    PATTERNS.card_draw.is_match(card.oracle_text)
}

pub fn is_board_wipe(card: &TagInput<'_>) -> bool {
    PATTERNS.board_wipe.is_match(card.oracle_text)
        || PATTERNS.board_wipe_minus.is_match(card.oracle_text)
}

/// Targeted removal only; board wipes add Removal through their own rule.
pub fn is_removal(card: &TagInput<'_>) -> bool {
    let p = &*PATTERNS;
    p.removal_target.is_match(card.oracle_text)
        || p.removal_bounce.is_match(card.oracle_text)
        || p.removal_damage.is_match(card.oracle_text)
}

pub fn is_counterspell(card: &TagInput<'_>) -> bool {
    PATTERNS.counter.is_match(card.oracle_text)
}

/// A library search that is not for lands.
pub fn is_tutor(card: &TagInput<'_>) -> bool {
    PATTERNS.tutor.is_match(card.oracle_text)
        && !PATTERNS.tutor_land_exclusion.is_match(card.oracle_text)
}

pub fn is_protection(card: &TagInput<'_>) -> bool {
    card.keywords
        .iter()
        .any(|kw| PROTECTION_KEYWORDS.contains(&kw.as_str()))
        || PATTERNS.protection_oracle.is_match(card.oracle_text)
}

pub fn is_recursion(card: &TagInput<'_>) -> bool {
    PATTERNS.recursion.is_match(card.oracle_text)
}

struct TagRule {
    tags: &'static [CardTag],
    test: fn(&TagInput<'_>) -> bool,
}

/// Evaluated in full for every card. A match adds every tag in `tags`.
const RULES: [TagRule; 8] = [
    TagRule { tags: &[CardTag::Ramp], test: is_ramp },
    TagRule { tags: &[CardTag::CardDraw], test: is_card_draw },
    TagRule { tags: &[CardTag::BoardWipe, CardTag::Removal], test: is_board_wipe },
    TagRule { tags: &[CardTag::Removal], test: is_removal },
    TagRule { tags: &[CardTag::Counterspell], test: is_counterspell },
    TagRule { tags: &[CardTag::Tutor], test: is_tutor },
    TagRule { tags: &[CardTag::Protection], test: is_protection },
    TagRule { tags: &[CardTag::Recursion], test: is_recursion },
];

/// Tags for one card, deduplicated and sorted alphabetically.
pub fn generate_tags(card: &EnrichedCard) -> Vec<CardTag> {
    let input = TagInput::from(card);
    let mut tags = BTreeSet::new();
    for rule in &RULES {
        if (rule.test)(&input) {
            tags.extend(rule.tags.iter().copied());
        }
    }
    tags.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Deck summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: CardTag,
    pub count: u32,
}

/// Copies per tag across all zones, skipping cards missing from the map.
///
/// Only tags carried by at least one card appear, in alphabetical order.
pub fn tag_counts(deck: &DeckData, card_map: &CardMap) -> Vec<TagCount> {
    let mut counts: BTreeMap<CardTag, u32> = BTreeMap::new();
    for card in deck.all_cards() {
        let Some(enriched) = card_map.get(&card.name) else {
            continue;
        };
        for tag in generate_tags(enriched) {
            let count = counts.entry(tag).or_default();
            *count = count.saturating_add(card.quantity);
        }
    }
    counts
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect()
}
