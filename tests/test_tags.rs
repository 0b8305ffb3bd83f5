//! Functional tag classifier tests.

mod common;

use common::{card, strings};
use deck_evaluator::analysis::tags::{is_removal, is_tutor, TagInput};
use deck_evaluator::analysis::{generate_tags, tag_counts, CardTag};
use deck_evaluator::models::EnrichedCard;

use deck_evaluator::analysis::CardTag::*;

fn with_text(text: &str) -> EnrichedCard {
    EnrichedCard {
        oracle_text: text.to_string(),
        ..card("Test Card")
    }
}

fn typed(type_line: &str, text: &str) -> EnrichedCard {
    EnrichedCard {
        type_line: type_line.to_string(),
        ..with_text(text)
    }
}

fn tags_of(text: &str) -> Vec<CardTag> {
    generate_tags(&with_text(text))
}

// ---------------------------------------------------------------------------
// Ramp
// ---------------------------------------------------------------------------

#[test]
fn mana_rock_is_only_ramp() {
    assert_eq!(generate_tags(&typed("Artifact", "{T}: Add {C}{C}.")), vec![Ramp]);
}

#[test]
fn mana_dork_is_ramp() {
    assert!(tags_of("{T}: Add {G}.").contains(&Ramp));
}

#[test]
fn land_search_is_ramp_not_tutor() {
    let tags = generate_tags(&typed(
        "Sorcery",
        "Search your library for up to two basic land cards, reveal those cards, \
         put one onto the battlefield tapped and the other into your hand, then shuffle.",
    ));
    assert!(tags.contains(&Ramp));
    assert!(!tags.contains(&Tutor));
}

#[test]
fn basic_land_reminder_text_is_not_ramp() {
    let forest = typed("Basic Land \u{2014} Forest", "({T}: Add {G}.)");
    assert!(generate_tags(&forest).is_empty());
}

#[test]
fn nonbasic_land_with_mana_ability_is_ramp() {
    let tower = typed("Land", "{T}: Add {W}.");
    assert_eq!(generate_tags(&tower), vec![Ramp]);
}

#[test]
fn vanilla_creature_has_no_tags() {
    assert!(generate_tags(&card("Grizzly Bears")).is_empty());
}

// ---------------------------------------------------------------------------
// Card Draw
// ---------------------------------------------------------------------------

#[test]
fn draw_phrases_are_card_draw() {
    assert!(tags_of("Draw three cards.").contains(&CardDraw));
    assert!(tags_of("Whenever a creature enters, draw a card.").contains(&CardDraw));
}

#[test]
fn withdraw_is_not_card_draw() {
    assert!(!tags_of("Withdraw target creature from combat. Its controller may discard cards.")
        .contains(&CardDraw));
}

// ---------------------------------------------------------------------------
// Removal and Board Wipe
// ---------------------------------------------------------------------------

#[test]
fn targeted_removal() {
    assert!(tags_of("Destroy target creature.").contains(&Removal));
    assert!(tags_of("Exile target nonland permanent.").contains(&Removal));
    assert!(tags_of("Return target creature to its owner's hand.").contains(&Removal));
    assert!(tags_of("Lightning Bolt deals 3 damage to any target.").contains(&Removal));
}

#[test]
fn board_wipe_implies_removal() {
    assert_eq!(tags_of("Destroy all creatures."), vec![BoardWipe, Removal]);
    assert_eq!(tags_of("Exile all nonland permanents."), vec![BoardWipe, Removal]);
    assert_eq!(
        tags_of("All creatures get -2/-2 until end of turn."),
        vec![BoardWipe, Removal]
    );
}

#[test]
fn board_wipe_sorcery_has_exactly_two_tags() {
    let wrath = typed("Sorcery", "Destroy all creatures. They can't be regenerated.");
    assert_eq!(generate_tags(&wrath), vec![BoardWipe, Removal]);
}

#[test]
fn single_target_removal_is_not_a_board_wipe() {
    assert!(!tags_of("Destroy target creature.").contains(&BoardWipe));
}

#[test]
fn removal_rule_alone_ignores_wipes() {
    let wipe = with_text("Destroy all creatures.");
    assert!(!is_removal(&TagInput::from(&wipe)));
}

// ---------------------------------------------------------------------------
// Counterspell, Tutor
// ---------------------------------------------------------------------------

#[test]
fn counterspell() {
    assert_eq!(tags_of("Counter target spell."), vec![Counterspell]);
    assert!(tags_of("Counter target noncreature spell unless its controller pays {3}.")
        .contains(&Counterspell));
}

#[test]
fn generic_search_is_tutor() {
    assert_eq!(
        tags_of("Search your library for a card, put that card into your hand, then shuffle."),
        vec![Tutor]
    );
}

#[test]
fn land_exclusion_suppresses_tutor() {
    let cultivate = with_text("Search your library for a basic land card, put it onto the battlefield tapped, then shuffle.");
    assert!(!is_tutor(&TagInput::from(&cultivate)));
}

// ---------------------------------------------------------------------------
// Protection, Recursion
// ---------------------------------------------------------------------------

#[test]
fn protection_keywords() {
    for kw in ["Hexproof", "Indestructible", "Shroud", "Ward"] {
        let c = EnrichedCard {
            keywords: strings(&[kw]),
            ..card("Guarded")
        };
        assert_eq!(generate_tags(&c), vec![Protection], "keyword {kw}");
    }
}

#[test]
fn protection_granting_text() {
    assert!(tags_of("Target creature you control gains indestructible until end of turn.")
        .contains(&Protection));
    assert!(tags_of("Creatures you control gain protection from the color of your choice.")
        .contains(&Protection));
}

#[test]
fn unrelated_keywords_are_not_protection() {
    let c = EnrichedCard {
        keywords: strings(&["Flying", "Lifelink"]),
        ..card("Angel")
    };
    assert!(generate_tags(&c).is_empty());
}

#[test]
fn recursion_to_battlefield_and_hand() {
    assert!(tags_of("Return target creature card from your graveyard to the battlefield.")
        .contains(&Recursion));
    assert!(tags_of("Return target creature card from your graveyard to your hand.")
        .contains(&Recursion));
}

// ---------------------------------------------------------------------------
// Output shape
// ---------------------------------------------------------------------------

#[test]
fn empty_card_has_no_tags() {
    assert!(tags_of("").is_empty());
}

#[test]
fn multiple_tags_are_sorted() {
    let tags = tags_of("Destroy target creature. Draw a card. Search your library for a card.");
    assert_eq!(tags, vec![CardDraw, Removal, Tutor]);
}

#[test]
fn tags_serialize_as_display_names() {
    let json = serde_json::to_value(tags_of("Destroy all creatures.")).unwrap();
    assert_eq!(json, serde_json::json!(["Board Wipe", "Removal"]));
    assert_eq!(CardDraw.to_string(), "Card Draw");
}

#[test]
fn deck_tag_counts_by_quantity() {
    let deck = common::deck(&[], &[("Sol Ring", 1), ("Wrath", 2), ("Missing", 5)], &[("Wrath", 1)]);
    let map = common::card_map(vec![
        common::sol_ring(),
        EnrichedCard {
            oracle_text: "Destroy all creatures.".to_string(),
            ..card("Wrath")
        },
    ]);

    let counts: Vec<(CardTag, u32)> = tag_counts(&deck, &map)
        .into_iter()
        .map(|c| (c.tag, c.count))
        .collect();
    assert_eq!(counts, vec![(BoardWipe, 3), (Ramp, 1), (Removal, 3)]);
}

#[test]
fn tag_counts_saturate() {
    let map = common::card_map(vec![with_text("Destroy target creature.")]);
    let d = common::deck(&[], &[("Test Card", 4_000_000_000), ("Test Card", 4_000_000_000)], &[]);
    let counts = tag_counts(&d, &map);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].tag, Removal);
    assert_eq!(counts[0].count, u32::MAX);
}
