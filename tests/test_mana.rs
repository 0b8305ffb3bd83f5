//! Mana cost and type line parser tests.

use deck_evaluator::models::ManaPips;
use deck_evaluator::parse::{front_face, parse_mana_pips, parse_type_line};

fn pips(w: u32, u: u32, b: u32, r: u32, g: u32, c: u32) -> ManaPips {
    ManaPips { w, u, b, r, g, c }
}

// ---------------------------------------------------------------------------
// parse_mana_pips
// ---------------------------------------------------------------------------

#[test]
fn single_colored_pips() {
    assert_eq!(parse_mana_pips("{W}"), pips(1, 0, 0, 0, 0, 0));
    assert_eq!(parse_mana_pips("{U}"), pips(0, 1, 0, 0, 0, 0));
    assert_eq!(parse_mana_pips("{B}"), pips(0, 0, 1, 0, 0, 0));
    assert_eq!(parse_mana_pips("{R}"), pips(0, 0, 0, 1, 0, 0));
    assert_eq!(parse_mana_pips("{G}"), pips(0, 0, 0, 0, 1, 0));
    assert_eq!(parse_mana_pips("{C}"), pips(0, 0, 0, 0, 0, 1));
}

#[test]
fn generic_and_x_costs_are_ignored() {
    assert_eq!(parse_mana_pips("{2}{B}{B}"), pips(0, 0, 2, 0, 0, 0));
    assert_eq!(parse_mana_pips("{X}{R}{G}"), pips(0, 0, 0, 1, 1, 0));
    assert_eq!(parse_mana_pips("{0}"), ManaPips::default());
    assert_eq!(parse_mana_pips("{1}"), ManaPips::default());
}

#[test]
fn hybrid_counts_toward_both_colors() {
    assert_eq!(parse_mana_pips("{W/U}"), pips(1, 1, 0, 0, 0, 0));
    assert_eq!(parse_mana_pips("{2}{W/U}{W/U}"), pips(2, 2, 0, 0, 0, 0));
}

#[test]
fn phyrexian_counts_toward_its_color() {
    assert_eq!(parse_mana_pips("{B/P}"), pips(0, 0, 1, 0, 0, 0));
    assert_eq!(parse_mana_pips("{2}{W/U}{B/P}"), pips(1, 1, 1, 0, 0, 0));
}

#[test]
fn four_color_cost() {
    let p = parse_mana_pips("{G}{W}{U}{B}");
    assert_eq!(p, pips(1, 1, 1, 0, 1, 0));
    assert_eq!(p.colored_total(), 4);
}

#[test]
fn empty_and_malformed_input_yield_zero() {
    assert_eq!(parse_mana_pips(""), ManaPips::default());
    assert_eq!(parse_mana_pips("{"), ManaPips::default());
    assert_eq!(parse_mana_pips("{}{Q}{W"), ManaPips::default());
    assert_eq!(parse_mana_pips("{2/W}{C/U}"), ManaPips::default());
}

// ---------------------------------------------------------------------------
// parse_type_line
// ---------------------------------------------------------------------------

#[test]
fn legendary_creature_with_subtypes() {
    let t = parse_type_line("Legendary Creature \u{2014} Human Wizard");
    assert_eq!(t.supertypes, vec!["Legendary"]);
    assert_eq!(t.card_type, "Creature");
    assert_eq!(t.subtypes, vec!["Human", "Wizard"]);
}

#[test]
fn artifact_without_subtypes() {
    let t = parse_type_line("Artifact");
    assert!(t.supertypes.is_empty());
    assert_eq!(t.card_type, "Artifact");
    assert!(t.subtypes.is_empty());
}

#[test]
fn basic_land_supertype() {
    let t = parse_type_line("Basic Land \u{2014} Island");
    assert_eq!(t.supertypes, vec!["Basic"]);
    assert_eq!(t.card_type, "Land");
    assert_eq!(t.subtypes, vec!["Island"]);
}

#[test]
fn compound_card_types_are_joined() {
    let t = parse_type_line("Legendary Artifact Creature \u{2014} Phyrexian Angel Horror");
    assert_eq!(t.supertypes, vec!["Legendary"]);
    assert_eq!(t.card_type, "Artifact Creature");
    assert_eq!(t.subtypes, vec!["Phyrexian", "Angel", "Horror"]);

    let t = parse_type_line("Kindred Instant \u{2014} Elf");
    assert_eq!(t.card_type, "Kindred Instant");
}

#[test]
fn multiple_supertypes() {
    let t = parse_type_line("Legendary Snow Land");
    assert_eq!(t.supertypes, vec!["Legendary", "Snow"]);
    assert_eq!(t.card_type, "Land");
}

#[test]
fn only_front_face_is_parsed() {
    let t = parse_type_line(
        "Legendary Creature \u{2014} God // Legendary Artifact \u{2014} Equipment",
    );
    assert_eq!(t.supertypes, vec!["Legendary"]);
    assert_eq!(t.card_type, "Creature");
    assert_eq!(t.subtypes, vec!["God"]);
}

#[test]
fn front_face_helper() {
    assert_eq!(front_face("Fire // Ice"), "Fire");
    assert_eq!(front_face("Who // What // When // Where // Why"), "Who");
    assert_eq!(front_face("Fire//Ice"), "Fire//Ice");
    assert_eq!(front_face("Instant"), "Instant");
    assert_eq!(front_face(""), "");
}
