use crate::models::ManaPips;

use super::SYMBOL_RE;

/// Count the colored (and colorless) pips of a mana cost such as `"{2}{W/U}{B/P}"`.
///
/// Generic costs (`{2}`, `{X}`) contribute nothing. A hybrid pip `{W/U}` counts a
/// full pip toward each of its colors, and a Phyrexian pip `{B/P}` counts toward
/// its single color. Anything unrecognized is ignored.
pub fn parse_mana_pips(mana_cost: &str) -> ManaPips {
    let mut pips = ManaPips::default();

    for caps in SYMBOL_RE.captures_iter(mana_cost) {
        let symbol = &caps[1];
        match symbol.split_once('/') {
            None => {
                pips.add(symbol);
            }
            Some((first, "P" | "H")) => {
                pips.add(first);
            }
            Some((first, second)) => {
                if is_wubrg(first) && is_wubrg(second) {
                    pips.add(first);
                    pips.add(second);
                }
            }
        }
    }

    pips
}

fn is_wubrg(letter: &str) -> bool {
    matches!(letter, "W" | "U" | "B" | "R" | "G")
}
