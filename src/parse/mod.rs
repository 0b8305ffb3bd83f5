//! Text parsers for mana costs, oracle text, type lines and pasted decklists.
//!
//! Every parser here is total: malformed input yields an empty or partial
//! result, never an error.

pub mod decklist;
pub mod mana;
pub mod oracle;
pub mod type_line;

pub use decklist::parse_decklist;
pub use mana::parse_mana_pips;
pub use oracle::{parse_oracle_text, OracleToken, OracleTokens};
pub use type_line::{front_face, parse_type_line, TypeLine};

use regex::Regex;
use std::sync::LazyLock;

/// A brace-delimited symbol such as `{T}`, `{2}` or `{W/U}`; group 1 is the interior.
pub(crate) static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("Invalid regex"));
