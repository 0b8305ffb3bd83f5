//! Oracle text tokenizer.
//!
//! Splits rules text into literal runs and brace symbols so callers can render
//! mana symbols inline or match against them.

use regex::CaptureMatches;
use serde::Serialize;
use std::fmt;

use super::SYMBOL_RE;

/// One piece of oracle text. Symbol values have their braces stripped (`"T"`, `"W/U"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum OracleToken<'a> {
    Text(&'a str),
    Symbol(&'a str),
}

impl<'a> OracleToken<'a> {
    pub fn value(&self) -> &'a str {
        match self {
            OracleToken::Text(v) | OracleToken::Symbol(v) => v,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, OracleToken::Symbol(_))
    }
}

/// Writes the token back in source form, so concatenating a token stream
/// reproduces the input text.
impl fmt::Display for OracleToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleToken::Text(v) => f.write_str(v),
            OracleToken::Symbol(v) => write!(f, "{{{}}}", v),
        }
    }
}

/// Iterator over the tokens of one oracle text. Created by [`parse_oracle_text`].
pub struct OracleTokens<'a> {
    text: &'a str,
    matches: CaptureMatches<'static, 'a>,
    last: usize,
    pending: Option<&'a str>,
}

impl<'a> Iterator for OracleTokens<'a> {
    type Item = OracleToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(symbol) = self.pending.take() {
            return Some(OracleToken::Symbol(symbol));
        }

        match self.matches.next() {
            Some(caps) => {
                let whole = caps.get(0)?;
                let inner = caps.get(1)?.as_str();
                let before = &self.text[self.last..whole.start()];
                self.last = whole.end();
                if before.is_empty() {
                    Some(OracleToken::Symbol(inner))
                } else {
                    self.pending = Some(inner);
                    Some(OracleToken::Text(before))
                }
            }
            None if self.last < self.text.len() => {
                let rest = &self.text[self.last..];
                self.last = self.text.len();
                Some(OracleToken::Text(rest))
            }
            None => None,
        }
    }
}

/// Tokenize oracle text into literal runs and `{...}` symbols.
///
/// Empty input yields no tokens. Adjacent symbols produce adjacent symbol
/// tokens with no empty text token between them.
pub fn parse_oracle_text(text: &str) -> OracleTokens<'_> {
    OracleTokens {
        text,
        matches: SYMBOL_RE.captures_iter(text),
        last: 0,
        pending: None,
    }
}
