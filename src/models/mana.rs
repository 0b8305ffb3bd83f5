use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Color: the five colors of Magic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    W,
    U,
    B,
    R,
    G,
}

impl Color {
    /// WUBRG order.
    pub const ALL: [Color; 5] = [Color::W, Color::U, Color::B, Color::R, Color::G];

    /// Parse a single color letter (`"W"`, `"U"`, ...). Colorless `"C"` is not a color.
    pub fn from_letter(letter: &str) -> Option<Color> {
        match letter {
            "W" => Some(Color::W),
            "U" => Some(Color::U),
            "B" => Some(Color::B),
            "R" => Some(Color::R),
            "G" => Some(Color::G),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::W => "W",
            Color::U => "U",
            Color::B => "B",
            Color::R => "R",
            Color::G => "G",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ManaPips: per-color pip counts of a mana cost (colorless included)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaPips {
    #[serde(rename = "W")]
    pub w: u32,
    #[serde(rename = "U")]
    pub u: u32,
    #[serde(rename = "B")]
    pub b: u32,
    #[serde(rename = "R")]
    pub r: u32,
    #[serde(rename = "G")]
    pub g: u32,
    #[serde(rename = "C")]
    pub c: u32,
}

impl ManaPips {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::W => self.w,
            Color::U => self.u,
            Color::B => self.b,
            Color::R => self.r,
            Color::G => self.g,
        }
    }

    /// Add one pip for a mana letter (`W`, `U`, `B`, `R`, `G` or `C`).
    ///
    /// Returns `false` and leaves the counts untouched for any other letter.
    pub fn add(&mut self, letter: &str) -> bool {
        let slot = match letter {
            "W" => &mut self.w,
            "U" => &mut self.u,
            "B" => &mut self.b,
            "R" => &mut self.r,
            "G" => &mut self.g,
            "C" => &mut self.c,
            _ => return false,
        };
        *slot += 1;
        true
    }

    /// Sum of the five colored counts (colorless excluded).
    pub fn colored_total(&self) -> u32 {
        self.w + self.u + self.b + self.r + self.g
    }
}

// ---------------------------------------------------------------------------
// ColorCounts: one value per color, used for sources, demand and ratios
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorCounts<T = u32> {
    #[serde(rename = "W")]
    pub w: T,
    #[serde(rename = "U")]
    pub u: T,
    #[serde(rename = "B")]
    pub b: T,
    #[serde(rename = "R")]
    pub r: T,
    #[serde(rename = "G")]
    pub g: T,
}

impl<T: Copy> ColorCounts<T> {
    pub fn get(&self, color: Color) -> T {
        match color {
            Color::W => self.w,
            Color::U => self.u,
            Color::B => self.b,
            Color::R => self.r,
            Color::G => self.g,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::W => &mut self.w,
            Color::U => &mut self.u,
            Color::B => &mut self.b,
            Color::R => &mut self.r,
            Color::G => &mut self.g,
        }
    }

    /// Build a record by evaluating `f` for each color in WUBRG order.
    pub fn from_fn(mut f: impl FnMut(Color) -> T) -> Self {
        Self {
            w: f(Color::W),
            u: f(Color::U),
            b: f(Color::B),
            r: f(Color::R),
            g: f(Color::G),
        }
    }
}
