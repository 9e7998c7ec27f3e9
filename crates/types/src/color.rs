//! Color type used by status2d markup.
//!
//! dwm's status2d patch understands `^c#rrggbb^` (foreground) and
//! `^b#rrggbb^` (background) escapes embedded in the root window name.

use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const RED: Color = Color::new(0xff, 0x30, 0x24);
    pub const BLUE: Color = Color::new(0x46, 0xd9, 0xff);
    pub const YELLOW: Color = Color::new(0xec, 0xbe, 0x7b);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Foreground escape, e.g. `^c#ffffff^`
    pub fn fg(&self) -> String {
        format!("^c{}^", self)
    }

    /// Background escape, e.g. `^b#000000^`
    pub fn bg(&self) -> String {
        format!("^b{}^", self)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a string is not a `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a color like #rrggbb, got '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
