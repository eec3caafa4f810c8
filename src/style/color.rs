//! The console color palette.

use std::str::FromStr;

use crate::error::Error;
use crate::text::rgb_to_ansi256;

/// A console color.
///
/// The eight named variants map onto the classic ANSI palette. [`Color::Fixed`]
/// selects an entry of the 256-color palette directly, and [`Color::Rgb`] is
/// reduced to the nearest 256-color entry at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// An entry of the 256-color palette.
    Fixed(u8),
    /// A true-color value, approximated on the 256-color palette.
    Rgb(u8, u8, u8),
}

impl Color {
    /// The named colors, in palette order.
    pub const NAMED: &'static [(&'static str, Color)] = &[
        ("BLACK", Color::Black),
        ("RED", Color::Red),
        ("GREEN", Color::Green),
        ("YELLOW", Color::Yellow),
        ("BLUE", Color::Blue),
        ("MAGENTA", Color::Magenta),
        ("CYAN", Color::Cyan),
        ("WHITE", Color::White),
    ];
}

impl From<Color> for console::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => console::Color::Black,
            Color::Red => console::Color::Red,
            Color::Green => console::Color::Green,
            Color::Yellow => console::Color::Yellow,
            Color::Blue => console::Color::Blue,
            Color::Magenta => console::Color::Magenta,
            Color::Cyan => console::Color::Cyan,
            Color::White => console::Color::White,
            Color::Fixed(n) => console::Color::Color256(n),
            Color::Rgb(r, g, b) => console::Color::Color256(rgb_to_ansi256((r, g, b))),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses a color from its name, case-insensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let upper = name.to_ascii_uppercase();
        Color::NAMED
            .iter()
            .find(|(candidate, _)| *candidate == upper)
            .map(|(_, color)| *color)
            .ok_or_else(|| Error::UnknownColor(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("Cyan".parse::<Color>().unwrap(), Color::Cyan);
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "MAUVE".parse::<Color>().unwrap_err();
        assert!(matches!(err, Error::UnknownColor(name) if name == "MAUVE"));
    }

    #[test]
    fn test_rgb_reduces_to_256_palette() {
        let resolved: console::Color = Color::Rgb(255, 0, 0).into();
        assert_eq!(resolved, console::Color::Color256(196));
    }

    #[test]
    fn test_fixed_passes_through() {
        let resolved: console::Color = Color::Fixed(42).into();
        assert_eq!(resolved, console::Color::Color256(42));
    }
}
