//! Box-drawing character sets.

/// Border glyph family for panels and line-styled tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

const SINGLE: BorderChars = BorderChars {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
};

const DOUBLE: BorderChars = BorderChars {
    horizontal: '═',
    vertical: '║',
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
};

impl BorderStyle {
    pub(crate) fn chars(self) -> BorderChars {
        match self {
            BorderStyle::Single => SINGLE,
            BorderStyle::Double => DOUBLE,
        }
    }
}
