//! FontAwesome icon constants.
//!
//! Code points follow the FontAwesome 5 free set
//! (<https://fontawesome.com/icons?d=gallery&m=free>), as tabulated in
//! IconFontCppHeaders' `IconsFontAwesome5.h`. New icons are added by hand:
//! a text constant, a char constant, and an [`IconName`] variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::range::FA_GLYPH_RANGE;

/// First code point of the icon font's allocation.
pub const ICON_FA_MIN: char = '\u{e005}';
/// Last code point of the icon font's allocation.
pub const ICON_FA_MAX: char = '\u{f8ff}';

/// Minus glyph as text.
pub const ICON_FA_MINUS: &str = "\u{f068}";
/// Plus glyph as text.
pub const ICON_FA_PLUS: &str = "\u{f067}";
/// Eye-dropper glyph as text.
pub const ICON_FA_EYE_DROPPER: &str = "\u{f1fb}";

/// Minus glyph code point.
pub const ICON_FA_MINUS_CHAR: char = '\u{f068}';
/// Plus glyph code point.
pub const ICON_FA_PLUS_CHAR: char = '\u{f067}';
/// Eye-dropper glyph code point.
pub const ICON_FA_EYE_DROPPER_CHAR: char = '\u{f1fb}';

/// Every icon in the table, keyed by name.
///
/// Two variants may share a code point; lookups by code point then resolve
/// to whichever comes first in [`IconName::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconName {
    /// Horizontal bar, used for "remove" and "zoom out".
    Minus,
    /// Cross, used for "add" and "zoom in".
    Plus,
    /// Color picker.
    EyeDropper,
}

const _: () = {
    assert!(ICON_FA_MIN as u32 <= ICON_FA_MAX as u32);
    let mut i = 0;
    while i < IconName::ALL.len() {
        let code_point = IconName::ALL[i].as_char() as u32;
        assert!(code_point >= ICON_FA_MIN as u32 && code_point <= ICON_FA_MAX as u32);
        i += 1;
    }
};

impl IconName {
    /// All icons in declaration order.
    pub const ALL: [IconName; 3] = [Self::Minus, Self::Plus, Self::EyeDropper];

    /// Stable lookup key, also used for serialization.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Minus => "minus",
            Self::Plus => "plus",
            Self::EyeDropper => "eye_dropper",
        }
    }

    /// Get the glyph's code point as a `char`.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Minus => ICON_FA_MINUS_CHAR,
            Self::Plus => ICON_FA_PLUS_CHAR,
            Self::EyeDropper => ICON_FA_EYE_DROPPER_CHAR,
        }
    }

    /// Get the glyph as text, ready to be placed in a label or button.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minus => ICON_FA_MINUS,
            Self::Plus => ICON_FA_PLUS,
            Self::EyeDropper => ICON_FA_EYE_DROPPER,
        }
    }

    /// Get the glyph's code point as a number.
    pub const fn code_point(&self) -> u32 {
        self.as_char() as u32
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = IconError;

    /// Parse a name such as `"eye_dropper"`. Case and `-`/`_` are not significant.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|icon| icon.name() == key).ok_or_else(|| {
            tracing::debug!(name = s, "Unknown icon name");
            IconError::unknown_name(s)
        })
    }
}

impl TryFrom<char> for IconName {
    type Error = IconError;

    fn try_from(c: char) -> Result<Self> {
        let code_point = c as u32;
        if !FA_GLYPH_RANGE.contains(c) {
            tracing::debug!(code_point, "Outside icon range");
            return Err(IconError::out_of_range(code_point));
        }
        first_with_char(&Self::ALL, c, Self::as_char).ok_or_else(|| {
            tracing::debug!(code_point, "Unassigned icon");
            IconError::unassigned(code_point)
        })
    }
}

impl TryFrom<u32> for IconName {
    type Error = IconError;

    fn try_from(value: u32) -> Result<Self> {
        let c = char::from_u32(value).ok_or_else(|| {
            tracing::debug!(value, "Not a Unicode scalar value");
            IconError::invalid_code_point(value)
        })?;
        Self::try_from(c)
    }
}

/// First entry, in table order, whose glyph is `c`.
fn first_with_char<T: Copy>(entries: &[T], c: char, glyph: impl Fn(&T) -> char) -> Option<T> {
    entries.iter().copied().find(|entry| glyph(entry) == c)
}
