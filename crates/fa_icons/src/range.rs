//! Glyph range of the icon font.
//!
//! Font loaders rasterize only the code points they are asked for. The icon
//! font lives entirely in the private-use area, so a single inclusive range
//! covers every glyph.

use std::fmt;

use crate::icons::{IconName, ICON_FA_MAX, ICON_FA_MIN};

const SURROGATE_START: u32 = 0xd800;
const SURROGATE_END: u32 = 0xdfff;

/// Inclusive range of code points to embed from the icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphRange {
    start: char,
    end: char,
}

/// The whole FontAwesome allocation, `U+E005..=U+F8FF`.
pub const FA_GLYPH_RANGE: GlyphRange = GlyphRange { start: ICON_FA_MIN, end: ICON_FA_MAX };

impl GlyphRange {
    /// Create a range. Returns `None` if `start` comes after `end`.
    pub const fn new(start: char, end: char) -> Option<Self> {
        if start as u32 > end as u32 {
            return None;
        }
        Some(Self { start, end })
    }

    /// First code point of the range.
    pub const fn start(&self) -> char {
        self.start
    }

    /// Last code point of the range.
    pub const fn end(&self) -> char {
        self.end
    }

    /// Check whether a code point falls inside the range.
    pub const fn contains(&self, c: char) -> bool {
        let c = c as u32;
        self.start as u32 <= c && c <= self.end as u32
    }

    /// Check whether an icon's glyph falls inside the range.
    pub fn contains_icon(&self, icon: IconName) -> bool {
        self.contains(icon.as_char())
    }

    /// Number of `char`s covered, both ends included. Surrogates are not counted.
    pub const fn len(&self) -> usize {
        let (start, end) = (self.start as u32, self.end as u32);
        let span = end - start + 1;
        let surrogate_start = if start > SURROGATE_START { start } else { SURROGATE_START };
        let surrogate_end = if end < SURROGATE_END { end } else { SURROGATE_END };
        let surrogates =
            if surrogate_start <= surrogate_end { surrogate_end - surrogate_start + 1 } else { 0 };
        (span - surrogates) as usize
    }

    /// Always false: a range holds at least its start.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over every `char` in the range, skipping surrogates.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.start..=self.end
    }

    /// Zero-terminated `[start, end, 0]` list, as font atlas builders take it.
    pub fn as_atlas_ranges(&self) -> [u32; 3] {
        tracing::trace!(range = %self, "Building atlas glyph ranges");
        [self.start as u32, self.end as u32, 0]
    }
}

impl fmt::Display for GlyphRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}..=U+{:04X}", self.start as u32, self.end as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fa_range_bounds() {
        assert_eq!(FA_GLYPH_RANGE.start(), ICON_FA_MIN);
        assert_eq!(FA_GLYPH_RANGE.end(), ICON_FA_MAX);
        assert_eq!(FA_GLYPH_RANGE.len(), 0xf8ff - 0xe005 + 1);
        assert!(!FA_GLYPH_RANGE.is_empty());
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        assert_eq!(GlyphRange::new(ICON_FA_MIN, ICON_FA_MAX), Some(FA_GLYPH_RANGE));
        assert!(GlyphRange::new(ICON_FA_MAX, ICON_FA_MIN).is_none());

        let single = GlyphRange::new('\u{f068}', '\u{f068}').unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.chars().collect::<Vec<_>>(), vec!['\u{f068}']);
    }

    #[test]
    fn test_contains() {
        assert!(FA_GLYPH_RANGE.contains('\u{e005}'));
        assert!(FA_GLYPH_RANGE.contains('\u{f8ff}'));
        assert!(!FA_GLYPH_RANGE.contains('\u{e004}'));
        assert!(!FA_GLYPH_RANGE.contains('\u{f900}'));
        assert!(!FA_GLYPH_RANGE.contains('a'));
    }

    #[test]
    fn test_contains_every_icon() {
        for icon in IconName::ALL {
            assert!(FA_GLYPH_RANGE.contains_icon(icon), "{} missing from range", icon.name());
        }
    }

    #[test]
    fn test_chars_cover_range() {
        let mut chars = FA_GLYPH_RANGE.chars();
        assert_eq!(chars.next(), Some(ICON_FA_MIN));
        assert_eq!(chars.last(), Some(ICON_FA_MAX));
        assert_eq!(FA_GLYPH_RANGE.chars().count(), FA_GLYPH_RANGE.len());
    }

    #[test]
    fn test_len_skips_surrogates() {
        let across = GlyphRange::new('\u{d000}', '\u{e000}').unwrap();
        assert_eq!(across.len(), 0x1001 - 0x800);
        assert_eq!(across.len(), across.chars().count());

        let edges = GlyphRange::new('\u{d7ff}', '\u{e000}').unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges.chars().collect::<Vec<_>>(), vec!['\u{d7ff}', '\u{e000}']);

        let below = GlyphRange::new('a', 'z').unwrap();
        assert_eq!(below.len(), 26);
        assert_eq!(below.len(), below.chars().count());
    }

    #[test]
    fn test_atlas_ranges() {
        assert_eq!(FA_GLYPH_RANGE.as_atlas_ranges(), [0xe005, 0xf8ff, 0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(FA_GLYPH_RANGE.to_string(), "U+E005..=U+F8FF");
    }
}
