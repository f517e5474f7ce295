//! Error types for icon lookups.
//!
//! The constants themselves cannot fail. Only the runtime lookups from a name
//! or a raw code point back to an [`IconName`](crate::IconName) return these.

use thiserror::Error;

/// Result alias for icon lookups.
pub type Result<T> = std::result::Result<T, IconError>;

/// Error returned when a name or code point does not resolve to an icon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    /// No icon is registered under this name.
    #[error("Unknown icon name: {name:?}")]
    UnknownName {
        /// The name as it was given.
        name: String,
    },

    /// Code point lies outside the font's glyph range.
    #[error("Code point U+{code_point:04X} is outside the icon font range")]
    OutOfRange {
        /// The rejected code point.
        code_point: u32,
    },

    /// Code point lies inside the glyph range but no icon is assigned to it.
    #[error("No icon assigned to code point U+{code_point:04X}")]
    Unassigned {
        /// The rejected code point.
        code_point: u32,
    },

    /// Value is not a Unicode scalar value (a surrogate or above U+10FFFF).
    #[error("{value:#x} is not a valid Unicode scalar value")]
    InvalidCodePoint {
        /// The rejected value.
        value: u32,
    },
}

impl IconError {
    // ========== Constructors ==========

    /// Create an unknown name error.
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(code_point: u32) -> Self {
        Self::OutOfRange { code_point }
    }

    /// Create an unassigned code point error.
    pub fn unassigned(code_point: u32) -> Self {
        Self::Unassigned { code_point }
    }

    /// Create an invalid code point error.
    pub fn invalid_code_point(value: u32) -> Self {
        Self::InvalidCodePoint { value }
    }

    // ========== Methods ==========

    /// Check if the lookup was by code point rather than by name.
    pub fn is_code_point_error(&self) -> bool {
        !matches!(self, Self::UnknownName { .. })
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownName { .. } => "Name",
            Self::OutOfRange { .. } | Self::Unassigned { .. } => "Range",
            Self::InvalidCodePoint { .. } => "Unicode",
        }
    }

    /// Get actionable hint for the caller.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownName { .. } => Some("Use one of the names listed by IconName::ALL"),
            Self::OutOfRange { .. } => Some("Icon code points lie within FA_GLYPH_RANGE"),
            Self::Unassigned { .. } => {
                Some("Add a constant for this glyph before referencing it")
            }
            Self::InvalidCodePoint { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(IconError::unknown_name("trash").to_string(), "Unknown icon name: \"trash\"");
        assert_eq!(
            IconError::out_of_range(0x41).to_string(),
            "Code point U+0041 is outside the icon font range"
        );
        assert_eq!(
            IconError::unassigned(0xf000).to_string(),
            "No icon assigned to code point U+F000"
        );
        assert_eq!(
            IconError::invalid_code_point(0xd800).to_string(),
            "0xd800 is not a valid Unicode scalar value"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(IconError::unknown_name("x").category(), "Name");
        assert_eq!(IconError::out_of_range(0).category(), "Range");
        assert_eq!(IconError::unassigned(0xf000).category(), "Range");
        assert_eq!(IconError::invalid_code_point(0xd800).category(), "Unicode");
    }

    #[test]
    fn test_error_hints() {
        assert!(IconError::unknown_name("x").hint().is_some());
        assert!(IconError::out_of_range(0).hint().unwrap().contains("FA_GLYPH_RANGE"));
        assert!(!IconError::out_of_range(0).hint().unwrap().contains("U+"));
        assert!(IconError::invalid_code_point(0x110000).hint().is_none());
    }

    #[test]
    fn test_is_code_point_error() {
        assert!(!IconError::unknown_name("x").is_code_point_error());
        assert!(IconError::out_of_range(0).is_code_point_error());
        assert!(IconError::unassigned(0xf000).is_code_point_error());
    }
}
