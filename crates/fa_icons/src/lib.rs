//! FontAwesome icon code points for UI text.
//!
//! This crate provides:
//!
//! - **icons**: Named code point constants and the `IconName` lookup table
//! - **range**: The font's private-use glyph range for atlas building
//! - **error**: Error handling for name and code point lookups
//! - **logging**: Structured logging setup
//!
//! The bundled FontAwesome 5 font must define glyphs at exactly these code
//! points. That correspondence is maintained by whoever updates the font asset.

pub mod error;
pub mod icons;
pub mod logging;
pub mod range;

pub use error::{IconError, Result};
pub use icons::{
    IconName, ICON_FA_EYE_DROPPER, ICON_FA_EYE_DROPPER_CHAR, ICON_FA_MAX, ICON_FA_MIN,
    ICON_FA_MINUS, ICON_FA_MINUS_CHAR, ICON_FA_PLUS, ICON_FA_PLUS_CHAR,
};
pub use range::{GlyphRange, FA_GLYPH_RANGE};
