//! Immutable asset tables
//!
//! Matrix images, LCD glyphs and screen text. All of it is `'static` and
//! read-only, and every table is indexed by an enum whose variant count
//! fixes the table length.

pub mod bitmaps;
pub mod glyphs;
pub mod text;

pub use bitmaps::{bitmap_for, Bitmap, IMAGES};
pub use glyphs::{glyph, Glyph, GlyphId, GLYPHS};
