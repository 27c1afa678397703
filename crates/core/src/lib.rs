#![no_std]

//! `styled-text-core` provides core primitives for the `styled-text` crate.

/// A single glyph (character) contained within a glyph set.
#[derive(Debug, Copy, Clone)]
pub struct Glyph {
    /// Identifier of this glyph, used as the `id` of its reusable outline.
    pub name: &'static str,
    /// Horizontal advance consumed by this glyph.
    pub advance: i32,
    /// X offset of the outline's starting point.
    pub origin_x: i32,
    /// Y offset of the outline's starting point.
    pub origin_y: i32,
    /// Outline drawing commands, relative to the starting point.
    pub outline: &'static str,
}

/// Maps characters to drawable glyphs and advance widths.
///
/// Implementors may supply their own glyph dataset.
pub trait GlyphSet {
    /// Advance consumed by characters the set has no glyph for.
    const FALLBACK_ADVANCE: i32;

    /// Look up the glyph for the given character, if the set contains one.
    fn glyph(character: char) -> Option<&'static Glyph>;

    /// Advance width of a single character.
    fn advance(character: char) -> i32 {
        match Self::glyph(character) {
            Some(glyph) => glyph.advance,
            None => Self::FALLBACK_ADVANCE,
        }
    }

    /// Total advance width of `text` at scale 1.
    fn measure(text: &str) -> i32 {
        text.chars().map(Self::advance).sum()
    }
}
