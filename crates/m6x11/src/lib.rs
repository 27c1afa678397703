#![no_std]

//! `styled-text-m6x11` is a glyph set for the `styled-text` crate covering
//! the m6x11plus pixel font by Daniel Linssen.
//!
//! Outlines are hand-authored rectilinear paths on the font's pixel grid;
//! see <https://managore.itch.io/m6x11> for the original font.

mod table;

use styled_text_core::{Glyph, GlyphSet};

/// The m6x11plus pixel font.
pub struct M6x11;

impl GlyphSet for M6x11 {
    const FALLBACK_ADVANCE: i32 = 2;

    fn glyph(character: char) -> Option<&'static Glyph> {
        let code = character as u32;
        table::GLYPHS
            .binary_search_by_key(&code, |(code, _)| *code)
            .ok()
            .map(|index| &table::GLYPHS[index].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_glyphs() {
        let glyph = M6x11::glyph('A').unwrap();
        assert_eq!(glyph.name, "A");
        assert_eq!(glyph.advance, 14);

        let glyph = M6x11::glyph(' ').unwrap();
        assert_eq!(glyph.name, "space");
        assert_eq!(glyph.advance, 12);
        assert!(glyph.outline.is_empty());
    }

    #[test]
    fn unknown_characters_use_fallback_advance() {
        assert!(M6x11::glyph('\t').is_none());
        assert_eq!(M6x11::advance('\t'), M6x11::FALLBACK_ADVANCE);
    }

    #[test]
    fn measure_sums_advances() {
        // 'H' and 'i' are 14 and 6 wide; tab falls back to 2.
        assert_eq!(M6x11::measure("Hi\t"), 22);
    }

    #[test]
    fn table_is_sorted_by_code_point() {
        for pair in table::GLYPHS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
