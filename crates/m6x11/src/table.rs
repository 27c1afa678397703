//! Static outline data for m6x11plus.
//!
//! Each row is (code point, glyph): identifier, advance width, outline
//! origin, and the rectilinear outline commands that follow the origin.
//! Rows are sorted by code point for binary-search lookup.

use styled_text_core::Glyph;

macro_rules! g {
    ($code:expr, $name:literal, $advance:expr, $ox:expr, $oy:expr, $outline:literal) => {
        (
            $code,
            Glyph {
                name: $name,
                advance: $advance,
                origin_x: $ox,
                origin_y: $oy,
                outline: $outline,
            },
        )
    };
}

pub(crate) static GLYPHS: &[(u32, Glyph)] = &[
    g!(32, "space", 12, 0, 6, ""),
    g!(33, "exclam", 6, 0, 8, "h4v16h-4v-16zm0 18h4v4h-4v-4z"),
    g!(34, "quotedbl", 12, 0, 8, "h4v6h-2v-2h-2v-4zm6 0h4v6h-2v-2h-2v-4z"),
    g!(35, "numbersign", 16, 2, 8, "h4v6h2v-6h4v6h2v4h-2v2h2v4h-2v6h-4v-6h-2v6h-4v-6h-2v-4h2v-2h-2v-4h2v-6zm4 10v2h2v-2h-2z"),
    g!(36, "dollar", 14, 4, 8, "h4v4h4v4h-8v2h6v2h2v6h-2v2h-2v4h-4v-4h-4v-4h8v-2h-6v-2h-2v-6h2v-2h2v-4z"),
    g!(37, "percent", 14, 0, 12, "h4v4h-4v-4zm8 2h4v4h-2v2h-2v2h-2v2h-2v2h-4v-4h2v-2h2v-2h2v-2h2v-2zm0 10h4v4h-4v-4z"),
    g!(38, "ampersand", 20, 4, 8, "h8v2h2v8h-2v2h2v-2h4v4h-2v2h-2v2h4v4h-6v-2h-2v2h-8v-2h-2v-10h2v-8h2v-2zm2 4v4h4v-4h-4zm-2 8v6h4v-4h-2v-2h-2z"),
    g!(39, "quotesingle", 6, 0, 8, "h4v6h-2v-2h-2v-4z"),
    g!(40, "parenleft", 10, 2, 8, "h6v4h-4v18h4v4h-6v-2h-2v-22h2v-2z"),
    g!(41, "parenright", 10, 0, 8, "h6v2h2v22h-2v2h-6v-4h4v-18h-4v-4z"),
    g!(42, "asterisk", 12, 0, 8, "h4v2h2v-2h4v4h-2v2h2v4h-4v-2h-2v2h-4v-4h2v-2h-2v-4z"),
    g!(43, "plus", 14, 4, 14, "h4v4h4v4h-4v4h-4v-4h-4v-4h4v-4z"),
    g!(44, "comma", 6, 0, 26, "h4v6h-2v-2h-2v-4z"),
    g!(45, "hyphen", 14, 0, 18, "h12v4h-12v-4z"),
    g!(46, "period", 6, 0, 26, "h4v4h-4v-4z"),
    g!(47, "slash", 14, 8, 8, "h4v6h-2v4h-2v4h-2v4h-2v4h-4v-6h2v-4h2v-4h2v-4h2v-4z"),
    g!(48, "zero", 14, 2, 8, "h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(49, "one", 14, 4, 8, "h4v18h4v4h-12v-4h4v-12h-4v-4h4v-2z"),
    g!(50, "two", 14, 2, 8, "h8v2h2v10h-2v2h-2v2h-2v2h6v4h-12v-6h2v-2h2v-2h2v-2h2v-6h-4v2h-4v-4h2v-2z"),
    g!(51, "three", 14, 2, 8, "h8v2h2v6h-2v2h2v10h-2v2h-8v-2h-2v-4h4v2h4v-6h-4v-4h4v-4h-4v2h-4v-4h2v-2z"),
    g!(52, "four", 14, 0, 8, "h4v10h4v-10h4v22h-4v-8h-6v-2h-2v-12z"),
    g!(53, "five", 14, 0, 8, "h12v4h-8v4h6v2h2v10h-2v2h-10v-4h8v-6h-8v-12z"),
    g!(54, "six", 14, 2, 8, "h8v2h2v4h-4v-2h-4v4h6v2h2v10h-2v2h-8v-2h-2v-18h2v-2zm2 12v6h4v-6h-4z"),
    g!(55, "seven", 14, 0, 8, "h12v10h-2v4h-2v8h-4v-10h2v-4h2v-4h-8v-4z"),
    g!(56, "eight", 14, 2, 8, "h8v2h2v6h-2v2h2v10h-2v2h-8v-2h-2v-10h2v-2h-2v-6h2v-2zm2 4v4h4v-4h-4zm0 8v6h4v-6h-4z"),
    g!(57, "nine", 14, 2, 8, "h8v2h2v18h-2v2h-8v-2h-2v-4h4v2h4v-4h-6v-2h-2v-10h2v-2zm2 4v6h4v-6h-4z"),
    g!(58, "colon", 6, 0, 14, "h4v4h-4v-4zm0 12h4v4h-4v-4z"),
    g!(59, "semicolon", 6, 0, 14, "h4v4h-4v-4zm0 12h4v6h-2v-2h-2v-4z"),
    g!(60, "less", 12, 6, 14, "h4v4h-2v2h-2v4h2v2h2v4h-4v-2h-2v-2h-2v-2h-2v-4h2v-2h2v-2h2v-2z"),
    g!(61, "equal", 14, 0, 14, "h12v4h-12v-4zm0 8h12v4h-12v-4z"),
    g!(62, "greater", 12, 0, 14, "h4v2h2v2h2v2h2v4h-2v2h-2v2h-2v2h-4v-4h2v-2h2v-4h-2v-2h-2v-4z"),
    g!(63, "question", 14, 2, 8, "h8v2h2v8h-2v2h-2v4h-4v-6h2v-2h2v-4h-4v2h-4v-4h2v-2zm2 18h4v4h-4v-4z"),
    g!(64, "at", 20, 4, 8, "h10v2h2v2h2v10h-2v2h-8v-2h-2v-6h2v-2h4v-2h-6v2h-2v10h2v2h12v4h-14v-2h-2v-2h-2v-14h2v-2h2v-2zm6 10v2h2v-2h-2z"),
    g!(65, "A", 14, 2, 8, "h8v2h2v20h-4v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(66, "B", 14, 0, 8, "h10v2h2v8h-2v2h2v8h-2v2h-10v-22zm4 4v4h4v-4h-4zm0 8v6h4v-6h-4z"),
    g!(67, "C", 14, 2, 8, "h10v4h-8v14h8v4h-10v-2h-2v-18h2v-2z"),
    g!(68, "D", 14, 0, 8, "h10v2h2v18h-2v2h-10v-22zm4 4v14h4v-14h-4z"),
    g!(69, "E", 14, 2, 8, "h10v4h-8v4h6v4h-6v6h8v4h-10v-2h-2v-18h2v-2z"),
    g!(70, "F", 14, 2, 8, "h10v4h-8v4h6v4h-6v10h-4v-20h2v-2z"),
    g!(71, "G", 14, 2, 8, "h10v4h-8v14h4v-6h-2v-4h6v12h-2v2h-8v-2h-2v-18h2v-2z"),
    g!(72, "H", 14, 0, 8, "h4v8h4v-8h4v22h-4v-10h-4v10h-4v-22z"),
    g!(73, "I", 14, 0, 8, "h12v4h-4v14h4v4h-12v-4h4v-14h-4v-4z"),
    g!(74, "J", 14, 0, 8, "h12v20h-2v2h-8v-2h-2v-4h4v2h4v-14h-8v-4z"),
    g!(75, "K", 14, 0, 8, "h4v8h2v-2h2v-6h4v8h-2v2h-2v2h2v2h2v8h-4v-6h-2v-2h-2v8h-4v-22z"),
    g!(76, "L", 14, 0, 8, "h4v18h8v4h-10v-2h-2v-20z"),
    g!(77, "M", 18, 0, 8, "h14v2h2v20h-4v-18h-2v14h-4v-14h-2v18h-4v-22z"),
    g!(78, "N", 14, 0, 8, "h10v2h2v20h-4v-18h-4v18h-4v-22z"),
    g!(79, "O", 14, 2, 8, "h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(80, "P", 14, 0, 8, "h10v2h2v10h-2v2h-6v8h-4v-22zm4 4v6h4v-6h-4z"),
    g!(81, "Q", 16, 2, 8, "h8v2h2v16h2v4h-4v-2h-2v2h-6v-2h-2v-18h2v-2zm2 4v14h2v-2h2v-12h-4z"),
    g!(82, "R", 14, 0, 8, "h10v2h2v8h-2v2h2v10h-4v-8h-2v-2h-2v10h-4v-22zm4 4v4h4v-4h-4z"),
    g!(83, "S", 14, 2, 8, "h10v4h-8v4h6v2h2v10h-2v2h-10v-4h8v-6h-6v-2h-2v-8h2v-2z"),
    g!(84, "T", 14, 0, 8, "h12v4h-4v18h-4v-18h-4v-4z"),
    g!(85, "U", 14, 0, 8, "h4v18h4v-18h4v20h-2v2h-8v-2h-2v-20z"),
    g!(86, "V", 14, 0, 8, "h4v16h4v-16h4v18h-2v2h-2v2h-4v-2h-2v-2h-2v-18z"),
    g!(87, "W", 18, 0, 8, "h4v18h2v-10h4v10h2v-18h4v20h-2v2h-12v-2h-2v-20z"),
    g!(88, "X", 16, 0, 8, "h4v6h2v2h2v-2h2v-6h4v8h-2v2h-2v2h2v2h2v8h-4v-6h-2v-2h-2v2h-2v6h-4v-8h2v-2h2v-2h-2v-2h-2v-8z"),
    g!(89, "Y", 14, 0, 8, "h4v8h4v-8h4v10h-2v2h-2v10h-4v-10h-2v-2h-2v-10z"),
    g!(90, "Z", 14, 0, 8, "h12v6h-2v4h-2v4h-2v4h6v4h-12v-6h2v-4h2v-4h2v-4h-6v-4z"),
    g!(91, "bracketleft", 10, 0, 8, "h8v4h-4v18h4v4h-8v-26z"),
    g!(92, "backslash", 14, 0, 8, "h4v4h2v4h2v4h2v4h2v6h-4v-4h-2v-4h-2v-4h-2v-4h-2v-6z"),
    g!(93, "bracketright", 10, 0, 8, "h8v26h-8v-4h4v-18h-4v-4z"),
    g!(94, "asciicircum", 14, 4, 8, "h4v2h2v2h2v4h-4v-2h-4v2h-4v-4h2v-2h2v-2z"),
    g!(95, "underscore", 14, 0, 26, "h12v4h-12v-4z"),
    g!(97, "a", 14, 0, 14, "h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(98, "b", 14, 0, 8, "h4v6h6v2h2v12h-2v2h-10v-22zm4 10v8h4v-8h-4z"),
    g!(99, "c", 14, 2, 14, "h10v4h-8v8h8v4h-10v-2h-2v-12h2v-2z"),
    g!(100, "d", 14, 8, 8, "h4v22h-10v-2h-2v-12h2v-2h6v-6zm-4 10v8h4v-8h-4z"),
    g!(101, "e", 14, 2, 14, "h8v2h2v8h-8v2h8v4h-10v-2h-2v-12h2v-2zm2 4v2h4v-2h-4z"),
    g!(102, "f", 14, 4, 8, "h8v4h-6v2h4v4h-4v12h-4v-12h-2v-4h2v-4h2v-2z"),
    g!(103, "g", 14, 2, 14, "h8v2h2v18h-2v2h-10v-4h8v-2h-6v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(104, "h", 14, 0, 8, "h4v6h6v2h2v14h-4v-12h-4v12h-4v-22z"),
    g!(105, "i", 6, 0, 8, "h4v4h-4v-4zm0 6h4v16h-4v-16z"),
    g!(106, "j", 10, 4, 8, "h4v4h-4v-4zm0 6h4v20h-2v2h-6v-4h4v-18z"),
    g!(107, "k", 14, 0, 8, "h4v6h6v2h2v6h-2v2h2v6h-4v-4h-2v-2h-2v6h-4v-22zm4 10v2h4v-2h-4z"),
    g!(108, "l", 6, 0, 8, "h4v22h-4v-22z"),
    g!(109, "m", 18, 0, 14, "h14v2h2v14h-4v-12h-2v12h-4v-12h-2v12h-4v-16z"),
    g!(110, "n", 14, 0, 14, "h10v2h2v14h-4v-12h-4v12h-4v-16z"),
    g!(111, "o", 14, 2, 14, "h8v2h2v12h-2v2h-8v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(112, "p", 14, 2, 14, "h8v2h2v12h-2v2h-6v6h-4v-20h2v-2zm2 4v8h4v-8h-4z"),
    g!(113, "q", 14, 2, 14, "h8v2h2v20h-4v-6h-6v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(114, "r", 14, 0, 14, "h4v2h2v-2h6v4h-6v2h-2v10h-4v-16z"),
    g!(115, "s", 14, 2, 14, "h10v4h-8v2h6v2h2v6h-2v2h-10v-4h8v-2h-6v-2h-2v-6h2v-2z"),
    g!(116, "t", 14, 2, 8, "h4v6h6v4h-6v8h6v4h-8v-2h-2v-10h-2v-4h2v-6z"),
    g!(117, "u", 14, 0, 14, "h4v12h4v-12h4v14h-2v2h-8v-2h-2v-14z"),
    g!(118, "v", 14, 0, 14, "h4v10h4v-10h4v12h-2v2h-2v2h-4v-2h-2v-2h-2v-12z"),
    g!(119, "w", 18, 0, 14, "h4v12h2v-10h4v10h2v-12h4v14h-2v2h-12v-2h-2v-14z"),
    g!(120, "x", 16, 0, 14, "h4v2h2v2h2v-2h2v-2h4v4h-2v2h-2v4h2v2h2v4h-4v-2h-2v-2h-2v2h-2v2h-4v-4h2v-2h2v-4h-2v-2h-2v-4z"),
    g!(121, "y", 14, 0, 14, "h4v12h4v-12h4v20h-2v2h-10v-4h8v-2h-6v-2h-2v-14z"),
    g!(122, "z", 14, 0, 14, "h12v6h-2v2h-2v2h-2v2h6v4h-12v-6h2v-2h2v-2h2v-2h-6v-4z"),
    g!(123, "braceleft", 12, 4, 8, "h6v4h-4v8h-2v2h2v8h4v4h-6v-2h-2v-10h-2v-4h2v-8h2v-2z"),
    g!(124, "bar", 6, 0, 8, "h4v26h-4v-26z"),
    g!(125, "braceright", 12, 0, 8, "h6v2h2v8h2v4h-2v10h-2v2h-6v-4h4v-8h2v-2h-2v-8h-4v-4z"),
    g!(126, "asciitilde", 14, 2, 16, "h4v2h2v2h2v-2h2v4h-2v2h-4v-2h-2v-2h-2v2h-2v-4h2v-2z"),
    g!(161, "exclamdown", 6, 0, 14, "h4v4h-4v-4zm0 6h4v16h-4v-16z"),
    g!(162, "cent", 14, 4, 10, "h4v4h4v4h-8v8h8v4h-4v4h-4v-4h-2v-2h-2v-12h2v-2h2v-4z"),
    g!(163, "sterling", 16, 4, 8, "h8v2h2v4h-4v-2h-4v6h6v4h-6v4h8v4h-14v-4h2v-4h-2v-4h2v-8h2v-2z"),
    g!(164, "currency", 18, 0, 10, "h4v2h8v-2h4v4h-2v8h2v4h-4v-2h-8v2h-4v-4h2v-8h-2v-4zm6 6v4h4v-4h-4z"),
    g!(165, "yen", 14, 0, 8, "h4v6h4v-6h4v8h-2v2h-2v2h4v2h-4v2h4v2h-4v4h-4v-4h-4v-2h4v-2h-4v-2h4v-2h-2v-2h-2v-8z"),
    g!(166, "brokenbar", 6, 0, 8, "h4v10h-4v-10zm0 16h4v10h-4v-10z"),
    g!(167, "section", 14, 2, 8, "h10v4h-8v2h4v2h2v2h2v8h-2v2h2v6h-2v2h-10v-4h8v-2h-4v-2h-2v-2h-2v-8h2v-2h-2v-6h2v-2zm2 12v4h4v-4h-4z"),
    g!(168, "dieresis", 12, 0, 8, "h4v4h-4v-4zm6 0h4v4h-4v-4z"),
    g!(169, "copyright", 20, 4, 8, "h10v2h2v2h2v14h-2v2h-2v2h-10v-2h-2v-2h-2v-14h2v-2h2v-2zm2 4v2h-2v10h2v2h6v-2h-4v-2h-2v-6h2v-2h4v-2h-6zm6 2v2h-4v6h4v2h2v-10h-2zm-4 0h4v2h-4v-2zm-2 2h2v6h-2v-6z m2 6h4v2h-4v-2z"),
    g!(170, "ordfeminine", 8, 0, 8, "h4v2h-4v-2zm4 2h2v8h-4v-2h2v-2h-2v-2h2v-2zm-4 4h2v2h-2v-2z"),
    g!(171, "guillemotleft", 20, 6, 14, "h4v4h-2v2h-2v4h2v2h2v4h-4v-2h-2v-2h-2v-2h-2v-4h2v-2h2v-2h2v-2zm8 0h4v4h-2v2h-2v4h2v2h2v4h-4v-2h-2v-2h-2v-2h-2v-4h2v-2h2v-2h2v-2z"),
    g!(172, "logicalnot", 14, 0, 8, "h12v8h-4v-4h-8v-4z"),
    g!(174, "registered", 20, 4, 8, "h10v2h2v2h2v14h-2v2h-2v2h-10v-2h-2v-2h-2v-14h2v-2h2v-2zm2 4v2h4v2h2v2h-2v2h2v4h2v-10h-2v-2h-6zm-2 2v10h2v-10h-2zm2 0h4v2h-2v2h2v2h-2v4h-2v-10zm2 2v2h2v-2h-2zm0 4v4 h-2v2h6v-2h-2v-4h-2zm2 -4h2v2h-2v-2zm0 4h2v4h-2v-4z"),
    g!(176, "degree", 12, 2, 8, "h6v2h2v6h-2v2h-6v-2h-2v-6h2v-2zm2 4v2h2v-2h-2z"),
    g!(177, "plusminus", 14, 4, 14, "h4v4h4v4h-4v4h4v4h-12v-4h4v-4h-4v-4h4v-4z"),
    g!(182, "paragraph", 18, 2, 8, "h14v28h-4v-24h-2v24h-4v-16h-4v-2h-2v-8h2v-2z"),
    g!(186, "ordmasculine", 12, 2, 8, "h6v2h2v8h-2v2h-6v-2h-2v-8h2v-2zm2 4v4h2v-4h-2z"),
    g!(187, "guillemotright", 20, 0, 14, "h4v2h2v2h2v2h2v4h-2v2h-2v2h-2v2h-4v-4h2v-2h2v-4h-2v-2h-2v-4zm8 0h4v2h2v2h2v2h2v4h-2v2h-2v2h-2v2h-4v-4h2v-2h2v-4h-2v-2h-2v-4z"),
    g!(191, "questiondown", 14, 4, 8, "h4v4h-4v-4zm0 6h4v6h-2v2h-2v4h4v-2h4v4h-2v2h-8v-2h-2v-8h2v-2h2v-4z"),
    g!(192, "Agrave", 14, 4, 0, "h4v6h-2v-2h-2v-4zm-2 8h8v2h2v20h-4v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(193, "Aacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-2 8h8v2h2v20h-4v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(195, "Atilde", 14, 2, 0, "h4v2h4v-2h2v4h-2v2h-4v-2h-4v2h-2v-4h2v-2zm0 8h8v2h2v20h-4v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(196, "Adieresis", 14, 0, 2, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-6 6h8v2h2v20h-4v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(197, "Aring", 14, 4, 0, "h6v6h-6v-6zm2 2v2h2v-2h-2zm-4 6h8v2h2v20h-4v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(198, "AE", 22, 2, 8, "h18v4h-8v4h6v4h-6v6h8v4h-12v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(199, "Ccedilla", 14, 2, 8, "h10v4h-8v14h8v4h-2v4h-6v-2h4v-2h-6v-2h-2v-18h2v-2z"),
    g!(200, "Egrave", 14, 4, 0, "h4v6h-2v-2h-2v-4zm-2 8h10v4h-8v4h6v4h-6v6h8v4h-10v-2h-2v-18h2v-2z"),
    g!(201, "Eacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-2 8h10v4h-8v4h6v4h-6v6h8v4h-10v-2h-2v-18h2v-2z"),
    g!(202, "Ecircumflex", 14, 4, 0, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm-2 8h10v4h-8v4h6v4h-6v6h8v4h-10v-2h-2v-18h2v-2z"),
    g!(203, "Edieresis", 14, 0, 2, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-6 6h10v4h-8v4h6v4h-6v6h8v4h-10v-2h-2v-18h2v-2z"),
    g!(204, "Igrave", 14, 4, 0, "h4v6h-2v-2h-2v-4zm-4 8h12v4h-4v14h4v4h-12v-4h4v-14h-4v-4z"),
    g!(205, "Iacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-4 8h12v4h-4v14h4v4h-12v-4h4v-14h-4v-4z"),
    g!(206, "Icircumflex", 14, 4, 0, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm-4 8h12v4h-4v14h4v4h-12v-4h4v-14h-4v-4z"),
    g!(207, "Idieresis", 14, 0, 2, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-8 6h12v4h-4v14h4v4h-12v-4h4v-14h-4v-4z"),
    g!(209, "Ntilde", 14, 2, 0, "h4v2h4v-2h2v4h-2v2h-4v-2h-4v2h-2v-4h2v-2zm-2 8h10v2h2v20h-4v-18h-4v18h-4v-22z"),
    g!(210, "Ograve", 14, 4, 0, "h4v6h-2v-2h-2v-4zm-2 8h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(211, "Oacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-2 8h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(212, "Ocircumflex", 14, 4, 0, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm-2 8h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(213, "Otilde", 14, 2, 0, "h4v2h4v-2h2v4h-2v2h-4v-2h-4v2h-2v-4h2v-2zm0 8h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(214, "Odieresis", 14, 0, 2, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-6 6h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(215, "multiply", 12, 0, 16, "h4v2h2v-2h4v4h-2v2h2v4h-4v-2h-2v2h-4v-4h2v-2h-2v-4z"),
    g!(216, "Oslash", 18, 4, 8, "h8v2h2v-2h2v4h-2v16h-2v2h-8v-2h-2v2h-2v-4h2v-16h2v-2zm2 4v6h2v-2h2v-4h-4zm2 8v2h-2v4h4v-6h-2z"),
    g!(217, "Ugrave", 14, 4, 0, "h4v6h-2v-2h-2v-4zm-4 8h4v18h4v-18h4v20h-2v2h-8v-2h-2v-20z"),
    g!(218, "Uacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-4 8h4v18h4v-18h4v20h-2v2h-8v-2h-2v-20z"),
    g!(219, "Ucircumflex", 14, 4, 0, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm-4 8h4v18h4v-18h4v20h-2v2h-8v-2h-2v-20z"),
    g!(220, "Udieresis", 14, 0, 2, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-8 6h4v18h4v-18h4v20h-2v2h-8v-2h-2v-20z"),
    g!(221, "Yacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-4 8h4v8h4v-8h4v10h-2v2h-2v10h-4v-10h-2v-2h-2v-10z"),
    g!(222, "Thorn", 14, 0, 8, "h4v4h6v2h2v10h-2v2h-6v4h-4v-22zm4 8v6h4v-6h-4z"),
    g!(223, "germandbls", 16, 0, 8, "h10v2h2v6h-2v2h2v2h2v8h-2v2h-6v-4h4v-4h-2v-2h-2v-4h2v-4h-4v18h-4v-22z"),
    g!(224, "agrave", 14, 4, 6, "h4v6h-2v-2h-2v-4zm-4 8h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(225, "aacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-4 8h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(226, "acircumflex", 14, 4, 6, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm-4 8h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(227, "atilde", 14, 2, 6, "h4v2h4v-2h2v4h-2v2h-4v-2h-4v2h-2v-4h2v-2zm-2 8h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(228, "adieresis", 14, 0, 8, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-8 6h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(229, "aring", 14, 4, 6, "h6v6h-6v-6zm2 2v2h2v-2h-2zm-6 6h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(230, "ae", 22, 0, 14, "h18v2h2v8h-8v2h8v4h-18v-2h-2v-6h2v-2h6v-2h-8v-4zm12 4v2h4v-2h-4zm-8 6v2h4v-2h-4z"),
    g!(231, "ccedilla", 14, 2, 14, "h10v4h-8v8h8v4h-2v4h-6v-2h4v-2h-6v-2h-2v-12h2v-2z"),
    g!(232, "egrave", 14, 4, 6, "h4v6h-2v-2h-2v-4zm-2 8h8v2h2v8h-8v2h8v4h-10v-2h-2v-12h2v-2zm2 4v2h4v-2h-4z"),
    g!(233, "eacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-2 8h8v2h2v8h-8v2h8v4h-10v-2h-2v-12h2v-2zm2 4v2h4v-2h-4z"),
    g!(234, "ecircumflex", 14, 4, 6, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm-2 8h8v2h2v8h-8v2h8v4h-10v-2h-2v-12h2v-2zm2 4v2h4v-2h-4z"),
    g!(235, "edieresis", 14, 0, 8, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-6 6h8v2h2v8h-8v2h8v4h-10v-2h-2v-12h2v-2zm2 4v2h4v-2h-4z"),
    g!(236, "igrave", 6, 0, 6, "h4v6h-2v-2h-2v-4zm0 8h4v16h-4v-16z"),
    g!(237, "iacute", 6, 0, 6, "h4v4h-2v2h-2v-6zm0 8h4v16h-4v-16z"),
    g!(238, "icircumflex", 10, 2, 6, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm0 8h4v16h-4v-16z"),
    g!(239, "idieresis", 14, 0, 8, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-4 6h4v16h-4v-16z"),
    g!(241, "ntilde", 14, 2, 6, "h4v2h4v-2h2v4h-2v2h-4v-2h-4v2h-2v-4h2v-2zm-2 8h10v2h2v14h-4v-12h-4v12h-4v-16z"),
    g!(242, "ograve", 14, 4, 6, "h4v6h-2v-2h-2v-4zm-2 8h8v2h2v12h-2v2h-8v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(243, "oacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-2 8h8v2h2v12h-2v2h-8v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(244, "ocircumflex", 14, 4, 6, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm-2 8h8v2h2v12h-2v2h-8v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(245, "otilde", 14, 2, 6, "h4v2h4v-2h2v4h-2v2h-4v-2h-4v2h-2v-4h2v-2zm0 8h8v2h2v12h-2v2h-8v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(246, "odieresis", 14, 0, 8, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-6 6h8v2h2v12h-2v2h-8v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(247, "divide", 14, 4, 12, "h4v4h-4v-4zm-4 6h12v4h-12v-4zm4 6h4v4h-4v-4z"),
    g!(248, "oslash", 18, 4, 14, "h8v2h2v-2h2v4h-2v10h-2v2h-8v-2h-2v2h-2v-4h2v-10h2v-2zm2 4v4h2v-2h2v-2h-4zm2 4v2h-2v2h4v-4h-2z"),
    g!(249, "ugrave", 14, 4, 6, "h4v6h-2v-2h-2v-4zm-4 8h4v12h4v-12h4v14h-2v2h-8v-2h-2v-14z"),
    g!(250, "uacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-4 8h4v12h4v-12h4v14h-2v2h-8v-2h-2v-14z"),
    g!(251, "ucircumflex", 14, 4, 6, "h4v2h2v4h-2v-2h-4v2h-2v-4h2v-2zm-4 8h4v12h4v-12h4v14h-2v2h-8v-2h-2v-14z"),
    g!(252, "udieresis", 14, 0, 8, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-8 6h4v12h4v-12h4v14h-2v2h-8v-2h-2v-14z"),
    g!(253, "yacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-4 8h4v12h4v-12h4v20h-2v2h-10v-4h8v-2h-6v-2h-2v-14z"),
    g!(254, "thorn", 14, 0, 8, "h4v6h6v2h2v12h-2v2h-6v4h-4v-26zm4 10v8h4v-8h-4z"),
    g!(255, "ydieresis", 14, 0, 8, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-8 6h4v12h4v-12h4v20h-2v2h-10v-4h8v-2h-6v-2h-2v-14z"),
    g!(256, "Amacron", 14, 2, 2, "h8v4h-8v-4zm0 6h8v2h2v20h-4v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(257, "amacron", 14, 2, 8, "h8v4h-8v-4zm-2 6h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(258, "Abreve", 14, 2, 0, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm0 8h8v2h2v20h-4v-8h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(259, "abreve", 14, 2, 6, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm-2 8h10v2h2v14h-10v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(260, "Aogonek", 16, 2, 8, "h8v2h2v20h-2v2h4v2h-6v-12h-4v8h-4v-20h2v-2zm2 4v6h4v-6h-4z"),
    g!(261, "aogonek", 16, 0, 14, "h10v2h2v14h-2v2h4v2h-6v-4h-6v-2h-2v-6h2v-2h6v-2h-8v-4zm4 10v2h4v-2h-4z"),
    g!(262, "Cacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-2 8h10v4h-8v14h8v4h-10v-2h-2v-18h2v-2z"),
    g!(263, "cacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-2 8h10v4h-8v8h8v4h-10v-2h-2v-12h2v-2z"),
    g!(272, "Dcroat", 16, 2, 8, "h10v2h2v18h-2v2h-10v-10h-2v-2h2v-10zm4 4v6h2v2h-2v6h4v-14h-4z"),
    g!(273, "dcroat", 16, 8, 8, "h4v2h2v2h-2v16h-2v2h-8v-2h-2v-12h2v-2h6v-2h-2v-2h2v-2zm-4 10v8h4v-8h-4z"),
    g!(274, "Emacron", 14, 2, 2, "h8v4h-8v-4zm0 6h10v4h-8v4h6v4h-6v6h8v4h-10v-2h-2v-18h2v-2z"),
    g!(275, "emacron", 14, 2, 8, "h8v4h-8v-4zm0 6h8v2h2v8h-8v2h8v4h-10v-2h-2v-12h2v-2zm2 4v2h4v-2h-4z"),
    g!(276, "Ebreve", 14, 2, 0, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm0 8h10v4h-8v4h6v4h-6v6h8v4h-10v-2h-2v-18h2v-2z"),
    g!(277, "ebreve", 14, 2, 6, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm0 8h8v2h2v8h-8v2h8v4h-10v-2h-2v-12h2v-2zm2 4v2h4v-2h-4z"),
    g!(280, "Eogonek", 16, 2, 8, "h10v4h-8v4h6v4h-6v6h8v4h-2v2h4v2h-6v-4h-6v-2h-2v-18h2v-2z"),
    g!(281, "eogonek", 16, 2, 14, "h8v2h2v8h-8v2h8v4h-2v2h4v2h-6v-4h-6v-2h-2v-12h2v-2zm2 4v2h4v-2h-4z"),
    g!(286, "Gbreve", 14, 2, 0, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm0 8h10v4h-8v14h4v-6h-2v-4h6v12h-2v2h-8v-2h-2v-18h2v-2z"),
    g!(287, "gbreve", 14, 2, 6, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm0 8h8v2h2v18h-2v2h-10v-4h8v-2h-6v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(298, "Imacron", 14, 2, 2, "h8v4h-8v-4zm-2 6h12v4h-4v14h4v4h-12v-4h4v-14h-4v-4z"),
    g!(299, "imacron", 10, 0, 8, "h8v4h-8v-4zm2 6h4v16h-4v-16z"),
    g!(300, "Ibreve", 14, 2, 0, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm-2 8h12v4h-4v14h4v4h-12v-4h4v-14h-4v-4z"),
    g!(301, "ibreve", 10, 0, 6, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm2 8h4v16h-4v-16z"),
    g!(304, "Idotaccent", 14, 4, 2, "h4v4h-4v-4zm-4 6h12v4h-4v14h4v4h-12v-4h4v-14h-4v-4z"),
    g!(305, "dotlessi", 6, 0, 14, "h4v16h-4v-16z"),
    g!(321, "Lslash", 18, 4, 8, "h4v8h2v2h-2v8h8v4h-10v-2h-2v-6h-2v-2h2v-12zm6 6h2v2h-2v-2zm-10 8h2v2h-2v-2z"),
    g!(322, "lslash", 14, 4, 8, "h4v8h2v2h-2v12h-4v-8h-2v-2h2v-12zm6 6h2v2h-2v-2zm-10 8h2v2h-2v-2z"),
    g!(323, "Nacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-4 8h10v2h2v20h-4v-18h-4v18h-4v-22z"),
    g!(324, "nacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-4 8h10v2h2v14h-4v-12h-4v12h-4v-16z"),
    g!(332, "Omacron", 14, 2, 2, "h8v4h-8v-4zm0 6h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(333, "omacron", 14, 2, 8, "h8v4h-8v-4zm0 6h8v2h2v12h-2v2h-8v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(334, "Obreve", 14, 2, 0, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm0 8h8v2h2v18h-2v2h-8v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(335, "obreve", 14, 2, 6, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm0 8h8v2h2v12h-2v2h-8v-2h-2v-12h2v-2zm2 4v8h4v-8h-4z"),
    g!(338, "OE", 22, 2, 8, "h18v4h-8v4h6v4h-6v6h8v4h-18v-2h-2v-18h2v-2zm2 4v14h4v-14h-4z"),
    g!(339, "oe", 22, 2, 14, "h16v2h2v8h-8v2h8v4h-18v-2h-2v-12h2v-2zm2 4v8h4v-8h-4zm8 0v2h4v-2h-4z"),
    g!(346, "Sacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-2 8h10v4h-8v4h6v2h2v10h-2v2h-10v-4h8v-6h-6v-2h-2v-8h2v-2z"),
    g!(347, "sacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-2 8h10v4h-8v2h6v2h2v6h-2v2h-10v-4h8v-2h-6v-2h-2v-6h2v-2z"),
    g!(350, "Scedilla", 14, 2, 8, "h10v4h-8v4h6v2h2v10h-2v2h-2v4h-6v-2h4v-2h-6v-4h8v-6h-6v-2h-2v-8h2v-2z"),
    g!(351, "scedilla", 14, 2, 14, "h10v4h-8v2h6v2h2v6h-2v2h-2v4h-6v-2h4v-2h-6v-4h8v-2h-6v-2h-2v-6h2v-2z"),
    g!(362, "Umacron", 14, 2, 2, "h8v4h-8v-4zm-2 6h4v18h4v-18h4v20h-2v2h-8v-2h-2v-20z"),
    g!(363, "umacron", 14, 2, 8, "h8v4h-8v-4zm-2 6h4v12h4v-12h4v14h-2v2h-8v-2h-2v-14z"),
    g!(364, "Ubreve", 14, 2, 0, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm-2 8h4v18h4v-18h4v20h-2v2h-8v-2h-2v-20z"),
    g!(365, "ubreve", 14, 2, 6, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm-2 8h4v12h4v-12h4v14h-2v2h-8v-2h-2v-14z"),
    g!(376, "Ydieresis", 14, 0, 2, "h4v4h-4v-4zm8 0h4v4h-4v-4zm-8 6h4v8h4v-8h4v10h-2v2h-2v10h-4v-10h-2v-2h-2v-10z"),
    g!(377, "Zacute", 14, 4, 0, "h4v4h-2v2h-2v-6zm-4 8h12v6h-2v4h-2v4h-2v4h6v4h-12v-6h2v-4h2v-4h2v-4h-6v-4z"),
    g!(378, "zacute", 14, 4, 6, "h4v4h-2v2h-2v-6zm-4 8h12v6h-2v2h-2v2h-2v2h6v4h-12v-6h2v-2h2v-2h2v-2h-6v-4z"),
    g!(379, "Zdotaccent", 14, 4, 2, "h4v4h-4v-4zm-4 6h12v6h-2v4h-2v4h-2v4h6v4h-12v-6h2v-4h2v-4h2v-4h-6v-4z"),
    g!(380, "zdotaccent", 14, 4, 8, "h4v4h-4v-4zm-4 6h12v6h-2v2h-2v2h-2v2h6v4h-12v-6h2v-2h2v-2h2v-2h-6v-4z"),
    g!(467, "uni01D3", 14, 2, 0, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm-2 8h4v18h4v-18h4v20h-2v2h-8v-2h-2v-20z"),
    g!(468, "uni01D4", 14, 2, 6, "h2v2h4v-2h2v4h-2v2h-4v-2h-2v-4zm-2 8h4v12h4v-12h4v14h-2v2h-8v-2h-2v-14z"),
    g!(956, "uni03BC", 14, 0, 14, "h4v12h4v-12h4v14h-2v2h-6v4h-4v-20z"),
];
