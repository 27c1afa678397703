//! `styled-text` renders text carrying inline `{key:value}` styling
//! modifiers into self-contained, optionally animated SVG documents,
//! drawn with a pixel-outline glyph set.
//!
//! The pipeline is a pure function from input text to document string:
//! [`markup::parse`] splits the text into control groups and literal
//! runs, [`style::resolve`] turns each group into concrete styling
//! against the [`palette`], and [`compose`] lays the glyphs out into
//! layered SVG. [`emit`] writes the result to disk.
//!
//! ```
//! use styled_text::{RenderOptions, palette, render};
//! use styled_text_m6x11::M6x11;
//!
//! let options = RenderOptions::default();
//! let svg = render::<M6x11>("{C:red}+1 Mult", palette::DEFAULT, &[], &options).unwrap();
//! assert!(svg.starts_with("<!--"));
//! assert!(svg.ends_with("</svg>"));
//! ```

pub mod compose;
pub mod emit;
pub mod error;
pub mod icons;
pub mod markup;
pub mod palette;
pub mod style;

pub use compose::{RenderOptions, compose_raw, compose_styled};
pub use error::Error;
pub use palette::ColourValue;

use styled_text_core::GlyphSet;

/// One-shot conversion from markup to a finished SVG document string.
///
/// Input with no control groups at all falls back to the single-colour
/// raw rendering.
pub fn render<G: GlyphSet>(
    input: &str,
    default_fill: &str,
    caller_colours: &[ColourValue],
    options: &RenderOptions,
) -> Result<String, Error> {
    let (plain, segments) = markup::parse(input);
    if segments.is_empty() {
        return Ok(compose_raw::<G>(&plain, default_fill, options));
    }
    let default_colour = ColourValue::Solid(default_fill.to_owned());
    let styled = style::resolve(&segments, &default_colour, caller_colours)?;
    Ok(compose_styled::<G>(input, &plain, &styled, options))
}
