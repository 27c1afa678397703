//! Command-line front end for the markup-to-SVG renderer.

use anyhow::Result;
use clap::Parser;

use styled_text::compose::{RenderOptions, compose_raw, compose_styled};
use styled_text::markup::Segment;
use styled_text::{ColourValue, emit, markup, palette, style};
use styled_text_m6x11::M6x11;

/// Converts text with inline styling modifiers to an animated SVG.
///
/// Supported modifiers:
///   {C:colour-key}    named text colour
///   {X:colour-key}    named background colour
///   {V:colour-index}  caller-supplied text colour
///   {B:colour-index}  caller-supplied background colour
///   {E:motion-index}  per-character motion (1 bob, 2 pop)
///   {S:scale}         text scale
#[derive(Parser, Debug)]
#[command(version, about, verbatim_doc_comment)]
struct Args {
    /// Text to convert to SVG
    input: String,

    /// Comma-separated hex or named colours used by the {V:} and {B:}
    /// modifiers
    #[arg(short, long)]
    colours: Option<String>,

    /// Output both dark-mode and light-mode versions
    #[arg(short, long)]
    dual_theme: bool,

    /// Filename for the output SVG
    #[arg(short, long)]
    file: Option<String>,

    /// Disable all style parsing of the input text
    #[arg(short, long)]
    raw: bool,

    /// Add a shadow to the text
    #[arg(short, long)]
    shadow: bool,

    /// Enable the text-selection feature in the SVG
    #[arg(short = 't', long)]
    text_selectable: bool,

    /// SVG display width; negative leaves the width unset
    #[arg(short = 'x', long, default_value_t = -1.0, allow_hyphen_values = true)]
    width: f64,

    /// SVG display height
    #[arg(short = 'y', long, default_value_t = 128.0)]
    height: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (plain, segments) = markup::parse(&args.input);

    let stem = match &args.file {
        Some(file) => file.strip_suffix(".svg").unwrap_or(file).to_owned(),
        None => default_stem(&plain),
    };

    let caller_colours = match &args.colours {
        Some(list) => list
            .split(',')
            .map(palette::parse_colour)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let options = RenderOptions {
        display_width: args.width,
        display_height: args.height,
        shadow: args.shadow,
        selectable: args.text_selectable,
    };

    if args.dual_theme {
        let light = format!("{stem}_light");
        let dark = format!("{stem}_dark");
        render_theme(&args, &plain, &segments, &caller_colours, &options, palette::DEFAULT, &light)?;
        render_theme(&args, &plain, &segments, &caller_colours, &options, palette::WHITE, &dark)?;
    } else {
        render_theme(&args, &plain, &segments, &caller_colours, &options, palette::DEFAULT, &stem)?;
    }
    Ok(())
}

fn render_theme(
    args: &Args,
    plain: &str,
    segments: &[Segment],
    caller_colours: &[ColourValue],
    options: &RenderOptions,
    theme_fill: &str,
    target: &str,
) -> Result<()> {
    let document = if args.raw {
        // Raw mode renders the input untouched, control syntax and all.
        compose_raw::<M6x11>(&args.input, theme_fill, options)
    } else if segments.is_empty() {
        compose_raw::<M6x11>(plain, theme_fill, options)
    } else {
        let default_colour = ColourValue::Solid(theme_fill.to_owned());
        let styled = style::resolve(segments, &default_colour, caller_colours)?;
        compose_styled::<M6x11>(&args.input, plain, &styled, options)
    };
    emit::write_svg(&document, target)?;
    Ok(())
}

/// First 16 characters of the plain text with filename-hostile
/// characters replaced.
fn default_stem(plain: &str) -> String {
    plain
        .chars()
        .take(16)
        .map(|c| match c {
            '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|' | ' ' => '_',
            other => other,
        })
        .collect()
}
