//! Layout and layered SVG composition.
//!
//! Output is assembled as an ordered list of fragments joined once at the
//! end. The layer order (provenance comment, head, defs, shadows, chips,
//! glyphs, selectable-text overlay) is a correctness invariant and is
//! never reordered.

use styled_text_core::{Glyph, GlyphSet};

use crate::palette::ColourValue;
use crate::style::{Motion, StyledSegment};

const COMMENT_HEADER: &str = concat!("Generated by styled-text v", env!("CARGO_PKG_VERSION"));
const SHADOW_COLOUR: &str = "rgba(0,0,0,0.3)";
const SHADOW_OFFSET_X: f64 = 2.0;
const SHADOW_OFFSET_Y: f64 = 2.0;
const BORDER_X: f64 = 5.0;
const MIN_CANVAS: f64 = 40.0;
const MOTION_DURATION: f64 = 2.4;
const MOTION_STAGGER: f64 = 0.4;
const GRADIENT_DURATION: &str = "4s";
const FONT_FAMILY: &str = "m6x11plus,Courier New";
const RAW_HEIGHT: f64 = 40.0;

/// Rendering switches shared by raw and styled output.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Display width attribute; non-positive leaves the width unset.
    pub display_width: f64,
    /// Display height attribute.
    pub display_height: f64,
    /// Draw a translucent drop shadow beneath the glyphs.
    pub shadow: bool,
    /// Embed the invisible selectable-text overlay.
    pub selectable: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            display_width: -1.0,
            display_height: 128.0,
            shadow: false,
            selectable: false,
        }
    }
}

/// A glyph positioned within its segment, at scale 1.
struct Placement {
    character: char,
    glyph: &'static Glyph,
    x: i32,
}

/// Glyph placements for `text` plus its total advance width. Characters
/// without a glyph consume the fallback advance and place nothing.
fn placements<G: GlyphSet>(text: &str) -> (Vec<Placement>, i32) {
    let mut out = Vec::new();
    let mut x = 0;
    for character in text.chars() {
        match G::glyph(character) {
            Some(glyph) => {
                out.push(Placement { character, glyph, x });
                x += glyph.advance;
            }
            None => x += G::FALLBACK_ADVANCE,
        }
    }
    (out, x)
}

/// Ordered document fragments, joined once at the end.
struct SvgBuilder {
    fragments: Vec<String>,
}

impl SvgBuilder {
    fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    fn finish(self) -> String {
        self.fragments.concat()
    }
}

/// Trims float noise from a coordinate; whole values print without a
/// fractional part.
fn num(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}

/// One reusable outline per distinct non-space character of `text`,
/// sorted by code point.
fn build_defs<G: GlyphSet>(text: &str) -> String {
    let mut used = std::collections::BTreeMap::new();
    for character in text.chars() {
        if character != ' ' {
            if let Some(glyph) = G::glyph(character) {
                used.insert(character as u32, glyph);
            }
        }
    }

    let mut defs = String::from("\t<defs>\n");
    for glyph in used.values() {
        defs.push_str(&format!(
            "\t\t<path id=\"{}\" d=\"m{} {}{}\"/>\n",
            glyph.name, glyph.origin_x, glyph.origin_y, glyph.outline
        ));
    }
    defs.push_str("\t</defs>\n");
    defs
}

/// Renders `text` character-by-character with a single fill and no markup
/// interpretation.
pub fn compose_raw<G: GlyphSet>(text: &str, fill: &str, options: &RenderOptions) -> String {
    let (chars, _) = placements::<G>(text);
    let text_width = G::measure(text) as f64;
    let width = BORDER_X * 2.0 + text_width;

    let mut doc = SvgBuilder::new();
    doc.push(format!("<!-- {COMMENT_HEADER} -->\n"));
    doc.push(format!("<!--\n\t {text}\n-->\n\n"));
    doc.push(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        num(RAW_HEIGHT),
        num(width),
        num(RAW_HEIGHT)
    ));
    doc.push(build_defs::<G>(text));

    if options.shadow {
        doc.push(format!(
            "\t<g transform=\"translate({},{})\" fill=\"{}\">\n",
            num(SHADOW_OFFSET_X),
            num(SHADOW_OFFSET_Y),
            SHADOW_COLOUR
        ));
        for placement in &chars {
            if placement.character != ' ' {
                doc.push(format!(
                    "\t\t<use href=\"#{}\" x=\"{}\"/>\n",
                    placement.glyph.name,
                    num(BORDER_X + placement.x as f64)
                ));
            }
        }
        doc.push("\t</g>\n");
    }

    doc.push(format!("\t<g fill=\"{fill}\">\n"));
    for placement in &chars {
        if placement.character != ' ' {
            doc.push(format!(
                "\t\t<use href=\"#{}\" x=\"{}\"/>\n",
                placement.glyph.name,
                num(BORDER_X + placement.x as f64)
            ));
        }
    }
    doc.push("\t</g>\n");

    if options.selectable {
        doc.push(format!(
            "\t<text font-family=\"{FONT_FAMILY}\" fill=\"transparent\">\n"
        ));
        doc.push(format!(
            "\t\t<tspan font-size=\"32\" xml:space=\"preserve\" lengthAdjust=\"spacingAndGlyphs\" x=\"{}\" y=\"26\" textLength=\"{}\">{}</tspan>",
            num(BORDER_X),
            num(text_width),
            escape_text(text)
        ));
        doc.push("\n\t</text>\n");
    }

    doc.push("</svg>");
    doc.finish()
}

/// Composes the layered styled document. Callers route empty parses
/// (no segments at all) through [`compose_raw`] instead.
pub fn compose_styled<G: GlyphSet>(
    input_text: &str,
    plain_text: &str,
    styled: &[StyledSegment],
    options: &RenderOptions,
) -> String {
    struct Measured<'a> {
        segment: &'a StyledSegment,
        chars: Vec<Placement>,
        width: f64,
    }

    let measured: Vec<Measured> = styled
        .iter()
        .map(|segment| {
            let (chars, width) = placements::<G>(&segment.text);
            Measured {
                segment,
                chars,
                width: width as f64,
            }
        })
        .collect();

    // Measurement pass: every segment counts, even empty-text ones.
    let mut total_width = 0.0;
    let mut largest_scale: f64 = 0.0;
    let mut any_chip = false;
    for m in &measured {
        total_width += m.segment.scale * m.width;
        largest_scale = largest_scale.max(m.segment.scale);
        if m.segment.background.is_some() {
            any_chip = true;
            total_width += 6.0 * m.segment.scale;
        }
    }

    let canvas_width = (2.0 * BORDER_X + total_width).max(MIN_CANVAS).ceil();
    let canvas_height = (largest_scale * MIN_CANVAS).max(MIN_CANVAS).ceil();
    log::debug!(
        "styled canvas {}x{} for {} segment(s)",
        canvas_width,
        canvas_height,
        measured.len()
    );

    let mut head = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{}\"",
        num(options.display_height)
    );
    if options.display_width > 0.0 {
        head.push_str(&format!(" width=\"{}\"", num(options.display_width)));
    }
    head.push_str(&format!(
        " viewBox=\"0 0 {} {}\">\n",
        num(canvas_width),
        num(canvas_height)
    ));

    let mut shadow_body = String::new();
    let mut chips = String::new();
    let mut glyphs = String::from("\t<g>\n");
    let mut overlay = String::new();

    // Two cursors: `cursor` advances by each segment's scaled text width,
    // `pad` accumulates the extra chip padding separately.
    let mut cursor = BORDER_X;
    let mut pad = 0.0;

    for m in &measured {
        let segment = m.segment;
        if segment.text.is_empty() {
            continue;
        }
        let scale = segment.scale;
        let dx = cursor;
        let scale_attr = if scale != 1.0 {
            format!(" scale({})", num(scale))
        } else {
            String::new()
        };

        // Chips centre against a fixed pill height; everything else
        // centres against the whole canvas. Shadows are cast only by
        // non-chip segments.
        let dy;
        if segment.background.is_some() {
            dy = (1.0 - scale / largest_scale) * 12.0;
        } else {
            dy = (1.0 - scale / largest_scale) * canvas_height / 2.0;

            if options.shadow {
                let dsx = num(pad + dx + scale * SHADOW_OFFSET_X);
                let dsy = num(dy + scale * SHADOW_OFFSET_Y);
                shadow_body.push_str(&format!(
                    "\t\t<g transform=\"translate({dsx},{dsy}){scale_attr}\">\n"
                ));
                for placement in &m.chars {
                    if placement.character != ' ' {
                        shadow_body.push_str(&format!(
                            "\t\t\t<use href=\"#{}\" x=\"{}\"/>\n",
                            placement.glyph.name, placement.x
                        ));
                    }
                }
                shadow_body.push_str("\t\t</g>\n");
            }
        }

        match &segment.colour {
            ColourValue::Gradient(stops) => {
                glyphs.push_str(&format!(
                    "\t\t<g transform=\"translate({},{}){}\">\n",
                    num(dx),
                    num(dy),
                    scale_attr
                ));
                glyphs.push_str(&format!(
                    "\t\t\t<animate attributeName=\"fill\" values=\"{}\" dur=\"{}\" repeatCount=\"indefinite\"/>\n",
                    stops.join("; "),
                    GRADIENT_DURATION
                ));
            }
            ColourValue::Solid(hex) => {
                glyphs.push_str(&format!(
                    "\t\t<g fill=\"{}\" transform=\"translate({},{}){}\">\n",
                    hex,
                    num(dx),
                    num(dy),
                    scale_attr
                ));
            }
        }

        if let Some(background) = &segment.background {
            pad += 3.0 * scale;
            let chip_width = m.width * scale - 2.0;
            let chip_height = canvas_height * 0.7;
            let chip_top = (canvas_height - 12.0 - chip_height) / 2.0;
            let outline = format!(
                "m{} {}h{}l4 4v{}l-4 4h-{}l-4-4v-{}z",
                num(pad + dx),
                num(chip_top),
                num(chip_width),
                num(chip_height),
                num(chip_width),
                num(chip_height)
            );
            match background {
                ColourValue::Gradient(stops) => {
                    chips.push_str(&format!("\t\t<path d=\"{outline}\">\n"));
                    chips.push_str(&format!(
                        "\t\t\t<animate attributeName=\"fill\" values=\"{}\" dur=\"{}\" repeatCount=\"indefinite\"/>\n",
                        stops.join(";"),
                        GRADIENT_DURATION
                    ));
                    chips.push_str("\t\t</path>\n");
                }
                ColourValue::Solid(hex) => {
                    chips.push_str(&format!("\t\t<path d=\"{outline}\" fill=\"{hex}\"/>\n"));
                }
            }
        }

        match segment.motion {
            Motion::None => {
                for placement in &m.chars {
                    if placement.character != ' ' {
                        glyphs.push_str(&format!(
                            "\t\t\t<use href=\"#{}\" x=\"{}\"/>\n",
                            placement.glyph.name,
                            num(pad + placement.x as f64)
                        ));
                    }
                }
            }
            motion => {
                let buckets = bucket_characters::<G>(&segment.text);
                let radius = num((scale.sqrt() * 0.6 * 100.0).round() / 100.0);
                let sweep = num(2.0 * radius);
                for (i, bucket) in buckets.iter().enumerate() {
                    let begin = match motion {
                        Motion::Bob => num(-MOTION_DURATION + i as f64 * MOTION_STAGGER),
                        _ => num(i as f64 * MOTION_STAGGER),
                    };
                    glyphs.push_str("\t\t\t<g>\n");
                    glyphs.push_str("\t\t\t\t<g>\n");
                    for placement in bucket {
                        if placement.character != ' ' {
                            glyphs.push_str(&format!(
                                "\t\t\t\t\t<use href=\"#{}\" x=\"{}\"/>\n",
                                placement.glyph.name,
                                num(pad + placement.x as f64)
                            ));
                        }
                    }
                    if motion == Motion::Bob {
                        glyphs.push_str(&format!(
                            "\t\t\t\t\t<animateMotion path=\"m0 0 a{radius} {radius} 0 0 1 {sweep} 0 a{radius} {radius} 0 0 1 -{sweep} 0\" dur=\"{}\" begin=\"{begin}\" repeatCount=\"indefinite\"/>\n",
                            num(MOTION_DURATION)
                        ));
                        glyphs.push_str("\t\t\t\t</g>\n");
                        glyphs.push_str(&format!(
                            "\t\t\t\t<animateMotion path=\"m0 0 a{radius} {radius} 0 0 0 -{sweep} 0 a{radius} {radius} 0 0 0 {sweep} 0\" dur=\"{}\" begin=\"{begin}\" repeatCount=\"indefinite\"/>\n",
                            num(MOTION_DURATION)
                        ));
                        glyphs.push_str("\t\t\t</g>\n");
                    } else {
                        glyphs.push_str(&format!(
                            "\t\t\t\t\t<animateMotion path=\"m0 0 a{radius} {radius} 0 0 1 {sweep} 0\" dur=\"{}\" begin=\"{begin}\" keyTimes=\"0;0.25;1\" keyPoints=\"0;1;1\" repeatCount=\"indefinite\"/>\n",
                            num(MOTION_DURATION)
                        ));
                        glyphs.push_str("\t\t\t\t</g>\n");
                        glyphs.push_str(&format!(
                            "\t\t\t\t<animateMotion path=\"m0 0 a{radius} {radius} 0 0 0 -{sweep} 0\" dur=\"{}\" begin=\"{begin}\" keyTimes=\"0;0.25;1\" keyPoints=\"0;1;1\" repeatCount=\"indefinite\"/>\n",
                            num(MOTION_DURATION)
                        ));
                        glyphs.push_str("\t\t\t</g>\n");
                    }
                }
            }
        }

        if segment.background.is_some() {
            pad += 3.0 * scale;
        }

        glyphs.push_str("\t\t</g>\n");

        if options.selectable {
            let marker = segment.attrs.to_group_string();
            let text_y = num(
                canvas_height * 0.7 - (1.0 - scale / largest_scale) * canvas_height / 5.0,
            );
            let font_size = num(scale * 32.0);
            let escaped = escape_text(&segment.text);
            let preserve = if segment.text.contains(' ') {
                " xml:space=\"preserve\""
            } else {
                ""
            };
            overlay.push_str(&format!(
                "<tspan font-size=\"{font_size}\" lengthAdjust=\"spacingAndGlyphs\" x=\"{}\" y=\"{text_y}\" textLength=\"1\">{}</tspan>",
                num(pad + cursor - 1.0),
                escape_text(&marker)
            ));
            overlay.push_str(&format!(
                "<tspan font-size=\"{font_size}\"{preserve} lengthAdjust=\"spacingAndGlyphs\" x=\"{}\" y=\"{text_y}\" textLength=\"{}\">{escaped}</tspan>",
                num(pad + cursor),
                num(scale * m.width)
            ));
        }

        cursor += scale * m.width;
    }

    let mut doc = SvgBuilder::new();
    doc.push(format!("<!-- {COMMENT_HEADER} -->\n"));
    doc.push(format!("<!--\n\t {input_text}\n\t {plain_text}\n-->\n\n"));
    doc.push(head);
    doc.push(build_defs::<G>(plain_text));
    if options.shadow && !shadow_body.is_empty() {
        doc.push(format!("\t<g fill=\"{SHADOW_COLOUR}\">\n"));
        doc.push(shadow_body);
        doc.push("\t</g>\n");
    }
    if any_chip {
        doc.push("\t<g>\n");
        doc.push(chips);
        doc.push("\t</g>\n");
    }
    doc.push(glyphs);
    doc.push("\t</g>\n");
    if options.selectable {
        doc.push(format!(
            "\t<text font-family=\"{FONT_FAMILY}\" fill=\"transparent\">\n\t\t"
        ));
        doc.push(overlay);
        doc.push("\n\t</text>\n");
    }
    doc.push("</svg>");
    doc.finish()
}

/// Partitions a segment's characters into up to six motion buckets by
/// character index modulo six; offsets stay cumulative across the whole
/// segment so the buckets interleave in place.
fn bucket_characters<G: GlyphSet>(text: &str) -> Vec<Vec<Placement>> {
    let bucket_count = text.chars().count().min(6);
    let mut buckets: Vec<Vec<Placement>> = (0..bucket_count).map(|_| Vec::new()).collect();

    let mut x = 0;
    for (i, character) in text.chars().enumerate() {
        match G::glyph(character) {
            Some(glyph) => {
                buckets[i % 6].push(Placement { character, glyph, x });
                x += glyph.advance;
            }
            None => x += G::FALLBACK_ADVANCE,
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;
    use crate::palette;
    use crate::style::resolve;
    use styled_text_m6x11::M6x11;

    fn styled_doc(input: &str, options: &RenderOptions) -> String {
        let (plain, segments) = parse(input);
        let styled = resolve(&segments, &palette::default_colour(), &[]).unwrap();
        compose_styled::<M6x11>(input, &plain, &styled, options)
    }

    #[test]
    fn raw_mode_ignores_markup() {
        let doc = compose_raw::<M6x11>("{C:red}hi", palette::DEFAULT, &RenderOptions::default());
        // The braces render as glyphs, not as styling.
        assert!(doc.contains("href=\"#braceleft\""));
        assert!(doc.contains("href=\"#braceright\""));
        assert!(!doc.contains(palette::lookup("red").unwrap().flat()));
    }

    #[test]
    fn raw_width_is_border_plus_advances() {
        // "hi" is 14 + 6 wide, plus a 5 unit border per side.
        let doc = compose_raw::<M6x11>("hi", palette::DEFAULT, &RenderOptions::default());
        assert!(doc.contains("viewBox=\"0 0 30 40\""));
    }

    #[test]
    fn spaces_advance_but_never_reference_a_glyph() {
        let doc = compose_raw::<M6x11>("a b", palette::DEFAULT, &RenderOptions::default());
        assert!(!doc.contains("href=\"#space\""));
        // 14 + 12 + 14 advances plus borders.
        assert!(doc.contains("viewBox=\"0 0 50 40\""));
    }

    #[test]
    fn styled_canvas_has_minimum_size() {
        let doc = styled_doc("{C:red}i", &RenderOptions::default());
        assert!(doc.contains("viewBox=\"0 0 40 40\""));
    }

    #[test]
    fn width_grows_with_added_characters() {
        let narrow = styled_doc("{C:red}iiiiii", &RenderOptions::default());
        let wide = styled_doc("{C:red}iiiiiii", &RenderOptions::default());
        assert!(narrow.contains("viewBox=\"0 0 46 40\""));
        assert!(wide.contains("viewBox=\"0 0 52 40\""));
    }

    #[test]
    fn scale_above_one_grows_the_canvas_height() {
        // "big" is 34 wide, so 34 x 1.5 plus borders, with height 1.5 x 40.
        let doc = styled_doc("{S:1.5}big", &RenderOptions::default());
        assert!(doc.contains("viewBox=\"0 0 61 60\""));
    }

    #[test]
    fn chips_pad_width_and_sit_in_their_own_layer() {
        let plain = styled_doc("{C:red}ab", &RenderOptions::default());
        let chipped = styled_doc("{X:red}ab", &RenderOptions::default());
        assert!(!plain.contains("l4 4v"));
        // Chip path with chamfered corners, drawn before the glyph layer.
        assert!(chipped.contains("l4 4v"));
        let chip_at = chipped.find("l4 4v").unwrap();
        let glyph_at = chipped.find("<use").unwrap();
        assert!(chip_at < glyph_at);
    }

    #[test]
    fn shadows_skip_chip_segments() {
        let options = RenderOptions {
            shadow: true,
            ..RenderOptions::default()
        };
        let doc = styled_doc("{X:red}ab", &options);
        assert!(!doc.contains(SHADOW_COLOUR));

        let doc = styled_doc("{C:red}ab", &options);
        assert!(doc.contains(SHADOW_COLOUR));
    }

    #[test]
    fn gradient_colour_animates_the_fill() {
        let doc = styled_doc("{C:edition}shiny", &RenderOptions::default());
        assert!(doc.contains("<animate attributeName=\"fill\""));
        assert!(doc.contains("#E5D7EC; #FFFEC6"));
    }

    #[test]
    fn bob_motion_splits_into_staggered_buckets() {
        let doc = styled_doc("{E:1}abcdefgh", &RenderOptions::default());
        // Eight characters fold into six buckets, each with its own
        // negative phase offset.
        assert_eq!(doc.matches("begin=\"-2.4\"").count(), 2);
        assert!(doc.contains("begin=\"-2\""));
        assert!(doc.contains("begin=\"-0.4\""));
        assert!(!doc.contains("keyTimes"));
    }

    #[test]
    fn pop_motion_uses_keyframe_timing() {
        let doc = styled_doc("{E:2}ab", &RenderOptions::default());
        assert!(doc.contains("keyTimes=\"0;0.25;1\""));
        assert!(doc.contains("keyPoints=\"0;1;1\""));
        assert!(doc.contains("begin=\"0\""));
        assert!(doc.contains("begin=\"0.4\""));
    }

    #[test]
    fn selectable_overlay_reserialises_control_groups() {
        let options = RenderOptions {
            selectable: true,
            ..RenderOptions::default()
        };
        let doc = styled_doc("{C:red}+1 Mult", &options);
        assert!(doc.contains(">{C:red}</tspan>"));
        assert!(doc.contains("xml:space=\"preserve\""));
        assert!(doc.contains(">+1 Mult</tspan>"));
    }

    #[test]
    fn overlay_escapes_xml_specials() {
        let options = RenderOptions {
            selectable: true,
            ..RenderOptions::default()
        };
        let doc = styled_doc("{C:red}<&>", &options);
        assert!(doc.contains("&lt;&amp;&gt;"));
    }

    #[test]
    fn empty_text_segments_are_skipped_but_measured() {
        // The first group owns no text but its chip still widens the
        // canvas and forces the chip layer.
        let doc = styled_doc("{X:red}{C:blue}abc", &RenderOptions::default());
        let plain = styled_doc("{C:blue}abc", &RenderOptions::default());
        assert!(doc.contains("viewBox=\"0 0 58 40\""));
        assert!(plain.contains("viewBox=\"0 0 52 40\""));
    }

    #[test]
    fn output_is_deterministic() {
        let options = RenderOptions {
            shadow: true,
            selectable: true,
            ..RenderOptions::default()
        };
        let a = styled_doc("{C:edition,E:1}Polychrome {X:red}chip", &options);
        let b = styled_doc("{C:edition,E:1}Polychrome {X:red}chip", &options);
        assert_eq!(a, b);
    }

    #[test]
    fn display_size_only_affects_the_svg_element() {
        let options = RenderOptions {
            display_width: 256.0,
            display_height: 64.0,
            ..RenderOptions::default()
        };
        let doc = styled_doc("{C:red}hi", &options);
        assert!(doc.contains("height=\"64\" width=\"256\" viewBox="));
    }
}
