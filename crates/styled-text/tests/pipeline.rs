//! End-to-end pipeline properties: parse -> resolve -> compose -> write.

use styled_text::{ColourValue, Error, RenderOptions, markup, palette, render};
use styled_text_m6x11::M6x11;

fn selectable() -> RenderOptions {
    RenderOptions {
        selectable: true,
        ..RenderOptions::default()
    }
}

/// Pulls the visible content of every overlay tspan, in document order.
fn overlay_texts(doc: &str) -> Vec<String> {
    doc.split("<tspan")
        .skip(1)
        .map(|part| {
            let start = part.find('>').unwrap() + 1;
            let end = part.find("</tspan>").unwrap();
            part[start..end]
                .replace("&amp;", "&")
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&apos;", "'")
                .replace("&quot;", "\"")
        })
        .collect()
}

fn viewbox_width(doc: &str) -> f64 {
    let start = doc.find("viewBox=\"").unwrap() + "viewBox=\"".len();
    let tail = &doc[start..];
    let end = tail.find('"').unwrap();
    let fields: Vec<&str> = tail[..end].split(' ').collect();
    fields[2].parse().unwrap()
}

#[test]
fn plain_text_round_trips_through_the_parser() {
    let (plain, segments) = markup::parse("just words");
    assert_eq!(plain, "just words");
    assert_eq!(segments.len(), 1);
    assert!(segments[0].attrs.is_empty());
}

#[test]
fn overlay_reconstructs_the_original_markup() {
    let input = "{C:red}abc{E:1}def";
    let doc = render::<M6x11>(input, palette::DEFAULT, &[], &selectable()).unwrap();
    assert_eq!(overlay_texts(&doc).concat(), input);
}

#[test]
fn overlay_marks_unstyled_segments_with_empty_groups() {
    let doc = render::<M6x11>("lead{C:red}hot", palette::DEFAULT, &[], &selectable()).unwrap();
    assert_eq!(overlay_texts(&doc).concat(), "{}lead{C:red}hot");
}

#[test]
fn canvas_width_grows_with_text() {
    let options = RenderOptions::default();
    let mut text = String::from("{C:red}wwwww");
    let mut last = viewbox_width(
        &render::<M6x11>(&text, palette::DEFAULT, &[], &options).unwrap(),
    );
    for _ in 0..4 {
        text.push('w');
        let width = viewbox_width(
            &render::<M6x11>(&text, palette::DEFAULT, &[], &options).unwrap(),
        );
        assert!(width > last);
        last = width;
    }
}

#[test]
fn caller_colours_are_selected_by_one_based_index() {
    let caller = vec![ColourValue::Solid("#112233FF".to_owned())];
    let doc = render::<M6x11>(
        "{V:1}pick",
        palette::DEFAULT,
        &caller,
        &RenderOptions::default(),
    )
    .unwrap();
    assert!(doc.contains("fill=\"#112233FF\""));
}

#[test]
fn bad_caller_index_aborts_the_conversion() {
    let caller = vec![ColourValue::Solid("#112233FF".to_owned())];
    for input in ["{V:0}x", "{V:2}x", "{B:5}x"] {
        let result = render::<M6x11>(input, palette::DEFAULT, &caller, &RenderOptions::default());
        assert!(matches!(result, Err(Error::ColourIndex { .. })), "{input}");
    }
}

#[test]
fn identical_runs_are_byte_identical() {
    let options = RenderOptions {
        shadow: true,
        selectable: true,
        ..RenderOptions::default()
    };
    let caller = vec![ColourValue::Solid("#112233FF".to_owned())];
    let input = "{C:edition}Foil {X:red,E:2}burn{V:1} end";
    let a = render::<M6x11>(input, palette::DEFAULT, &caller, &options).unwrap();
    let b = render::<M6x11>(input, palette::DEFAULT, &caller, &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn themes_differ_only_in_fill() {
    let input = "plain words";
    let options = RenderOptions::default();
    let light = render::<M6x11>(input, palette::DEFAULT, &[], &options).unwrap();
    let dark = render::<M6x11>(input, palette::WHITE, &[], &options).unwrap();
    assert_ne!(light, dark);
    assert_eq!(
        light.replace(palette::DEFAULT, palette::WHITE),
        dark
    );
}

#[test]
fn documents_embed_their_provenance() {
    let doc = render::<M6x11>(
        "{C:blue}Chips",
        palette::DEFAULT,
        &[],
        &RenderOptions::default(),
    )
    .unwrap();
    // Original input and derived plain text both appear in the header
    // comment, before any markup.
    let input_at = doc.find("{C:blue}Chips").unwrap();
    let svg_at = doc.find("<svg").unwrap();
    assert!(input_at < svg_at);
    assert!(doc.contains("\t Chips\n"));
}

#[test]
fn written_files_match_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out/banner");
    let doc = render::<M6x11>(
        "{C:green}$4",
        palette::DEFAULT,
        &[],
        &RenderOptions::default(),
    )
    .unwrap();
    let path = styled_text::emit::write_svg(&doc, target.to_str().unwrap()).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), doc);
}
