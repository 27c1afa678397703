//! Circular colour-swatch icon generation.
//!
//! A companion to the text renderer: iterates the fixed swatch tables
//! and writes one small icon document per entry, including the two
//! animated icons whose fill cycles through sinusoidally sampled stops.

use std::f64::consts::PI;

use crate::emit::write_svg;
use crate::error::Error;

/// Display height of every icon; the view box stays 16x16.
const ICON_HEIGHT: u32 = 32;
/// Stops sampled for the animated icons.
const ANIM_FRAMES: usize = 8;
/// Where the icon files land, relative to the working directory.
pub const OUTPUT_DIR: &str = "colour-icons";

const VANILLA: &[(&str, &str)] = &[
    ("G.C.RED", "#fe5f55ff"),
    ("G.C.MULT", "#fe5f55ff"),
    ("G.C.BLUE", "#009dffff"),
    ("G.C.CHIPS", "#009dffff"),
    ("G.C.GREEN", "#4bc292ff"),
    ("G.C.MONEY", "#f3b958ff"),
    ("G.C.GOLD", "#eac058ff"),
    ("G.C.FILTER", "#ff9a00ff"),
    ("G.C.PURPLE", "#8867a5ff"),
    ("G.C.WHITE", "#ffffffff"),
    ("G.C.UI.TEXT_INACTIVE", "#88888899"),
    ("G.C.SECONDARY_SET.Tarot", "#a782d1ff"),
    ("G.C.SECONDARY_SET.Planet", "#13afceff"),
    ("G.C.SECONDARY_SET.Spectral", "#4584faff"),
    ("G.C.RARITY[4]", "#b26cbbff"),
    ("G.C.SECONDARY_SET.Enhanced", "#8389ddff"),
    ("G.C.UI.TEXT_DARK", "#4f6367ff"),
];

const RARITIES: &[(&str, &str)] = &[
    ("G.C.RARITY.Common", "#009dffff"),
    ("G.C.RARITY.Uncommon", "#4bc292ff"),
    ("G.C.RARITY.Rare", "#fe5f55ff"),
    ("G.C.RARITY.Legendary", "#b26cbbff"),
];

const SUITS: &[(&str, (&str, &str))] = &[
    ("G.C.SUITS.Hearts", ("#f03464ff", "#f83b2fff")),
    ("G.C.SUITS.Diamonds", ("#f06b3fff", "#e29000ff")),
    ("G.C.SUITS.Spades", ("#403995ff", "#4f31b9ff")),
    ("G.C.SUITS.Clubs", ("#235955ff", "#008ee6ff")),
];

fn solid_icon(fill: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{ICON_HEIGHT}\" viewBox=\"0 0 16 16\">\n\
         \t<circle fill=\"{fill}\" cx=\"8\" cy=\"8\" r=\"8\"/>\n\
         </svg>"
    )
}

/// Two half-circle paths, left and right.
fn halved_icon(left: &str, right: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{ICON_HEIGHT}\" viewBox=\"0 0 16 16\">\n\
         \t<path fill=\"{left}\" d=\"M 8 0 a 1 1 0 1 0 0 16 Z\"/>\n\
         \t<path fill=\"{right}\" d=\"M 8 0 a 1 1 0 0 1 0 16 Z\"/>\n\
         </svg>"
    )
}

/// A circle whose fill loops through `stops`, closed back to the first
/// stop for a seamless cycle.
fn cycling_icon(stops: &[(u8, u8, u8)]) -> String {
    let mut values: Vec<String> = stops.iter().map(|stop| hex(*stop)).collect();
    if let Some(first) = values.first().cloned() {
        values.push(first);
    }
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{ICON_HEIGHT}\" viewBox=\"0 0 16 16\">\n\
         \t<circle cx=\"8\" cy=\"8\" r=\"8\">\n\
         \t\t<animate attributeName=\"fill\" values=\"{}\" dur=\"4s\" repeatCount=\"indefinite\"/>\n\
         \t</circle>\n\
         </svg>",
        values.join(";")
    )
}

/// Pale shimmering cycle used for the edition icon.
pub fn edition_stops(frames: usize) -> Vec<(u8, u8, u8)> {
    let angle = (PI * 2.0) / frames as f64;
    (0..frames)
        .map(|i| {
            let phase = i as f64 * angle;
            let r = channel(0.7 + 0.2 * (1.0 + phase.sin()));
            let b = channel(0.7 + 0.2 * (1.0 + (phase + 3.0).sin()));
            let g = channel(0.7 + 0.2 * (1.0 + (phase + 6.0).sin()));
            (r, g, b)
        })
        .collect()
}

/// Deeper red/blue cycle used for the dark edition icon.
pub fn dark_edition_stops(frames: usize) -> Vec<(u8, u8, u8)> {
    let angle = (PI * 2.0) / frames as f64;
    (0..frames)
        .map(|i| {
            let phase = i as f64 * angle;
            let r = channel(0.6 + 0.2 * phase.sin());
            let b = channel(0.6 + 0.2 * (1.0 - phase.sin()));
            let g = r.min(b);
            (r, g, b)
        })
        .collect()
}

fn channel(value: f64) -> u8 {
    (255.0 * value).min(255.0) as u8
}

fn hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Writes every swatch icon into `out_dir`.
pub fn write_all(out_dir: &str) -> Result<(), Error> {
    for (name, fill) in VANILLA.iter().chain(RARITIES) {
        write_svg(&solid_icon(fill), &format!("{out_dir}/{name}"))?;
    }
    for (name, (left, right)) in SUITS {
        write_svg(&halved_icon(left, right), &format!("{out_dir}/{name}"))?;
    }
    write_svg(
        &cycling_icon(&edition_stops(ANIM_FRAMES)),
        &format!("{out_dir}/G.C.EDITION"),
    )?;
    write_svg(
        &cycling_icon(&dark_edition_stops(ANIM_FRAMES)),
        &format!("{out_dir}/G.C.DARK_EDITION"),
    )?;
    log::info!(
        "wrote {} swatch icons to {out_dir}",
        VANILLA.len() + RARITIES.len() + SUITS.len() + 2
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_sampling_is_deterministic_and_capped() {
        let a = edition_stops(ANIM_FRAMES);
        let b = edition_stops(ANIM_FRAMES);
        assert_eq!(a, b);
        assert_eq!(a.len(), ANIM_FRAMES);

        // Phase 0 puts the red channel at exactly 0.9 brightness.
        assert_eq!(a[0].0, 229);

        for (r, g, b) in dark_edition_stops(ANIM_FRAMES) {
            assert_eq!(g, r.min(b));
        }
    }

    #[test]
    fn cycling_icon_closes_the_loop() {
        let stops = edition_stops(4);
        let icon = cycling_icon(&stops);
        let first = hex(stops[0]);
        assert!(icon.starts_with(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{ICON_HEIGHT}\""
        )));
        assert!(icon.contains(&format!("values=\"{first};")));
        assert!(icon.contains(&format!(";{first}\"")));
    }

    #[test]
    fn halved_icon_draws_two_half_circles() {
        let icon = halved_icon("#f03464ff", "#f83b2fff");
        assert_eq!(icon.matches("<path").count(), 2);
        assert!(icon.contains("a 1 1 0 1 0 0 16"));
        assert!(icon.contains("a 1 1 0 0 1 0 16"));
    }

    #[test]
    fn writes_one_file_per_table_entry() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("icons");
        write_all(out.to_str().unwrap()).unwrap();

        let count = std::fs::read_dir(&out).unwrap().count();
        assert_eq!(count, VANILLA.len() + RARITIES.len() + SUITS.len() + 2);
        assert!(out.join("G.C.EDITION.svg").exists());
        assert!(out.join("G.C.SUITS.Hearts.svg").exists());
    }
}
