//! Resolves parsed control attributes into concrete styling.
//!
//! Resolution is pure and per-segment. Recoverable problems (unknown
//! colour keys, non-numeric values) degrade to neutral defaults; an
//! out-of-range caller colour index is fatal for the whole conversion.

use crate::error::Error;
use crate::markup::{ControlAttrs, Segment};
use crate::palette::{self, ColourValue};

/// Per-character motion applied to a styled segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    None,
    /// Continuous circular bob.
    Bob,
    /// Discrete jump-then-hold pop.
    Pop,
}

/// A segment with its styling fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    pub attrs: ControlAttrs,
    pub text: String,
    pub colour: ColourValue,
    pub background: Option<ColourValue>,
    pub motion: Motion,
    pub scale: f64,
}

/// Resolves every segment independently against the palette and the
/// caller-supplied colour list.
pub fn resolve(
    segments: &[Segment],
    default_colour: &ColourValue,
    caller_colours: &[ColourValue],
) -> Result<Vec<StyledSegment>, Error> {
    segments
        .iter()
        .map(|segment| resolve_segment(segment, default_colour, caller_colours))
        .collect()
}

fn resolve_segment(
    segment: &Segment,
    default_colour: &ColourValue,
    caller_colours: &[ColourValue],
) -> Result<StyledSegment, Error> {
    let mut colour = default_colour.clone();
    let mut background = None;

    if let Some(name) = segment.attrs.get('C') {
        // Unknown keys deliberately fall back to the palette's own
        // default, not the caller's theme colour.
        colour = palette::lookup(name).unwrap_or_else(palette::default_colour);
    }
    if let Some(raw) = segment.attrs.get('V') {
        colour = match parse_int(raw) {
            Some(index) => caller_slot(caller_colours, index)?.clone(),
            None => default_colour.clone(),
        };
    }

    if let Some(name) = segment.attrs.get('X') {
        background = palette::lookup(name);
    }
    if let Some(raw) = segment.attrs.get('B') {
        background = match parse_int(raw) {
            Some(index) => Some(caller_slot(caller_colours, index)?.clone()),
            None => None,
        };
    }

    let motion = match segment.attrs.get('E').and_then(parse_int) {
        Some(1) => Motion::Bob,
        Some(2) => Motion::Pop,
        _ => Motion::None,
    };

    let scale = segment
        .attrs
        .get('S')
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .unwrap_or(1.0);

    Ok(StyledSegment {
        attrs: segment.attrs.clone(),
        text: segment.text.clone(),
        colour,
        background,
        motion,
        scale,
    })
}

fn parse_int(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// 1-based lookup into the caller colour list; anything outside
/// `1..=len` is an error rather than a clamp.
fn caller_slot<'a>(colours: &'a [ColourValue], index: i32) -> Result<&'a ColourValue, Error> {
    usize::try_from(index)
        .ok()
        .filter(|i| (1..=colours.len()).contains(i))
        .map(|i| &colours[i - 1])
        .ok_or(Error::ColourIndex {
            index,
            len: colours.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;

    fn resolve_one(input: &str, caller: &[ColourValue]) -> Result<StyledSegment, Error> {
        let (_, segments) = parse(input);
        let styled = resolve(&segments, &palette::default_colour(), caller)?;
        Ok(styled.into_iter().next().unwrap())
    }

    #[test]
    fn named_colour_resolves_from_palette() {
        let styled = resolve_one("{C:red}x", &[]).unwrap();
        assert_eq!(styled.colour, palette::lookup("red").unwrap());
    }

    #[test]
    fn unknown_colour_key_uses_palette_default() {
        let styled = resolve_one("{C:nope}x", &[]).unwrap();
        assert_eq!(styled.colour, palette::default_colour());
    }

    #[test]
    fn caller_index_is_one_based() {
        let caller = vec![ColourValue::Solid("#112233FF".to_owned())];
        let styled = resolve_one("{V:1}x", &caller).unwrap();
        assert_eq!(styled.colour, caller[0]);
    }

    #[test]
    fn out_of_range_index_is_fatal() {
        let caller = vec![ColourValue::Solid("#112233FF".to_owned())];
        assert!(matches!(
            resolve_one("{V:2}x", &caller),
            Err(Error::ColourIndex { index: 2, len: 1 })
        ));
        assert!(matches!(
            resolve_one("{V:0}x", &caller),
            Err(Error::ColourIndex { index: 0, len: 1 })
        ));
        assert!(matches!(
            resolve_one("{B:9}x", &caller),
            Err(Error::ColourIndex { index: 9, len: 1 })
        ));
    }

    #[test]
    fn non_numeric_index_falls_back() {
        let styled = resolve_one("{V:abc}x", &[]).unwrap();
        assert_eq!(styled.colour, palette::default_colour());

        // A bad B: clears any background the X: set.
        let styled = resolve_one("{X:red,B:abc}x", &[]).unwrap();
        assert_eq!(styled.background, None);
    }

    #[test]
    fn background_resolves_from_palette_or_not_at_all() {
        let styled = resolve_one("{X:gold}x", &[]).unwrap();
        assert_eq!(styled.background, palette::lookup("gold"));

        let styled = resolve_one("{X:nope}x", &[]).unwrap();
        assert_eq!(styled.background, None);
    }

    #[test]
    fn motion_parses_known_modes_only() {
        assert_eq!(resolve_one("{E:1}x", &[]).unwrap().motion, Motion::Bob);
        assert_eq!(resolve_one("{E:2}x", &[]).unwrap().motion, Motion::Pop);
        assert_eq!(resolve_one("{E:3}x", &[]).unwrap().motion, Motion::None);
        assert_eq!(resolve_one("{E:wat}x", &[]).unwrap().motion, Motion::None);
        assert_eq!(resolve_one("plain", &[]).unwrap().motion, Motion::None);
    }

    #[test]
    fn scale_defaults_and_degrades_gracefully() {
        assert_eq!(resolve_one("{S:0.8}x", &[]).unwrap().scale, 0.8);
        assert_eq!(resolve_one("{S:wat}x", &[]).unwrap().scale, 1.0);
        assert_eq!(resolve_one("plain", &[]).unwrap().scale, 1.0);
    }
}
