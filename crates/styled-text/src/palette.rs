//! The named colour palette shared by every conversion.

use crate::error::Error;

/// Fill of the light-theme base colour, also the fallback for unknown
/// `C:` keys.
pub const DEFAULT: &str = "#4F6367FF";
/// Fill of the dark-theme base colour.
pub const WHITE: &str = "#FFFFFFFF";

/// A resolved colour: either a flat fill or a looping gradient cycle.
///
/// Gradient values render as an `animate` element cycling through the
/// stops, so downstream code branches on this distinction.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourValue {
    Solid(String),
    Gradient(Vec<String>),
}

impl ColourValue {
    fn solid(hex: &str) -> Self {
        ColourValue::Solid(hex.to_owned())
    }

    fn gradient(stops: &[&str]) -> Self {
        ColourValue::Gradient(stops.iter().map(|stop| (*stop).to_owned()).collect())
    }

    /// Flat fill for contexts that cannot animate a gradient cycle.
    pub fn flat(&self) -> &str {
        match self {
            ColourValue::Solid(hex) => hex,
            ColourValue::Gradient(stops) => stops.first().map(String::as_str).unwrap_or(""),
        }
    }
}

/// The light-theme base colour.
pub fn default_colour() -> ColourValue {
    ColourValue::solid(DEFAULT)
}

/// The dark-theme base colour.
pub fn white_colour() -> ColourValue {
    ColourValue::solid(WHITE)
}

/// Looks up a named palette colour.
pub fn lookup(name: &str) -> Option<ColourValue> {
    let value = match name {
        "red" | "mult" | "rare" => ColourValue::solid("#FE5F55FF"),
        "blue" | "chips" | "common" => ColourValue::solid("#009DFFFF"),
        "green" | "uncommon" => ColourValue::solid("#4BC292FF"),
        "money" => ColourValue::solid("#F3B958FF"),
        "gold" => ColourValue::solid("#EAC058FF"),
        "attention" => ColourValue::solid("#FF9A00FF"),
        "purple" => ColourValue::solid("#8867A5FF"),
        "white" => ColourValue::solid(WHITE),
        "inactive" => ColourValue::solid("#88888899"),
        "spades" => ColourValue::solid("#403995FF"),
        "hearts" => ColourValue::solid("#F03464FF"),
        "clubs" => ColourValue::solid("#235955FF"),
        "diamonds" => ColourValue::solid("#F06B3FFF"),
        "tarot" => ColourValue::solid("#A782D1FF"),
        "planet" => ColourValue::solid("#13AFCEFF"),
        "spectral" => ColourValue::solid("#4584FAFF"),
        "legendary" => ColourValue::solid("#B26CBBFF"),
        "enhanced" => ColourValue::solid("#8389DDFF"),
        "edition" => ColourValue::gradient(&[
            "#E5D7EC", "#FFFEC6", "#FFFFB3", "#FFFFBC", "#E5F3DE", "#C1CCFF", "#B2B4FF",
            "#C1B8FF", "#E5D7EC",
        ]),
        "dark_edition" => ColourValue::gradient(&[
            "#9999CC", "#BDA7A7", "#CC9999", "#BDA7A7", "#9999CB", "#7474F0", "#6565FF",
            "#7474F0", "#9999CC",
        ]),
        "default" => ColourValue::solid(DEFAULT),
        _ => return None,
    };
    Some(value)
}

/// Parses a command-line colour argument: a palette key, or a 6/8 digit
/// hex string with or without a leading `#`.
pub fn parse_colour(input: &str) -> Result<ColourValue, Error> {
    let input = input.trim();
    if let Some(digits) = input.strip_prefix('#') {
        if is_hex_colour(digits) {
            return Ok(ColourValue::solid(input));
        }
        return Err(Error::UnknownColour(input.to_owned()));
    }
    if let Some(value) = lookup(input) {
        return Ok(value);
    }
    if is_hex_colour(input) {
        return Ok(ColourValue::Solid(format!("#{input}")));
    }
    Err(Error::UnknownColour(input.to_owned()))
}

fn is_hex_colour(digits: &str) -> bool {
    matches!(digits.len(), 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_aliases_share_values() {
        assert_eq!(lookup("red"), lookup("mult"));
        assert_eq!(lookup("blue"), lookup("chips"));
        assert_eq!(lookup("unknown"), None);
    }

    #[test]
    fn edition_is_a_gradient() {
        match lookup("edition").unwrap() {
            ColourValue::Gradient(stops) => {
                assert_eq!(stops.len(), 9);
                assert_eq!(stops.first(), stops.last());
            }
            other => panic!("expected gradient, got {other:?}"),
        }
    }

    #[test]
    fn parse_colour_accepts_hex_and_keys() {
        assert_eq!(
            parse_colour("fe5f55ff").unwrap(),
            ColourValue::Solid("#fe5f55ff".to_owned())
        );
        assert_eq!(
            parse_colour("#FE5F55").unwrap(),
            ColourValue::Solid("#FE5F55".to_owned())
        );
        assert_eq!(parse_colour(" money ").unwrap(), lookup("money").unwrap());
    }

    #[test]
    fn parse_colour_rejects_bad_input() {
        assert!(matches!(
            parse_colour("abcd"),
            Err(Error::UnknownColour(_))
        ));
        assert!(matches!(
            parse_colour("#12345"),
            Err(Error::UnknownColour(_))
        ));
        assert!(matches!(
            parse_colour("not a colour"),
            Err(Error::UnknownColour(_))
        ));
    }
}
