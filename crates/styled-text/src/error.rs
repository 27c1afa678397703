use thiserror::Error;

/// Errors surfaced while converting markup to SVG.
#[derive(Error, Debug)]
pub enum Error {
    /// A `V:` or `B:` modifier referenced a colour slot outside the
    /// caller-supplied list. Fatal: the conversion aborts before any
    /// output is written.
    #[error("colour index {index} out of range ({len} caller colour(s) provided)")]
    ColourIndex { index: i32, len: usize },

    /// A colour argument was neither a palette key nor a 6/8 digit hex
    /// string.
    #[error("unknown colour: {0}")]
    UnknownColour(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
