//! Error types

use thiserror::Error;

/// Errors returned while turning a message into codewords.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested character encoding is not known.
    #[error("unsupported character encoding: {name}")]
    UnsupportedEncoding { name: String },
    /// A character that has to be byte compacted has no representation in
    /// the selected character encoding.
    #[error("character {ch:?} at position {position} cannot be encoded")]
    UnencodableCharacter { ch: char, position: usize },
    /// ECI designators above 811799 cannot be expressed with codewords.
    #[error("ECI designator {0} is out of range")]
    EciOutOfRange(u32),
    /// The payload of a `url(data:...)` message cannot be decoded.
    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),
}

pub type Result<T> = core::result::Result<T, Error>;
