//! Error type shared by the catalogs, the note store and the spellers
//!
//! Only data-dependent failures are reported here. Indexing mistakes made
//! by calling code (degree out of range, querying an undefined Ton) panic.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpellError {
    #[error("unknown mode name: {0}")]
    UnknownMode(String),
    #[error("unknown note name: {0}")]
    UnknownNoteName(String),
    #[error("unknown accidental: {0}")]
    UnknownAccidental(String),
    #[error("no tonality index of size {0}")]
    UnsupportedTonCount(usize),
    #[error("pitch {0} outside 0..=128")]
    InvalidPitch(i32),
    #[error("note store is closed")]
    StoreClosed,
    #[error("note index {index} outside active range [{first}, {stop})")]
    OutOfRange {
        index: usize,
        first: usize,
        stop: usize,
    },
    #[error("note {0} has not been spelled")]
    Unspelled(usize),
    #[error("pitch {pitch} cannot be spelled with letter {name}")]
    Unnameable { pitch: u8, name: char },
    #[error("config error: {0}")]
    Config(String),
    #[error("midi read error: {0}")]
    Midi(String),
}

pub type Result<T> = std::result::Result<T, SpellError>;

impl From<serde_json::Error> for SpellError {
    fn from(e: serde_json::Error) -> Self {
        SpellError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for SpellError {
    fn from(e: serde_yaml::Error) -> Self {
        SpellError::Config(e.to_string())
    }
}

impl From<std::io::Error> for SpellError {
    fn from(e: std::io::Error) -> Self {
        SpellError::Config(e.to_string())
    }
}

impl From<midly::Error> for SpellError {
    fn from(e: midly::Error) -> Self {
        SpellError::Midi(e.to_string())
    }
}
