//! Error types for roster loading.

use thiserror::Error;

/// Errors raised while reading or parsing a roster.
///
/// Line numbers are 1-based and refer to the raw input, blank lines
/// included.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster is empty, expected a person count on the first line")]
    MissingCount,

    #[error("line {line}: expected a person count, found {found:?}")]
    InvalidCount { line: usize, found: String },

    #[error("roster declares {expected} people but only {found} were listed")]
    MissingPeople { expected: usize, found: usize },

    #[error("line {line}: malformed person record: {reason}")]
    MalformedPerson { line: usize, reason: &'static str },

    #[error("line {line}: malformed friendship {found:?}, expected `name|name`")]
    MalformedFriendship { line: usize, found: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
