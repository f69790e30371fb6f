//! Contains the `ParseError` and `TimestampError` types for the library.
use crate::token::TokenKind;
use std::num::ParseIntError;
use thiserror::Error;

/// The primary error type for all parsing operations.
///
/// Parsing stops at the first error, so there is never more than one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The current token does not fit the grammar at this point.
    #[error("expected {expected}, got {found} at line {line}, column {column}")]
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind that was actually found.
        found: TokenKind,
        /// The line (1-indexed) of the offending token.
        line: usize,
        /// The column (1-indexed, 0 for boundary tokens) of the offending token.
        column: usize,
    },
    /// An `INDEX` literal that is not a valid integer.
    #[error(transparent)]
    InvalidIndex(#[from] ParseIntError),
    /// A `TIMESTAMP` literal that is not a valid `HH:MM:SS,mmm` time.
    #[error(transparent)]
    InvalidTimestamp(#[from] TimestampError),
    /// The input was rejected before tokenizing.
    #[error("input of {size} bytes exceeds maximum size limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// Failure to convert a timestamp literal into a time of day.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimestampError {
    /// The literal is not laid out as `HH:MM:SS,mmm`.
    #[error("timestamp {literal:?} does not match layout HH:MM:SS,mmm")]
    Layout { literal: String },
    /// The seconds field is above 59. chrono would read `60` as a leap second.
    #[error("timestamp {literal:?} has second out of range")]
    SecondOutOfRange { literal: String },
    /// The layout is right but a field is out of range (e.g. hour 25).
    #[error(transparent)]
    OutOfRange(#[from] chrono::ParseError),
}
