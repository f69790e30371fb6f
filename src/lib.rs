//! # rill-srt
//!
//! `rill-srt` is a fast, 100% safe parser for SubRip (`.srt`) subtitle files,
//! built from scratch in pure Rust.
//!
//! It turns the text of an SRT document into an ordered list of [`Cue`]s
//! (index, start time, end time, text). Malformed input is rejected at the
//! first problem with the offending token kind and its line and column.
//!
//! ## Key Features
//!
//! * **100% Safe Rust:** Contains no `unsafe` code.
//! * **Streaming Parser:** [`CueParser`] is an `Iterator` that yields one
//!   cue at a time and never materializes the token stream.
//! * **Byte-based Tokenizer:** A branchless lookup table classifies bytes and
//!   `memchr` finds line ends.
//! * **Structured Errors:** [`ParseError`] carries the expected and found
//!   token kinds and the position, not just a message.
//!
//! ## Quick Start
//!
//! ```
//! use rill_srt::parse;
//!
//! let srt = "1\n00:00:01,123 --> 00:00:02,456\nHello\nworld\n";
//! let cues = parse(srt).unwrap();
//!
//! assert_eq!(cues.len(), 1);
//! assert_eq!(cues[0].index, 1);
//! assert_eq!(cues[0].text, "Hello\nworld");
//! ```
//!
//! ## Errors
//!
//! ```
//! use rill_srt::parse;
//!
//! let err = parse("-->").unwrap_err();
//! assert_eq!(err.to_string(), "expected INDEX, got ARROW at line 1, column 1");
//! ```

/// Contains the `Cue` struct returned by the parser.
pub mod cue;
/// Contains the `ParseError` and `TimestampError` types.
pub mod error;
/// Contains the streaming `CueParser` and `parse_timestamp`.
pub mod parser;
/// Contains the `TokenKind` enum reported in `ParseError`.
pub mod token;

/// The internal, byte-based tokenizer (lexer).
/// This module is private to the crate.
mod tokenizer;

pub use cue::Cue;
pub use error::{ParseError, TimestampError};
pub use parser::{parse_timestamp, CueParser};
pub use token::TokenKind;

// --- Constants ---
/// The maximum allowed size of an input document (10MB).
pub const MAX_SRT_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Parses a whole SRT document into its cues.
///
/// Parsing is all-or-nothing: either every cue is returned, in file order,
/// or the first error is returned and no cues at all.
///
/// # Errors
/// * `ParseError::InputTooLarge` if `input` exceeds [`MAX_SRT_SIZE_BYTES`].
/// * `ParseError::UnexpectedToken` on the first grammar violation.
/// * `ParseError::InvalidIndex` / `ParseError::InvalidTimestamp` when a
///   literal cannot be converted.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use rill_srt::parse;
///
/// let cues = parse("3\n00:00:03,123 --> 00:00:04,456\nSingle line").unwrap();
/// assert_eq!(cues[0].index, 3);
/// assert_eq!(cues[0].start, NaiveTime::from_hms_milli_opt(0, 0, 3, 123).unwrap());
/// ```
pub fn parse(input: &str) -> Result<Vec<Cue>, ParseError> {
    parse_streaming(input)?.collect()
}

/// Creates a `CueParser` over `input`, yielding cues lazily.
///
/// # Errors
/// Returns `ParseError::InputTooLarge` if the input exceeds
/// [`MAX_SRT_SIZE_BYTES`] *before* parsing begins.
///
/// # Examples
/// ```
/// use rill_srt::parse_streaming;
///
/// let srt = "1\n00:00:01,000 --> 00:00:02,000\nA\n\n2\n00:00:03,000 --> 00:00:04,000\nB";
/// let mut parser = parse_streaming(srt).unwrap();
///
/// assert_eq!(parser.next().unwrap().unwrap().text, "A");
/// assert_eq!(parser.next().unwrap().unwrap().text, "B");
/// assert!(parser.next().is_none());
/// ```
pub fn parse_streaming(input: &str) -> Result<CueParser<'_>, ParseError> {
    check_size(input, MAX_SRT_SIZE_BYTES)?;
    Ok(CueParser::new(input))
}

fn check_size(input: &str, limit: usize) -> Result<(), ParseError> {
    if input.len() > limit {
        return Err(ParseError::InputTooLarge {
            size: input.len(),
            limit,
        });
    }
    Ok(())
}
