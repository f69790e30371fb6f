//! Contains the `CueParser` and the timestamp conversion it relies on.
//!
//! The parser pulls `Token`s from the `Tokenizer` one at a time, keeping
//! two of them alive (the current token and one of lookahead), and checks
//! them against the SRT cue grammar:
//!
//! ```text
//! INDEX EOL TIMESTAMP ARROW TIMESTAMP (TEXT | EOL)* (EOC | EOF)
//! ```

use crate::cue::Cue;
use crate::error::{ParseError, TimestampError};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use chrono::NaiveTime;
use log::{debug, trace};

/// The `chrono` format for a timestamp after its comma is normalized to a dot.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// The streaming SRT parser.
///
/// This struct is an `Iterator` that yields one `Result<Cue, ParseError>`
/// per cue. It is created by `parse_streaming` or `CueParser::new`.
/// After the first error (or the end of the input) it yields `None`.
pub struct CueParser<'a> {
    /// The tokenizer, advanced on demand.
    tokenizer: Tokenizer<'a>,
    /// The token being examined.
    current: Token<'a>,
    /// One token of lookahead.
    peek: Token<'a>,
    /// Set after an error or once the input is exhausted.
    finished: bool,
    /// Number of cues produced so far.
    count: usize,
}

impl<'a> CueParser<'a> {
    /// Creates a new `CueParser` for a given input string.
    ///
    /// No size limit is applied here; `parse_streaming` is the guarded
    /// entry point.
    pub fn new(input: &'a str) -> Self {
        let mut tokenizer = Tokenizer::new(input);
        let current = tokenizer.next_token();
        let peek = tokenizer.next_token();
        CueParser {
            tokenizer,
            current,
            peek,
            finished: false,
            count: 0,
        }
    }

    /// Moves the lookahead into `current` and pulls a fresh lookahead.
    fn advance(&mut self) {
        let next = self.tokenizer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(
            "token {} {:?} at {}:{} (next {})",
            self.current.kind,
            self.current.literal,
            self.current.line,
            self.current.column,
            self.peek.kind
        );
    }

    /// Builds an `UnexpectedToken` error from the current token.
    fn unexpected(&self, expected: TokenKind) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current.kind,
            line: self.current.line,
            column: self.current.column,
        }
    }

    /// Checks the current token's kind and returns its literal, without advancing.
    fn expect(&self, expected: TokenKind) -> Result<&'a str, ParseError> {
        if self.current.kind == expected {
            Ok(self.current.literal)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Parses one cue, starting at its `INDEX` and ending past its terminator.
    fn parse_cue(&mut self) -> Result<Cue, ParseError> {
        // Index
        let index = self.expect(TokenKind::Index)?.parse::<usize>()?;
        self.advance();

        // End of the index line
        self.expect(TokenKind::EndOfLine)?;
        self.advance();

        // Start time
        let start = parse_timestamp(self.expect(TokenKind::Timestamp)?)?;
        self.advance();

        self.expect(TokenKind::Arrow)?;
        self.advance();

        // End time
        let end = parse_timestamp(self.expect(TokenKind::Timestamp)?)?;
        self.advance();

        // Body: every TEXT is a line; EOL only separates lines.
        let mut lines: Vec<&'a str> = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::Text => lines.push(self.current.literal),
                TokenKind::EndOfLine => {}
                _ => break,
            }
            self.advance();
        }

        match self.current.kind {
            TokenKind::EndOfCue | TokenKind::EndOfInput => {}
            _ => return Err(self.unexpected(TokenKind::EndOfCue)),
        }
        self.advance();

        debug!("cue {} parsed with {} text line(s)", index, lines.len());
        Ok(Cue {
            index,
            start,
            end,
            text: lines.join("\n"),
        })
    }
}

/// The main implementation of the parser's `Iterator` trait.
impl Iterator for CueParser<'_> {
    type Item = Result<Cue, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.current.kind == TokenKind::EndOfInput {
            self.finished = true;
            debug!("parsing finished with {} cue(s)", self.count);
            return None;
        }

        match self.parse_cue() {
            Ok(cue) => {
                self.count += 1;
                Some(Ok(cue))
            }
            Err(e) => {
                // No recovery: the first error ends the stream.
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Converts an `HH:MM:SS,mmm` literal into a time of day.
///
/// The layout is fixed-width: two-digit hours, minutes and seconds, a
/// comma, then exactly three digits of milliseconds.
///
/// # Errors
/// `TimestampError::Layout` if the literal deviates from that layout,
/// `TimestampError::SecondOutOfRange` for seconds above 59 (no leap seconds),
/// `TimestampError::OutOfRange` if another field is out of range (e.g. `25:00:00,000`).
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use rill_srt::parse_timestamp;
///
/// let time = parse_timestamp("01:02:03,456").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_milli_opt(1, 2, 3, 456).unwrap());
/// assert!(parse_timestamp("1:02:03,456").is_err());
/// ```
pub fn parse_timestamp(literal: &str) -> Result<NaiveTime, TimestampError> {
    if !has_timestamp_layout(literal.as_bytes()) {
        return Err(TimestampError::Layout {
            literal: literal.to_string(),
        });
    }
    if &literal[6..8] > "59" {
        return Err(TimestampError::SecondOutOfRange {
            literal: literal.to_string(),
        });
    }
    let normalized = literal.replacen(',', ".", 1);
    Ok(NaiveTime::parse_from_str(&normalized, TIMESTAMP_FORMAT)?)
}

/// `DD:DD:DD,DDD`, byte for byte.
fn has_timestamp_layout(bytes: &[u8]) -> bool {
    const LAYOUT: &[u8; 12] = b"00:00:00,000";
    bytes.len() == LAYOUT.len()
        && bytes.iter().zip(LAYOUT).all(|(&b, &l)| match l {
            b'0' => b.is_ascii_digit(),
            sep => b == sep,
        })
}
