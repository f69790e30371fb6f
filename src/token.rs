//! Defines the `Token` struct and the `TokenKind` enum.
//!
//! These are the shared vocabulary between the `Tokenizer` (lexer) and
//! the `CueParser`. `TokenKind` also shows up in `ParseError`, which is
//! why this module is public.

use std::fmt;

/// The kind of a `Token`.
///
/// SRT has a tiny grammar, so this is a closed set of seven kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// A run of digits, e.g. `42`. Also any digit run that is not a full timestamp.
    Index,
    /// A digit run containing both `:` and `,`, e.g. `00:00:01,123`.
    Timestamp,
    /// `-->`
    Arrow,
    /// Any other content, up to the end of the line.
    Text,
    /// A single `\n`.
    EndOfLine,
    /// Two consecutive `\n`: the blank line between cues.
    EndOfCue,
    /// No input left.
    EndOfInput,
}

impl TokenKind {
    /// The short upper-case name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Index => "INDEX",
            TokenKind::Timestamp => "TIMESTAMP",
            TokenKind::Arrow => "ARROW",
            TokenKind::Text => "TEXT",
            TokenKind::EndOfLine => "EOL",
            TokenKind::EndOfCue => "EOC",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token produced by the `Tokenizer`.
///
/// `literal` borrows the exact matched text from the input. `line` and
/// `column` are 1-based and point at the first character of the token;
/// boundary tokens use column 0.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Token<'a> {
    /// The kind of the token.
    pub(crate) kind: TokenKind,
    /// The exact substring matched (empty for `EndOfInput`).
    pub(crate) literal: &'a str,
    /// The 1-indexed line number where the token starts.
    pub(crate) line: usize,
    /// The 1-indexed column number where the token starts (0 for boundaries).
    pub(crate) column: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, literal: &'a str, line: usize, column: usize) -> Self {
        Token {
            kind,
            literal,
            line,
            column,
        }
    }
}
