//! The internal, byte-based tokenizer (lexer).
//!
//! It consumes the raw input `&str` (as `&[u8]`) and produces `Token`s
//! on demand. It never fails: anything that is not a digit run, an arrow
//! or a newline is classified as `TEXT`, and the parser decides whether
//! it belongs there. It is *not* part of the public API.
//!
//! Position bookkeeping follows the character under the cursor: a `\n`
//! is counted on the line it starts, with column 0, so boundary tokens
//! report the line *after* the newline.

use crate::token::{Token, TokenKind};
use memchr::memchr;

// --- The Lookup Table (LUT) ---
// One array lookup classifies any byte at the start of a token.
const W: u8 = 1; // Whitespace (other than '\n')
const N: u8 = 2; // Newline
const D: u8 = 3; // Digit
const A: u8 = 4; // '-' (possible start of an arrow)
const U: u8 = 5; // Non-ASCII byte (may start a Unicode space)

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    // 1: Whitespace
    table[b' ' as usize] = W;
    table[b'\t' as usize] = W;
    table[b'\r' as usize] = W;
    table[0x0B] = W; // Vertical tab
    table[0x0C] = W; // Form feed

    // 2: Newline
    table[b'\n' as usize] = N;

    // 3: Digit
    let mut d = b'0';
    while d <= b'9' {
        table[d as usize] = D;
        d += 1;
    }

    // 4: Arrow candidate
    table[b'-' as usize] = A;

    // 5: Non-ASCII
    let mut u = 0x80;
    while u <= 0xFF {
        table[u] = U;
        u += 1;
    }

    // 0: Everything else starts a TEXT token
    table
};

const ARROW: &[u8] = b"-->";

/// The internal tokenizer (lexer).
///
/// Holds the input and a cursor. `line` and `column` always describe the
/// character currently under the cursor.
pub(crate) struct Tokenizer<'a> {
    /// The input as a string, for slicing literals.
    input: &'a str,
    /// The same input as raw bytes, for classification.
    bytes: &'a [u8],
    /// The current position (byte index) in the input.
    cursor: usize,
    /// The line (1-indexed) of the character under the cursor.
    line: usize,
    /// The column (1-indexed; 0 on a newline) of the character under the cursor.
    column: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new `Tokenizer` from an input string.
    pub(crate) fn new(input: &'a str) -> Self {
        let mut tokenizer = Tokenizer {
            input,
            bytes: input.as_bytes(),
            cursor: 0,
            line: 1,
            column: 0,
        };
        tokenizer.enter();
        tokenizer
    }

    /// Returns the next token.
    ///
    /// Once the input is exhausted this returns `EndOfInput` on every call.
    pub(crate) fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let byte = match self.bytes.get(self.cursor) {
            Some(&b) => b,
            None => return Token::new(TokenKind::EndOfInput, "", self.line, 0),
        };

        match BYTE_PROPERTIES[byte as usize] {
            D => self.lex_number_or_timestamp(),
            N => self.lex_newline(),
            A if self.bytes[self.cursor..].starts_with(ARROW) => self.lex_arrow(),
            _ => self.lex_text(),
        }
    }

    /// Updates line/column for the character the cursor just landed on.
    #[inline]
    fn enter(&mut self) {
        if self.bytes.get(self.cursor) == Some(&b'\n') {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Advances past one ASCII byte.
    #[inline]
    fn advance_byte(&mut self) {
        self.cursor += 1;
        self.enter();
    }

    /// Advances past one (possibly multi-byte) character.
    #[inline]
    fn advance_char(&mut self) {
        let width = self.peek_char().map_or(1, char::len_utf8);
        self.cursor += width;
        self.enter();
    }

    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.input[self.cursor..].chars().next()
    }

    /// Skips whitespace up to, but never including, a newline.
    fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.bytes.get(self.cursor) {
            match BYTE_PROPERTIES[byte as usize] {
                W => self.advance_byte(),
                U => match self.peek_char() {
                    Some(c) if c.is_whitespace() => self.advance_char(),
                    _ => break,
                },
                _ => break,
            }
        }
    }

    /// Scans a run of digits, `:` and `,`.
    ///
    /// The run is a `TIMESTAMP` only if it holds at least one `:` and at
    /// least one `,`; anything else is an `INDEX`.
    fn lex_number_or_timestamp(&mut self) -> Token<'a> {
        let start = self.cursor;
        let (line, column) = (self.line, self.column);
        let mut has_colon = false;
        let mut has_comma = false;

        while let Some(&byte) = self.bytes.get(self.cursor) {
            match byte {
                b':' => has_colon = true,
                b',' => has_comma = true,
                b if BYTE_PROPERTIES[b as usize] == D => {}
                _ => break,
            }
            self.advance_byte();
        }

        let kind = if has_colon && has_comma {
            TokenKind::Timestamp
        } else {
            TokenKind::Index
        };
        Token::new(kind, &self.input[start..self.cursor], line, column)
    }

    /// Scans `\n\n` as `EndOfCue` or a lone `\n` as `EndOfLine`.
    fn lex_newline(&mut self) -> Token<'a> {
        let start = self.cursor;
        let line = self.line;

        if self.bytes.get(start + 1) == Some(&b'\n') {
            self.advance_byte();
            self.advance_byte();
            Token::new(TokenKind::EndOfCue, &self.input[start..start + 2], line, 0)
        } else {
            self.advance_byte();
            Token::new(TokenKind::EndOfLine, &self.input[start..start + 1], line, 0)
        }
    }

    fn lex_arrow(&mut self) -> Token<'a> {
        let start = self.cursor;
        let (line, column) = (self.line, self.column);
        for _ in 0..ARROW.len() {
            self.advance_byte();
        }
        Token::new(TokenKind::Arrow, &self.input[start..self.cursor], line, column)
    }

    /// Takes everything up to (not including) the next newline.
    /// Uses `memchr` to find the end of the line.
    fn lex_text(&mut self) -> Token<'a> {
        let start = self.cursor;
        let (line, column) = (self.line, self.column);
        let end = memchr(b'\n', &self.bytes[start..]).map_or(self.bytes.len(), |i| start + i);

        let literal = &self.input[start..end];
        // The line holds no newline, so every character but the first
        // moves one column; `enter` accounts for the one we land on.
        let chars = literal.chars().count();
        self.cursor = end;
        self.column += chars.saturating_sub(1);
        self.enter();

        Token::new(TokenKind::Text, literal, line, column)
    }
}

// --- Unit Tests for Tokenizer ---
#[cfg(test)]
mod tests {
    use super::*;

    // Every token up to and including the first `EndOfInput`.
    fn tokenize(input: &str) -> Vec<Token<'_>> {
        let mut tokenizer = Tokenizer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next_token();
            tokens.push(token);
            if token.kind == TokenKind::EndOfInput {
                return tokens;
            }
        }
    }

    fn collect_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|token| token.kind).collect()
    }

    #[test]
    fn test_tokenizer_cue_positions() {
        let input = "1\n00:00:01,123 --> 00:00:01,456\nText block éè\nSecond line\n";
        let expected = vec![
            (TokenKind::Index, "1", 1, 1),
            (TokenKind::EndOfLine, "\n", 2, 0),
            (TokenKind::Timestamp, "00:00:01,123", 2, 1),
            (TokenKind::Arrow, "-->", 2, 14),
            (TokenKind::Timestamp, "00:00:01,456", 2, 18),
            (TokenKind::EndOfLine, "\n", 3, 0),
            (TokenKind::Text, "Text block éè", 3, 1),
            (TokenKind::EndOfLine, "\n", 4, 0),
            (TokenKind::Text, "Second line", 4, 1),
            (TokenKind::EndOfLine, "\n", 5, 0),
            (TokenKind::EndOfInput, "", 5, 0),
        ];
        let actual: Vec<_> = tokenize(input)
            .into_iter()
            .map(|t| (t.kind, t.literal, t.line, t.column))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_tokenizer_timestamp_and_index() {
        let tokens = tokenize("00:00:01,123");
        assert_eq!(tokens[0].kind, TokenKind::Timestamp);
        assert_eq!(tokens[0].literal, "00:00:01,123");
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);

        let tokens = tokenize("5");
        assert_eq!(tokens[0].kind, TokenKind::Index);
        assert_eq!(tokens[0].literal, "5");
    }

    #[test]
    fn test_tokenizer_partial_timestamps_are_index() {
        assert_eq!(
            collect_kinds("00:00:01"),
            vec![TokenKind::Index, TokenKind::EndOfInput]
        );
        assert_eq!(
            collect_kinds("1,5"),
            vec![TokenKind::Index, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_tokenizer_double_newline_is_end_of_cue() {
        let tokens = tokenize("a\n\nb");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Text,
                TokenKind::EndOfCue,
                TokenKind::Text,
                TokenKind::EndOfInput
            ]
        );
        assert_eq!(tokens[1].literal, "\n\n");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 0));
        assert_eq!((tokens[2].line, tokens[2].column), (3, 1));
    }

    #[test]
    fn test_tokenizer_three_newlines() {
        assert_eq!(
            collect_kinds("\n\n\n"),
            vec![
                TokenKind::EndOfCue,
                TokenKind::EndOfLine,
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_tokenizer_whitespace_between_newlines() {
        assert_eq!(
            collect_kinds("\n \t\n"),
            vec![
                TokenKind::EndOfLine,
                TokenKind::EndOfLine,
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_tokenizer_text_absorbs_rest_of_line() {
        let tokens = tokenize("  - not an arrow 12 -->\n");
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].literal, "- not an arrow 12 -->");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 3));
        assert_eq!(tokens[1].kind, TokenKind::EndOfLine);
    }

    #[test]
    fn test_tokenizer_digits_then_text() {
        let tokens = tokenize("12abc");
        assert_eq!(tokens[0].kind, TokenKind::Index);
        assert_eq!(tokens[0].literal, "12");
        assert_eq!(tokens[1].kind, TokenKind::Text);
        assert_eq!(tokens[1].literal, "abc");
        assert_eq!(tokens[1].column, 3);
    }

    #[test]
    fn test_tokenizer_unicode_columns_and_spaces() {
        // U+3000 is an ideographic space and is skipped like ' '.
        let tokens = tokenize("éè\u{3000}-->");
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].literal, "éè\u{3000}-->");

        let tokens = tokenize("\u{3000}-->");
        assert_eq!(tokens[0].kind, TokenKind::Arrow);
        assert_eq!(tokens[0].column, 2);
    }

    #[test]
    fn test_tokenizer_crlf_keeps_carriage_return_in_text() {
        let tokens = tokenize("hi\r\n");
        assert_eq!(tokens[0].literal, "hi\r");
        assert_eq!(tokens[1].kind, TokenKind::EndOfLine);
    }

    #[test]
    fn test_tokenizer_end_of_input_is_sticky() {
        let mut tokenizer = Tokenizer::new("7");
        assert_eq!(tokenizer.next_token().kind, TokenKind::Index);
        for _ in 0..3 {
            let token = tokenizer.next_token();
            assert_eq!(token.kind, TokenKind::EndOfInput);
            assert_eq!(token.literal, "");
            assert_eq!((token.line, token.column), (1, 0));
        }
    }

    #[test]
    fn test_tokenizer_boundaries_report_column_zero() {
        let input = "1\n00:00:01,000 --> 00:00:02,000\nA\n\n2\n";
        for token in tokenize(input) {
            let boundary = matches!(
                token.kind,
                TokenKind::EndOfLine | TokenKind::EndOfCue | TokenKind::EndOfInput
            );
            if boundary {
                assert_eq!(token.column, 0, "{:?}", token);
            } else {
                assert!(token.column >= 1, "{:?}", token);
            }
        }
    }

    #[test]
    fn test_tokenizer_empty_input() {
        assert_eq!(collect_kinds(""), vec![TokenKind::EndOfInput]);
        assert_eq!(collect_kinds("   "), vec![TokenKind::EndOfInput]);
    }
}
