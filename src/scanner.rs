use crate::error::{ScanError, ScanErrorKind};
use crate::token::{Literal, Token, TokenKind, keyword};

/// Scan a complete SHLang source string into a token sequence.
///
/// The result is terminated by exactly one `Eof` token. `file` is a display
/// name (a path or `"<stdin>"`) used only to prefix rendered errors.
///
/// Scanning is fail-fast: the first lexical fault aborts the scan and no
/// partial token list is returned.
///
/// # Errors
///
/// Returns `ScanError` on an unexpected character or an unterminated string
/// literal, carrying the line, column, and offending line text.
pub fn scan_tokens<'src>(
    source: &'src str,
    file: Option<&str>,
) -> Result<Vec<Token<'src>>, ScanError> {
    Scanner::new(source, file).scan()
}

/// Single-pass scanner state, owned by one `scan_tokens` call.
///
/// `start`/`current` are byte offsets bounding the lexeme being built;
/// `line` and `column` are 1-based, with `column` reset after each newline.
struct Scanner<'src, 'f> {
    source: &'src str,
    file: Option<&'f str>,
    tokens: Vec<Token<'src>>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
}

impl<'src, 'f> Scanner<'src, 'f> {
    fn new(source: &'src str, file: Option<&'f str>) -> Self {
        Self {
            source,
            file,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    fn scan(mut self) -> Result<Vec<Token<'src>>, ScanError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: "",
            literal: None,
            line: self.line,
            col_start: self.column,
            col_end: self.column,
        });
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), ScanError> {
        let column = self.column;
        let byte = self.advance();
        match byte {
            b if b.is_ascii_whitespace() => {}
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b'[' => self.add_token(TokenKind::LeftBracket),
            b']' => self.add_token(TokenKind::RightBracket),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b':' => self.add_token(TokenKind::Colon),
            b'/' => {
                if self.match_next(b'/') {
                    self.skip_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b'!' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            b'=' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::EqualEqual
                } else if self.match_next(b'>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            b'>' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            b'<' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            b'"' | b'\'' => self.string(byte)?,
            b'0'..=b'9' => self.number(),
            b if b.is_ascii_alphabetic() || b == b'_' => self.identifier(),
            _ => {
                // Decode the full character for the message; the scanner
                // itself only consumed its first byte.
                let ch = self.source[self.start..].chars().next().unwrap_or('\0');
                return Err(self.error(
                    ScanErrorKind::UnexpectedCharacter(ch),
                    column - 1,
                    self.start,
                ));
            }
        }
        Ok(())
    }

    /// Consume one byte, keeping the line/column counters current.
    fn advance(&mut self) -> u8 {
        let byte = self.source.as_bytes()[self.current];
        self.current += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        byte
    }

    /// Consume the next byte only if it matches `expected`.
    fn match_next(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current + 1).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    /// Discard the rest of the line. The newline itself is left for the
    /// whitespace arm so line tracking stays in one place.
    fn skip_comment(&mut self) {
        while let Some(byte) = self.peek() {
            if byte == b'\n' {
                break;
            }
            self.advance();
        }
    }

    fn string(&mut self, quote: u8) -> Result<(), ScanError> {
        while let Some(byte) = self.peek() {
            if byte == quote {
                break;
            }
            self.advance();
        }
        if self.is_at_end() {
            return Err(self.error(
                ScanErrorKind::UnterminatedString,
                self.column - 1,
                self.current,
            ));
        }
        self.advance();
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::Str, Literal::Str(value));
        Ok(())
    }

    fn number(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.advance();
        }
        // A trailing dot is not part of the number unless a digit follows,
        // so `3.sqrt()` still lexes as NUMBER DOT IDENTIFIER.
        if self.peek() == Some(b'.') && matches!(self.peek_next(), Some(b'0'..=b'9')) {
            self.advance();
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.advance();
            }
        }
        let value = self
            .lexeme()
            .parse()
            .expect("digit run is always a valid f64");
        self.add_literal_token(TokenKind::Number, Literal::Num(value));
    }

    fn identifier(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.advance();
        }
        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal<'src>) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal<'src>>) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme(),
            literal,
            line: self.line,
            col_start: self.start,
            col_end: self.current,
        });
    }

    fn error(&self, kind: ScanErrorKind, col_start: usize, pos: usize) -> ScanError {
        let err = ScanError::new(kind)
            .with_line(self.line)
            .with_col_start(col_start)
            .with_src_line(self.line_text_at(pos));
        match self.file {
            Some(file) => err.with_file(file),
            None => err,
        }
    }

    /// Full text of the line containing byte offset `pos`, recovered from
    /// the unsplit source.
    fn line_text_at(&self, pos: usize) -> &'src str {
        let start = self.source[..pos].rfind('\n').map_or(0, |i| i + 1);
        let end = self.source[pos..]
            .find('\n')
            .map_or(self.source.len(), |i| pos + i);
        &self.source[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan_tokens(source, None)
            .expect("should scan")
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            kinds("(){}[],.;:"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn two_char_operators() {
        assert_eq!(
            kinds("!= == >= <= =>"),
            vec![
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
                TokenKind::GreaterEqual,
                TokenKind::LessEqual,
                TokenKind::Arrow,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn single_char_fallbacks() {
        assert_eq!(
            kinds("! = > <"),
            vec![
                TokenKind::Bang,
                TokenKind::Equal,
                TokenKind::Greater,
                TokenKind::Less,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comparison_does_not_swallow_digit() {
        let tokens = scan_tokens("1>2", None).expect("should scan");
        let scanned: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            scanned,
            vec![
                TokenKind::Number,
                TokenKind::Greater,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[2].literal, Some(Literal::Num(2.0)));
    }

    #[test]
    fn string_literals_both_quotes() {
        for source in ["'abc'", "\"abc\""] {
            let tokens = scan_tokens(source, None).expect("should scan");
            assert_eq!(tokens[0].kind, TokenKind::Str);
            assert_eq!(tokens[0].literal, Some(Literal::Str("abc")));
        }
    }

    #[test]
    fn mismatched_quotes_are_unterminated() {
        let err = scan_tokens("'abc\"", None).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
    }

    #[test]
    fn number_with_fraction() {
        let tokens = scan_tokens("3.14", None).expect("should scan");
        assert_eq!(tokens[0].literal, Some(Literal::Num(3.14)));
        assert_eq!(tokens[0].lexeme, "3.14");
    }

    #[test]
    fn trailing_dot_is_separate_token() {
        let tokens = scan_tokens("3.", None).expect("should scan");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].literal, Some(Literal::Num(3.0)));
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn keywords_ignore_case() {
        for source in ["if", "If", "IF"] {
            assert_eq!(kinds(source), vec![TokenKind::If, TokenKind::Eof]);
        }
        assert_eq!(kinds("ifx"), vec![TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn comments_and_whitespace_produce_no_tokens() {
        assert_eq!(kinds("  \t\n// nothing here\n   "), vec![TokenKind::Eof]);
    }

    #[test]
    fn unexpected_character() {
        let err = scan_tokens("@", None).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.line, Some(1));
        assert_eq!(err.col_start, Some(0));
    }
}
