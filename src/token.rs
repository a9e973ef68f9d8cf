use std::fmt;

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `:`
    Colon,
    /// `=`
    Equal,
    /// `!`
    Bang,
    /// `>`
    Greater,
    /// `<`
    Less,
    // Two-character operators.
    /// `!=`
    BangEqual,
    /// `==`
    EqualEqual,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `=>`
    Arrow,
    // Literals.
    Identifier,
    Str,
    Number,
    // Keywords (matched case-insensitively).
    And,
    Or,
    If,
    Else,
    True,
    False,
    For,
    While,
    Fn,
    Return,
    Var,
    Import,
    In,
    Class,
    Nil,
    Display,
    Read,
    /// End-of-input sentinel, always the last token of a scan.
    Eof,
}

/// Decoded value of a `Str` or `Number` token.
///
/// String literals are the verbatim slice between the quotes; escape
/// sequences are not processed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'src> {
    Str(&'src str),
    Num(f64),
}

/// A single classified token with its source location.
///
/// `col_start`/`col_end` are half-open byte offsets into the whole source,
/// so `source[col_start..col_end]` equals `lexeme` for every non-EOF token.
/// The EOF token stores the scanner's final column counter in both fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub literal: Option<Literal<'src>>,
    /// 1-based line number.
    pub line: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({:?}, lexeme='{}', line={}, col={}..{})",
            self.kind, self.lexeme, self.line, self.col_start, self.col_end
        )
    }
}

/// Look up a reserved word, ignoring case. `ifx` is not a keyword.
#[must_use]
pub fn keyword(text: &str) -> Option<TokenKind> {
    let kind = match text.to_ascii_lowercase().as_str() {
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "fn" => TokenKind::Fn,
        "return" => TokenKind::Return,
        "var" => TokenKind::Var,
        "import" => TokenKind::Import,
        "in" => TokenKind::In,
        "class" => TokenKind::Class,
        "nil" => TokenKind::Nil,
        "display" => TokenKind::Display,
        "read" => TokenKind::Read,
        _ => return None,
    };
    Some(kind)
}
