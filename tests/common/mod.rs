#![allow(dead_code)]

use shlang::{Token, TokenKind, scan_tokens};

pub fn scan(source: &str) -> Vec<Token<'_>> {
    scan_tokens(source, None).expect("scan failed")
}

pub fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).iter().map(|t| t.kind).collect()
}

/// Helper: assert every non-EOF token's column range slices back to its
/// exact lexeme.
pub fn assert_lexeme_roundtrip(source: &str) {
    for token in scan(source) {
        if token.kind == TokenKind::Eof {
            continue;
        }
        assert_eq!(
            &source[token.col_start..token.col_end],
            token.lexeme,
            "column range mismatch for {token} in {source:?}"
        );
    }
}
