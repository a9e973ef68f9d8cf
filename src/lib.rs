//! Lexical scanner for the SHLang scripting language.
//!
//! Converts raw source text into a sequence of classified tokens and reports
//! malformed input with precise source positions. This is the front end of
//! the SHLang toolchain; the parser and evaluator consume the token stream
//! produced here.
//!
//! # Quick start
//!
//! ```
//! use shlang::{TokenKind, scan_tokens};
//!
//! let tokens = scan_tokens("var answer = 42;", None).unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! Lexical faults abort the scan and come back as a [`ScanError`] whose
//! `Display` form points at the offending column:
//!
//! ```
//! use shlang::scan_tokens;
//!
//! let err = scan_tokens("var x = @", None).unwrap_err();
//! assert!(err.to_string().contains("Unexpected character: '@'"));
//! ```

pub mod error;
pub mod scanner;
pub mod token;

pub use error::{ScanError, ScanErrorKind};
pub use scanner::scan_tokens;
pub use token::{Literal, Token, TokenKind, keyword};
