use std::fmt;

/// Classifies a lexical fault.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanErrorKind {
    /// Byte that cannot start any token.
    #[error("Unexpected character: '{0}'")]
    UnexpectedCharacter(char),
    /// End of input reached before the closing quote.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A located lexical error.
///
/// Carries the fault classification plus optional source context used by the
/// rendering: the display name of the input, the 1-based line number, the
/// 0-based column range within that line, and the full text of the offending
/// line. `col_end` defaults to `col_start` when never set.
///
/// The `Display` impl renders a multi-line report:
///
/// ```text
/// Error: Unexpected character: '@'
/// 3 | var x = @
///             ^ -- Here.
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub file: Option<String>,
    pub line: Option<usize>,
    pub col_start: Option<usize>,
    pub col_end: Option<usize>,
    pub src_line: Option<String>,
}

impl ScanError {
    /// Create an error with no location context.
    #[must_use]
    pub const fn new(kind: ScanErrorKind) -> Self {
        Self {
            kind,
            file: None,
            line: None,
            col_start: None,
            col_end: None,
            src_line: None,
        }
    }

    /// Set the display name used to prefix the rendering.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the 1-based line number.
    #[must_use]
    pub const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the 0-based column of the offending character within its line.
    #[must_use]
    pub const fn with_col_start(mut self, col: usize) -> Self {
        self.col_start = Some(col);
        self
    }

    /// Widen the underline to end at `col` (exclusive).
    #[must_use]
    pub const fn with_col_end(mut self, col: usize) -> Self {
        self.col_end = Some(col);
        self
    }

    /// Attach the full text of the offending line.
    #[must_use]
    pub fn with_src_line(mut self, text: impl Into<String>) -> Self {
        self.src_line = Some(text.into());
        self
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{file}: ")?;
        }
        write!(f, "Error: {}", self.kind)?;

        let (Some(line), Some(src_line)) = (self.line, self.src_line.as_deref()) else {
            return Ok(());
        };
        write!(f, "\n{line} | {src_line}")?;

        let Some(col_start) = self.col_start else {
            return Ok(());
        };
        let col_end = self.col_end.unwrap_or(col_start);
        // Pad past the "{line} | " prefix so the caret sits under the
        // offending column of the echoed source line.
        let pad = line.to_string().len() + 3 + col_start;
        write!(f, "\n{}^", " ".repeat(pad))?;
        if col_end > col_start + 1 {
            write!(f, "{}", "~".repeat(col_end - col_start - 1))?;
        }
        write!(f, " -- Here.")
    }
}

impl std::error::Error for ScanError {}
