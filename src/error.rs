// fredlex - A lexer for the FRED Modeling Language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error types for the lexer.
//!
//! Rule table construction errors and fatal tokenization errors share one
//! type, [`LexError`], distinguished by its [`ErrorCode`]. Unmatched input is
//! not an error of the engine: it becomes an `Error` token. [`ErrorCode::NoRuleMatched`]
//! exists so that front ends can report those tokens as diagnostics.

use std::ops::Range;
use thiserror::Error;

use crate::lexer::Token;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Error codes for the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors (E001-E009)
    NoRuleMatched,

    // Tokenization errors (E010-E019)
    StateStackUnderflow,

    // Rule table errors (E020-E029)
    UnknownStateReference,
    DuplicateState,
    InvalidPattern,
    DefaultCycle,
    EmptyTable,
    DuplicateDefault,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NoRuleMatched => "E001",
            ErrorCode::StateStackUnderflow => "E010",
            ErrorCode::UnknownStateReference => "E020",
            ErrorCode::DuplicateState => "E021",
            ErrorCode::InvalidPattern => "E022",
            ErrorCode::DefaultCycle => "E023",
            ErrorCode::EmptyTable => "E024",
            ErrorCode::DuplicateDefault => "E025",
        }
    }

    /// Whether this error comes from an invalid rule table rather than input.
    pub fn is_table_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::UnknownStateReference
                | ErrorCode::DuplicateState
                | ErrorCode::InvalidPattern
                | ErrorCode::DefaultCycle
                | ErrorCode::EmptyTable
                | ErrorCode::DuplicateDefault
        )
    }
}

/// A lexer error with an optional source location.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct LexError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred, if it relates to input.
    pub span: Option<Span>,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl LexError {
    /// Create a new error without a source location.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span: None,
            hint: None,
        }
    }

    /// Attach a source span to this error.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Describe an `Error` token as a diagnostic.
    pub fn no_rule_matched(token: &Token<'_>) -> Self {
        Self::new(
            ErrorCode::NoRuleMatched,
            format!("Unrecognized input {:?}", token.text),
        )
        .with_span(token.span())
    }

    pub(crate) fn unknown_state(name: &str) -> Self {
        Self::new(
            ErrorCode::UnknownStateReference,
            format!("Unknown state '{}'", name),
        )
    }
}

/// Result type for lexer operations.
pub type Result<T> = std::result::Result<T, LexError>;

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub column: usize,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    ///
    /// Offsets inside a multi-byte character are clamped to the start of
    /// that character.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];

        let line = before.matches('\n').count() + 1;
        let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[last_newline..].chars().count() + 1;

        Self { line, column }
    }

    /// Move the location past `text`.
    pub fn advance(&mut self, text: &str) {
        match text.rfind('\n') {
            Some(i) => {
                self.line += text.matches('\n').count();
                self.column = text[i + 1..].chars().count() + 1;
            }
            None => self.column += text.chars().count(),
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
