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

//! Token definitions.

use crate::error::Span;

/// The category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Layout
    /// Spaces, tabs and newlines.
    Whitespace,
    /// Single line comment including its newline.
    Comment,

    // Literals
    /// Floating point number (`3.14`, `.5`, `1e-3`).
    NumberFloat,
    /// Decimal integer (`42`, `-7`).
    NumberInteger,
    /// Boolean marker (`#t`, `#f`).
    Literal,
    /// Escape sequence inside a string.
    StringEscape,
    /// String contents and delimiters.
    StringLiteral,

    // Structure
    /// Brackets, separators and `#(`, `#[`, `##`.
    Punctuation,

    // Words
    /// Identifier without special meaning.
    Name,
    /// Reserved word.
    Keyword,
    /// Builtin or predefined function.
    BuiltinFunction,
    /// Operator.
    Operator,

    /// Input no rule matched.
    Error,
}

impl TokenKind {
    /// All token kinds, in declaration order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::NumberFloat,
        TokenKind::NumberInteger,
        TokenKind::Literal,
        TokenKind::StringEscape,
        TokenKind::StringLiteral,
        TokenKind::Punctuation,
        TokenKind::Name,
        TokenKind::Keyword,
        TokenKind::BuiltinFunction,
        TokenKind::Operator,
        TokenKind::Error,
    ];

    /// Check if this kind carries no meaning for a parser.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Get a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::NumberFloat => "number.float",
            TokenKind::NumberInteger => "number.integer",
            TokenKind::Literal => "literal",
            TokenKind::StringEscape => "string.escape",
            TokenKind::StringLiteral => "string",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Name => "name",
            TokenKind::Keyword => "keyword",
            TokenKind::BuiltinFunction => "name.builtin",
            TokenKind::Operator => "operator",
            TokenKind::Error => "error",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned slice of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'source> {
    /// Byte offset of the token in the source.
    pub position: usize,
    /// The token category.
    pub kind: TokenKind,
    /// The matched text, borrowed from the source.
    pub text: &'source str,
}

impl<'source> Token<'source> {
    /// Create a new token.
    pub fn new(position: usize, kind: TokenKind, text: &'source str) -> Self {
        Self {
            position,
            kind,
            text,
        }
    }

    /// The source range covered by this token.
    pub fn span(&self) -> Span {
        Span::new(self.position, self.end())
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
