// fredlex - A lexer for the FRED Modeling Language
//
// Copyright (C) 2026 Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Cursor helper methods for the token stream.
//!
//! This module provides utility methods for the engine including:
//! - Position tracking (offset, is_at_end, rest)
//! - Advancing over matched text and single characters
//! - Span creation

use super::classify::Classify;
use super::engine::Tokens;
use crate::error::Span;

/// Trait for cursor operations over the source.
pub(crate) trait CursorHelpers<'source> {
    /// Get the current byte offset in the source.
    fn offset(&self) -> usize;

    /// Check if we've reached the end of the source.
    fn is_at_end(&self) -> bool;

    /// The unconsumed part of the source.
    fn rest(&self) -> &'source str;

    /// Consume `len` bytes and return them.
    fn advance_by(&mut self, len: usize) -> &'source str;

    /// Consume the next character and return it as a slice.
    fn advance_char(&mut self) -> &'source str;

    /// Create a span from start position to current position.
    fn span_from(&self, start: usize) -> Span;
}

impl<'source, C: Classify> CursorHelpers<'source> for Tokens<'_, 'source, C> {
    fn offset(&self) -> usize {
        self.position
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn rest(&self) -> &'source str {
        &self.source[self.position..]
    }

    fn advance_by(&mut self, len: usize) -> &'source str {
        let start = self.position;
        self.position = (start + len).min(self.source.len());
        &self.source[start..self.position]
    }

    fn advance_char(&mut self) -> &'source str {
        let len = self.rest().chars().next().map_or(0, char::len_utf8);
        self.advance_by(len)
    }

    fn span_from(&self, start: usize) -> Span {
        Span::from(start..self.position)
    }
}
