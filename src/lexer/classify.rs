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

//! The reclassification hook applied to `Name` tokens.

use super::TokenKind;

/// Chooses the final kind of a token matched as [`TokenKind::Name`].
///
/// The engine calls this inline for every `Name` token, before the token is
/// yielded. Tokens of any other kind are never passed in.
pub trait Classify {
    /// Decide the kind of a `Name` token from its text.
    fn classify(&self, text: &str) -> TokenKind;
}

impl<F> Classify for F
where
    F: Fn(&str) -> TokenKind,
{
    fn classify(&self, text: &str) -> TokenKind {
        self(text)
    }
}

/// Leaves every `Name` token as it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbatim;

impl Classify for Verbatim {
    fn classify(&self, _text: &str) -> TokenKind {
        TokenKind::Name
    }
}
