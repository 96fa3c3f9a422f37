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

//! The FRED rule table.
//!
//! `root` only handles leading whitespace and comments, then falls through
//! into `code` which recognizes everything else. `keyword` and `string` are
//! quoted-text states; no rule enters them, so they are only used when a
//! caller starts tokenizing inside quoted text.

use crate::error::Result;
use crate::lexer::{Action, Rule, RuleTable, TokenKind};

pub const ROOT: &str = "root";
pub const CODE: &str = "code";
pub const KEYWORD: &str = "keyword";
pub const STRING: &str = "string";

pub const WHITESPACE: &str = r"\s+";
/// Runs through the newline; a comment on the last line needs one.
pub const COMMENT: &str = r"#.*?\n";
pub const FLOAT: &str = r"[-+]?(\d*\.\d+(e[-+]?\d+)?|\d+(\.\d*)?e[-+]?\d+)";
pub const INTEGER: &str = r"[-+]?\d+";
pub const PUNCTUATION: &str = r"(#\(|#\[|##|[(){}\[\],.;])";
pub const BOOLEAN: &str = r"#[tf]";
/// Identifiers and symbol runs such as `==` or `~=`.
pub const NAME: &str = r"\\?[\w!&*<>|^$%@\-+~?/=]+";

pub const STRING_ESCAPE: &str = r#"\\([\\abfnrtv"']|x[a-f0-9]{2,4}|[0-7]{1,3})"#;

/// Build the FRED rule table.
pub fn table() -> Result<RuleTable> {
    RuleTable::builder()
        .state(
            ROOT,
            [
                Rule::token(WHITESPACE, TokenKind::Whitespace),
                Rule::token(COMMENT, TokenKind::Comment),
                Rule::default_to(CODE),
            ],
        )
        .state(
            CODE,
            [
                Rule::token(WHITESPACE, TokenKind::Whitespace),
                Rule::token(COMMENT, TokenKind::Comment),
                Rule::token(FLOAT, TokenKind::NumberFloat),
                Rule::token(INTEGER, TokenKind::NumberInteger),
                Rule::token(PUNCTUATION, TokenKind::Punctuation),
                // Before NAME-like input starting with '#'
                Rule::token(BOOLEAN, TokenKind::Literal),
                Rule::token(NAME, TokenKind::Name),
            ],
        )
        .state(
            KEYWORD,
            [
                Rule::new("\"", TokenKind::StringLiteral, Action::Pop),
                Rule::token(r#"[^\\"]+"#, TokenKind::StringLiteral),
            ],
        )
        .state(
            STRING,
            [
                Rule::new("\"", TokenKind::StringLiteral, Action::Pop),
                Rule::token(STRING_ESCAPE, TokenKind::StringEscape),
                Rule::token(r#"[^\\"\n]+"#, TokenKind::StringLiteral),
                // Line continuation
                Rule::token(r"\\\n", TokenKind::StringLiteral),
                // Stray backslash
                Rule::token(r"\\", TokenKind::StringLiteral),
            ],
        )
        .initial(ROOT)
        .build()
}
