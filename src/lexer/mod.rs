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

//! Generic regex-driven lexer engine.
//!
//! This module knows nothing about any particular language. It handles:
//! - Rule tables of named states ([`RuleTable`], [`Rule`], [`Action`])
//! - Ordered-alternative matching with push/pop/switch/default transitions
//! - Lazy token streams ([`Tokens`]) with one-character error recovery
//! - Reclassification of `Name` tokens ([`Classify`])
//! - Registration descriptors for hosts ([`LexerInfo`])
//!
//! # Example
//!
//! ```
//! use fredlex::lexer::{Action, Rule, RuleTable, TokenKind, Verbatim};
//!
//! let table = RuleTable::builder()
//!     .state(
//!         "root",
//!         [
//!             Rule::token(r"\s+", TokenKind::Whitespace),
//!             Rule::new(r"\(", TokenKind::Punctuation, Action::Push("group".into())),
//!             Rule::token(r"\w+", TokenKind::Name),
//!         ],
//!     )
//!     .state(
//!         "group",
//!         [
//!             Rule::new(r"\)", TokenKind::Punctuation, Action::Pop),
//!             Rule::token(r"\d+", TokenKind::NumberInteger),
//!         ],
//!     )
//!     .build()?;
//!
//! let kinds: Vec<TokenKind> = table
//!     .tokens("f(1)", Verbatim)
//!     .map(|token| token.map(|t| t.kind))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Name,
//!         TokenKind::Punctuation,
//!         TokenKind::NumberInteger,
//!         TokenKind::Punctuation,
//!     ]
//! );
//! # Ok::<(), fredlex::LexError>(())
//! ```

mod classify;
mod engine;
mod helpers;
mod info;
mod rules;
mod table;
mod tokens;

pub use classify::{Classify, Verbatim};
pub use engine::Tokens;
pub use info::LexerInfo;
pub use rules::{Action, Rule, StateId};
pub use table::{RuleTable, RuleTableBuilder};
pub use tokens::{Token, TokenKind};
