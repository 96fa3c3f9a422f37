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

//! fredlex - FRED Modeling Language Lexer
//!
//! This library tokenizes FRED model files into a lazy stream of
//! `(position, kind, text)` tokens.
//!
//! # Modules
//!
//! - [`error`] - Error types and source locations
//! - [`lexer`] - Generic regex state-machine tokenizer
//! - [`fred`] - FRED rule table, vocabularies and descriptor
//!
//! # Example
//!
//! ```
//! use fredlex::TokenKind;
//!
//! let tokens = fredlex::tokenize("state S { wait(0) }")?;
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[0].text, "state");
//!
//! let source: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(source, "state S { wait(0) }");
//! # Ok::<(), fredlex::LexError>(())
//! ```

pub mod error;
pub mod fred;
pub mod lexer;

// Re-export commonly used types
pub use error::{ErrorCode, LexError, Result, SourceLocation, Span};
pub use fred::{FredLexer, FRED_INFO};
pub use lexer::{Token, TokenKind};

/// The version of fredlex.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the lexer binary.
pub const NAME: &str = "fredlex";

/// Tokenize FRED source code with the shared lexer.
///
/// Unrecognized input becomes [`TokenKind::Error`] tokens; only a broken
/// rule table or a state stack underflow returns an error.
///
/// # Example
///
/// ```
/// match fredlex::tokenize("42 3.14") {
///     Ok(tokens) => println!("{} tokens", tokens.len()),
///     Err(e) => eprintln!("Lexer error: {}", e),
/// }
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>> {
    fred::lexer()?.tokenize(source)
}
