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

//! The FRED Modeling Language.
//!
//! [`FredLexer`] combines the FRED rule table with the vocabulary-backed
//! [`Classifier`], so `Name` tokens come out as keywords, builtins or
//! operators where the vocabulary knows them.
//!
//! # Example
//!
//! ```
//! use fredlex::fred::FredLexer;
//! use fredlex::TokenKind;
//!
//! let lexer = FredLexer::new()?;
//! let kinds: Vec<TokenKind> = lexer
//!     .tokenize("condition x")?
//!     .iter()
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Keyword, TokenKind::Whitespace, TokenKind::Name]
//! );
//! # Ok::<(), fredlex::LexError>(())
//! ```

pub mod rules;
pub mod vocabulary;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::Result;
use crate::lexer::{Classify, LexerInfo, RuleTable, Token, Tokens};

pub use vocabulary::{Classifier, Vocabulary};

/// Registration descriptor of the FRED lexer.
pub const FRED_INFO: LexerInfo = LexerInfo {
    name: "FRED",
    aliases: &["fred"],
    filenames: &["*.fred", "*.fredmod"],
    mime_types: &["text/x-fred"],
};

static LEXER: OnceCell<FredLexer> = OnceCell::new();

/// The shared FRED lexer, built on first use.
pub fn lexer() -> Result<&'static FredLexer> {
    LEXER.get_or_try_init(FredLexer::new)
}

/// Rule table, classifier and descriptor of the FRED language.
#[derive(Debug, Clone)]
pub struct FredLexer {
    table: RuleTable,
    classifier: Classifier,
    info: LexerInfo,
}

impl FredLexer {
    /// Build the rule table and the FRED vocabulary.
    pub fn new() -> Result<Self> {
        let table = rules::table()?;
        let classifier = Classifier::new(Vocabulary::fred());
        debug!(
            states = table.state_names().count(),
            words = classifier.vocabulary().len(),
            "FRED lexer ready"
        );
        Ok(Self {
            table,
            classifier,
            info: FRED_INFO,
        })
    }

    /// Lazily tokenize `source` from the `root` state.
    pub fn tokens<'source>(
        &self,
        source: &'source str,
    ) -> Tokens<'_, 'source, impl Classify + '_> {
        let classifier = &self.classifier;
        self.table
            .tokens(source, move |text: &str| classifier.classify(text))
    }

    /// Lazily tokenize `source` starting in the named state.
    pub fn tokens_from<'source>(
        &self,
        source: &'source str,
        state: &str,
    ) -> Result<Tokens<'_, 'source, impl Classify + '_>> {
        let classifier = &self.classifier;
        self.table
            .tokens_from(source, state, move |text: &str| classifier.classify(text))
    }

    /// Collect every token of `source`, stopping at the first fatal error.
    pub fn tokenize<'source>(&self, source: &'source str) -> Result<Vec<Token<'source>>> {
        self.tokens(source).collect()
    }

    pub fn info(&self) -> &LexerInfo {
        &self.info
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}
