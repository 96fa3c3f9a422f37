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

//! Vocabularies and the `Name` classifier.
//!
//! The rule table matches every word-like run as a generic `Name`. The
//! classifier then looks the text up in four word lists, in this order:
//!
//! | List | Resulting kind |
//! |------|----------------|
//! | builtins | `BuiltinFunction` |
//! | keywords | `Keyword` |
//! | functions | `BuiltinFunction` |
//! | operators | `Operator` |
//!
//! Anything else stays a `Name`.

use std::collections::HashSet;

use crate::lexer::{Classify, TokenKind};

/// Builtin words: section names, transition words and settings.
pub const BUILTINS: &[&str] = &[
    "default",
    "then",
    "next",
    "wait",
    "with",
    "locations",
    "start_date",
    "end_date",
    "weekly_data",
    "start_state",
    "meta_start_state",
    "has_administrator",
    "global",
    "personal",
    "import",
    "import_per_capita",
    "transmission_mode",
    "exposed_state",
];

/// Block keywords.
pub const KEYWORDS: &[&str] = &[
    "condition",
    "include",
    "parameters",
    "simulation",
    "state",
    "variables",
];

/// Operators. Symbol runs are matched as names and reclassified.
pub const OPERATORS: &[&str] = &[
    "~", "+", "-", "*", "|", "^", "=", "==", "~=", "~==", "<", "<=", ">", ">=", "&",
];

/// Predefined functions.
pub const FUNCTIONS: &[&str] = &[
    "if",
    "foobar",
    "select",
    "prob",
    "absent",
    "present",
    "bernoulli",
    "set_state",
    "lognormal",
    "date_range",
];

/// The four word lists consulted by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub builtins: HashSet<String>,
    pub keywords: HashSet<String>,
    pub functions: HashSet<String>,
    pub operators: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from word lists.
    pub fn new<'a>(
        builtins: impl IntoIterator<Item = &'a str>,
        keywords: impl IntoIterator<Item = &'a str>,
        functions: impl IntoIterator<Item = &'a str>,
        operators: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        fn set<'a>(words: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
            words.into_iter().map(str::to_owned).collect()
        }
        Self {
            builtins: set(builtins),
            keywords: set(keywords),
            functions: set(functions),
            operators: set(operators),
        }
    }

    /// The FRED vocabulary.
    pub fn fred() -> Self {
        Self::new(
            BUILTINS.iter().copied(),
            KEYWORDS.iter().copied(),
            FUNCTIONS.iter().copied(),
            OPERATORS.iter().copied(),
        )
    }

    /// Total number of words across all lists.
    pub fn len(&self) -> usize {
        self.builtins.len() + self.keywords.len() + self.functions.len() + self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decide the kind of a `Name` token from its text.
pub fn classify(vocabulary: &Vocabulary, text: &str) -> TokenKind {
    if vocabulary.builtins.contains(text) {
        TokenKind::BuiltinFunction
    } else if vocabulary.keywords.contains(text) {
        TokenKind::Keyword
    } else if vocabulary.functions.contains(text) {
        TokenKind::BuiltinFunction
    } else if vocabulary.operators.contains(text) {
        TokenKind::Operator
    } else {
        TokenKind::Name
    }
}

/// [`Classify`] implementation backed by a [`Vocabulary`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    vocabulary: Vocabulary,
}

impl Classifier {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Rewrite `kind` if it is `Name`; every other kind is returned as is.
    ///
    /// Because classified kinds are never `Name`-rewritten again, applying
    /// this twice gives the same result as applying it once.
    pub fn reclassify(&self, kind: TokenKind, text: &str) -> TokenKind {
        match kind {
            TokenKind::Name => classify(&self.vocabulary, text),
            other => other,
        }
    }
}

impl Classify for Classifier {
    fn classify(&self, text: &str) -> TokenKind {
        classify(&self.vocabulary, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("default", TokenKind::BuiltinFunction; "builtin")]
    #[test_case("exposed_state", TokenKind::BuiltinFunction; "builtin_with_underscore")]
    #[test_case("condition", TokenKind::Keyword; "keyword")]
    #[test_case("variables", TokenKind::Keyword; "keyword_variables")]
    #[test_case("bernoulli", TokenKind::BuiltinFunction; "function")]
    #[test_case("if", TokenKind::BuiltinFunction; "function_if")]
    #[test_case("==", TokenKind::Operator; "operator_eq")]
    #[test_case("~==", TokenKind::Operator; "operator_tilde_eq_eq")]
    #[test_case("&", TokenKind::Operator; "operator_amp")]
    #[test_case("infected", TokenKind::Name; "plain_name")]
    #[test_case("State", TokenKind::Name; "case_sensitive")]
    #[test_case("", TokenKind::Name; "empty")]
    fn test_classify_fred(text: &str, expected: TokenKind) {
        assert_eq!(classify(&Vocabulary::fred(), text), expected);
    }

    const NONE: [&str; 0] = [];

    #[test]
    fn test_builtins_take_precedence() {
        let vocabulary = Vocabulary::new(["x"], ["x"], NONE, ["x"]);
        assert_eq!(classify(&vocabulary, "x"), TokenKind::BuiltinFunction);

        let vocabulary = Vocabulary::new(NONE, ["x"], ["x"], ["x"]);
        assert_eq!(classify(&vocabulary, "x"), TokenKind::Keyword);

        let vocabulary = Vocabulary::new(NONE, NONE, ["x"], ["x"]);
        assert_eq!(classify(&vocabulary, "x"), TokenKind::BuiltinFunction);
    }

    #[test]
    fn test_fred_lists_are_disjoint() {
        let vocabulary = Vocabulary::fred();
        let total = BUILTINS.len() + KEYWORDS.len() + FUNCTIONS.len() + OPERATORS.len();
        let mut all: HashSet<&str> = HashSet::new();
        all.extend(BUILTINS);
        all.extend(KEYWORDS);
        all.extend(FUNCTIONS);
        all.extend(OPERATORS);
        assert_eq!(all.len(), total);
        assert_eq!(vocabulary.len(), total);
        assert!(!vocabulary.is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.is_empty());
        assert_eq!(classify(&vocabulary, "state"), TokenKind::Name);
    }

    #[test]
    fn test_reclassify_is_idempotent() {
        let classifier = Classifier::new(Vocabulary::fred());
        for text in ["state", "wait", "prob", "<=", "agent", "42"] {
            let once = classifier.reclassify(TokenKind::Name, text);
            let twice = classifier.reclassify(once, text);
            assert_eq!(once, twice, "{}", text);
        }
    }

    #[test]
    fn test_reclassify_leaves_other_kinds() {
        let classifier = Classifier::new(Vocabulary::fred());
        assert_eq!(
            classifier.reclassify(TokenKind::Comment, "state"),
            TokenKind::Comment
        );
        assert_eq!(
            classifier.reclassify(TokenKind::NumberInteger, "42"),
            TokenKind::NumberInteger
        );
    }

    #[test]
    fn test_classifier_as_hook() {
        let classifier = Classifier::new(Vocabulary::fred());
        assert_eq!(Classify::classify(&classifier, "simulation"), TokenKind::Keyword);
        assert_eq!(classifier.vocabulary().keywords.len(), KEYWORDS.len());
    }
}
