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

//! Rules and state actions.
//!
//! A [`Rule`] is the authoring form: a pattern string, an optional token kind
//! and an [`Action`] naming states by string. The rule table compiles rules
//! into compiled rules whose patterns are anchored regexes and whose actions
//! refer to states by [`StateId`].

use regex::Regex;

use super::TokenKind;
use crate::error::{ErrorCode, LexError, Result};

/// Index of a state inside a built rule table.
pub type StateId = usize;

/// What happens to the state stack after a rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<S = String> {
    /// Remain in the current state.
    Stay,
    /// Enter a state, remembering the current one.
    Push(S),
    /// Return to the previously remembered state.
    Pop,
    /// Replace the current state without remembering it.
    Switch(S),
    /// Enter a state without consuming input when nothing else matched.
    Default(S),
}

impl<S> Action<S> {
    pub(crate) fn try_map<T, E>(
        self,
        mut f: impl FnMut(S) -> std::result::Result<T, E>,
    ) -> std::result::Result<Action<T>, E> {
        Ok(match self {
            Action::Stay => Action::Stay,
            Action::Push(s) => Action::Push(f(s)?),
            Action::Pop => Action::Pop,
            Action::Switch(s) => Action::Switch(f(s)?),
            Action::Default(s) => Action::Default(f(s)?),
        })
    }
}

/// The action of a compiled pattern rule. Defaults live on the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Stay,
    Push(StateId),
    Pop,
    Switch(StateId),
}

impl Transition {
    /// Check if applying this changes the state.
    pub(crate) fn moves(&self) -> bool {
        !matches!(self, Transition::Stay)
    }
}

/// A lexer rule as it is written in a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Regex source, or `None` for a default transition.
    pub pattern: Option<String>,
    /// Kind of the emitted token, or `None` for a silent rule.
    pub kind: Option<TokenKind>,
    /// State action applied after a match.
    pub action: Action,
}

impl Rule {
    /// A rule emitting `kind` and applying `action`.
    pub fn new(pattern: impl Into<String>, kind: TokenKind, action: Action) -> Self {
        Self {
            pattern: Some(pattern.into()),
            kind: Some(kind),
            action,
        }
    }

    /// A rule emitting `kind` and staying in the current state.
    pub fn token(pattern: impl Into<String>, kind: TokenKind) -> Self {
        Self::new(pattern, kind, Action::Stay)
    }

    /// A rule that consumes its match without emitting a token.
    pub fn silent(pattern: impl Into<String>, action: Action) -> Self {
        Self {
            pattern: Some(pattern.into()),
            kind: None,
            action,
        }
    }

    /// A zero-width transition into `state`, taken when no other rule matches.
    pub fn default_to(state: impl Into<String>) -> Self {
        Self {
            pattern: None,
            kind: None,
            action: Action::Default(state.into()),
        }
    }
}

/// A rule with its pattern compiled and its states resolved.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    regex: Regex,
    pub(crate) kind: Option<TokenKind>,
    pub(crate) action: Transition,
}

impl CompiledRule {
    pub(crate) fn new(
        pattern: &str,
        kind: Option<TokenKind>,
        action: Transition,
    ) -> Result<Self> {
        Ok(Self {
            regex: compile_anchored(pattern)?,
            kind,
            action,
        })
    }

    /// Match at the very start of `rest`, returning the matched text.
    ///
    /// The text may be empty; the engine decides what an empty match means.
    pub(crate) fn match_at<'source>(&self, rest: &'source str) -> Option<&'source str> {
        self.regex.find(rest).map(|m| m.as_str())
    }
}

/// Compile `pattern` so that it only matches at the start of the haystack.
fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!(r"\A(?:{})", pattern)).map_err(|e| {
        LexError::new(
            ErrorCode::InvalidPattern,
            format!("Invalid pattern {:?}: {}", pattern, e),
        )
    })
}
