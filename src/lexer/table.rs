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

//! Rule tables.
//!
//! States are registered once on a [`RuleTableBuilder`]. [`RuleTableBuilder::build`]
//! compiles every pattern and resolves every state reference, so a built
//! [`RuleTable`] is immutable and known to be well formed:
//! - state names are unique
//! - every pattern compiles
//! - every `Push`, `Switch` and `Default` target exists
//! - `Default` transitions never form a cycle

use std::collections::HashMap;

use tracing::debug;

use super::classify::Classify;
use super::engine::Tokens;
use super::rules::{Action, CompiledRule, Rule, StateId, Transition};
use crate::error::{ErrorCode, LexError, Result};

/// A named, ordered list of compiled rules.
#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) name: String,
    /// Pattern rules in declaration order.
    pub(crate) rules: Vec<CompiledRule>,
    /// Target of the state's default transition.
    pub(crate) default: Option<StateId>,
}

/// An immutable set of lexer states.
#[derive(Debug, Clone)]
pub struct RuleTable {
    states: Vec<State>,
    index: HashMap<String, StateId>,
    initial: StateId,
}

impl RuleTable {
    /// Start building a rule table.
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Name of the state tokenization starts in.
    pub fn initial_state(&self) -> &str {
        &self.states[self.initial].name
    }

    /// Names of all states, in registration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.iter().map(|state| state.name.as_str())
    }

    /// Check if a state with this name exists.
    pub fn contains_state(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of rules in a state, including its default transition.
    pub fn rule_count(&self, name: &str) -> Option<usize> {
        self.state_id(name).map(|id| {
            let state = &self.states[id];
            state.rules.len() + usize::from(state.default.is_some())
        })
    }

    pub(crate) fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    pub(crate) fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Tokenize `source` from the initial state.
    pub fn tokens<'table, 'source, C: Classify>(
        &'table self,
        source: &'source str,
        classifier: C,
    ) -> Tokens<'table, 'source, C> {
        Tokens::new(self, source, self.initial, classifier)
    }

    /// Tokenize `source` starting in the named state.
    pub fn tokens_from<'table, 'source, C: Classify>(
        &'table self,
        source: &'source str,
        state: &str,
        classifier: C,
    ) -> Result<Tokens<'table, 'source, C>> {
        let id = self
            .state_id(state)
            .ok_or_else(|| LexError::unknown_state(state))?;
        Ok(Tokens::new(self, source, id, classifier))
    }
}

/// Collects states for a [`RuleTable`].
#[derive(Debug, Clone, Default)]
pub struct RuleTableBuilder {
    states: Vec<(String, Vec<Rule>)>,
    initial: Option<String>,
}

impl RuleTableBuilder {
    /// Register a state with its rules in precedence order.
    pub fn state(
        mut self,
        name: impl Into<String>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Self {
        self.states.push((name.into(), rules.into_iter().collect()));
        self
    }

    /// Select the initial state. Defaults to the first registered state.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Compile and validate the table.
    pub fn build(self) -> Result<RuleTable> {
        if self.states.is_empty() {
            return Err(LexError::new(
                ErrorCode::EmptyTable,
                "Rule table has no states",
            ));
        }

        let mut index = HashMap::with_capacity(self.states.len());
        for (id, (name, _)) in self.states.iter().enumerate() {
            if index.insert(name.clone(), id).is_some() {
                return Err(LexError::new(
                    ErrorCode::DuplicateState,
                    format!("State '{}' is registered more than once", name),
                ));
            }
        }

        let mut states = Vec::with_capacity(self.states.len());
        for (name, rules) in self.states {
            states.push(compile_state(name, rules, &index)?);
        }

        let initial = match self.initial {
            Some(name) => index.get(&name).copied().ok_or_else(|| {
                LexError::unknown_state(&name)
                    .with_hint("The initial state must be registered")
            })?,
            None => 0,
        };

        check_default_cycles(&states)?;

        debug!(
            states = states.len(),
            initial = %states[initial].name,
            "built rule table"
        );

        Ok(RuleTable {
            states,
            index,
            initial,
        })
    }
}

fn compile_state(
    name: String,
    rules: Vec<Rule>,
    index: &HashMap<String, StateId>,
) -> Result<State> {
    let resolve = |target: String| {
        index.get(&target).copied().ok_or_else(|| {
            LexError::unknown_state(&target)
                .with_hint(format!("Referenced from state '{}'", name))
        })
    };

    let mut compiled = Vec::with_capacity(rules.len());
    let mut default = None;

    for rule in rules {
        let action = match rule.action.try_map(resolve)? {
            Action::Default(target) => {
                if rule.pattern.is_some() || rule.kind.is_some() {
                    return Err(LexError::new(
                        ErrorCode::InvalidPattern,
                        format!(
                            "Default transition with a pattern or kind in state '{}'",
                            name
                        ),
                    )
                    .with_hint("Default transitions match nothing and emit nothing"));
                }
                if default.is_some() {
                    return Err(LexError::new(
                        ErrorCode::DuplicateDefault,
                        format!("State '{}' has more than one default transition", name),
                    ));
                }
                default = Some(target);
                continue;
            }
            Action::Stay => Transition::Stay,
            Action::Push(target) => Transition::Push(target),
            Action::Pop => Transition::Pop,
            Action::Switch(target) => Transition::Switch(target),
        };

        let Some(pattern) = rule.pattern else {
            return Err(LexError::new(
                ErrorCode::InvalidPattern,
                format!("Rule without a pattern in state '{}'", name),
            )
            .with_hint("Only default transitions may omit the pattern"));
        };
        compiled.push(CompiledRule::new(&pattern, rule.kind, action)?);
    }

    Ok(State {
        name,
        rules: compiled,
        default,
    })
}

/// Each state has at most one default edge, so following them from any
/// state either ends or loops.
fn check_default_cycles(states: &[State]) -> Result<()> {
    for start in 0..states.len() {
        let mut chain = vec![start];
        let mut current = start;
        while let Some(next) = states[current].default {
            if let Some(pos) = chain.iter().position(|&id| id == next) {
                let names: Vec<&str> = chain[pos..]
                    .iter()
                    .chain(std::iter::once(&next))
                    .map(|&id| states[id].name.as_str())
                    .collect();
                return Err(LexError::new(
                    ErrorCode::DefaultCycle,
                    format!("Default transitions form a cycle: {}", names.join(" -> ")),
                ));
            }
            chain.push(next);
            current = next;
        }
    }
    Ok(())
}
