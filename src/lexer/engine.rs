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

//! The tokenizer state machine.
//!
//! At each position the rules of the current state are tried in declared
//! order and the first one that matches wins, even when a later rule would
//! match more text. When no pattern matches, the state's default transition
//! is taken without consuming input. When there is none either, one
//! character is emitted as an `Error` token so the stream always advances.

use tracing::trace;

use super::classify::Classify;
use super::helpers::CursorHelpers;
use super::rules::{StateId, Transition};
use super::table::RuleTable;
use super::{Token, TokenKind};
use crate::error::{ErrorCode, LexError, Result};

/// Lazy token stream over one source string.
///
/// Yields `Ok` tokens until the input is consumed. A fatal error is yielded
/// once, after which the stream ends.
#[derive(Debug, Clone)]
pub struct Tokens<'table, 'source, C> {
    table: &'table RuleTable,
    classifier: C,
    pub(super) source: &'source str,
    pub(super) position: usize,
    /// Current state.
    current: StateId,
    /// Remembered states, innermost last.
    stack: Vec<StateId>,
    /// Rules that already matched empty at `zero_width_at`.
    zero_width: Vec<(StateId, usize)>,
    zero_width_at: usize,
    finished: bool,
}

impl<'table, 'source, C: Classify> Tokens<'table, 'source, C> {
    pub(crate) fn new(
        table: &'table RuleTable,
        source: &'source str,
        start: StateId,
        classifier: C,
    ) -> Self {
        Self {
            table,
            classifier,
            source,
            position: 0,
            current: start,
            stack: Vec::new(),
            zero_width: Vec::new(),
            zero_width_at: 0,
            finished: false,
        }
    }

    /// Name of the state the next token will be matched in.
    pub fn state(&self) -> &'table str {
        &self.table.state(self.current).name
    }

    /// Number of states on the stack, counting the current one.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Get the next token from the source.
    fn next_token(&mut self) -> Result<Option<Token<'source>>> {
        let table = self.table;

        loop {
            if self.is_at_end() {
                return Ok(None);
            }

            let start = self.offset();
            if self.zero_width_at != start {
                self.zero_width_at = start;
                self.zero_width.clear();
            }

            let current = self.current;
            let state = table.state(current);
            let rest = self.rest();
            let zero_width = &self.zero_width;
            let matched = state.rules.iter().enumerate().find_map(|(index, rule)| {
                let text = rule.match_at(rest)?;
                let usable = !text.is_empty()
                    || (rule.action.moves() && !zero_width.contains(&(current, index)));
                usable.then_some((index, rule, text))
            });

            let Some((index, rule, text)) = matched else {
                if let Some(target) = state.default {
                    self.enter(target);
                    continue;
                }
                return Ok(Some(self.error_token()));
            };

            if text.is_empty() {
                // Fires once per position, then counts as no match
                self.zero_width.push((current, index));
                self.apply(rule.action, start)?;
                continue;
            }

            self.advance_by(text.len());
            self.apply(rule.action, start)?;

            // Silent rules consume without emitting
            let Some(kind) = rule.kind else {
                continue;
            };
            let kind = match kind {
                TokenKind::Name => self.classifier.classify(text),
                other => other,
            };
            return Ok(Some(Token::new(start, kind, text)));
        }
    }

    fn apply(&mut self, action: Transition, start: usize) -> Result<()> {
        match action {
            Transition::Stay => {}
            Transition::Push(target) => self.enter(target),
            Transition::Switch(target) => {
                trace!(
                    from = self.state(),
                    to = %self.table.state(target).name,
                    "switch state"
                );
                self.current = target;
            }
            Transition::Pop => {
                let Some(previous) = self.stack.pop() else {
                    let message = format!(
                        "Pop from state '{}' with no remembered state",
                        self.state()
                    );
                    return Err(LexError::new(ErrorCode::StateStackUnderflow, message)
                        .with_span(self.span_from(start))
                        .with_hint("The rule table pops more states than it pushes"));
                };
                trace!(
                    from = self.state(),
                    to = %self.table.state(previous).name,
                    "pop state"
                );
                self.current = previous;
            }
        }
        Ok(())
    }

    fn enter(&mut self, target: StateId) {
        trace!(
            from = self.state(),
            to = %self.table.state(target).name,
            depth = self.depth() + 1,
            "push state"
        );
        self.stack.push(self.current);
        self.current = target;
    }

    fn error_token(&mut self) -> Token<'source> {
        let start = self.offset();
        let text = self.advance_char();
        trace!(offset = start, text, state = self.state(), "no rule matched");
        Token::new(start, TokenKind::Error, text)
    }
}

impl<'source, C: Classify> Iterator for Tokens<'_, 'source, C> {
    type Item = Result<Token<'source>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<C: Classify> std::iter::FusedIterator for Tokens<'_, '_, C> {}
