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

//! Registration descriptor for hosting highlighters.

use std::path::Path;

/// Identifies a lexer to a host that selects lexers by name, file or MIME type.
///
/// Hosts register the descriptor themselves at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerInfo {
    /// Display name.
    pub name: &'static str,
    /// Short names accepted in place of `name`.
    pub aliases: &'static [&'static str],
    /// File name globs, e.g. `*.fred`.
    pub filenames: &'static [&'static str],
    /// MIME types.
    pub mime_types: &'static [&'static str],
}

impl LexerInfo {
    /// Check if `alias` names this lexer, ignoring ASCII case.
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.name.eq_ignore_ascii_case(alias)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    /// Check if the file name of `path` matches one of the globs.
    pub fn matches_filename(&self, path: impl AsRef<Path>) -> bool {
        let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames.iter().any(|glob| wildcard_match(glob, name))
    }

    /// Check if `mime` is one of the MIME types, ignoring parameters.
    pub fn matches_mime_type(&self, mime: &str) -> bool {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        self.mime_types
            .iter()
            .any(|m| m.eq_ignore_ascii_case(essence))
    }
}

/// Match `name` against a glob where `*` is any run and `?` any one character.
fn wildcard_match(glob: &str, name: &str) -> bool {
    let glob: Vec<char> = glob.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut g, mut n) = (0, 0);
    // Position of the last `*` and the name index it is retried from
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match glob.get(g).copied() {
            Some('*') => {
                backtrack = Some((g, n));
                g += 1;
            }
            Some(c) if c == '?' || c == name[n] => {
                g += 1;
                n += 1;
            }
            _ => match backtrack {
                Some((star, from)) => {
                    g = star + 1;
                    n = from + 1;
                    backtrack = Some((star, from + 1));
                }
                None => return false,
            },
        }
    }

    glob[g..].iter().all(|&c| c == '*')
}
