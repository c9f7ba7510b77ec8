//! Character substitution over a fixed replacement table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A fixed character-to-character replacement table.
///
/// Characters without an entry pass through [`substitute`] unchanged, so
/// a table never needs to cover the whole character set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionTable {
    map: HashMap<char, char>,
}

impl SubstitutionTable {
    /// Builds a table from `(from, to)` replacement pairs.
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        Self {
            map: pairs.iter().copied().collect(),
        }
    }

    /// The replacement for `c`, if the table has one.
    pub fn lookup(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    /// Number of replacement rules in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` if the table has no rules at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(char, char)> for SubstitutionTable {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// # Substitute
/// Rewrite every character of `input` through `table`.
///
/// ## Parameters
/// - `input`: The string to rewrite. Any length, including empty.
/// - `table`: The fixed replacement rules.
///
/// ## Returns
/// A string with the same number of characters as `input`, where each
/// character is its mapped value when the table has one and itself
/// otherwise. Total over all inputs; there is no failure path.
pub fn substitute(input: &str, table: &SubstitutionTable) -> String {
    let mut replaced = 0usize;
    let out: String = input
        .chars()
        .map(|c| match table.lookup(c) {
            Some(mapped) => {
                replaced += 1;
                mapped
            }
            None => c,
        })
        .collect();
    log::trace!("substituted {replaced} of {} characters", out.chars().count());
    out
}
