//! Fixed-index gather ("P-box") over a string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The value [`PBox::apply`] returns when the input has fewer characters
/// than the table addresses. Callers of the in-band interface detect
/// failure by comparing against this literal.
pub const INPUT_TOO_SHORT: &str = "[Input too short for this P-box]";

/// Failure of the checked [`PBox::try_apply`] entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PBoxError {
    /// The table addresses a position past the end of the input.
    #[error("input too short: need at least {needed} characters, got {got}")]
    InputTooShort { needed: usize, got: usize },
}

/// An ordered sequence of source positions to read from an input string.
///
/// The table is not required to be a true permutation: repeating a
/// position lengthens the output and omitting one shortens it. The
/// output length always equals the table length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PBox {
    table: Vec<usize>,
}

impl PBox {
    /// Builds a P-box from its ordered source positions.
    pub fn new(table: Vec<usize>) -> Self {
        Self { table }
    }

    /// Number of positions the box reads, which is also its output length.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// `true` if the box reads no positions at all.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// # Required Length
    /// The shortest input this box accepts.
    ///
    /// ## Returns
    /// One past the largest position in the table. An empty table reads
    /// nothing and accepts any input, so its requirement is zero.
    pub fn required_len(&self) -> usize {
        self.table.iter().max().map_or(0, |&max| max + 1)
    }

    /// # Try Apply
    /// Gather the characters of `input` in table order.
    ///
    /// ## Parameters
    /// - `input`: The string to read. Checked against
    ///   [`Self::required_len`] before any position is touched.
    ///
    /// ## Returns
    /// A string of exactly [`Self::len`] characters whose i-th character
    /// is the input's character at position `table[i]`, or
    /// [`PBoxError::InputTooShort`] when the input cannot cover the
    /// table.
    pub fn try_apply(&self, input: &str) -> Result<String, PBoxError> {
        let chars: Vec<char> = input.chars().collect();
        let needed = self.required_len();
        if chars.len() < needed {
            log::debug!("rejecting input: need at least {needed} characters, got {}", chars.len());
            return Err(PBoxError::InputTooShort {
                needed,
                got: chars.len(),
            });
        }
        Ok(self.table.iter().map(|&pos| chars[pos]).collect())
    }

    /// # Apply
    /// Gather like [`Self::try_apply`], reporting failure in-band.
    ///
    /// ## Returns
    /// The gathered string, or the literal [`INPUT_TOO_SHORT`] sentinel
    /// when the input has fewer characters than the table addresses.
    /// Never panics.
    pub fn apply(&self, input: &str) -> String {
        match self.try_apply(input) {
            Ok(out) => out,
            Err(PBoxError::InputTooShort { .. }) => INPUT_TOO_SHORT.to_string(),
        }
    }
}
