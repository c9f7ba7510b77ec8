//! The classroom exercise: one substitution table and three P-boxes.
//!
//! The lab this crate grew out of runs a single line of input through a
//! digit substitution, then shows the straight, compression and
//! expansion box outputs side by side. The tables live here as
//! constructors so every caller owns its copy; nothing in the crate
//! holds them as shared state.

use std::fmt;

use crate::pbox::PBox;
use crate::subst::{substitute, SubstitutionTable};

/// Replacement rules of the exercise: `2 -> M`, `4 -> J`, `5 -> P`.
pub fn digit_substitution() -> SubstitutionTable {
    SubstitutionTable::from_pairs(&[('2', 'M'), ('4', 'J'), ('5', 'P')])
}

/// Straight box: a true permutation of the first five positions.
pub fn straight_pbox() -> PBox {
    PBox::new(vec![4, 2, 0, 3, 1])
}

/// Compression box: reads three of the first five positions.
pub fn compression_pbox() -> PBox {
    PBox::new(vec![3, 1, 4])
}

/// Expansion box: seven reads over five positions, two of them repeats.
pub fn expansion_pbox() -> PBox {
    PBox::new(vec![0, 1, 2, 3, 4, 2, 1])
}

/// The three box outputs for one input, in display order.
///
/// Any field may hold the [`crate::INPUT_TOO_SHORT`] sentinel. The three
/// applications are independent, so one short result says nothing about
/// the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub straight: String,
    pub compression: String,
    pub expansion: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SP-BOX: {}", self.straight)?;
        writeln!(f, "CP-BOX: {}", self.compression)?;
        write!(f, "EP-BOX: {}", self.expansion)
    }
}

/// # Process
/// Run one line of input through the whole exercise.
///
/// ## Parameters
/// - `input`: The raw string as typed. Substituted once, then gathered
///   by each of the three boxes.
///
/// ## Returns
/// A [`Report`] with one result per box.
pub fn process(input: &str) -> Report {
    let substituted = substitute(input, &digit_substitution());
    log::debug!("processing {} characters", substituted.chars().count());
    Report {
        straight: straight_pbox().apply(&substituted),
        compression: compression_pbox().apply(&substituted),
        expansion: expansion_pbox().apply(&substituted),
    }
}
