//! Substitution and permutation ("P-box") building blocks over short
//! text strings.
//!
//! Two stateless operations make up the crate:
//!
//! 1. **Substitution**: rewrite each character of a string through a
//!    fixed character mapping, leaving unmapped characters alone.
//! 2. **P-box**: reorder a string by reading it at a fixed sequence of
//!    source positions. A table may repeat positions (expansion box) or
//!    skip them (compression box), so the output length is the table
//!    length, not the input length.
//!
//! Tables are plain owned values handed to the operations; the crate
//! keeps no shared state between calls. The [`demo`] module carries the
//! fixed tables of the classroom exercise this crate grew out of, plus
//! [`demo::process`] to run one line of input through all three boxes.

pub mod demo;
pub mod pbox;
pub mod subst;

pub use pbox::{PBox, PBoxError, INPUT_TOO_SHORT};
pub use subst::{substitute, SubstitutionTable};
