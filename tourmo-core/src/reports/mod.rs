//! Contains report rows produced by comparing solution sets of several algorithms.

mod coverage;
pub use self::coverage::*;

mod hypervolume;
pub use self::hypervolume::*;

use crate::models::SolutionSet;

/// A solution set produced by a named algorithm.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedSolutionSet {
    /// Algorithm name.
    pub name: String,
    /// Algorithm solutions.
    pub solutions: SolutionSet,
}

impl NamedSolutionSet {
    /// Creates a new instance of `NamedSolutionSet`.
    pub fn new(name: impl Into<String>, solutions: SolutionSet) -> Self {
        Self { name: name.into(), solutions }
    }
}
