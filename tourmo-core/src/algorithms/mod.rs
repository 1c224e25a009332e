//! Contains algorithms used to compare approximation sets.

pub mod dominance;
pub mod indicators;
