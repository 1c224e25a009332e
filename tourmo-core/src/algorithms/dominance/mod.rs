//! Pareto dominance relations and non-dominated front extraction.
//!
//! All functions accept vectors of any length: hypervolume recursion calls them on projections
//! which drop leading dimensions. Vectors of different length never dominate each other.

mod relation;
pub use self::relation::*;

mod front;
pub use self::front::*;
