//! Quality indicators which assess approximation sets.

mod coverage;
pub use self::coverage::*;

mod hypervolume;
pub use self::hypervolume::*;

mod normalization;
pub use self::normalization::*;
