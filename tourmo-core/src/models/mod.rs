//! Contains the data model shared by all indicators.

mod bounds;
pub use self::bounds::*;

mod objective;
pub use self::objective::*;

mod quality;
pub use self::quality::*;
