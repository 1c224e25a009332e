/// Alias to a scalar floating type.
///
/// NOTE: hypervolume values of the raw objective space easily reach `1e9` and above, so `f64`
/// is used everywhere to keep slice products precise.
pub type Float = f64;
