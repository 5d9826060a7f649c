/// Numeric conversion helpers.
///
/// Provides safe conversions between integer widths that return a `Result`
/// instead of truncating, used where exponents cross type boundaries.
pub mod num;
