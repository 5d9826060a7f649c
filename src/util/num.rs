/// Safely converts an `i64` to `u32` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u32::MAX`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use plotcalc::util::num::i64_to_u32_checked;
///
/// // Works for representable values
/// assert_eq!(i64_to_u32_checked(45, "out of range"), Ok(45));
///
/// // Fails for negative or oversized values
/// assert!(i64_to_u32_checked(-1, "out of range").is_err());
/// assert!(i64_to_u32_checked(i64::MAX, "out of range").is_err());
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
