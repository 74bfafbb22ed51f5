//! # Rounding Policy
//!
//! Every calculator result passes through [`round_result`]. A precision of
//! `None` leaves the value untouched; `Some(n)` rounds the stored binary value to
//! `n` decimal digits, resolving exact ties to the even neighbour.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::rounding::round_result;
//!
//! assert_eq!(round_result(3.14159, Some(2)), 3.14);
//! assert_eq!(round_result(3.14159, None), 3.14159);
//! assert_eq!(round_result(2.5, Some(0)), 2.0);
//! assert_eq!(round_result(2.675, Some(2)), 2.67);
//! ```

use tracing::debug;

/// Every finite f64 has an exact decimal form with at most this many fractional digits.
const MAX_FRACTION_DIGITS: u32 = 1074;

/// Round `value` to `precision` decimal digits.
///
/// The exact binary value is rounded, so `2.675` (stored just below the
/// tie) becomes `2.67`. Non-finite values come back unchanged, and a
/// precision wide enough to hold every digit of `value` is a no-op.
pub fn round_result(value: f64, precision: Option<u32>) -> f64 {
    let Some(digits) = precision else {
        return value;
    };
    if !value.is_finite() {
        return value;
    }
    if digits > MAX_FRACTION_DIGITS {
        debug!(value, digits, "precision exceeds representable digits, leaving value unrounded");
        return value;
    }

    // The formatter rounds the exact decimal expansion, ties to even.
    let text = format!("{:.*}", digits as usize, value);
    text.parse::<f64>().unwrap_or(value)
}
