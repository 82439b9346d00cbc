//! Presentation rounding for reported results.
//!
//! Models compute at full `f64` precision; the `rounded()` copies of their
//! outputs truncate to a fixed number of decimal places so identical inputs
//! render identically wherever the numbers end up. Rounding is one-way:
//! nothing in the crate feeds a rounded value back into a computation.

/// Rounds `value` to `decimals` decimal places, half away from zero.
///
/// ```
/// use turbine_models::support::rounding::round_to;
///
/// assert_eq!(round_to(0.5527864, 4), 0.5528);
/// assert_eq!(round_to(6.998722, 3), 6.999);
/// assert_eq!(round_to(-0.227364, 4), -0.2274);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
