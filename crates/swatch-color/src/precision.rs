//! Fixed-precision rounding for stored and serialized values.
//!
//! Values are rounded to [`PRECISION`] decimal places at construction and
//! at serialization. Setters never round, so repeated read-modify-write
//! cycles on a channel do not accumulate truncation error.

/// Number of decimal places kept in stored and serialized values.
pub const PRECISION: i32 = 4;

/// Rounds to [`PRECISION`] decimal places, halves away from zero.
///
/// Negative zero comes back as positive zero so it never reaches a document
/// as `-0.0`. Values too large to scale are returned unchanged. Rounding is
/// idempotent: `round(round(x)) == round(x)`.
///
/// # Example
///
/// ```rust
/// use swatch_color::precision::round;
///
/// assert_eq!(round(0.12345), 0.1235);
/// assert_eq!(round(0.12344), 0.1234);
/// ```
#[inline]
pub fn round(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale + 0.0
}

/// Clamps to the closed interval [0, 1].
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
