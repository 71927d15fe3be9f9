//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve for the rest. It is close to, but not the
//! same as, a flat gamma 2.2 curve.
//!
//! # Range
//!
//! - Defined on [0, 1]; extended linearly below the cutoff and along the
//!   power segment above one.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Encoded value at which the EOTF switches from the linear to the power segment.
pub const ENCODED_CUTOFF: f64 = 0.04045;

/// Linear value at which the OETF switches from the linear to the power segment.
pub const LINEAR_CUTOFF: f64 = 0.0031308;

/// Slope of the linear segment.
pub const PHI: f64 = 12.92;

/// Offset of the power segment.
pub const A: f64 = 0.055;

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= ENCODED_CUTOFF {
        v / PHI
    } else {
        ((v + A) / 1.055).powf(GAMMA)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = L^(1/2.4) * 1.055 - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= LINEAR_CUTOFF {
        l * PHI
    } else {
        l.powf(1.0 / GAMMA) * 1.055 - A
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-9, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_inverse_roundtrip() {
        for i in 0..=1000 {
            let l = i as f64 / 1000.0;
            let back = eotf(oetf(l));
            assert!((l - back).abs() < 1e-9, "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_segments_meet_at_cutoff() {
        let below = eotf(ENCODED_CUTOFF);
        let above = ((ENCODED_CUTOFF + A) / 1.055).powf(GAMMA);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_wide_gamut_passthrough() {
        // Negative values stay on the linear segment.
        assert_abs_diff_eq!(eotf(-0.5), -0.5 / PHI, epsilon = 1e-15);
        assert_abs_diff_eq!(oetf(eotf(-0.5)), -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(oetf(eotf(1.5)), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_not_flat_gamma() {
        // A flat 2.2 curve gives 0.2176 here.
        assert_abs_diff_eq!(eotf(0.5), 0.214_041_140_482_232_5, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_helpers() {
        let rgb = eotf_rgb([0.0, 0.5, 1.0]);
        assert_eq!(rgb[0], 0.0);
        assert_abs_diff_eq!(rgb[1], eotf(0.5));
        let back = oetf_rgb(rgb);
        assert_abs_diff_eq!(back[1], 0.5, epsilon = 1e-12);
    }
}
