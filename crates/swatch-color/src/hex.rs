//! Hexadecimal color notations.
//!
//! Hex input is always gamma-encoded sRGB and goes through the regular
//! [`Color::new`] path. There is no `Color` -> hex conversion because
//! wide-gamut channels have no hex form.
//!
//! | Digits | Layout | Scale |
//! |--------|--------|-------|
//! | 3 | `RGB` | nibble doubled to a byte |
//! | 4 | `RGBA` | nibble doubled to a byte |
//! | 6 | `RRGGBB` | byte / 255 |
//! | 8 | `RRGGBBAA` | byte / 255 |

use std::str::FromStr;

use tracing::trace;

use crate::{Color, ColorError, ColorOptions, ColorResult};

impl Color {
    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The leading `#` is optional and digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHexFormat`] for any other length or a non-hex
    /// character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_color::Color;
    ///
    /// let red = Color::from_hex_string("#F00")?;
    /// assert_eq!(red.linear_components().red, 1.0);
    /// assert_eq!(red.opacity(), 1.0);
    /// # Ok::<(), swatch_color::ColorError>(())
    /// ```
    pub fn from_hex_string(hex: &str) -> ColorResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !matches!(digits.len(), 3 | 4 | 6 | 8)
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ColorError::InvalidHexFormat);
        }

        // Short forms double each digit: "F08" -> "FF0088".
        let expanded: String = if digits.len() <= 4 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_owned()
        };

        let bytes = (0..expanded.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&expanded[i..i + 2], 16))
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| ColorError::InvalidHexFormat)?;

        trace!(hex, ?bytes, "parsed hex string");

        let unit = |b: u8| f64::from(b) / 255.0;
        let mut options = ColorOptions::new(unit(bytes[0]), unit(bytes[1]), unit(bytes[2]));
        if let Some(&alpha) = bytes.get(3) {
            options = options.with_opacity(unit(alpha));
        }
        Color::new(options)
    }

    /// Builds a color from an integer, choosing the layout by magnitude.
    ///
    /// | Range | Layout |
    /// |-------|--------|
    /// | `0..=0xFFF` | 4-bit RGB |
    /// | `0x1000..=0xFFFF` | 4-bit RGBA |
    /// | `0x10000..=0xFFFFFF` | 8-bit RGB |
    /// | `0x1000000..=0xFFFFFFFF` | 8-bit RGBA |
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHexValue`] for negative values and values above
    /// `0xFFFFFFFF`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_color::Color;
    ///
    /// let slate = Color::from_hex_number(0x3366CC)?;
    /// assert_eq!(slate.opacity(), 1.0);
    /// assert!(Color::from_hex_number(-1).is_err());
    /// # Ok::<(), swatch_color::ColorError>(())
    /// ```
    pub fn from_hex_number(value: i64) -> ColorResult<Self> {
        let v = u32::try_from(value).map_err(|_| ColorError::InvalidHexValue(value))?;

        let nibble = |shift: u32| f64::from((v >> shift) & 0xF) / 15.0;
        let byte = |shift: u32| f64::from((v >> shift) & 0xFF) / 255.0;

        let options = match v {
            0..=0xFFF => ColorOptions::new(nibble(8), nibble(4), nibble(0)),
            0x1000..=0xFFFF => {
                ColorOptions::new(nibble(12), nibble(8), nibble(4)).with_opacity(nibble(0))
            }
            0x1_0000..=0xFF_FFFF => ColorOptions::new(byte(16), byte(8), byte(0)),
            _ => ColorOptions::new(byte(24), byte(16), byte(8)).with_opacity(byte(0)),
        };

        trace!(value = v, "parsed hex number");
        Color::new(options)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Same as [`Color::from_hex_string`].
    fn from_str(s: &str) -> ColorResult<Self> {
        Self::from_hex_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_red(color: &Color) {
        let c = color.components();
        assert_abs_diff_eq!(c.red, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.green, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.blue, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_string_forms() {
        for hex in ["#FF0000", "FF0000", "F00", "#f00", "#ff0000"] {
            let color = Color::from_hex_string(hex).unwrap();
            assert_red(&color);
            assert_eq!(color.opacity(), 1.0, "{}", hex);
        }
    }

    #[test]
    fn test_string_alpha() {
        let color = Color::from_hex_string("#FF000080").unwrap();
        assert_red(&color);
        assert_abs_diff_eq!(color.opacity(), 0.5, epsilon = 0.01);

        let color = Color::from_hex_string("F008").unwrap();
        assert_red(&color);
        assert_abs_diff_eq!(color.opacity(), 0.533, epsilon = 0.001);
    }

    #[test]
    fn test_string_invalid() {
        for hex in ["", "#", "#F", "#FF", "#FFFFF", "#FFFFFFF", "#GG0000", "##F00", "+FF", "#FF 000"] {
            let err = Color::from_hex_string(hex).unwrap_err();
            assert!(
                err.to_string().contains("Invalid hex color format"),
                "{:?} -> {}",
                hex,
                err
            );
            assert!(err.is_format_error());
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        // Four bytes, but not four hex digits.
        assert!(Color::from_hex_string("#é00").is_err());
    }

    #[test]
    fn test_number_forms() {
        assert_red(&Color::from_hex_number(0xF00).unwrap());
        assert_red(&Color::from_hex_number(0xFF0000).unwrap());

        let color = Color::from_hex_number(0xF008).unwrap();
        assert_red(&color);
        assert_abs_diff_eq!(color.opacity(), 0.533, epsilon = 0.001);

        let color = Color::from_hex_number(0xFF000080).unwrap();
        assert_red(&color);
        assert_abs_diff_eq!(color.opacity(), 0.502, epsilon = 0.001);
    }

    #[test]
    fn test_number_zero_is_black() {
        let color = Color::from_hex_number(0).unwrap();
        assert_eq!(color.linear_components().to_array(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_number_layout_follows_magnitude() {
        // Leading zeros are not visible in an integer, so 0x00FF00 reads as
        // the 4-bit RGBA value 0xFF00.
        let color = Color::from_hex_number(0x00FF00).unwrap();
        assert_abs_diff_eq!(color.red(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(color.green(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(color.blue(), 0.0, epsilon = 1e-9);
        assert_eq!(color.opacity(), 0.0);
    }

    #[test]
    fn test_number_invalid() {
        for value in [-1, 0x1_0000_0000, i64::MIN, i64::MAX] {
            let err = Color::from_hex_number(value).unwrap_err();
            assert!(err.to_string().contains("Invalid hex value"));
            assert!(err.is_range_error());
        }
    }

    #[test]
    fn test_from_str() {
        let color: Color = "#00FF00".parse().unwrap();
        assert_abs_diff_eq!(color.green(), 1.0, epsilon = 1e-9);
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn test_string_and_number_agree() {
        let a = Color::from_hex_string("#3366CC").unwrap();
        let b = Color::from_hex_number(0x3366CC).unwrap();
        assert_eq!(a, b);
    }
}
