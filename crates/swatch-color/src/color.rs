//! Single color stored in linear sRGB.
//!
//! A [`Color`] keeps exactly four numbers: the linear red, green and blue
//! channels plus opacity. The gamma-encoded view is recomputed from the
//! linear values on every read and is never cached.
//!
//! # Rounding
//!
//! Construction rounds all four stored values to
//! [`PRECISION`](crate::precision::PRECISION) decimals. The per-channel
//! setters do not, so incremental edits keep full precision until the color
//! is serialized:
//!
//! ```rust
//! use swatch_color::Color;
//!
//! let mut color = Color::srgb(0.2, 0.4, 0.6)?;
//! for _ in 0..5 {
//!     color.set_red(color.red() + 0.1)?;
//! }
//! assert!((color.red() - 0.7).abs() < 1e-3);
//! # Ok::<(), swatch_color::ColorError>(())
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use swatch_transfer::{linear_to_srgb, srgb_to_linear};

use crate::document::ColorRecord;
use crate::precision::{clamp_unit, round};
use crate::{ColorError, ColorResult};

/// One of the four stored channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
    /// Opacity (alpha).
    Opacity,
}

impl Channel {
    /// Display label, also used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Opacity => "Opacity",
        }
    }

    /// The three color channels, in storage order.
    pub const fn rgb() -> [Self; 3] {
        [Self::Red, Self::Green, Self::Blue]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of a color's channels in one coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
    /// Opacity in [0, 1].
    pub opacity: f64,
}

impl Components {
    /// `[red, green, blue]`.
    #[inline]
    pub fn rgb(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// `[red, green, blue, opacity]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.opacity]
    }
}

/// Construction parameters for a [`Color`].
///
/// Channels are read as gamma-encoded sRGB unless [`linear`](Self::linear)
/// is set.
///
/// # Example
///
/// ```rust
/// use swatch_color::{Color, ColorOptions};
///
/// let color = Color::new(
///     ColorOptions::new(1.0, 0.5, 0.0)
///         .with_opacity(0.8)
///         .with_name("Tangerine"),
/// )?;
/// assert_eq!(color.name(), Some("Tangerine"));
/// # Ok::<(), swatch_color::ColorError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorOptions {
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
    /// Opacity, clamped to [0, 1] on construction. Defaults to 1.
    pub opacity: f64,
    /// Optional label.
    pub name: Option<String>,
    /// Whether the channels are already linear. Defaults to `false`.
    pub is_linear: bool,
}

impl ColorOptions {
    /// Opaque, unnamed, gamma-encoded channels.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
            name: None,
            is_linear: false,
        }
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the channels as linear sRGB.
    pub fn linear(mut self) -> Self {
        self.is_linear = true;
        self
    }
}

/// A color with an optional name.
///
/// Channel values are unbounded: anything outside [0, 1] is a wide-gamut
/// color and is kept as is.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    name: Option<String>,
    linear: [f64; 3],
    opacity: f64,
}

/// Rejects NaN and infinities.
#[inline]
fn checked(channel: Channel, value: f64) -> ColorResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::NotANumber { channel })
    }
}

impl Color {
    /// Builds a color, converting to linear storage and rounding.
    ///
    /// # Errors
    ///
    /// [`ColorError::NotANumber`] if any channel or the opacity is NaN or
    /// infinite, or if a channel's linear value overflows to infinity.
    pub fn new(options: ColorOptions) -> ColorResult<Self> {
        let ColorOptions {
            red,
            green,
            blue,
            opacity,
            name,
            is_linear,
        } = options;

        let mut linear = [0.0; 3];
        for (slot, (channel, value)) in linear
            .iter_mut()
            .zip(Channel::rgb().into_iter().zip([red, green, blue]))
        {
            let value = checked(channel, value)?;
            let value = if is_linear { value } else { srgb_to_linear(value) };
            // Large finite input can overflow the power segment.
            *slot = round(checked(channel, value)?);
        }
        let opacity = checked(Channel::Opacity, opacity)?;

        Ok(Self {
            name,
            linear,
            opacity: round(clamp_unit(opacity)),
        })
    }

    /// Opaque color from gamma-encoded sRGB channels.
    pub fn srgb(red: f64, green: f64, blue: f64) -> ColorResult<Self> {
        Self::new(ColorOptions::new(red, green, blue))
    }

    /// Opaque color from linear sRGB channels.
    pub fn linear(red: f64, green: f64, blue: f64) -> ColorResult<Self> {
        Self::new(ColorOptions::new(red, green, blue).linear())
    }

    /// Returns the name, if any.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the name, builder style.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Gamma-encoded value of a color channel.
    ///
    /// For [`Channel::Opacity`] returns the stored opacity.
    #[inline]
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => linear_to_srgb(self.linear[0]),
            Channel::Green => linear_to_srgb(self.linear[1]),
            Channel::Blue => linear_to_srgb(self.linear[2]),
            Channel::Opacity => self.opacity,
        }
    }

    /// Writes a gamma-encoded channel value (or opacity) without rounding.
    ///
    /// # Errors
    ///
    /// [`ColorError::NotANumber`] if `value` is NaN or infinite, or if its
    /// linear value overflows. The color is left unchanged.
    pub fn set_channel(&mut self, channel: Channel, value: f64) -> ColorResult<()> {
        let value = checked(channel, value)?;
        let slot = match channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Opacity => {
                self.opacity = clamp_unit(value);
                return Ok(());
            }
        };
        self.linear[slot] = checked(channel, srgb_to_linear(value))?;
        Ok(())
    }

    /// Gamma-encoded red.
    #[inline]
    pub fn red(&self) -> f64 {
        self.channel(Channel::Red)
    }

    /// Gamma-encoded green.
    #[inline]
    pub fn green(&self) -> f64 {
        self.channel(Channel::Green)
    }

    /// Gamma-encoded blue.
    #[inline]
    pub fn blue(&self) -> f64 {
        self.channel(Channel::Blue)
    }

    /// Opacity in [0, 1].
    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Sets red from a gamma-encoded value.
    pub fn set_red(&mut self, value: f64) -> ColorResult<()> {
        self.set_channel(Channel::Red, value)
    }

    /// Sets green from a gamma-encoded value.
    pub fn set_green(&mut self, value: f64) -> ColorResult<()> {
        self.set_channel(Channel::Green, value)
    }

    /// Sets blue from a gamma-encoded value.
    pub fn set_blue(&mut self, value: f64) -> ColorResult<()> {
        self.set_channel(Channel::Blue, value)
    }

    /// Sets opacity, clamped to [0, 1].
    pub fn set_opacity(&mut self, value: f64) -> ColorResult<()> {
        self.set_channel(Channel::Opacity, value)
    }

    /// Gamma-encoded channels plus opacity.
    pub fn components(&self) -> Components {
        let [red, green, blue] = self.linear.map(linear_to_srgb);
        Components {
            red,
            green,
            blue,
            opacity: self.opacity,
        }
    }

    /// Stored linear channels plus opacity.
    ///
    /// Values written through setters carry full precision here until the
    /// color next passes through serialization.
    pub fn linear_components(&self) -> Components {
        let [red, green, blue] = self.linear;
        Components {
            red,
            green,
            blue,
            opacity: self.opacity,
        }
    }

    /// Canonical serialized form.
    ///
    /// Components are linear and rounded. Opacity is appended only when it
    /// does not round to 1. An empty name is dropped.
    pub fn to_record(&self) -> ColorRecord {
        let mut components: Vec<f64> = self.linear.iter().copied().map(round).collect();
        let opacity = round(self.opacity);
        if opacity != 1.0 {
            components.push(opacity);
        }
        ColorRecord {
            name: self.name.clone().filter(|n| !n.is_empty()),
            components,
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}
