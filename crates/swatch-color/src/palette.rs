//! Named, ordered collection of colors and its JSON document form.
//!
//! A [`Palette`] owns its colors. Editing a color through
//! [`Palette::colors_mut`] or [`Palette::get_mut`] changes what the palette
//! serializes next.
//!
//! # Example
//!
//! ```rust
//! use swatch_color::{Color, Palette};
//!
//! let palette = Palette::new(vec![
//!     Color::from_hex_string("#FF6600")?.with_name("Orange"),
//!     Color::from_hex_string("#0066FF80")?,
//! ])
//! .with_name("Brand");
//!
//! let text = palette.serialize()?;
//! let restored = Palette::deserialize(&text)?;
//! assert_eq!(restored.name(), Some("Brand"));
//! assert_eq!(restored.len(), 2);
//! # Ok::<(), swatch_color::ColorError>(())
//! ```

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, trace};

use crate::document::{ColorRecord, PaletteRecord};
use crate::precision::round;
use crate::{Color, ColorError, ColorOptions, ColorResult, SerializeOptions};

/// Ordered colors plus an optional name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    name: Option<String>,
    colors: Vec<Color>,
}

impl Palette {
    /// Creates an unnamed palette from colors, keeping their order.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { name: None, colors }
    }

    /// Sets the name, builder style.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
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

    /// Colors in insertion order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Mutable access to the colors.
    #[inline]
    pub fn colors_mut(&mut self) -> &mut [Color] {
        &mut self.colors
    }

    /// Color at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Mutable color at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Color> {
        self.colors.get_mut(index)
    }

    /// Appends a color.
    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over the colors.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Iterates mutably over the colors.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Color> {
        self.colors.iter_mut()
    }

    /// Canonical document form of the palette.
    pub fn to_record(&self) -> PaletteRecord {
        PaletteRecord {
            name: self.name.clone().filter(|n| !n.is_empty()),
            colors: self.colors.iter().map(Color::to_record).collect(),
        }
    }

    /// Writes the palette as a tab-indented JSON document.
    ///
    /// # Errors
    ///
    /// [`ColorError::Serialize`] if the JSON writer fails.
    pub fn serialize(&self) -> ColorResult<String> {
        self.serialize_with(&SerializeOptions::default())
    }

    /// Writes the palette as JSON with explicit options.
    ///
    /// # Errors
    ///
    /// [`ColorError::Serialize`] if the JSON writer fails, or
    /// [`ColorError::Utf8`] if its output is not UTF-8.
    pub fn serialize_with(&self, options: &SerializeOptions) -> ColorResult<String> {
        let record = self.to_record();

        let bytes = match options.indent.bytes() {
            Some(indent) => {
                let mut out = Vec::new();
                let formatter = PrettyFormatter::with_indent(&indent);
                let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
                record.serialize(&mut ser).map_err(ColorError::Serialize)?;
                out
            }
            None => serde_json::to_vec(&record).map_err(ColorError::Serialize)?,
        };

        debug!(colors = record.colors.len(), bytes = bytes.len(), "serialized palette");
        Ok(String::from_utf8(bytes)?)
    }

    /// Reads a palette from a JSON document.
    ///
    /// Components are read as linear sRGB, rounded, and passed to
    /// [`Color::new`]. A missing alpha defaults to 1.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidJson`] if `text` does not parse
    /// - any document shape error from [`PaletteRecord::from_value`]
    pub fn deserialize(text: &str) -> ColorResult<Self> {
        let value: Value = serde_json::from_str(text)?;

        let record = PaletteRecord::from_value(&value).inspect_err(|err| {
            debug!(%err, "rejected palette document");
        })?;

        let colors = record
            .colors
            .into_iter()
            .map(color_from_record)
            .collect::<ColorResult<Vec<_>>>()?;

        debug!(colors = colors.len(), "deserialized palette");
        Ok(Self {
            name: record.name,
            colors,
        })
    }
}

/// Builds a color from a validated record.
fn color_from_record(record: ColorRecord) -> ColorResult<Color> {
    let [red, green, blue] = [0, 1, 2].map(|i| round(record.components[i]));
    let opacity = record.components.get(3).copied().map_or(1.0, round);

    let mut options = ColorOptions::new(red, green, blue)
        .with_opacity(opacity)
        .linear();
    options.name = record.name;

    let color = Color::new(options)?;
    trace!(name = color.name(), "decoded color");
    Ok(color)
}

impl FromStr for Palette {
    type Err = ColorError;

    /// Same as [`Palette::deserialize`].
    fn from_str(s: &str) -> ColorResult<Self> {
        Self::deserialize(s)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Color> for Palette {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        self.colors.extend(iter);
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a mut Palette {
    type Item = &'a mut Color;
    type IntoIter = std::slice::IterMut<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter_mut()
    }
}
