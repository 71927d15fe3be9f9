//! Palette document schema.
//!
//! The serialized form is a JSON object:
//!
//! ```text
//! {
//!     "name"?: string,
//!     "colors": [
//!         { "name"?: string, "components": [r, g, b] | [r, g, b, a] }
//!     ]
//! }
//! ```
//!
//! Components are linear sRGB rounded to four decimals. Alpha is present
//! only when it is not 1.
//!
//! Writing goes through the serde records below. Reading first parses into
//! an untyped [`serde_json::Value`] and then validates field by field, so
//! every shape problem maps to a specific [`ColorError`].

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::{ColorError, ColorResult};

/// Serialized form of a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteRecord {
    /// Palette name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Colors in palette order.
    pub colors: Vec<ColorRecord>,
}

/// Serialized form of a color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorRecord {
    /// Color name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Linear `[r, g, b]` or `[r, g, b, a]`.
    pub components: Vec<f64>,
}

impl PaletteRecord {
    /// Validates a parsed document tree.
    ///
    /// # Errors
    ///
    /// - [`ColorError::ColorsNotArray`] if `colors` is missing or not an array
    /// - [`ColorError::ComponentsNotArray`] if an entry has no `components` array
    /// - [`ColorError::ComponentCount`] if `components` has other than 3 or 4 values
    /// - [`ColorError::InvalidComponent`] if a value is not a number or is negative
    /// - [`ColorError::InvalidName`] if a `name` is present and not a string
    pub fn from_value(value: &Value) -> ColorResult<Self> {
        let colors = value
            .get("colors")
            .and_then(Value::as_array)
            .ok_or(ColorError::ColorsNotArray)?;

        let colors = colors
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let record = ColorRecord::from_value(entry)?;
                trace!(index, components = ?record.components, "validated color entry");
                Ok(record)
            })
            .collect::<ColorResult<Vec<_>>>()?;

        Ok(Self {
            name: name_field(value)?,
            colors,
        })
    }
}

impl ColorRecord {
    /// Validates one entry of the `colors` array.
    pub fn from_value(value: &Value) -> ColorResult<Self> {
        let components = value
            .get("components")
            .and_then(Value::as_array)
            .ok_or(ColorError::ComponentsNotArray)?;

        if !(3..=4).contains(&components.len()) {
            return Err(ColorError::ComponentCount {
                found: components.len(),
            });
        }

        let components = components
            .iter()
            .map(|v| match v.as_f64() {
                Some(n) if n >= 0.0 => Ok(n),
                _ => Err(ColorError::InvalidComponent),
            })
            .collect::<ColorResult<Vec<_>>>()?;

        Ok(Self {
            name: name_field(value)?,
            components,
        })
    }
}

/// Reads an optional `name` field. `null` counts as absent.
fn name_field(value: &Value) -> ColorResult<Option<String>> {
    match value.get("name") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ColorError::InvalidName),
    }
}
