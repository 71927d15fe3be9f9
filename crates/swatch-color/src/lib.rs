//! # swatch-color
//!
//! Colors stored in linear sRGB, hex parsing, and named palettes with a
//! lossless JSON form.
//!
//! - [`Color`] - four stored numbers (linear RGB + opacity), gamma-encoded
//!   views computed on read
//! - [`Color::from_hex_string`], [`Color::from_hex_number`] - compact hex notations
//! - [`Palette`] - ordered colors plus a name, [`Palette::serialize`] /
//!   [`Palette::deserialize`]
//! - [`precision`] - the four-decimal rounding applied at construction and
//!   serialization
//!
//! # Architecture
//!
//! ```text
//!   swatch-color
//!        |
//!  swatch-transfer
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_color::{Color, ColorOptions, Palette};
//!
//! let mut coral = Color::from_hex_string("#FF7F50")?;
//! coral.set_name(Some("Coral".into()));
//!
//! let glass = Color::new(ColorOptions::new(0.6, 0.8, 1.0).with_opacity(0.3))?;
//!
//! let palette = Palette::new(vec![coral, glass]).with_name("Reef");
//! let text = palette.serialize()?;
//!
//! let restored = Palette::deserialize(&text)?;
//! assert_eq!(restored.colors()[0].name(), Some("Coral"));
//! assert_eq!(restored.colors()[1].opacity(), 0.3);
//! # Ok::<(), swatch_color::ColorError>(())
//! ```
//!
//! # Logging
//!
//! Uses [`tracing`]. Nothing is emitted unless the host installs a subscriber.
//!
//! # Dependencies
//!
//! - [`swatch_transfer`] - sRGB EOTF/OETF
//! - [`serde`], [`serde_json`] - document form
//! - [`thiserror`] - [`ColorError`]
//! - [`tracing`] - diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
mod hex;
mod options;
mod palette;
pub mod document;
pub mod precision;

pub use color::{Channel, Color, ColorOptions, Components};
pub use document::{ColorRecord, PaletteRecord};
pub use error::{ColorError, ColorResult, ErrorKind};
pub use options::{Indent, SerializeOptions};
pub use palette::Palette;

// Re-export sub-crate for convenience
pub use swatch_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Channel,
        Color,
        ColorError,
        ColorOptions,
        ColorResult,
        Components,
        Indent,
        Palette,
        SerializeOptions,
    };

    pub use swatch_transfer::{linear_to_srgb, srgb_to_linear};
}
