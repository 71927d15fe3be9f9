//! Error types for color and palette operations.
//!
//! Every failure is reported immediately to the caller. Nothing is retried
//! or logged-and-swallowed inside the crate.
//!
//! # Categories
//!
//! - **Type errors**: [`NotANumber`](ColorError::NotANumber),
//!   [`ColorsNotArray`](ColorError::ColorsNotArray),
//!   [`ComponentsNotArray`](ColorError::ComponentsNotArray),
//!   [`InvalidName`](ColorError::InvalidName)
//! - **Format errors**: [`InvalidHexFormat`](ColorError::InvalidHexFormat),
//!   [`InvalidJson`](ColorError::InvalidJson),
//!   [`ComponentCount`](ColorError::ComponentCount),
//!   [`InvalidComponent`](ColorError::InvalidComponent),
//!   [`Serialize`](ColorError::Serialize),
//!   [`Utf8`](ColorError::Utf8)
//! - **Range errors**: [`InvalidHexValue`](ColorError::InvalidHexValue)

use thiserror::Error;

use crate::color::Channel;

/// Color or palette operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A channel or opacity value is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_color::{Channel, ColorError};
    ///
    /// let err = ColorError::NotANumber { channel: Channel::Opacity };
    /// assert_eq!(err.to_string(), "Opacity component must be a number");
    /// ```
    #[error("{channel} component must be a number")]
    NotANumber {
        /// Channel that received the value.
        channel: Channel,
    },

    /// Hex string has the wrong length or contains non-hex characters.
    #[error("Invalid hex color format")]
    InvalidHexFormat,

    /// Hex number is negative or wider than 32 bits.
    #[error("Invalid hex value: {0}")]
    InvalidHexValue(i64),

    /// Palette document is not parseable JSON.
    #[error("palette document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Document has no `colors` array at the top level.
    #[error("Colors must be an array")]
    ColorsNotArray,

    /// A color entry has no `components` array.
    #[error("Components must be an array")]
    ComponentsNotArray,

    /// A `components` array has fewer than 3 or more than 4 values.
    #[error("Components must have 3 or 4 values")]
    ComponentCount {
        /// Number of values found.
        found: usize,
    },

    /// A component value is not a number, or is negative.
    #[error("Component values must be numbers")]
    InvalidComponent,

    /// A `name` field is present but is not a string.
    #[error("Name must be a string")]
    InvalidName,

    /// Writing the palette document failed.
    #[error("failed to serialize palette: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Serialized document bytes are not UTF-8.
    #[error("serialized palette is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Broad class of a [`ColorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong-typed input.
    Type,
    /// Malformed text: JSON, hex, or document shape.
    Format,
    /// Numeric input outside the accepted range.
    Range,
}

impl ColorError {
    /// Returns the error's class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. }
            | Self::ColorsNotArray
            | Self::ComponentsNotArray
            | Self::InvalidName => ErrorKind::Type,
            Self::InvalidHexFormat
            | Self::InvalidJson(_)
            | Self::ComponentCount { .. }
            | Self::InvalidComponent
            | Self::Serialize(_)
            | Self::Utf8(_) => ErrorKind::Format,
            Self::InvalidHexValue(_) => ErrorKind::Range,
        }
    }

    /// Returns `true` if this is a type error.
    #[inline]
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Returns `true` if this is a format error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    /// Returns `true` if this is a range error.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
