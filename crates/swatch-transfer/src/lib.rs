//! # swatch-transfer
//!
//! The sRGB transfer function pair used by swatch colors.
//!
//! A transfer function maps between linear light values and the
//! gamma-encoded values used by hex notations and most display pipelines.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! Both directions are the exact piecewise IEC 61966-2-1 curves, evaluated
//! in `f64` with no intermediate rounding, so composing them returns the
//! input to within floating-point precision.
//!
//! # Usage
//!
//! ```rust
//! use swatch_transfer::{linear_to_srgb, srgb_to_linear};
//!
//! let linear = srgb_to_linear(0.5);
//! let encoded = linear_to_srgb(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Wide gamut
//!
//! Neither function clamps. Values below zero stay on the linear segment and
//! values above one follow the power segment, so wide-gamut channels survive
//! a round trip.
//!
//! # Used By
//!
//! - `swatch-color` - `Color` storage and accessors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_to_linear, oetf as linear_to_srgb};
pub use srgb::{eotf_rgb as srgb_to_linear_rgb, oetf_rgb as linear_to_srgb_rgb};
