//! Integration tests for swatch crates.
//!
//! End-to-end checks across `swatch-transfer` and `swatch-color`:
//! document round trips, the exact error messages callers match on, and
//! the precision guarantees of the rounding policy.

#[cfg(test)]
mod vectors;
