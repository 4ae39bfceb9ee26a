//! Core types for masked text input fields
//!
//! This crate defines the configuration a masking runtime consumes: a mask
//! pattern string plus an ordered sequence of per-symbol character-class
//! definitions. It contains no compilation or UI logic; see the `swing2mask`
//! crate for the legacy-notation compiler.

pub mod types;

pub use types::*;

// Re-export commonly used types
pub use types::config::{Casing, Definition, MaskConfig, DELIMITER};
pub use types::errors::{MaskError, Result};
