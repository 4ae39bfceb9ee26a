//! Converter from legacy Swing `MaskFormatter` notation to the definition
//! configuration consumed by the Inputmask masking runtime.
//!
//! The notation uses one character per input position: `#` digit, `U`
//! uppercase letter, `L` lowercase letter, `A` letter or digit, `?` letter,
//! `H` hex digit, `*` anything, `-` delimiter literal and `'` to escape the
//! following character. An optional allowed-character alphabet narrows every
//! position class to the characters actually permitted.

pub mod alphabet;
pub mod compiler;
pub mod config;
pub mod lexer;
pub mod regexp;

pub use maskfield_core::*;

pub use compiler::{build_config, CompiledMask};

use std::io::Write;

/// Compiles a Swing-style mask into the cleaned pattern and its definitions.
pub fn compile_swing_mask(mask: &str, allowed_chars: Option<&str>) -> Result<CompiledMask> {
    compiler::compile(mask, allowed_chars)
}

/// Compiles a mask and writes the runtime configuration text to `writer`.
pub fn convert_mask_to_config<W: Write>(
    mask: &str,
    allowed_chars: Option<&str>,
    placeholder: Option<&str>,
    writer: W,
) -> Result<()> {
    let config = compiler::build_config(mask, allowed_chars, placeholder)?;
    config::ConfigWriter::new(writer).write_config(&config)
}
