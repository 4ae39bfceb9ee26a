use super::errors::{MaskError, Result};

/// Delimiter literal in mask patterns. Delimiters separate groups of input
/// positions and never carry a definition of their own.
pub const DELIMITER: char = '-';

/// Case folding applied by the masking runtime to characters accepted at a
/// definition's positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Upper,
    Lower,
}

impl Casing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Casing::Upper => "upper",
            Casing::Lower => "lower",
        }
    }
}

/// One compiled symbol definition, consumed positionally by the masking
/// runtime: the mask letter it applies to, the regex character class its
/// input must match, and optional casing / override-symbol directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub letter: char,
    pub validator: String,
    pub casing: Option<Casing>,
    pub definition_symbol: Option<String>,
}

impl Definition {
    /// Builds a definition, rejecting the two states the runtime cannot
    /// represent: a delimiter used as a definition letter, and an empty
    /// character class.
    pub fn new(
        letter: char,
        validator: impl Into<String>,
        casing: Option<Casing>,
        definition_symbol: Option<String>,
    ) -> Result<Self> {
        let validator = validator.into();
        if letter == DELIMITER {
            return Err(MaskError::InvalidDefinition {
                letter,
                reason: "letter is the delimiter character".to_string(),
            });
        }
        if validator.is_empty() {
            return Err(MaskError::InvalidDefinition {
                letter,
                reason: "empty character class".to_string(),
            });
        }
        Ok(Self {
            letter,
            validator,
            casing,
            definition_symbol,
        })
    }
}

/// The full configuration handed to the masking runtime: the mask pattern it
/// applies (escape markers removed, delimiter literals retained), the greedy
/// flag, an opaque placeholder, and the ordered definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskConfig {
    pub mask: String,
    pub greedy: bool,
    pub placeholder: Option<String>,
    pub definitions: Vec<Definition>,
}
