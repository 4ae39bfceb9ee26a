//! Two-pass compilation of Swing mask notation into symbol definitions.
//!
//! Pass one walks the notation and derives one character class per
//! class-producing token. Pass two walks the delimiter-stripped mask and
//! pairs each remaining position with the next unused class, emitting the
//! definitions in source order. The masking runtime maps definitions against
//! the cleaned pattern positionally, so the two sequences must stay aligned.

use maskfield_core::{Definition, MaskConfig, Result, DELIMITER};

use crate::alphabet::{AlphabetPartition, CharSet};
use crate::lexer::{scan, MaskToken, ESCAPE_CHAR};
use crate::regexp::escape_class;

// Built-in classes used when no alphabet restriction is given. These are the
// exact strings the masking runtime has always received, interior spaces and
// the `[0-9 A-E]` hex range included; they are not regenerated through the
// escaper.
const DIGIT_CLASS: &str = "[0-9]";
const UPPER_CLASS: &str = "[A-Z А-Я Ё]";
const LOWER_CLASS: &str = "[a-z а-я ё]";
const ALNUM_CLASS: &str = "[a-z A-Z а-я А-Я Ё ё 0-9]";
const ANY_CHAR_CLASS: &str = "[a-z A-Z Ёё а-я А-Я]";
const HEX_CLASS: &str = "[0-9 A-E]";
const ANYTHING_CLASS: &str = r"[a-z A-Z Ёё а-я А-Я 0-9 \. \* \\ \! \@ \# \$ \% \^ \& \( \) \- \+ \~ \| \/ \_ \? \< \> \{ \} \` \' \[ \] ]";

/// Result of compiling one mask: the delimiter-stripped pattern and the
/// definitions paired against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMask {
    pub cleaned_mask: String,
    pub definitions: Vec<Definition>,
}

/// Per-token-kind character classes, either the fixed built-ins or unions
/// over a partitioned allowed-character alphabet.
enum ClassTable {
    Fixed,
    Restricted(AlphabetPartition),
}

impl ClassTable {
    fn new(allowed_chars: Option<&str>) -> Self {
        match allowed_chars {
            None => ClassTable::Fixed,
            // An empty restriction stays a restriction: it produces empty
            // classes, which pairing rejects as InvalidDefinition.
            Some(allowed) => ClassTable::Restricted(AlphabetPartition::partition(allowed)),
        }
    }

    /// The class text for one token, or `None` for the escape marker, which
    /// never produces a class.
    fn class_for(&self, token: MaskToken) -> Option<String> {
        let class = match self {
            ClassTable::Fixed => match token {
                MaskToken::Digit => DIGIT_CLASS.to_string(),
                MaskToken::Upper => UPPER_CLASS.to_string(),
                MaskToken::Lower => LOWER_CLASS.to_string(),
                MaskToken::AlphaNum => ALNUM_CLASS.to_string(),
                MaskToken::AnyChar => ANY_CHAR_CLASS.to_string(),
                MaskToken::Hex => HEX_CLASS.to_string(),
                MaskToken::Anything => ANYTHING_CLASS.to_string(),
                MaskToken::Delimiter => DELIMITER.to_string(),
                MaskToken::Literal(c) => format!("[{c}]"),
                MaskToken::Escape => return None,
            },
            ClassTable::Restricted(partition) => match token {
                MaskToken::Digit => bracketed(partition.union(&[CharSet::Digit])),
                MaskToken::Upper => bracketed(partition.union(&[CharSet::Upper])),
                MaskToken::Lower => bracketed(partition.union(&[CharSet::Lower])),
                MaskToken::AlphaNum => {
                    bracketed(partition.union(&[CharSet::Upper, CharSet::Lower, CharSet::Digit]))
                }
                MaskToken::AnyChar => {
                    bracketed(partition.union(&[CharSet::Upper, CharSet::Lower]))
                }
                MaskToken::Hex => bracketed(partition.union(&[CharSet::Digit, CharSet::Hex])),
                MaskToken::Anything => bracketed(partition.union(&[
                    CharSet::Upper,
                    CharSet::Lower,
                    CharSet::Digit,
                    CharSet::Other,
                ])),
                // The delimiter class is the unbracketed `-` members of the
                // restriction; with none present it stays empty.
                MaskToken::Delimiter => escape_class(
                    partition
                        .set(CharSet::Other)
                        .iter()
                        .copied()
                        .filter(|&c| c == DELIMITER),
                ),
                MaskToken::Literal(c) => format!("[{c}]"),
                MaskToken::Escape => return None,
            },
        };
        Some(class)
    }
}

fn bracketed(chars: Vec<char>) -> String {
    if chars.is_empty() {
        // Surfaces as InvalidDefinition when a definition consumes it
        String::new()
    } else {
        format!("[{}]", escape_class(chars))
    }
}

/// Compiles a Swing-style mask, optionally restricted to an allowed-character
/// alphabet, into the cleaned pattern and its ordered definitions.
pub fn compile(mask: &str, allowed_chars: Option<&str>) -> Result<CompiledMask> {
    let table = ClassTable::new(allowed_chars);
    let tokens = scan(mask);
    let classes = derive_classes(&tokens, &table);

    // Delimiters vanish from the pattern the definitions are matched
    // against; their classes go with them so pairing stays positional.
    let cleaned_mask: String = mask.chars().filter(|&c| c != DELIMITER).collect();
    let cleaned_tokens: Vec<MaskToken> = tokens
        .into_iter()
        .filter(|&t| t != MaskToken::Delimiter)
        .collect();
    let pairable: Vec<String> = classes
        .into_iter()
        .filter(|(token, _)| *token != MaskToken::Delimiter)
        .map(|(_, class)| class)
        .collect();

    let definitions = pair_definitions(&cleaned_tokens, &pairable)?;

    Ok(CompiledMask {
        cleaned_mask,
        definitions,
    })
}

/// Pass one: one class per class-producing token, in source order. The escape
/// token consumes the following token and contributes nothing.
fn derive_classes(tokens: &[MaskToken], table: &ClassTable) -> Vec<(MaskToken, String)> {
    let mut classes = Vec::new();
    let mut iter = tokens.iter();

    while let Some(&token) = iter.next() {
        if token == MaskToken::Escape {
            // the escaped character becomes a plain literal without a class
            iter.next();
            continue;
        }
        if let Some(class) = table.class_for(token) {
            classes.push((token, class));
        }
    }

    classes
}

/// Pass two: walks the cleaned mask pairing positions with classes. An escape
/// skips the escaped literal, and the position after the pair is the next one
/// to take a class; an escape too close to the end truncates the scan, which
/// keeps the output identical to configurations already deployed against the
/// masking runtime.
fn pair_definitions(cleaned: &[MaskToken], classes: &[String]) -> Result<Vec<Definition>> {
    let mut definitions = Vec::new();
    let mut next_class = classes.iter();
    let mut i = 0;

    while i < cleaned.len() {
        if cleaned[i] == MaskToken::Escape {
            if i + 2 >= cleaned.len() {
                break;
            }
            i += 2;
        }
        let token = cleaned[i];
        let Some(class) = next_class.next() else {
            break;
        };
        definitions.push(Definition::new(
            token.symbol(),
            class.clone(),
            token.casing(),
            None,
        )?);
        i += 1;
    }

    Ok(definitions)
}

/// Compiles a mask and assembles the runtime-facing configuration: the mask
/// pattern with escape markers removed but delimiters retained, a non-greedy
/// fill policy and the placeholder forwarded unchanged.
pub fn build_config(
    mask: &str,
    allowed_chars: Option<&str>,
    placeholder: Option<&str>,
) -> Result<MaskConfig> {
    let compiled = compile(mask, allowed_chars)?;

    Ok(MaskConfig {
        mask: mask.chars().filter(|&c| c != ESCAPE_CHAR).collect(),
        greedy: false,
        placeholder: placeholder.map(str::to_owned),
        definitions: compiled.definitions,
    })
}
