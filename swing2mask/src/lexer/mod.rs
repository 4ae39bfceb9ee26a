mod token;

pub use token::{MaskToken, ESCAPE_CHAR};

use logos::Logos;

/// Tokenizes a mask string. Every character maps to exactly one token, so
/// scanning cannot fail.
pub fn scan(mask: &str) -> Vec<MaskToken> {
    MaskToken::lexer(mask).flatten().collect()
}
