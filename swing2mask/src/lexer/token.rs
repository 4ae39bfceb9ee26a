use logos::Logos;
use maskfield_core::Casing;

/// Escape marker in the legacy notation; the following character is taken as
/// a plain literal.
pub const ESCAPE_CHAR: char = '\'';

/// One character position of the legacy Swing mask notation.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MaskToken {
    // Input position markers
    #[token("#")]
    Digit,

    #[token("U")]
    Upper,

    #[token("L")]
    Lower,

    #[token("A")]
    AlphaNum,

    #[token("?")]
    AnyChar,

    #[token("H")]
    Hex,

    #[token("*")]
    Anything,

    // Structural markers
    #[token("-")]
    Delimiter,

    #[token("'")]
    Escape,

    // Any other character stands for itself
    #[regex(r"[^#ULAH?*'\-]", |lex| lex.slice().chars().next())]
    Literal(char),
}

impl MaskToken {
    /// The notation character this token was lexed from.
    pub fn symbol(&self) -> char {
        match self {
            MaskToken::Digit => '#',
            MaskToken::Upper => 'U',
            MaskToken::Lower => 'L',
            MaskToken::AlphaNum => 'A',
            MaskToken::AnyChar => '?',
            MaskToken::Hex => 'H',
            MaskToken::Anything => '*',
            MaskToken::Delimiter => '-',
            MaskToken::Escape => ESCAPE_CHAR,
            MaskToken::Literal(c) => *c,
        }
    }

    /// Case folding the token demands from the runtime, if any.
    pub fn casing(&self) -> Option<Casing> {
        match self {
            MaskToken::Upper => Some(Casing::Upper),
            MaskToken::Lower => Some(Casing::Lower),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    #[test]
    fn test_basic_tokens() {
        let mut lex = MaskToken::lexer("#U-x");

        assert_eq!(lex.next(), Some(Ok(MaskToken::Digit)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Upper)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Delimiter)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Literal('x'))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_all_position_markers() {
        let mut lex = MaskToken::lexer("#ULA?H*");

        assert_eq!(lex.next(), Some(Ok(MaskToken::Digit)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Upper)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Lower)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::AlphaNum)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::AnyChar)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Hex)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Anything)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_escape_and_literals() {
        let mut lex = MaskToken::lexer("'(ж)");

        assert_eq!(lex.next(), Some(Ok(MaskToken::Escape)));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Literal('('))));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Literal('ж'))));
        assert_eq!(lex.next(), Some(Ok(MaskToken::Literal(')'))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_symbol_round_trip() {
        for c in "#ULA?H*-'x7 .".chars() {
            let s = c.to_string();
            let mut lex = MaskToken::lexer(&s);
            let token = lex.next().unwrap().unwrap();
            assert_eq!(token.symbol(), c);
        }
    }
}
