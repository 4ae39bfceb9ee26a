//! Escaping of raw character lists into regex character-class text.

/// Characters that take a leading backslash inside a generated character
/// class. This is the exact set the masking runtime's validators expect
/// escaped; it is wider than strictly necessary for a regex class.
pub const METACHARACTERS: &[char] = &[
    '.', '*', '\\', '!', '@', '#', '$', '%', '^', '&', '(', ')', '-', '+', '~', '|', '/', '_',
    '?', '<', '>', '{', '}', '`', ':', '\'', '[', ']',
];

/// Concatenates `chars` into class text, backslash-escaping metacharacters.
/// Order is preserved and duplicates are kept; deduplication is up to the
/// caller.
pub fn escape_class<I>(chars: I) -> String
where
    I: IntoIterator<Item = char>,
{
    let mut class = String::new();
    for c in chars {
        if METACHARACTERS.contains(&c) {
            class.push('\\');
        }
        class.push(c);
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_characters_unchanged() {
        assert_eq!(escape_class("abcXYZ09ё".chars()), "abcXYZ09ё");
    }

    #[test]
    fn test_dash_is_escaped() {
        assert_eq!(escape_class("-".chars()), "\\-");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(escape_class("a.b*c".chars()), "a\\.b\\*c");
    }

    #[test]
    fn test_backslash_and_brackets() {
        assert_eq!(escape_class("\\[]".chars()), "\\\\\\[\\]");
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(escape_class("aa--".chars()), "aa\\-\\-");
    }

    #[test]
    fn test_empty() {
        assert_eq!(escape_class("".chars()), "");
    }
}
