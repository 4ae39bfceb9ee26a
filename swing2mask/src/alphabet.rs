//! Partitioning of an allowed-character alphabet into character sets.
//!
//! When a mask carries a restricted alphabet, every position marker draws its
//! character class from a union of these sets instead of the fixed built-in
//! classes.

/// Tag for one of the five partition sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSet {
    Upper,
    Lower,
    Digit,
    Hex,
    Other,
}

/// An allowed-character string split into ordered sets: uppercase letters,
/// lowercase letters, digits, hex letters and everything else. Sets preserve
/// encounter order and are disjoint, except that the ASCII hex letters
/// `A-F`/`a-f` appear both in their case set and in the hex set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlphabetPartition {
    upper: Vec<char>,
    lower: Vec<char>,
    digits: Vec<char>,
    hex: Vec<char>,
    other: Vec<char>,
}

impl AlphabetPartition {
    /// Classifies every character of `allowed`. Letters split by case, digits
    /// go to the digit set, anything else lands in `Other`. Classification is
    /// Unicode-aware; the hex set is limited to the ASCII letters `A-F`/`a-f`.
    pub fn partition(allowed: &str) -> Self {
        let mut partition = Self::default();

        for c in allowed.chars() {
            if c.is_alphabetic() {
                if c.is_uppercase() {
                    partition.upper.push(c);
                } else {
                    partition.lower.push(c);
                }
                if matches!(c, 'a'..='f' | 'A'..='F') {
                    partition.hex.push(c);
                }
            } else if c.is_numeric() {
                partition.digits.push(c);
            } else {
                partition.other.push(c);
            }
        }

        partition
    }

    pub fn set(&self, set: CharSet) -> &[char] {
        match set {
            CharSet::Upper => &self.upper,
            CharSet::Lower => &self.lower,
            CharSet::Digit => &self.digits,
            CharSet::Hex => &self.hex,
            CharSet::Other => &self.other,
        }
    }

    /// Concatenates the given sets in argument order, preserving the
    /// encounter order within each set.
    pub fn union(&self, sets: &[CharSet]) -> Vec<char> {
        sets.iter()
            .flat_map(|&set| self.set(set).iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_split() {
        let partition = AlphabetPartition::partition("aZx9Q");

        assert_eq!(partition.set(CharSet::Upper), &['Z', 'Q']);
        assert_eq!(partition.set(CharSet::Lower), &['a', 'x']);
        assert_eq!(partition.set(CharSet::Digit), &['9']);
        assert_eq!(partition.set(CharSet::Other), &[] as &[char]);
    }

    #[test]
    fn test_hex_letters_appear_twice() {
        let partition = AlphabetPartition::partition("aBfG");

        assert_eq!(partition.set(CharSet::Hex), &['a', 'B', 'f']);
        assert_eq!(partition.set(CharSet::Upper), &['B', 'G']);
        assert_eq!(partition.set(CharSet::Lower), &['a', 'f']);
    }

    #[test]
    fn test_symbols_go_to_other() {
        let partition = AlphabetPartition::partition("-._ 7");

        assert_eq!(partition.set(CharSet::Other), &['-', '.', '_', ' ']);
        assert_eq!(partition.set(CharSet::Digit), &['7']);
    }

    #[test]
    fn test_unicode_letters() {
        let partition = AlphabetPartition::partition("Жюё7");

        assert_eq!(partition.set(CharSet::Upper), &['Ж']);
        assert_eq!(partition.set(CharSet::Lower), &['ю', 'ё']);
        assert_eq!(partition.set(CharSet::Digit), &['7']);
        assert_eq!(partition.set(CharSet::Hex), &[] as &[char]);
    }

    #[test]
    fn test_every_character_is_classified() {
        let input = "aB3-fЖ?0";
        let partition = AlphabetPartition::partition(input);

        for c in input.chars() {
            let found = [
                CharSet::Upper,
                CharSet::Lower,
                CharSet::Digit,
                CharSet::Hex,
                CharSet::Other,
            ]
            .iter()
            .any(|&set| partition.set(set).contains(&c));
            assert!(found, "character {:?} missing from every set", c);
        }
    }

    #[test]
    fn test_sets_disjoint_except_hex() {
        let partition = AlphabetPartition::partition("aB3-fЖ?0x");

        let upper = partition.set(CharSet::Upper);
        let lower = partition.set(CharSet::Lower);
        let digits = partition.set(CharSet::Digit);
        let other = partition.set(CharSet::Other);

        assert!(upper.iter().all(|c| !lower.contains(c)));
        assert!(upper.iter().all(|c| !digits.contains(c)));
        assert!(digits.iter().all(|c| !other.contains(c)));
        assert!(lower.iter().all(|c| !other.contains(c)));

        // Hex is the only overlapping set
        for c in partition.set(CharSet::Hex) {
            assert!(upper.contains(c) || lower.contains(c));
        }
    }

    #[test]
    fn test_union_order() {
        let partition = AlphabetPartition::partition("b1A2c");

        assert_eq!(
            partition.union(&[CharSet::Upper, CharSet::Lower, CharSet::Digit]),
            vec!['A', 'b', 'c', '1', '2']
        );
    }

    #[test]
    fn test_empty_input() {
        let partition = AlphabetPartition::partition("");
        assert_eq!(partition, AlphabetPartition::default());
    }
}
