//! Character-level classification for romanized Javanese input.
//!
//! The sets are fixed: they cover ASCII letters plus the extended Latin
//! letters used for Javanese and Sanskrit transliteration (macron/diaeresis
//! vowels, retroflex consonants, ñ, ŋ, ś, ṣ, ṛ).

const PUNCTUATION: &str = ",.><?/+=-_}{[]*&^%$#@!~`\"\\|:;()'";

/// `x`/`X` spell the pepet vowel and `ṛ` is vocalic r, so both count as vowels.
const VOWELS: &str = "AaĂăEeÈèÉéIiOoUuÊêĚěĔĕṚṛXxôâāīūōåɔə";

const CONSONANTS: &str = "BCDfGHJKLMNPQRSTVWYZbcdfghjklmnpqrstvwyzḌḍṆṇṢṣṬṭŊŋÑñɲś";

/// Letters that may extend a cluster in second position: digraph seconds
/// (th, ng, ny, jñ), cakra/pengkal (r, y), panjingan (l, w) and the anuswara
/// stops (c, j).
const CLUSTER_MARKERS: &str = "GgHhRrYyñnLlWwCcJj";

/// Letters rendered as a trailing sign (wignyan, layar, cecak) instead of a
/// full consonant with pangkon.
const TRAILING_SIGNS: &str = "HhRrŊŋ";

const NASAL_STOP_TRIGGERS: &str = "CcJj";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Punctuation,
    Vowel,
    Consonant,
    Whitespace,
    Other,
}

/// Classify a character. Vowels win over consonants; the two sets are disjoint
/// anyway.
pub fn classify(c: char) -> CharClass {
    if is_digit(c) {
        CharClass::Digit
    } else if is_punctuation(c) {
        CharClass::Punctuation
    } else if is_vowel(c) {
        CharClass::Vowel
    } else if is_consonant(c) {
        CharClass::Consonant
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Other
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

pub fn is_cluster_marker(c: char) -> bool {
    CLUSTER_MARKERS.contains(c)
}

pub fn is_trailing_sign(c: char) -> bool {
    TRAILING_SIGNS.contains(c)
}

pub fn is_nasal_stop_trigger(c: char) -> bool {
    NASAL_STOP_TRIGGERS.contains(c)
}

/// Lowercase one character, keeping a 1:1 mapping so positions in the folded
/// text line up with the source.
pub fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels_include_extended_latin() {
        for c in ['a', 'E', 'è', 'ê', 'ě', 'ə', 'ā', 'ō', 'x', 'X', 'ṛ', 'å', 'ɔ'] {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(!is_vowel('k'));
        assert!(!is_vowel('h'));
    }

    #[test]
    fn test_consonants() {
        for c in ['k', 'B', 'ṭ', 'Ḍ', 'ñ', 'ŋ', 'ś', 'ɲ'] {
            assert!(is_consonant(c), "{c} should be a consonant");
        }
        // x spells pepet, never a consonant
        assert!(!is_consonant('x'));
        assert!(!is_consonant('a'));
    }

    #[test]
    fn test_marker_subclasses() {
        assert!(is_cluster_marker('h'));
        assert!(is_cluster_marker('ñ'));
        assert!(is_cluster_marker('W'));
        assert!(!is_cluster_marker('k'));
        assert!(!is_cluster_marker('Ñ'));

        assert!(is_trailing_sign('h'));
        assert!(is_trailing_sign('ŋ'));
        assert!(!is_trailing_sign('n'));

        assert!(is_nasal_stop_trigger('c'));
        assert!(is_nasal_stop_trigger('J'));
        assert!(!is_nasal_stop_trigger('k'));
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case('K'), 'k');
        assert_eq!(fold_case('Ṭ'), 'ṭ');
        assert_eq!(fold_case('Ñ'), 'ñ');
        assert_eq!(fold_case('ś'), 'ś');
        assert_eq!(fold_case('.'), '.');
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify('.'), CharClass::Punctuation);
        assert_eq!(classify('\''), CharClass::Punctuation);
        assert_eq!(classify('o'), CharClass::Vowel);
        assert_eq!(classify('g'), CharClass::Consonant);
        assert_eq!(classify(' '), CharClass::Whitespace);
        assert_eq!(classify('€'), CharClass::Other);
    }
}
