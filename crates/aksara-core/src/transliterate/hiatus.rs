//! Vowel hiatus: two adjacent vowels get a semivowel or a silent `h` between
//! them so every vowel after the first starts its own syllable.

use tracing::trace;

use crate::classify::{is_consonant, is_vowel};
use crate::config::ModeConfiguration;

const E_CLASS: &[char] = &['e', 'è', 'é'];

/// Insert carriers between adjacent vowels.
pub(crate) fn insert_carriers(text: &[char], config: &ModeConfiguration) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(text.len() + text.len() / 4);
    for &c in text {
        if let Some(&prev) = out.last() {
            if is_vowel(prev) && is_vowel(c) {
                let word_initial = out.len() == 1 || !is_consonant(out[out.len() - 2]);
                if let Some(carrier) = carrier(prev, c, word_initial, config) {
                    trace!(%prev, %c, %carrier, "hiatus carrier");
                    out.push(carrier);
                }
            }
        }
        out.push(c);
    }
    out
}

/// Carrier between `prev` and `c`. `None` leaves a diphthong for the vowel
/// sign table.
fn carrier(prev: char, c: char, word_initial: bool, config: &ModeConfiguration) -> Option<char> {
    match (prev, c) {
        ('a', 'a') | ('i', 'i') | ('u', 'u') | ('a', 'i') | ('a', 'u') => {
            (word_initial || !config.diphthong).then_some('h')
        }
        (e, 'a' | 'o') if E_CLASS.contains(&e) => Some('y'),
        ('i', 'a' | 'e' | 'è' | 'é' | 'o' | 'u') => Some('y'),
        ('o', 'a' | 'e' | 'è' | 'é') => Some('w'),
        ('u', 'a' | 'e' | 'è' | 'é' | 'i' | 'o') => Some('w'),
        _ => Some('h'),
    }
}
