//! Vowel-sign (matra) resolution for the part of a syllable after its core.

use crate::config::ModeConfiguration;
use crate::tables::{GlyphTables, PANGKON, PEPET};

/// Outcome of resolving a syllable remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matra {
    /// Nothing follows the core: the consonant is killed with pangkon.
    Pangkon,
    /// Inherent vowel, no sign written.
    Bare,
    Sign(&'static str),
}

impl Matra {
    pub fn as_str(&self) -> &'static str {
        match self {
            Matra::Pangkon => PANGKON,
            Matra::Bare => "",
            Matra::Sign(sign) => sign,
        }
    }

    pub fn is_pepet(&self) -> bool {
        matches!(self, Matra::Sign(sign) if *sign == PEPET)
    }
}

/// Resolve the remainder of a syllable into its vowel sign.
///
/// Leading `h` characters are hiatus carriers and are skipped, unless the
/// remainder is nothing but `h`.
pub fn resolve(remainder: &[char], config: &ModeConfiguration) -> Matra {
    if remainder.is_empty() {
        return Matra::Pangkon;
    }
    let skip = remainder.iter().take_while(|&&c| c == 'h').count();
    let vowel = if skip < remainder.len() {
        &remainder[skip..]
    } else {
        remainder
    };
    let spelling: String = vowel.iter().collect();
    match GlyphTables::global().vowel_sign(&spelling, config.paste_input) {
        Some("") | None => Matra::Bare,
        Some(sign) => Matra::Sign(sign),
    }
}
