//! Core, special and single-character sounds.

use tracing::debug;

use crate::classify::{is_consonant, is_trailing_sign};
use crate::cluster::{self, ClusterMatch};
use crate::config::ModeConfiguration;
use crate::tables::{self, GlyphTables, PANGKON};

/// Core sound of the segment start: a cluster when one matches, otherwise the
/// first character from the case- and mode-appropriate base table. Characters
/// no table lists pass through unchanged.
pub fn core(text: &[char], config: &ModeConfiguration) -> ClusterMatch {
    if let Some(m) = cluster::resolve(text, config) {
        return m;
    }
    let Some(&first) = text.first() else {
        return ClusterMatch {
            glyphs: String::new(),
            consumed: 1,
        };
    };
    let glyphs = match GlyphTables::global().consonant(first, config.murda) {
        Some(glyph) => glyph.to_string(),
        None => {
            debug!(ch = %first, "unmapped character passes through");
            first.to_string()
        }
    };
    ClusterMatch {
        glyphs,
        consumed: 1,
    }
}

/// Loan letters (f, v, z, ś, q) written with their rekan form and pangkon.
pub fn special(c: char) -> Option<&'static str> {
    GlyphTables::global().special(c)
}

/// Render one character on its own: numeral, trailing sign, consonant with
/// pangkon, or standalone vowel.
pub fn character(c: char, config: &ModeConfiguration) -> String {
    if let Some(numeral) = tables::numeral(c) {
        return numeral.to_string();
    }
    let glyphs = core(&[c], config).glyphs;
    match c {
        // wignyan/layar/cecak sit on the previous syllable, never with pangkon
        c if is_trailing_sign(c) => glyphs,
        // includes a nasal before c/j (anuswara)
        c if is_consonant(c) => glyphs + PANGKON,
        _ => glyphs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ModeConfiguration {
        ModeConfiguration::default()
    }

    #[test]
    fn test_core_falls_back_to_table() {
        let m = core(&['k', 'a'], &cfg());
        assert_eq!(m.glyphs, "ꦏ");
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn test_core_uses_cluster() {
        let m = core(&['k', 'r', 'a'], &cfg());
        assert_eq!(m.glyphs, "ꦏꦿ");
        assert_eq!(m.consumed, 2);
    }

    #[test]
    fn test_core_unmapped_passes_through() {
        let m = core(&['€'], &cfg());
        assert_eq!(m.glyphs, "€");
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn test_core_uppercase_tables() {
        let murda = ModeConfiguration {
            murda: true,
            ..Default::default()
        };
        assert_eq!(core(&['N'], &cfg()).glyphs, "ꦤ");
        assert_eq!(core(&['N'], &murda).glyphs, "ꦟ");
    }

    #[test]
    fn test_special() {
        assert_eq!(special('v'), Some("ꦮ꦳꧀"));
        assert_eq!(special('z'), Some("ꦗ꦳꧀"));
        assert_eq!(special('k'), None);
    }

    #[test]
    fn test_character_digit() {
        assert_eq!(character('0', &cfg()), "꧐");
        assert_eq!(character('9', &cfg()), "꧙");
    }

    #[test]
    fn test_character_trailing_sign_has_no_pangkon() {
        assert_eq!(character('h', &cfg()), "ꦃ");
        assert_eq!(character('r', &cfg()), "ꦂ");
        assert_eq!(character('ŋ', &cfg()), "ꦔ");
    }

    #[test]
    fn test_character_consonant_gets_pangkon() {
        assert_eq!(character('k', &cfg()), "ꦏ꧀");
        assert_eq!(character('n', &cfg()), "ꦤ꧀");
        assert_eq!(character('s', &cfg()), "ꦱ꧀");
    }

    #[test]
    fn test_character_vowel_is_standalone() {
        assert_eq!(character('a', &cfg()), "ꦲ");
        assert_eq!(character('i', &cfg()), "ꦲꦶ");
        assert_eq!(character('A', &cfg()), "ꦄ");
    }
}
