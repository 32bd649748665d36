//! Immutable glyph tables: base consonants, vowel signs, loan letters,
//! numerals and punctuation.
//!
//! Tables are plain `&[(key, glyph)]` slices; [`GlyphTables::global`] indexes
//! them once into hash maps and hands out a `&'static` view.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Invisible separator used as a reflow guard and line-break hint.
pub const ZWS: &str = "\u{200B}";
/// Pangkon (virama): kills the inherent vowel.
pub const PANGKON: &str = "꧀";
/// Cecak (floating nasal) followed by a reflow guard, as emitted for bare "ng".
pub const CECAK: &str = "ꦁ\u{200B}";
pub const WIGNYAN: &str = "ꦃ";
pub const LAYAR: &str = "ꦂ";
pub const CAKRA: char = 'ꦿ';
pub const PENGKAL: char = 'ꦾ';
pub const CAKRA_KERET: &str = "ꦽ";
pub const PEPET: &str = "ꦼ";
/// Full-letter forms rendered when a trailing sign must carry a vowel.
pub const HA: &str = "ꦲ";
pub const RA: &str = "ꦫ";
pub const NGA: &str = "ꦔ";
pub const LA: char = 'ꦭ';
/// Doubled nasal ligature replacing two adjacent cecak marks.
pub const NGA_NGA: &str = "ꦔ꧀ꦔ";
/// Pada pangkat: opens and closes a numeral block.
pub const NUMERAL_MARK: &str = "꧇";

const NUMERALS: [&str; 10] = ["꧐", "꧑", "꧒", "꧓", "꧔", "꧕", "꧖", "꧗", "꧘", "꧙"];

/// Uppercase ASCII letters, standard letterforms.
const UPPER_STANDARD: &[(char, &str)] = &[
    ('A', "ꦄ"),
    ('B', "ꦧ"),
    ('C', "ꦕ"),
    ('D', "ꦢ"),
    ('E', "ꦌ"),
    ('F', "ꦥ꦳"),
    ('G', "ꦒ"),
    ('H', "ꦲ"),
    ('I', "ꦆ"),
    ('J', "ꦗ"),
    ('K', "ꦏ"),
    ('L', "ꦭ"),
    ('M', "ꦩ"),
    ('N', "ꦤ"),
    ('O', "ꦎ"),
    ('P', "ꦥ"),
    ('Q', "ꦐ"),
    ('R', "ꦫ"),
    ('S', "ꦱ"),
    ('T', "ꦠ"),
    ('U', "ꦈ"),
    ('V', "ꦮ꦳"),
    ('W', "ꦮ"),
    ('X', "ꦼ"),
    ('Y', "ꦪ"),
    ('Z', "ꦰ"),
];

/// Uppercase ASCII letters, honorific (murda) letterforms.
const UPPER_MURDA: &[(char, &str)] = &[
    ('A', "ꦄ"),
    ('B', "ꦨ"),
    ('C', "ꦖ"),
    ('D', "ꦣ"),
    ('E', "ꦌ"),
    ('F', "ꦦ꦳"),
    ('G', "ꦓ"),
    ('H', "ꦲ꦳"),
    ('I', "ꦆ"),
    ('J', "ꦙ"),
    ('K', "ꦑ"),
    ('L', "ꦭ"),
    ('M', "ꦩ"),
    ('N', "ꦟ"),
    ('O', "ꦎ"),
    ('P', "ꦦ"),
    ('Q', "ꦐ"),
    ('R', "ꦬ"),
    ('S', "ꦯ"),
    ('T', "ꦡ"),
    ('U', "ꦈ"),
    ('V', "ꦮ꦳"),
    ('W', "ꦮ"),
    ('X', "ꦼ"),
    ('Y', "ꦪ"),
    ('Z', "ꦰ"),
];

/// Lowercase ASCII plus extended Latin letters; shared by both modes.
/// Lowercase vowels carry an implicit ha, h and r are the trailing signs.
const SHARED: &[(char, &str)] = &[
    ('a', "ꦲ"),
    ('b', "ꦧ"),
    ('c', "ꦕ"),
    ('d', "ꦢ"),
    ('e', "ꦲꦺ"),
    ('f', "ꦥ꦳"),
    ('g', "ꦒ"),
    ('h', "ꦃ"),
    ('i', "ꦲꦶ"),
    ('j', "ꦗ"),
    ('k', "ꦏ"),
    ('l', "ꦭ"),
    ('m', "ꦩ"),
    ('n', "ꦤ"),
    ('o', "ꦲꦺꦴ"),
    ('p', "ꦥ"),
    ('q', "ꦐ"),
    ('r', "ꦂ"),
    ('s', "ꦱ"),
    ('t', "ꦠ"),
    ('u', "ꦲꦸ"),
    ('v', "ꦮ꦳"),
    ('w', "ꦮ"),
    ('x', "ꦲꦼ"),
    ('y', "ꦪ"),
    ('z', "ꦗ꦳"),
    ('È', "ꦌ"),
    ('É', "ꦌ"),
    ('Ê', "ꦄꦼ"),
    ('Ě', "ꦄꦼ"),
    ('Ĕ', "ꦄꦼ"),
    ('è', "ꦲꦺ"),
    ('é', "ꦲꦺ"),
    ('ê', "ꦲꦼ"),
    ('ě', "ꦲꦼ"),
    ('ĕ', "ꦲꦼ"),
    ('ə', "ꦲꦼ"),
    ('ɔ', "ꦲ"),
    ('å', "ꦲ"),
    ('ô', "ꦲ"),
    ('â', "ꦲꦴ"),
    ('ā', "ꦲꦴ"),
    ('ī', "ꦲꦷ"),
    ('ū', "ꦲꦹ"),
    ('ō', "ꦲꦼꦴ"),
    ('Ñ', "ꦚ"),
    ('ñ', "ꦚ"),
    ('ɲ', "ꦚ"),
    ('Ŋ', "ꦔ"),
    ('ŋ', "ꦔ"),
    ('Ṇ', "ꦟ"),
    ('ṇ', "ꦟ"),
    ('Ḍ', "ꦝ"),
    ('ḍ', "ꦝ"),
    ('Ṭ', "ꦛ"),
    ('ṭ', "ꦛ"),
    ('ś', "ꦯ"),
    ('Ṣ', "ꦰ"),
    ('ṣ', "ꦰ"),
    ('Ṛ', "ꦽ"),
    ('ṛ', "ꦽ"),
];

/// Typed input: plain `e` is taling.
const TYPED_VOWELS: &[(&str, &str)] = &[("e", "ꦺ"), ("E", "ꦌ")];

/// Pasted input: plain `e` is pepet.
const PASTED_VOWELS: &[(&str, &str)] = &[("e", "ꦼ"), ("E", "ꦄꦼ")];

/// Mode-independent vowel signs. An empty glyph means the bare inherent vowel.
const COMMON_VOWELS: &[(&str, &str)] = &[
    ("ā", "ꦴ"),
    ("â", "ꦴ"),
    ("aa", "ꦴ"),
    ("è", "ꦺ"),
    ("é", "ꦺ"),
    ("i", "ꦶ"),
    ("ī", "ꦷ"),
    ("ii", "ꦷ"),
    ("o", "ꦺꦴ"),
    ("ō", "ꦼꦴ"),
    ("u", "ꦸ"),
    ("ū", "ꦹ"),
    ("uu", "ꦹ"),
    ("x", "ꦼ"),
    ("ě", "ꦼ"),
    ("ĕ", "ꦼ"),
    ("ê", "ꦼ"),
    ("ə", "ꦼ"),
    ("ô", ""),
    ("ă", ""),
    ("å", ""),
    ("ɔ", ""),
    ("A", "ꦄ"),
    ("Ă", "ꦄ"),
    ("È", "ꦌ"),
    ("É", "ꦌ"),
    ("I", "ꦆ"),
    ("O", "ꦎ"),
    ("U", "ꦈ"),
    ("X", "ꦄꦼ"),
    ("Ě", "ꦄꦼ"),
    ("Ĕ", "ꦄꦼ"),
    ("Ê", "ꦄꦼ"),
    ("ṛ", "ꦽ"),
    ("Ṛ", "ꦽ"),
    ("ai", "ꦻ"),
    ("au", "ꦻꦴ"),
];

/// Loan letters written as a rekan/special form with pangkon attached.
const SPECIAL: &[(char, &str)] = &[
    ('f', "ꦥ꦳꧀"),
    ('v', "ꦮ꦳꧀"),
    ('z', "ꦗ꦳꧀"),
    ('ś', "ꦯ꧀"),
    ('Q', "ꦐ꧀"),
    ('q', "ꦐ꧀"),
];

pub struct GlyphTables {
    upper_standard: HashMap<char, &'static str>,
    upper_murda: HashMap<char, &'static str>,
    shared: HashMap<char, &'static str>,
    typed_vowels: HashMap<&'static str, &'static str>,
    pasted_vowels: HashMap<&'static str, &'static str>,
    common_vowels: HashMap<&'static str, &'static str>,
    special: HashMap<char, &'static str>,
}

impl GlyphTables {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphTables {
        static INSTANCE: OnceLock<GlyphTables> = OnceLock::new();
        INSTANCE.get_or_init(|| GlyphTables {
            upper_standard: UPPER_STANDARD.iter().copied().collect(),
            upper_murda: UPPER_MURDA.iter().copied().collect(),
            shared: SHARED.iter().copied().collect(),
            typed_vowels: TYPED_VOWELS.iter().copied().collect(),
            pasted_vowels: PASTED_VOWELS.iter().copied().collect(),
            common_vowels: COMMON_VOWELS.iter().copied().collect(),
            special: SPECIAL.iter().copied().collect(),
        })
    }

    /// Base glyph for a single letter. Uppercase ASCII selects the standard or
    /// murda table; everything else goes through the shared table.
    pub fn consonant(&self, c: char, murda: bool) -> Option<&'static str> {
        let upper = if murda {
            &self.upper_murda
        } else {
            &self.upper_standard
        };
        upper.get(&c).or_else(|| self.shared.get(&c)).copied()
    }

    /// Vowel sign for a 1-2 character vowel spelling. `Some("")` is the bare
    /// inherent vowel, `None` means the spelling is unknown.
    pub fn vowel_sign(&self, spelling: &str, paste_input: bool) -> Option<&'static str> {
        let mode = if paste_input {
            &self.pasted_vowels
        } else {
            &self.typed_vowels
        };
        mode.get(spelling)
            .or_else(|| self.common_vowels.get(spelling))
            .copied()
    }

    pub fn special(&self, c: char) -> Option<&'static str> {
        self.special.get(&c).copied()
    }
}

/// Native numeral for an ASCII digit.
pub fn numeral(digit: char) -> Option<&'static str> {
    let offset = (digit as u32).checked_sub('0' as u32)?;
    NUMERALS.get(offset as usize).copied()
}

/// Script rendering for a punctuation character. Unlisted punctuation passes
/// through literally, so this returns `None` for it.
pub fn punctuation(c: char) -> Option<&'static str> {
    match c {
        '.' => Some("꧉\u{200B}"),
        ',' => Some("꧈\u{200B}"),
        ':' => Some("꧇\u{200B}"),
        '|' => Some("꧋"),
        '-' | '?' | '!' | '"' | '\'' => Some(ZWS),
        _ => None,
    }
}
