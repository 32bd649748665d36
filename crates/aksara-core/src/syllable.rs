//! Syllable rendering: core sound plus vowel sign, with context overrides.
//!
//! Several core/vowel pairings have dedicated ligatures instead of plain
//! concatenation. Each is an [`Override`] tried in a fixed order; the first
//! one that produces output wins and the rest are skipped.

use tracing::trace;

use crate::classify::fold_case;
use crate::config::ModeConfiguration;
use crate::matra::{self, Matra};
use crate::sound;
use crate::tables::{CAKRA, CAKRA_KERET, CECAK, HA, LA, LAYAR, NGA, PENGKAL, RA, WIGNYAN};

/// Everything an override may look at.
struct Parts<'a> {
    segment: &'a [char],
    folded: Vec<char>,
    core: String,
    matra: Matra,
    previous_was_vowel: bool,
    config: &'a ModeConfiguration,
}

impl Parts<'_> {
    fn starts_with(&self, spelling: &str) -> bool {
        let mut it = self.folded.iter();
        spelling.chars().all(|c| it.next() == Some(&c))
    }

    /// Raw segment prefix test, case-sensitive.
    fn typed(&self, first: char, second: char) -> bool {
        self.segment.first() == Some(&first) && self.segment.get(1) == Some(&second)
    }

    fn has_digraph_onset(&self) -> bool {
        self.typed('n', 'y') || self.typed('t', 'h') || self.typed('d', 'h')
    }

    fn core_of(&self, len: usize) -> String {
        sound::core(&self.segment[..len.min(self.segment.len())], self.config).glyphs
    }
}

type Override = fn(&Parts) -> Option<String>;

const OVERRIDES: &[Override] = &[
    nasal_geminate,
    vocalic_liquid,
    ambiguous_overlap,
    attached_without_vowel,
    cakra_pepet,
    la_pepet,
    trailing_sign,
];

/// Render one segment. `previous_was_vowel` tells whether the character just
/// before the segment is a vowel; the ngg and h/r overlap forms depend on it.
pub fn resolve(segment: &[char], previous_was_vowel: bool, config: &ModeConfiguration) -> String {
    match segment {
        [] => String::new(),
        [c] => match sound::special(*c) {
            Some(special) => special.to_string(),
            None => sound::character(*c, config),
        },
        _ => {
            let core = sound::core(segment, config);
            let remainder = segment.get(core.consumed..).unwrap_or(&[]);
            let parts = Parts {
                segment,
                folded: segment.iter().map(|&c| fold_case(c)).collect(),
                core: core.glyphs,
                matra: matra::resolve(remainder, config),
                previous_was_vowel,
                config,
            };
            let glyphs = OVERRIDES
                .iter()
                .find_map(|rule| rule(&parts))
                .unwrap_or_else(|| format!("{}{}", parts.core, parts.matra.as_str()));
            trace!(
                segment = %segment.iter().collect::<String>(),
                consumed = core.consumed,
                glyphs = %glyphs,
                "syllable"
            );
            glyphs
        }
    }
}

/// ngg and its r/l/w/y extensions: after a vowel the nasal floats as cecak,
/// word-initially it is a full nga with pangkon.
fn nasal_geminate(p: &Parts) -> Option<String> {
    if !p.starts_with("ngg") {
        return None;
    }
    let attached = match p.folded.get(3) {
        Some('r') => "ꦿ",
        Some('l') => "꧀ꦭ",
        Some('w') => "꧀ꦮ",
        Some('y') => "ꦾ",
        _ => "",
    };
    let nasal = if p.previous_was_vowel {
        "ꦁ\u{200B}ꦒ"
    } else {
        "ꦔ꧀ꦒ"
    };
    Some(format!("{nasal}{attached}{}", p.matra.as_str()))
}

/// Vocalic r/l spelled with `x` (rx, lx) after r, h or q. The ligature carries
/// its own vowel.
fn vocalic_liquid(p: &Parts) -> Option<String> {
    let vowel = p.previous_was_vowel;
    let glyphs = if p.starts_with("rlx") {
        "ꦂꦊ"
    } else if p.starts_with("rrx") {
        "ꦂꦉ"
    } else if p.starts_with("hlx") {
        if vowel {
            "ꦃꦊ"
        } else {
            "ꦲ꧀ꦭꦼ"
        }
    } else if p.starts_with("hrx") {
        if vowel {
            "ꦃꦉ"
        } else {
            "ꦲꦽ"
        }
    } else if p.starts_with("qlx") {
        "꧀ꦭꦼ"
    } else if p.starts_with("qrx") {
        CAKRA_KERET
    } else {
        return None;
    };
    Some(glyphs.to_string())
}

/// rw, hl, hw and hy read as a closing sign plus a consonant after a vowel,
/// and as a stacked cluster at the start of a word. A pengkal form already
/// closes the syllable, so it never takes pangkon.
fn ambiguous_overlap(p: &Parts) -> Option<String> {
    let vowel = p.previous_was_vowel;
    let glyphs = match p.core.as_str() {
        "ꦂꦮ" if !vowel => "ꦫ꧀ꦮ",
        "ꦃꦭ" if !vowel => "ꦲ꧀ꦭ",
        "ꦃꦮ" if !vowel => "ꦲ꧀ꦮ",
        "ꦲꦾ" if vowel => "ꦃꦪ",
        "ꦂꦮ" | "ꦃꦭ" | "ꦃꦮ" | "ꦲꦾ" => p.core.as_str(),
        _ => return None,
    };
    if glyphs.contains(PENGKAL) && p.matra == Matra::Pangkon {
        return Some(glyphs.to_string());
    }
    Some(format!("{glyphs}{}", p.matra.as_str()))
}

/// Cakra and pengkal already close the syllable.
fn attached_without_vowel(p: &Parts) -> Option<String> {
    let attached = p.core.contains(CAKRA) || p.core.contains(PENGKAL);
    (attached && p.matra == Matra::Pangkon).then(|| p.core.clone())
}

/// Cakra followed by pepet becomes cakra keret on the first consonant.
fn cakra_pepet(p: &Parts) -> Option<String> {
    if !(p.core.contains(CAKRA) && p.matra.is_pepet()) {
        return None;
    }
    let glyphs = if p.has_digraph_onset() {
        format!("{}{CAKRA_KERET}", p.core_of(2))
    } else if p.typed('n', 'g') {
        if p.segment.get(2) == Some(&'g') {
            "ꦔ꧀ꦒꦽ".to_string()
        } else {
            "ꦔꦽ".to_string()
        }
    } else {
        format!("{}{CAKRA_KERET}", p.core_of(1))
    };
    Some(glyphs)
}

/// Panjingan la followed by pepet becomes nga lelet.
fn la_pepet(p: &Parts) -> Option<String> {
    if !(p.core.contains(LA) && p.matra.is_pepet()) {
        return None;
    }
    let glyphs = if p.has_digraph_onset() {
        format!("{}꧀ꦭꦼ", p.core_of(2))
    } else if p.typed('n', 'g') {
        if p.segment.get(2) == Some(&'g') {
            "ꦔ꧀ꦒ꧀ꦭꦼ".to_string()
        } else {
            "ꦔ꧀ꦭꦼ".to_string()
        }
    } else if p.segment.first() == Some(&'l') {
        "ꦊ".to_string()
    } else {
        format!("{}꧀ꦭꦼ", p.core_of(1))
    };
    Some(glyphs)
}

/// Wignyan, layar and cecak cannot carry a vowel sign; with a vowel they turn
/// back into ha, ra and nga.
fn trailing_sign(p: &Parts) -> Option<String> {
    let m = p.matra;
    let glyphs = match (p.core.as_str(), m) {
        (WIGNYAN, Matra::Pangkon) => WIGNYAN.to_string(),
        (WIGNYAN, _) => format!("{HA}{}", m.as_str()),
        (LAYAR, m) if m.is_pepet() => "ꦉ".to_string(),
        (LAYAR, Matra::Pangkon) => LAYAR.to_string(),
        (LAYAR, _) => format!("{RA}{}", m.as_str()),
        (CECAK, Matra::Pangkon) => CECAK.to_string(),
        (CECAK, _) => format!("{NGA}{}", m.as_str()),
        _ => return None,
    };
    Some(glyphs)
}
