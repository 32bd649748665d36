//! Left-to-right scanner turning romanized text into Aksara Jawa.
//!
//! The text is whitespace-normalized and hiatus carriers are inserted, then a
//! single pass cuts it into syllable segments. Each segment is rendered by
//! [`crate::syllable::resolve`]; spaces, punctuation and digits are emitted
//! directly.

mod hiatus;


use serde::Serialize;
use tracing::debug_span;

use crate::classify::{is_cluster_marker, is_digit, is_punctuation, is_vowel};
use crate::cluster::MAX_CLUSTER_LEN;
use crate::config::ModeConfiguration;
use crate::syllable;
use crate::tables::{self, CECAK, NGA_NGA, NUMERAL_MARK, ZWS};

/// Cluster max plus a two-letter vowel spelling (ai, au, ...).
pub const MAX_SEGMENT_LEN: usize = MAX_CLUSTER_LEN + 2;

/// Characters before a space that leave an open syllable or a trailing sign,
/// which would otherwise reflow onto the next word.
const OPEN_BEFORE_SPACE: &[char] = &['a', 'e', 'i', 'o', 'u', 'r', 'h', 'ě'];

/// One unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Piece {
    /// Source text as scanned, hiatus carriers included.
    pub source: String,
    pub glyphs: String,
    pub kind: PieceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Syllable,
    /// A whole digit run, opening and closing marks included.
    Numeral,
    Punctuation,
    Separator,
}

/// Transliterate `input` into Aksara Jawa.
pub fn transliterate(input: &str, config: ModeConfiguration) -> String {
    let out: String = explain(input, config)
        .iter()
        .map(|p| p.glyphs.as_str())
        .collect();
    normalize_whitespace(&out)
}

/// The pieces [`transliterate`] concatenates, in output order.
pub fn explain(input: &str, config: ModeConfiguration) -> Vec<Piece> {
    let normalized = normalize_whitespace(input);
    let _span = debug_span!("transliterate", chars = normalized.chars().count()).entered();

    let chars: Vec<char> = normalized.chars().collect();
    let text = hiatus::insert_carriers(&chars, &config);
    Scanner::new(text, config).run()
}

/// Trim, and collapse inner whitespace runs to one space.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Default)]
struct ScanFlags {
    /// The open segment already holds a vowel.
    vowel_seen: bool,
    /// The last visible piece is a bare cecak syllable.
    floating_nasal: bool,
}

struct Scanner {
    text: Vec<char>,
    config: ModeConfiguration,
    pieces: Vec<Piece>,
    segment_start: usize,
    flags: ScanFlags,
    /// Digit run being accumulated, pushed when a non-digit closes it.
    numeral: Option<Piece>,
}

impl Scanner {
    fn new(text: Vec<char>, config: ModeConfiguration) -> Self {
        Scanner {
            text,
            config,
            pieces: Vec::new(),
            segment_start: 0,
            flags: ScanFlags::default(),
            numeral: None,
        }
    }

    fn run(mut self) -> Vec<Piece> {
        for pos in 0..self.text.len() {
            self.step(pos);
        }
        self.flush_segment(self.text.len());
        self.close_numeral(NUMERAL_MARK);
        self.pieces
    }

    fn step(&mut self, pos: usize) {
        let c = self.text[pos];
        if !is_digit(c) {
            self.close_numeral("꧇\u{200B}");
        }

        let held = pos.saturating_sub(self.segment_start);
        let vowel_seen = self.flags.vowel_seen;
        let full = held >= MAX_SEGMENT_LEN
            || (!vowel_seen && held >= MAX_CLUSTER_LEN && !is_vowel(c));

        // marker letters may still extend a cluster
        if is_cluster_marker(c) && !vowel_seen && !full {
            return;
        }

        let boundary = (c == 'h' && vowel_seen)
            || (!is_vowel(c) && pos > 0)
            || c == ' '
            || is_punctuation(c)
            || is_digit(c)
            || full;
        if !boundary {
            if is_vowel(c) {
                self.flags.vowel_seen = true;
            }
            return;
        }

        self.flush_segment(pos);
        self.segment_start = pos + 1;
        if c == ' ' {
            self.push_separator(pos);
        } else if is_punctuation(c) {
            self.push_punctuation(c);
        } else if is_digit(c) {
            self.push_digit(c);
        } else {
            self.segment_start = pos;
        }
        self.flags.vowel_seen = self.segment_start == pos && is_vowel(c);
    }

    fn flush_segment(&mut self, end: usize) {
        let start = self.segment_start;
        if start >= end {
            return;
        }
        let segment = &self.text[start..end];
        let source: String = segment.iter().collect();
        // a separating space is transparent here
        let previous_was_vowel = match &self.text[..start] {
            [.., prev, ' '] | [.., prev] => is_vowel(*prev),
            [] => false,
        };
        let mut glyphs = syllable::resolve(segment, previous_was_vowel, &self.config);

        if glyphs == CECAK {
            if self.flags.floating_nasal {
                self.flags.floating_nasal = false;
                self.merge_floating_nasal();
                glyphs = NGA_NGA.to_string();
            } else {
                self.flags.floating_nasal = true;
            }
        } else {
            self.flags.floating_nasal = false;
        }

        self.pieces.push(Piece {
            source,
            glyphs,
            kind: PieceKind::Syllable,
        });
    }

    /// Drop the earlier cecak so the pair renders as one nga-nga ligature.
    /// The flag guarantees only pieces that emitted nothing sit between the two.
    fn merge_floating_nasal(&mut self) {
        let prior = self.pieces.iter_mut().rev().find(|p| !p.glyphs.is_empty());
        if let Some(piece) = prior {
            if piece.kind == PieceKind::Syllable && piece.glyphs == CECAK {
                piece.glyphs.clear();
            }
        }
    }

    fn push_separator(&mut self, pos: usize) {
        let open_before = pos > 0 && OPEN_BEFORE_SPACE.contains(&self.text[pos - 1]);
        let glyphs = if self.config.spaced_word_boundary || open_before {
            self.flags.floating_nasal = false;
            ZWS
        } else {
            ""
        };
        self.pieces.push(Piece {
            source: " ".to_string(),
            glyphs: glyphs.to_string(),
            kind: PieceKind::Separator,
        });
    }

    fn push_punctuation(&mut self, c: char) {
        self.flags.floating_nasal = false;
        let glyphs = tables::punctuation(c)
            .map(str::to_string)
            .unwrap_or_else(|| c.to_string());
        self.pieces.push(Piece {
            source: c.to_string(),
            glyphs,
            kind: PieceKind::Punctuation,
        });
    }

    fn push_digit(&mut self, c: char) {
        self.flags.floating_nasal = false;
        let numeral = self.numeral.get_or_insert_with(|| Piece {
            source: String::new(),
            glyphs: NUMERAL_MARK.to_string(),
            kind: PieceKind::Numeral,
        });
        numeral.source.push(c);
        if let Some(glyph) = tables::numeral(c) {
            numeral.glyphs.push_str(glyph);
        }
    }

    fn close_numeral(&mut self, mark: &str) {
        if let Some(mut numeral) = self.numeral.take() {
            numeral.glyphs.push_str(mark);
            self.pieces.push(numeral);
        }
    }
}
