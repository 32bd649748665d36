use std::fs;
use std::io::{self, BufRead};
use std::process;

use aksara_core::{explain, transliterate, ModeConfiguration, Piece, PieceKind};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Mode switches given on the command line. Each one only turns its flag on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub murda: bool,
    pub diphthong: bool,
    pub paste: bool,
    pub spaced: bool,
}

impl ModeFlags {
    pub fn apply(&self, base: ModeConfiguration) -> ModeConfiguration {
        ModeConfiguration {
            murda: base.murda || self.murda,
            diphthong: base.diphthong || self.diphthong,
            paste_input: base.paste_input || self.paste,
            spaced_word_boundary: base.spaced_word_boundary || self.spaced,
        }
    }
}

/// Config file (if any) with the command-line flags on top.
pub fn load_config(config_file: Option<&str>, flags: &ModeFlags) -> ModeConfiguration {
    let base = match config_file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(aksara_core::parse_config_toml(&content), "Error: {}")
        }
        None => ModeConfiguration::default(),
    };
    flags.apply(base)
}

/// Transliterate `text`, or every stdin line when no text is given.
pub fn convert_cmd(text: Option<&str>, config: ModeConfiguration) {
    match text {
        Some(text) => println!("{}", transliterate(text, config)),
        None => {
            for line in io::stdin().lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                println!("{}", transliterate(&line, config));
            }
        }
    }
}

pub fn explain_cmd(text: &str, config: ModeConfiguration, json: bool) {
    let pieces = explain(text, config);
    if json {
        let out = die!(
            serde_json::to_string_pretty(&pieces),
            "JSON serialization failed: {}"
        );
        println!("{out}");
    } else {
        print!("{}", format_pieces(text, &pieces));
        println!("=> {}", transliterate(text, config));
    }
}

/// One line per piece: source padded to a common display width, then the
/// piece kind and its glyphs (escaped when invisible).
pub fn format_pieces(text: &str, pieces: &[Piece]) -> String {
    use unicode_width::UnicodeWidthStr;

    let mut out = format!("=== \"{}\" ({} pieces) ===\n", text, pieces.len());
    let pad_width = pieces
        .iter()
        .map(|p| UnicodeWidthStr::width(p.source.as_str()))
        .max()
        .unwrap_or(0)
        .max(4);
    for (i, piece) in pieces.iter().enumerate() {
        let label = format!("{:?}", piece.source);
        let display_width = UnicodeWidthStr::width(label.as_str());
        let padded = if display_width < pad_width + 2 {
            format!("{}{}", label, " ".repeat(pad_width + 2 - display_width))
        } else {
            label
        };
        out.push_str(&format!(
            "  [{i:>3}] {padded} {:<11} {}\n",
            kind_label(piece.kind),
            visible_glyphs(&piece.glyphs)
        ));
    }
    out
}

fn kind_label(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Syllable => "syllable",
        PieceKind::Numeral => "numeral",
        PieceKind::Punctuation => "punctuation",
        PieceKind::Separator => "separator",
    }
}

fn visible_glyphs(glyphs: &str) -> String {
    if glyphs.is_empty() {
        return "(none)".to_string();
    }
    glyphs
        .chars()
        .map(|c| match c {
            '\u{200B}' => "<zws>".to_string(),
            c => c.to_string(),
        })
        .collect()
}
