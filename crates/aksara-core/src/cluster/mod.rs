//! Consonant-cluster resolution.
//!
//! Decides how many source characters (1-4) at the start of a segment form one
//! cluster and which glyph sequence renders it. Rules live in [`rules`] and
//! are tried in order, first match wins, no backtracking.
//!
//! Generic position-2 rules need the first letter's core glyph, so this module
//! and [`crate::sound::core`] call each other. The recursion is bounded: the
//! inner call always receives a single character, which no rule matches.

mod rules;


use tracing::debug;

use crate::classify::{fold_case, is_vowel};
use crate::config::ModeConfiguration;
use crate::sound;

use rules::{Glyph, Pattern, Rule, RULES};

/// Longest cluster any rule or the run walk may claim.
pub const MAX_CLUSTER_LEN: usize = 4;

/// Letters whose late appearance in a consonant run triggers the run walk.
const WALK_MARKERS: &[char] = &['h', 'g', 'y', 'r', 'l', 'w', 'c', 'j', 'n', 'ñ'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterMatch {
    pub glyphs: String,
    /// Source characters covered by `glyphs`, always in `1..=MAX_CLUSTER_LEN`.
    pub consumed: usize,
}

/// The two views rules are matched against.
struct Views {
    folded: Vec<char>,
    cased: Vec<char>,
}

impl Views {
    fn new(text: &[char], config: &ModeConfiguration) -> Self {
        let folded: Vec<char> = text.iter().map(|&c| fold_case(c)).collect();
        let cased = if config.murda {
            text.to_vec()
        } else {
            folded.clone()
        };
        Views { folded, cased }
    }

    fn matches(&self, pattern: Pattern) -> bool {
        match pattern {
            Pattern::Folded(spelling) => starts_with(&self.folded, spelling),
            Pattern::Cased(spelling) => starts_with(&self.cased, spelling),
            Pattern::Second(letter) => self.folded.iter().position(|&c| c == letter) == Some(1),
        }
    }
}

fn starts_with(view: &[char], spelling: &str) -> bool {
    let mut it = view.iter();
    spelling.chars().all(|c| it.next() == Some(&c))
}

/// Resolve the cluster at the start of `text`.
///
/// `None` means no cluster: the caller renders the first character alone from
/// the base tables.
pub fn resolve(text: &[char], config: &ModeConfiguration) -> Option<ClusterMatch> {
    if text.len() < 2 {
        return None;
    }
    let views = Views::new(text, config);

    if let Some(rule) = RULES.iter().find(|r| views.matches(r.pattern)) {
        return Some(render(rule, &views, config));
    }

    walk_run(&views.folded, config)
}

fn render(rule: &Rule, views: &Views, config: &ModeConfiguration) -> ClusterMatch {
    let glyphs = match rule.glyph {
        Glyph::Fixed(glyphs) => glyphs.to_string(),
        Glyph::CoreThen(attached) => {
            let mut glyphs = sound::core(&views.cased[..1], config).glyphs;
            glyphs.push_str(attached);
            glyphs
        }
    };
    ClusterMatch {
        glyphs,
        consumed: rule.consumed,
    }
}

/// Fallback for consonant runs the table does not special-case: when a marker
/// letter first shows up past position 2 of the run, emit the run one
/// character at a time. Orthographically unvalidated for long runs.
fn walk_run(folded: &[char], config: &ModeConfiguration) -> Option<ClusterMatch> {
    let run_len = folded.iter().take_while(|&&c| !is_vowel(c)).count();
    let run = &folded[..run_len];

    let late_marker = WALK_MARKERS
        .iter()
        .any(|&m| run.iter().position(|&c| c == m).is_some_and(|i| i > 1));
    if !late_marker {
        return None;
    }

    let run = &run[..run.len().min(MAX_CLUSTER_LEN)];
    debug!(
        run = %run.iter().collect::<String>(),
        "no cluster rule, walking consonant run"
    );
    let glyphs = run.iter().map(|&c| sound::character(c, config)).collect();
    Some(ClusterMatch {
        glyphs,
        consumed: run.len(),
    })
}
