use crate::{transliterate, ModeConfiguration};

// ---------------------------------------------------------------------------
// Everyday words, default mode
// ---------------------------------------------------------------------------

const DEFAULT_CORPUS: &[(&str, &str)] = &[
    ("jawa", "ꦗꦮ"),
    ("basa", "ꦧꦱ"),
    ("sugeng", "ꦱꦸꦒꦺꦁ\u{200B}"),
    ("enjing", "ꦲꦺꦚ꧀ꦗꦶꦁ\u{200B}"),
    ("kraton", "ꦏꦿꦠꦺꦴꦤ꧀"),
    ("pitik", "ꦥꦶꦠꦶꦏ꧀"),
    ("sastra", "ꦱꦱ꧀ꦠꦿ"),
    ("wiwit", "ꦮꦶꦮꦶꦠ꧀"),
    ("sekolah", "ꦱꦺꦏꦺꦴꦭꦃ"),
    ("Surakarta", "ꦱꦸꦫꦏꦂꦠ"),
    ("matur nuwun", "ꦩꦠꦸꦂ\u{200B}ꦤꦸꦮꦸꦤ꧀"),
];

#[test]
fn test_default_corpus() {
    for &(latin, expected) in DEFAULT_CORPUS {
        let result = transliterate(latin, ModeConfiguration::default());
        assert_eq!(
            result, expected,
            "transliteration mismatch: latin={latin:?}, expected={expected:?}, got={result:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Murda letterforms
// ---------------------------------------------------------------------------

const MURDA_CORPUS: &[(&str, &str)] = &[
    ("Surakarta", "ꦯꦸꦫꦏꦂꦠ"),
    ("Khalid", "ꦑꦭꦶꦢ꧀"),
    ("jawa", "ꦗꦮ"),
];

#[test]
fn test_murda_corpus() {
    let config = ModeConfiguration {
        murda: true,
        ..Default::default()
    };
    for &(latin, expected) in MURDA_CORPUS {
        let result = transliterate(latin, config);
        assert_eq!(
            result, expected,
            "transliteration mismatch: latin={latin:?}, expected={expected:?}, got={result:?}"
        );
    }
}
