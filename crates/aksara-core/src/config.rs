//! Mode configuration snapshot and its TOML form.
//!
//! The engine never reads ambient state: every call receives a
//! [`ModeConfiguration`] by value. TOML loading exists for callers (the CLI)
//! that keep their flags in a file.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

const FIELDS: [&str; 4] = ["murda", "diphthong", "paste_input", "spaced_word_boundary"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfiguration {
    /// Uppercase letters select honorific (murda) letterforms.
    pub murda: bool,
    /// Non-initial aa/ii/uu/ai/au resolve through the diphthong vowel signs
    /// instead of an inserted silent `h`.
    pub diphthong: bool,
    /// Text pasted from elsewhere: plain `e` is pepet rather than taling.
    pub paste_input: bool,
    /// Every space becomes an invisible separator.
    pub spaced_word_boundary: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("mode.{field} must be a boolean, found {found}")]
    NotBoolean { field: String, found: String },
    #[error("unknown field: mode.{0}")]
    UnknownField(String),
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    mode: toml::Table,
}

/// Returns the embedded default configuration TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

/// Parse a `[mode]` table. Missing keys keep their default; a key holding
/// anything but a boolean is rejected.
pub fn parse_config_toml(toml_str: &str) -> Result<ModeConfiguration, ConfigError> {
    let raw: RawConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let mut config = ModeConfiguration::default();
    for (key, value) in &raw.mode {
        let flag = match key.as_str() {
            "murda" => &mut config.murda,
            "diphthong" => &mut config.diphthong,
            "paste_input" => &mut config.paste_input,
            "spaced_word_boundary" => &mut config.spaced_word_boundary,
            _ => return Err(ConfigError::UnknownField(key.clone())),
        };
        *flag = value.as_bool().ok_or_else(|| ConfigError::NotBoolean {
            field: key.clone(),
            found: value.type_str().to_string(),
        })?;
    }
    Ok(config)
}

impl ModeConfiguration {
    /// Render back to the `[mode]` TOML form.
    pub fn to_toml(&self) -> String {
        let values = [
            self.murda,
            self.diphthong,
            self.paste_input,
            self.spaced_word_boundary,
        ];
        let mut out = String::from("[mode]\n");
        for (field, value) in FIELDS.iter().zip(values) {
            out.push_str(&format!("{field} = {value}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let config = parse_config_toml(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config, ModeConfiguration::default());
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let config = parse_config_toml("[mode]\nmurda = true\n").unwrap();
        assert!(config.murda);
        assert!(!config.diphthong);
        assert!(!config.paste_input);
        assert!(!config.spaced_word_boundary);
    }

    #[test]
    fn parse_empty_document() {
        let config = parse_config_toml("").unwrap();
        assert_eq!(config, ModeConfiguration::default());
    }

    #[test]
    fn error_not_boolean() {
        let err = parse_config_toml("[mode]\ndiphthong = \"yes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::NotBoolean { .. }));
        assert!(err.to_string().contains("mode.diphthong"));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn error_integer_is_not_boolean() {
        let err = parse_config_toml("[mode]\nmurda = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::NotBoolean { .. }));
    }

    #[test]
    fn error_unknown_field() {
        let err = parse_config_toml("[mode]\nmurdha = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownField(ref f) if f == "murdha"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_config_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn to_toml_round_trips() {
        let config = ModeConfiguration {
            murda: true,
            diphthong: false,
            paste_input: true,
            spaced_word_boundary: true,
        };
        assert_eq!(parse_config_toml(&config.to_toml()).unwrap(), config);
    }
}
