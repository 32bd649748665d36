use std::fs;
use std::process;

use crate::commands::convert_ops::{self, ModeFlags};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Print the embedded default (with its comments) when nothing is
/// overridden, otherwise the merged configuration.
pub fn config_export(config_file: Option<&str>, flags: &ModeFlags) {
    print!("{}", export_toml(config_file, flags));
}

pub fn export_toml(config_file: Option<&str>, flags: &ModeFlags) -> String {
    if config_file.is_none() && *flags == ModeFlags::default() {
        return aksara_core::default_toml().to_string();
    }
    convert_ops::load_config(config_file, flags).to_toml()
}

pub fn config_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(aksara_core::parse_config_toml(&content), "Error: {}");
    println!(
        "OK: murda={}, diphthong={}, paste_input={}, spaced_word_boundary={}",
        config.murda, config.diphthong, config.paste_input, config.spaced_word_boundary
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_without_overrides_is_embedded_default() {
        let out = export_toml(None, &ModeFlags::default());
        assert_eq!(out, aksara_core::default_toml());
    }

    #[test]
    fn export_with_flags_renders_merged_config() {
        let flags = ModeFlags {
            murda: true,
            spaced: true,
            ..Default::default()
        };
        let out = export_toml(None, &flags);
        assert!(out.starts_with("[mode]\n"));
        assert!(out.contains("murda = true"));
        assert!(out.contains("diphthong = false"));
        assert!(out.contains("spaced_word_boundary = true"));
        let parsed = aksara_core::parse_config_toml(&out).unwrap();
        assert_eq!(parsed, flags.apply(aksara_core::ModeConfiguration::default()));
    }
}
