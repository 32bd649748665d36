//! Romanized Javanese (Latin) to Aksara Jawa transliteration.
//!
//! ```
//! use aksara_core::{transliterate, ModeConfiguration};
//!
//! assert_eq!(transliterate("hanacaraka", ModeConfiguration::default()), "ꦲꦤꦕꦫꦏ");
//! ```

pub mod classify;
pub mod cluster;
pub mod config;
pub mod matra;
pub mod sound;
pub mod syllable;
pub mod tables;
pub mod transliterate;

#[cfg(test)]
mod tests;

pub use config::{default_toml, parse_config_toml, ConfigError, ModeConfiguration};
pub use transliterate::{explain, transliterate, Piece, PieceKind};
