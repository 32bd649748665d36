use clap::{Args, Parser, Subcommand};

use aksara_cli::commands::convert_ops::ModeFlags;
use aksara_cli::commands::{config_ops, convert_ops};
use aksara_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "aksaratool", about = "Romanized Javanese to Aksara Jawa")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Default)]
struct ModeArgs {
    /// Path to a TOML file with a [mode] table
    #[arg(long)]
    config: Option<String>,
    /// Uppercase letters use murda letterforms
    #[arg(long)]
    murda: bool,
    /// Medial aa/ii/uu/ai/au use diphthong vowel signs
    #[arg(long)]
    diphthong: bool,
    /// Input was pasted: plain e is pepet
    #[arg(long)]
    paste: bool,
    /// Every space becomes an invisible separator
    #[arg(long)]
    spaced: bool,
}

impl ModeArgs {
    fn flags(&self) -> ModeFlags {
        ModeFlags {
            murda: self.murda,
            diphthong: self.diphthong,
            paste: self.paste,
            spaced: self.spaced,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (reads stdin line by line when no text is given)
    Convert {
        /// Latin text to transliterate
        text: Option<String>,
        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Show how text is cut into syllables and rendered
    Explain {
        /// Latin text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Export the mode configuration as TOML (the default, or the merged result
    /// of --config and mode flags)
    ConfigExport {
        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Validate a mode configuration TOML file
    ConfigValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text, mode } => {
            let config = convert_ops::load_config(mode.config.as_deref(), &mode.flags());
            convert_ops::convert_cmd(text.as_deref(), config);
        }
        Command::Explain { text, json, mode } => {
            let config = convert_ops::load_config(mode.config.as_deref(), &mode.flags());
            convert_ops::explain_cmd(&text, config, json);
        }
        Command::ConfigExport { mode } => {
            config_ops::config_export(mode.config.as_deref(), &mode.flags())
        }
        Command::ConfigValidate { file } => config_ops::config_validate(&file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_convert_with_flags() {
        let cli = Cli::try_parse_from(["aksaratool", "convert", "hanacaraka", "--murda", "--spaced"])
            .unwrap();
        match cli.command {
            Command::Convert { text, mode } => {
                assert_eq!(text.as_deref(), Some("hanacaraka"));
                let flags = mode.flags();
                assert!(flags.murda);
                assert!(flags.spaced);
                assert!(!flags.diphthong);
                assert!(!flags.paste);
                assert!(mode.config.is_none());
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn parse_convert_from_stdin() {
        let cli = Cli::try_parse_from(["aksaratool", "convert", "--config", "mode.toml"]).unwrap();
        match cli.command {
            Command::Convert { text, mode } => {
                assert!(text.is_none());
                assert_eq!(mode.config.as_deref(), Some("mode.toml"));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn parse_explain_json() {
        let cli =
            Cli::try_parse_from(["aksaratool", "explain", "tunggal", "--json", "--paste"]).unwrap();
        match cli.command {
            Command::Explain { text, json, mode } => {
                assert_eq!(text, "tunggal");
                assert!(json);
                assert!(mode.paste);
            }
            _ => panic!("expected explain"),
        }
    }

    #[test]
    fn parse_config_commands() {
        let cli = Cli::try_parse_from(["aksaratool", "config-export"]).unwrap();
        assert!(matches!(cli.command, Command::ConfigExport { .. }));

        let cli = Cli::try_parse_from(["aksaratool", "config-export", "--diphthong"]).unwrap();
        match cli.command {
            Command::ConfigExport { mode } => assert!(mode.flags().diphthong),
            _ => panic!("expected config-export"),
        }

        let cli = Cli::try_parse_from(["aksaratool", "config-validate", "mode.toml"]).unwrap();
        assert!(matches!(cli.command, Command::ConfigValidate { ref file } if file == "mode.toml"));
    }

    #[test]
    fn explain_requires_text() {
        assert!(Cli::try_parse_from(["aksaratool", "explain"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["aksaratool", "convert", "x", "--murdha"]).is_err());
    }
}
