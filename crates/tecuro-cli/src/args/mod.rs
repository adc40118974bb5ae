mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "tecuro")]
#[command(about = "Browse the TeCuro catalog from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $TECURO_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory or http(s) URL holding products.json, suits.json and ingredients.json
    #[arg(long, global = true)]
    pub data_root: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeated_facet_flags() {
        let cli = Cli::parse_from([
            "tecuro",
            "browse",
            "--concern",
            "acne",
            "--concern",
            "redness",
            "--trait",
            "vegan",
            "--format",
            "json",
        ]);

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Browse {
                concerns, traits, ..
            } => {
                assert_eq!(concerns, vec!["acne", "redness"]);
                assert_eq!(traits, vec!["vegan"]);
            }
            _ => panic!("expected browse"),
        }
    }
}
