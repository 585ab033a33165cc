use clap::{Parser, Subcommand};
use std::path::PathBuf;

use voice_pricer::pricing::models::KnowledgeBaseSize;

#[derive(Parser, Debug)]
#[command(name = "pricer", version, about = "Voice minute bundle cost calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "pricer.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a minute bundle (default)
    Quote {
        /// Total minutes in the bundle
        #[arg(short, long, default_value = "10000")]
        minutes: u64,

        /// Number of provisioned phone lines
        #[arg(short, long, default_value = "2")]
        phone_lines: u32,

        /// Maximum simultaneous calls
        #[arg(short = 'n', long, default_value = "15")]
        concurrency: u32,

        /// Knowledge base size
        #[arg(short, long, value_enum, default_value = "none")]
        knowledge_base: KnowledgeBaseSize,

        /// Emit the quote as JSON instead of a formatted report
        #[arg(short, long)]
        json: bool,
    },

    /// Print the orchestration tier table
    Tiers,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Quote if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Quote {
            minutes: 10_000,
            phone_lines: 2,
            concurrency: 15,
            knowledge_base: KnowledgeBaseSize::None,
            json: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_quote() {
        let cli = Cli {
            config: PathBuf::from("pricer.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Quote {
                minutes,
                phone_lines,
                concurrency,
                knowledge_base,
                json,
            } => {
                assert_eq!(minutes, 10_000);
                assert_eq!(phone_lines, 2);
                assert_eq!(concurrency, 15);
                assert_eq!(knowledge_base, KnowledgeBaseSize::None);
                assert!(!json);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote_with_knowledge_base() {
        let args = vec!["pricer", "quote", "--minutes", "3000", "--knowledge-base", "large"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Quote {
                minutes,
                knowledge_base,
                ..
            } => {
                assert_eq!(minutes, 3_000);
                assert_eq!(knowledge_base, KnowledgeBaseSize::Large);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote_json() {
        let args = vec!["pricer", "quote", "-m", "500", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Quote { minutes, json, .. } => {
                assert_eq!(minutes, 500);
                assert!(json);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_tiers() {
        let args = vec!["pricer", "tiers"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.get_command(), Commands::Tiers));
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["pricer", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Show));
            }
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_cli_rejects_negative_minutes() {
        let args = vec!["pricer", "quote", "--minutes", "-5"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
