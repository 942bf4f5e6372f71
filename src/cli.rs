use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ai-impact",
    version,
    about = "Estimate the energy, CO2 and water footprint of your AI usage"
)]
pub struct Cli {
    /// Configuration file path (optional; defaults apply when missing)
    #[arg(short, long, default_value = "config.toml", global = true, env = "AI_IMPACT_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive calculator dashboard (default)
    Dashboard {
        /// Initially selected model
        #[arg(short, long)]
        model: Option<String>,

        /// Initial requests per day (clamped to the configured range)
        #[arg(short, long, allow_negative_numbers = true)]
        requests: Option<i64>,
    },

    /// Estimate the footprint of one model over a day, week and month
    Estimate {
        /// Model name, as listed by `models`
        #[arg(short, long)]
        model: String,

        /// Requests per day (clamped to the configured range)
        #[arg(short, long, allow_negative_numbers = true)]
        requests: Option<i64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank all models from least to most resource intensive
    Rank {
        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog models and their per-request coefficients
    Models,

    /// Show tips for reducing the footprint of AI usage
    Tips,

    /// Serve the estimator as an HTTP JSON API
    Serve,

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
    /// Get the command to execute, defaulting to Dashboard if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Dashboard {
            model: None,
            requests: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_dashboard() {
        let cli = Cli {
            config: PathBuf::from("config.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Dashboard { model, requests } => {
                assert!(model.is_none());
                assert!(requests.is_none());
            }
            _ => panic!("Expected Dashboard command"),
        }
    }

    #[test]
    fn test_cli_parsing_estimate() {
        let args = vec!["ai-impact", "estimate", "--model", "GPT-4", "--requests", "25", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate {
                model,
                requests,
                json,
            } => {
                assert_eq!(model, "GPT-4");
                assert_eq!(requests, Some(25));
                assert!(json);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_estimate_requires_model() {
        let args = vec!["ai-impact", "estimate"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_global_config() {
        let args = vec!["ai-impact", "rank", "--config", "variant.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, PathBuf::from("variant.toml"));
        assert!(matches!(cli.get_command(), Commands::Rank { json: false }));
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["ai-impact", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Show));
            }
            _ => panic!("Expected Config command"),
        }
    }
}
