use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use ai_impact::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    let cfg = config::load_config(&args.config)?;

    // The dashboard owns the terminal; console logging would corrupt it
    if !matches!(command, cli::Commands::Dashboard { .. }) {
        init_tracing(&cfg.server.log_level);
    }

    match command {
        cli::Commands::Dashboard { model, requests } => {
            commands::dashboard::execute(&cfg, model.as_deref(), requests)?;
        }
        cli::Commands::Estimate {
            model,
            requests,
            json,
        } => {
            commands::estimate::execute(&cfg, &model, requests, json)?;
        }
        cli::Commands::Rank { json } => {
            commands::rank::execute(&cfg, json)?;
        }
        cli::Commands::Models => {
            commands::models::execute(&cfg)?;
        }
        cli::Commands::Tips => {
            commands::tips::execute();
        }
        cli::Commands::Serve => {
            ai_impact::server::start_server(cfg).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg, &args.config)?,
        },
        cli::Commands::Version => {
            println!("AI Impact v{}", env!("CARGO_PKG_VERSION"));
            println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
        }
    }

    Ok(())
}
