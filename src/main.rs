use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use voice_pricer::init_tracing;
use voice_pricer::pricing::QuoteRequest;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early
    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Quote {
            minutes,
            phone_lines,
            concurrency,
            knowledge_base,
            json,
        } => {
            let request = QuoteRequest {
                total_minutes: minutes,
                phone_lines,
                concurrency_limit: concurrency,
                knowledge_base,
            };
            commands::quote::execute(&args.config, request, json)?;
        }
        cli::Commands::Tiers => {
            commands::tiers::execute()?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("voice-pricer v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
