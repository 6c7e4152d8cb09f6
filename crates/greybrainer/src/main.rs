//! Greybrainer CLI binary.
//!
//! - Analyze a title through the three layers, optionally with ROI and a report
//! - Inspect or clear the token usage log
//! - Show the effective configuration

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, ConfigCommands, handle_usage, run_analyze, show_config};

    // Load .env before anything reads API keys
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    greybrainer::init_tracing(cli.verbose, cli.json_logs)?;

    let config = greybrainer::GreybrainerConfig::load()?;

    match cli.command {
        Commands::Analyze(args) => run_analyze(config, args).await?,
        Commands::Usage {
            clear,
            monthly_budget,
        } => handle_usage(config, clear, monthly_budget)?,
        Commands::Config(ConfigCommands::Show) => show_config(&config)?,
    }

    Ok(())
}
