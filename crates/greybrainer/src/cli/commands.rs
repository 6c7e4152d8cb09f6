//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use greybrainer::{Provider, ReviewStage};

/// Greybrainer - layered film and series analysis
#[derive(Parser, Debug)]
#[command(name = "greybrainer")]
#[command(about = "Layered film and series analysis with Gemini or Groq", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a movie or series
    Analyze(AnalyzeArgs),

    /// Show the token usage log
    Usage {
        /// Empty the log
        #[arg(long)]
        clear: bool,

        /// Set the monthly token allowance
        #[arg(long)]
        monthly_budget: Option<u64>,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}

/// Arguments of `greybrainer analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Movie or series title
    pub title: String,

    /// Release stage: idea, trailer or released
    #[arg(long, default_value = "released")]
    pub stage: ReviewStage,

    /// Production budget for ROI commentary (implies --roi, skips the lookup)
    #[arg(long)]
    pub budget: Option<f64>,

    /// Look up the budget and add ROI commentary
    #[arg(long)]
    pub roi: bool,

    /// Generate the final report after the layers
    #[arg(long)]
    pub report: bool,

    /// Deep dive on the director found by the analysis
    #[arg(long)]
    pub director: bool,

    /// Provider to use instead of the configured default
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Keep the original title when alternatives are suggested
    #[arg(short, long)]
    pub yes: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable text
    Human,
    /// Final state as JSON
    Json,
}
