//! Greybrainer - layered film and series analysis.
//!
//! Greybrainer asks a language model to evaluate a title through three
//! lenses (story, conceptualization, performance), extracts scores,
//! personnel and story shapes from the replies, and synthesizes a final
//! report with social media snippets. An opt-in follow-up looks up the
//! budget and adds ROI commentary.
//!
//! # Quick Start
//!
//! ```no_run
//! use greybrainer::{AnalysisInput, GreybrainerConfig, ReviewStage, Session};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Session::open(GreybrainerConfig::load()?)?;
//! let orchestrator = session.orchestrator(None)?;
//!
//! orchestrator
//!     .start_analysis(AnalysisInput::new("Dune", ReviewStage::Released))
//!     .await?;
//! let report = orchestrator.generate_report().await?;
//! println!("{}", report.body_text);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `greybrainer_error` - Error types
//! - `greybrainer_core` - Data model
//! - `greybrainer_interface` - Gateway, usage sink and config store traits
//! - `greybrainer_extract` - Response parsers
//! - `greybrainer_prompts` - Prompt builders
//! - `greybrainer_models` - Gemini and Groq gateways
//! - `greybrainer_storage` - Config stores and the usage ledger
//! - `greybrainer_orchestrator` - Analysis state machine
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod session;

pub use config::{GreybrainerConfig, ModelSection, ProviderSection, StorageSection};
pub use session::{Session, build_gateway};

// Re-export error types
pub use greybrainer_error::{
    AnalysisError, AnalysisErrorKind, ConfigError, GatewayError, GatewayErrorKind,
    GreybrainerError, GreybrainerErrorKind, GreybrainerResult, JsonError, StorageError,
    StorageErrorKind,
};

// Re-export core types
pub use greybrainer_core::{
    ActualPerformance, AnalysisInput, Citation, FinancialAnalysisData, FinancialPhase,
    FinancialState, GatewayResponse, GenerateOptions, ImprovementItems, LayerAnalysisResult,
    LayerDefinition, LayerId, MAX_SCORE, PersonnelAggregate, PersonnelAnalysis, PersonnelType,
    PlotPoint, PlotShape, ResponseFormat, ReviewStage, SocialSnippets, SummaryReport,
    TokenBudgetConfig, UsageLogEntry, estimate_tokens, init_tracing,
};

// Re-export traits
pub use greybrainer_interface::{ConfigStore, LlmGateway, NoopUsageSink, UsageSink};

// Re-export parsers and prompt builders
pub use greybrainer_extract as extract;
pub use greybrainer_prompts as prompts;

// Re-export gateways
pub use greybrainer_models::{GeminiClient, GroqDriver, MeteredGateway, Provider};

// Re-export storage
pub use greybrainer_storage::{
    BudgetStatus, FileConfigStore, InMemoryConfigStore, UsageLedger, UsageSummary,
};

// Re-export orchestration
pub use greybrainer_orchestrator::{
    AnalysisOrchestrator, AnalysisPhase, AnalysisSettings, AnalysisState,
};
