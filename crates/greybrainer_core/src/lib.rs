//! Core data types for the Greybrainer film analysis pipeline.
//!
//! This crate provides the domain model shared by the prompt builders, text
//! extractors, model gateways and the analysis orchestrator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod budget;
mod citation;
mod financial;
mod input;
mod layer;
mod personnel;
mod report;
mod request;
mod telemetry;
mod usage;

pub use analysis::{ImprovementItems, LayerAnalysisResult, PlotPoint, PlotShape};
pub use budget::{TokenBudgetConfig, TokenBudgetConfigBuilder};
pub use citation::{Citation, merge_citations};
pub use financial::{FetchedFinancials, FinancialAnalysisData, FinancialPhase, FinancialState};
pub use input::{AnalysisInput, ReviewStage};
pub use layer::{LayerDefinition, LayerId};
pub use personnel::{PersonnelAggregate, PersonnelAnalysis, PersonnelType};
pub use report::{ActualPerformance, SocialSnippets, SummaryReport};
pub use request::{GatewayResponse, GenerateOptions, ResponseFormat};
pub use telemetry::init_tracing;
pub use usage::{UsageLogEntry, estimate_tokens};

/// Upper bound of every suggested score.
pub const MAX_SCORE: f64 = 10.0;
