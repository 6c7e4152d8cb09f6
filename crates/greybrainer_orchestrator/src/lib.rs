//! Analysis workflow for Greybrainer.
//!
//! [`AnalysisOrchestrator`] drives one run at a time through
//! `Idle → ResolvingTitle → (AwaitingUserChoice | AnalyzingLayers) → LayersDone
//! → [FinancialsPending] → ReportPending → Done`. Layer analyses fan out
//! concurrently and settle independently; failures are recorded on the
//! affected entity and never cascade.
//!
//! State lives in a `tokio::sync::watch` channel: read it with
//! [`AnalysisOrchestrator::state`] or follow changes with
//! [`AnalysisOrchestrator::subscribe`].
//!
//! Starting a new run supersedes the old one. Late results from a
//! superseded run are dropped on write-back by comparing run ids.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod financials;
mod layers;
mod orchestrator;
mod personnel;
mod report;
mod settings;
mod state;

pub use orchestrator::AnalysisOrchestrator;
pub use settings::{AnalysisSettings, AnalysisSettingsBuilder};
pub use state::{AnalysisPhase, AnalysisState};
