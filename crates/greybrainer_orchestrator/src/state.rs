//! Observable run state.

use greybrainer_core::{
    AnalysisInput, FinancialState, LayerAnalysisResult, LayerId, PersonnelAggregate, SummaryReport,
};
use serde::Serialize;

/// Where the current run stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum AnalysisPhase {
    /// No run
    #[default]
    Idle,
    /// Looking up title suggestions
    ResolvingTitle,
    /// Suggestions offered, waiting for the user
    AwaitingUserChoice,
    /// Layer calls in flight
    AnalyzingLayers,
    /// Layers settled, report can be requested
    LayersDone,
    /// Budget and ROI follow-up in flight
    FinancialsPending,
    /// Final report in flight
    ReportPending,
    /// Report available
    Done,
}

/// Everything a renderer needs about the current run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisState {
    /// Identity of the run this state belongs to
    pub run_id: u64,
    /// Current step
    pub phase: AnalysisPhase,
    /// Draft or confirmed input
    pub input: Option<AnalysisInput>,
    /// Title suggestions awaiting a choice
    pub suggestions: Vec<String>,
    /// One result per layer, in layer order
    pub layers: Vec<LayerAnalysisResult>,
    /// Personnel folded over the settled layers
    pub personnel: PersonnelAggregate,
    /// Present when ROI is enabled
    pub financials: Option<FinancialState>,
    /// Final report
    pub report: Option<SummaryReport>,
    /// Last report generation failure
    pub report_error: Option<String>,
    /// Run-level message (validation, credentials)
    pub error: Option<String>,
}

impl AnalysisState {
    /// Result for one layer.
    pub fn layer(&self, id: LayerId) -> Option<&LayerAnalysisResult> {
        self.layers.iter().find(|r| r.layer_id == id)
    }

    pub(crate) fn layer_mut(&mut self, id: LayerId) -> Option<&mut LayerAnalysisResult> {
        self.layers.iter_mut().find(|r| r.layer_id == id)
    }

    /// True once every layer call has resolved or failed.
    pub fn layers_settled(&self) -> bool {
        !self.layers.is_empty() && self.layers.iter().all(LayerAnalysisResult::is_settled)
    }

    /// Title of the current input.
    pub fn title(&self) -> Option<&str> {
        self.input.as_ref().map(|input| input.title().as_str())
    }
}
