//! Layer fan-out and join.

use crate::{AnalysisOrchestrator, AnalysisPhase};
use futures::future::join_all;
use greybrainer_core::{
    AnalysisInput, FinancialState, GenerateOptions, LayerAnalysisResult, LayerId,
    PersonnelAggregate,
};
use greybrainer_extract::parse_layer_response;
use greybrainer_prompts::build_layer_prompt;
use tracing::{info, instrument, warn};

impl AnalysisOrchestrator {
    /// Analyze all layers concurrently, fold personnel, then run the
    /// financial follow-up when ROI is enabled.
    ///
    /// Every layer settles before anything downstream runs. A failed layer
    /// is recorded on its own result and never cancels its siblings.
    #[instrument(skip(self, input), fields(title = %input.title()))]
    pub(crate) async fn run_analysis(&self, run_id: u64, input: AnalysisInput) {
        let applied = self.update_if_current(run_id, |state| {
            state.phase = AnalysisPhase::AnalyzingLayers;
            state.layers = LayerId::ALL.map(LayerAnalysisResult::loading).to_vec();
            state.personnel = PersonnelAggregate::default();
            state.financials = (*input.enable_roi())
                .then(|| FinancialState::with_user_budget(*input.user_budget()));
            state.report = None;
            state.report_error = None;
            state.error = None;
        });
        if !applied {
            return;
        }
        info!(run_id, "Analyzing layers");

        let results = join_all(
            LayerId::ALL
                .into_iter()
                .map(|id| self.analyze_layer(run_id, &input, id)),
        )
        .await;

        let personnel = PersonnelAggregate::fold(&results);
        let applied = self.update_if_current(run_id, |state| {
            state.personnel = personnel;
            state.phase = if *input.enable_roi() {
                AnalysisPhase::FinancialsPending
            } else {
                AnalysisPhase::LayersDone
            };
        });
        if !applied {
            return;
        }

        let failed = results.iter().filter(|r| r.error.is_some()).count();
        info!(run_id, failed, "Layer analyses settled");

        if *input.enable_roi() {
            self.run_financials(run_id, &input, &results).await;
            self.update_if_current(run_id, |state| state.phase = AnalysisPhase::LayersDone);
        }
    }

    /// One layer call. The settled result is written back immediately so a
    /// renderer sees layers complete one by one.
    #[instrument(skip(self, input), fields(layer = %layer_id))]
    async fn analyze_layer(
        &self,
        run_id: u64,
        input: &AnalysisInput,
        layer_id: LayerId,
    ) -> LayerAnalysisResult {
        let settings = &self.inner.settings;
        let prompt = build_layer_prompt(input.title(), *input.stage(), &layer_id.definition());
        let options = GenerateOptions::new(format!("layer_{layer_id}"))
            .with_use_search(*settings.use_search())
            .with_temperature(*settings.layer_temperature());

        let mut credential_message = None;
        let result = match self.inner.gateway.generate(&prompt, &options).await {
            Ok(response) => parse_layer_response(layer_id, &response),
            Err(e) => {
                warn!(run_id, error = %e, "Layer analysis failed");
                let message = e.user_message();
                if e.is_credential_error() {
                    credential_message = Some(message.clone());
                }
                LayerAnalysisResult::failed(layer_id, message)
            }
        };

        let written = result.clone();
        self.update_if_current(run_id, move |state| {
            if let Some(slot) = state.layer_mut(layer_id) {
                *slot = written;
            }
            if credential_message.is_some() {
                state.error = credential_message;
            }
        });
        result
    }
}
