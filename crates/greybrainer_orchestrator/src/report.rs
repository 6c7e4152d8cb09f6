//! Final report and post-release data.

use crate::{AnalysisOrchestrator, AnalysisPhase};
use greybrainer_core::{ActualPerformance, GenerateOptions, SocialSnippets, SummaryReport};
use greybrainer_error::{AnalysisError, AnalysisErrorKind, GreybrainerResult};
use greybrainer_extract::split_report;
use greybrainer_prompts::build_final_report_prompt;
use tracing::{info, instrument, warn};

impl AnalysisOrchestrator {
    /// Synthesize the settled layers into a [`SummaryReport`].
    ///
    /// Allowed once layers (and any financial follow-up) are done. Failed
    /// layers appear as placeholders in the prompt. On failure the run stays
    /// in `LayersDone` with `report_error` set, so calling again retries.
    #[instrument(skip(self))]
    pub async fn generate_report(&self) -> GreybrainerResult<SummaryReport> {
        let mut claimed = Err(AnalysisErrorKind::NoActiveRun);
        self.inner.state.send_if_modified(|state| {
            if state.input.is_none() {
                return false;
            }
            if !matches!(state.phase, AnalysisPhase::LayersDone | AnalysisPhase::Done) {
                claimed = Err(AnalysisErrorKind::LayersNotReady);
                return false;
            }
            state.phase = AnalysisPhase::ReportPending;
            state.report_error = None;
            claimed = Ok(state.clone());
            true
        });
        let snapshot = claimed.map_err(AnalysisError::new)?;
        let run_id = snapshot.run_id;
        let Some(input) = snapshot.input.as_ref() else {
            return Err(AnalysisError::new(AnalysisErrorKind::NoActiveRun).into());
        };

        let financials = snapshot
            .financials
            .as_ref()
            .and_then(|f| f.to_analysis_data());
        let prompt = build_final_report_prompt(
            input.title(),
            *input.stage(),
            &snapshot.layers,
            &snapshot.personnel,
            financials.as_ref(),
        );
        let options = GenerateOptions::new("final_report")
            .with_temperature(*self.inner.settings.report_temperature());

        info!(run_id, "Generating final report");
        match self.inner.gateway.generate(&prompt, &options).await {
            Ok(response) => {
                let sections = split_report(&response.text);
                let body_text = if sections.body.trim().is_empty() {
                    response.text.trim().to_string()
                } else {
                    sections.body
                };
                let report = SummaryReport {
                    body_text,
                    social_snippets: SocialSnippets {
                        twitter: sections.twitter,
                        linkedin: sections.linkedin,
                    },
                    overall_improvements: sections.improvements,
                    financials,
                    actual_performance: None,
                    is_fallback: false,
                };
                let written = report.clone();
                self.update_if_current(run_id, |state| {
                    state.report = Some(written);
                    state.phase = AnalysisPhase::Done;
                });
                Ok(report)
            }
            Err(e) => {
                warn!(run_id, error = %e, "Report generation failed");
                let message = e.user_message();
                self.update_if_current(run_id, |state| {
                    state.report_error = Some(message);
                    state.phase = AnalysisPhase::LayersDone;
                });
                Err(e)
            }
        }
    }

    /// Attach box office data to the generated report.
    #[instrument(skip(self, performance))]
    pub fn attach_actual_performance(
        &self,
        performance: ActualPerformance,
    ) -> GreybrainerResult<SummaryReport> {
        let mut updated = None;
        self.inner.state.send_if_modified(|state| match state.report.as_mut() {
            Some(report) => {
                report.actual_performance = Some(performance);
                updated = Some(report.clone());
                true
            }
            None => false,
        });
        updated.ok_or_else(|| AnalysisError::new(AnalysisErrorKind::NoReport).into())
    }
}
