//! Budget lookup followed by ROI commentary.

use crate::AnalysisOrchestrator;
use greybrainer_core::{AnalysisInput, FinancialPhase, GenerateOptions, LayerAnalysisResult};
use greybrainer_extract::{collapse_blank_lines, parse_financials};
use greybrainer_prompts::{build_financials_prompt, build_roi_prompt};
use tracing::{info, instrument, warn};

impl AnalysisOrchestrator {
    /// Resolve the budget, then ask for ROI commentary.
    ///
    /// The two calls are strictly sequential. A budget lookup only starts
    /// when none is loading, loaded or failed for this run, and ROI is
    /// skipped when no budget is known.
    #[instrument(skip(self, input, results))]
    pub(crate) async fn run_financials(
        &self,
        run_id: u64,
        input: &AnalysisInput,
        results: &[LayerAnalysisResult],
    ) {
        if self.claim_budget_fetch(run_id) {
            self.fetch_budget(run_id, input).await;
        }

        let Some(financials) = self.state().financials.filter(|_| self.is_current(run_id)) else {
            return;
        };
        if financials.roi_text.is_some() || financials.is_loading_roi() {
            return;
        }
        let Some(budget) = financials.effective_budget() else {
            info!(run_id, "No budget known, skipping ROI commentary");
            return;
        };

        let applied = self.update_if_current(run_id, |state| {
            if let Some(f) = state.financials.as_mut() {
                f.phase = FinancialPhase::LoadingRoi;
                f.roi_error = None;
            }
        });
        if !applied {
            return;
        }

        let settings = &self.inner.settings;
        let prompt = build_roi_prompt(
            input.title(),
            budget,
            financials.duration_estimate.as_deref(),
            financials.is_budget_estimated(),
            results,
        );
        let options = GenerateOptions::new("roi_analysis")
            .with_temperature(*settings.financial_temperature());

        let outcome = self.inner.gateway.generate(&prompt, &options).await;
        self.update_if_current(run_id, |state| {
            let Some(f) = state.financials.as_mut() else {
                return;
            };
            match outcome {
                Ok(response) => {
                    f.roi_text = Some(collapse_blank_lines(response.text.trim()));
                    f.phase = FinancialPhase::RoiLoaded;
                }
                Err(e) => {
                    warn!(run_id, error = %e, "ROI commentary failed");
                    f.roi_error = Some(e.user_message());
                    f.phase = FinancialPhase::RoiError;
                }
            }
        });
    }

    /// Move to `LoadingBudget` if a lookup is needed and none has started.
    fn claim_budget_fetch(&self, run_id: u64) -> bool {
        self.inner.state.send_if_modified(|state| {
            if state.run_id != run_id {
                return false;
            }
            match state.financials.as_mut() {
                Some(f) if f.user_budget.is_none() && !f.budget_fetch_started() => {
                    f.phase = FinancialPhase::LoadingBudget;
                    true
                }
                _ => false,
            }
        })
    }

    async fn fetch_budget(&self, run_id: u64, input: &AnalysisInput) {
        let settings = &self.inner.settings;
        let prompt = build_financials_prompt(input.title());
        let options = GenerateOptions::new("financials")
            .json()
            .with_use_search(*settings.use_search())
            .with_temperature(*settings.financial_temperature());

        let outcome = self
            .inner
            .gateway
            .generate(&prompt, &options)
            .await
            .map(|response| parse_financials(&response.text));

        self.update_if_current(run_id, |state| {
            let Some(f) = state.financials.as_mut() else {
                return;
            };
            match outcome {
                Ok(Some(fetched)) if fetched.budget.is_some_and(|b| b.is_finite() && b > 0.0) => {
                    info!(run_id, budget = ?fetched.budget, "Budget found");
                    f.fetched_budget = fetched.budget;
                    f.currency = fetched.currency;
                    f.duration_estimate = fetched.duration_estimate;
                    f.phase = FinancialPhase::BudgetLoaded;
                }
                Ok(_) => {
                    warn!(run_id, "Budget lookup returned no usable budget");
                    f.budget_error = Some("No budget information found".to_string());
                    f.phase = FinancialPhase::BudgetError;
                }
                Err(e) => {
                    warn!(run_id, error = %e, "Budget lookup failed");
                    f.budget_error = Some(e.user_message());
                    f.phase = FinancialPhase::BudgetError;
                }
            }
        });
    }
}
