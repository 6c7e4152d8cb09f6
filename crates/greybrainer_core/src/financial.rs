//! Budget and ROI follow-up state.

use serde::{Deserialize, Serialize};

/// Progress of the financial follow-up.
///
/// Moves idle → loading budget → (loaded | error) → loading ROI → (loaded | error).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum FinancialPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Budget lookup in flight
    LoadingBudget,
    /// Budget known
    BudgetLoaded,
    /// Budget lookup failed
    BudgetError,
    /// ROI commentary in flight
    LoadingRoi,
    /// ROI commentary available
    RoiLoaded,
    /// ROI commentary failed
    RoiError,
}

/// Mutable financial state of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialState {
    /// Budget supplied by the user
    pub user_budget: Option<f64>,
    /// Budget found by the model
    pub fetched_budget: Option<f64>,
    /// Currency of the fetched budget
    pub currency: Option<String>,
    /// Estimated runtime or production duration
    pub duration_estimate: Option<String>,
    /// ROI commentary
    pub roi_text: Option<String>,
    /// Current step
    pub phase: FinancialPhase,
    /// Budget lookup failure
    pub budget_error: Option<String>,
    /// ROI commentary failure
    pub roi_error: Option<String>,
    /// Budget is a placeholder
    pub budget_is_fallback: bool,
    /// ROI text is a placeholder
    pub roi_is_fallback: bool,
}

impl FinancialState {
    /// State seeded with the user budget, if any.
    pub fn with_user_budget(user_budget: Option<f64>) -> Self {
        Self {
            user_budget,
            ..Self::default()
        }
    }

    /// True while the budget lookup is in flight.
    pub fn is_loading_budget(&self) -> bool {
        self.phase == FinancialPhase::LoadingBudget
    }

    /// True while ROI commentary is in flight.
    pub fn is_loading_roi(&self) -> bool {
        self.phase == FinancialPhase::LoadingRoi
    }

    /// True when a budget lookup is loading, finished, or failed.
    ///
    /// Guards against issuing a second concurrent lookup.
    pub fn budget_fetch_started(&self) -> bool {
        self.is_loading_budget() || self.fetched_budget.is_some() || self.budget_error.is_some()
    }

    /// User budget if present, otherwise the fetched one.
    pub fn effective_budget(&self) -> Option<f64> {
        self.user_budget.or(self.fetched_budget)
    }

    /// True when the effective budget came from the model.
    pub fn is_budget_estimated(&self) -> bool {
        self.user_budget.is_none() && self.fetched_budget.is_some()
    }

    /// Snapshot attached to the summary report.
    pub fn to_analysis_data(&self) -> Option<FinancialAnalysisData> {
        let budget = self.effective_budget();
        if budget.is_none() && self.roi_text.is_none() {
            return None;
        }
        Some(FinancialAnalysisData {
            budget,
            currency: self.currency.clone(),
            duration_estimate: self.duration_estimate.clone(),
            is_budget_estimated: self.is_budget_estimated(),
            roi_text: self.roi_text.clone(),
        })
    }
}

/// Financial data embedded in a summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAnalysisData {
    /// Budget used for ROI commentary
    pub budget: Option<f64>,
    /// Budget currency
    pub currency: Option<String>,
    /// Duration estimate
    pub duration_estimate: Option<String>,
    /// Budget was estimated by the model
    pub is_budget_estimated: bool,
    /// ROI commentary
    pub roi_text: Option<String>,
}

/// JSON payload returned by the budget lookup prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedFinancials {
    /// Production budget
    #[serde(default)]
    pub budget: Option<f64>,
    /// ISO currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Duration estimate
    #[serde(default)]
    pub duration_estimate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_budget_takes_precedence() {
        let mut state = FinancialState::with_user_budget(Some(10.0));
        state.fetched_budget = Some(99.0);
        assert_eq!(state.effective_budget(), Some(10.0));
        assert!(!state.is_budget_estimated());
    }

    #[test]
    fn fetch_guard_covers_loading_loaded_and_error() {
        let mut state = FinancialState::default();
        assert!(!state.budget_fetch_started());

        state.phase = FinancialPhase::LoadingBudget;
        assert!(state.budget_fetch_started());

        let mut errored = FinancialState::default();
        errored.budget_error = Some("no data".to_string());
        assert!(errored.budget_fetch_started());
    }

    #[test]
    fn no_analysis_data_without_budget_or_roi() {
        assert!(FinancialState::default().to_analysis_data().is_none());
    }
}
