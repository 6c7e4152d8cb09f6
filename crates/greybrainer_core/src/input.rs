//! User input for an analysis run.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Release stage of the title being reviewed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStage {
    /// Only an idea or announcement exists
    #[strum(serialize = "idea", serialize = "idea_announcement", to_string = "Idea Announcement")]
    IdeaAnnouncement,
    /// A trailer has been released
    #[strum(serialize = "trailer", to_string = "Trailer")]
    Trailer,
    /// The title has been released
    #[strum(serialize = "released", to_string = "Released")]
    Released,
}

/// Input captured from the user for one analysis run.
///
/// Immutable once a run starts; a confirmed title replaces the draft title
/// through [`AnalysisInput::with_title`].
///
/// # Examples
///
/// ```
/// use greybrainer_core::{AnalysisInput, ReviewStage};
///
/// let input = AnalysisInput::new("Dune", ReviewStage::Released)
///     .with_user_budget(Some(165_000_000.0))
///     .with_roi(true);
/// assert_eq!(input.title(), "Dune");
/// assert!(*input.enable_roi());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnalysisInput {
    /// Movie or series title
    title: String,
    /// Release stage
    stage: ReviewStage,
    /// Budget supplied by the user, if any
    user_budget: Option<f64>,
    /// Whether the budget/ROI follow-up should run
    enable_roi: bool,
}

impl AnalysisInput {
    /// Create input for a title at a given stage, ROI disabled.
    pub fn new(title: impl Into<String>, stage: ReviewStage) -> Self {
        Self {
            title: title.into(),
            stage,
            user_budget: None,
            enable_roi: false,
        }
    }

    /// Replace the title (used when a suggestion is confirmed).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the user supplied budget.
    pub fn with_user_budget(mut self, budget: Option<f64>) -> Self {
        self.user_budget = budget;
        self
    }

    /// Enable or disable the ROI follow-up.
    pub fn with_roi(mut self, enable: bool) -> Self {
        self.enable_roi = enable;
        self
    }
}
