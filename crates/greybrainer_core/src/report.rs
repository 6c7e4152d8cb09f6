//! Final cross-layer report.

use crate::{FinancialAnalysisData, ImprovementItems};
use serde::{Deserialize, Serialize};

/// Short social media posts cut out of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSnippets {
    /// Twitter/X post
    pub twitter: Option<String>,
    /// LinkedIn post
    pub linkedin: Option<String>,
}

/// Box office data entered after release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActualPerformance {
    /// Gross earnings
    pub box_office_gross: Option<f64>,
    /// Currency of the gross
    pub currency: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Synthesized report, created once per run.
///
/// Only `actual_performance` may change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Report prose
    pub body_text: String,
    /// Social posts
    pub social_snippets: SocialSnippets,
    /// Cross-layer improvement opportunities
    pub overall_improvements: Option<ImprovementItems>,
    /// Financial context, when ROI was enabled
    pub financials: Option<FinancialAnalysisData>,
    /// Post-hoc performance data
    pub actual_performance: Option<ActualPerformance>,
    /// Placeholder substituted for a provider failure
    pub is_fallback: bool,
}
