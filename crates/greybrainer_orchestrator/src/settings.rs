//! Per-call tuning for the orchestrator.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Sampling and tool settings applied to each kind of call.
///
/// # Examples
///
/// ```
/// use greybrainer_orchestrator::AnalysisSettings;
///
/// let settings = AnalysisSettings::builder()
///     .use_search(false)
///     .build()
///     .unwrap();
/// assert!(!*settings.use_search());
/// assert_eq!(*settings.layer_temperature(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct AnalysisSettings {
    /// Temperature for layer analyses and personnel deep dives
    layer_temperature: f32,
    /// Temperature for the final report
    report_temperature: f32,
    /// Temperature for budget lookup and ROI commentary
    financial_temperature: f32,
    /// Temperature for title suggestions
    suggestion_temperature: f32,
    /// Ground layer, financial and personnel calls in web search
    use_search: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            layer_temperature: 0.7,
            report_temperature: 0.6,
            financial_temperature: 0.3,
            suggestion_temperature: 0.2,
            use_search: true,
        }
    }
}

impl AnalysisSettings {
    /// Creates a new settings builder.
    pub fn builder() -> AnalysisSettingsBuilder {
        AnalysisSettingsBuilder::default()
    }
}
