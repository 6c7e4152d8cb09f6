//! Per-layer analysis results and the story-shape model.

use crate::{Citation, LayerId};
use serde::{Deserialize, Serialize};

/// Improvement suggestions, either parsed into a list or kept verbatim.
///
/// Mixed bullet formatting falls back to [`ImprovementItems::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImprovementItems {
    /// Uniformly bulleted or numbered lines, markers stripped.
    List(Vec<String>),
    /// The raw block.
    Text(String),
}

impl ImprovementItems {
    /// True when the block carries no content.
    pub fn is_empty(&self) -> bool {
        match self {
            ImprovementItems::List(items) => items.is_empty(),
            ImprovementItems::Text(text) => text.trim().is_empty(),
        }
    }
}

/// One sample of a story shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Normalized narrative time in [0, 1]
    pub time: f64,
    /// Protagonist fortune in [-1, 1]
    pub fortune: f64,
    /// What happens at this point
    pub description: String,
}

/// Coarse narrative arc classification with its sample points.
///
/// Points are ordered by non-decreasing `time` and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotShape {
    /// Shape name, e.g. "Man in Hole"
    pub shape_name: String,
    /// Why the story fits the shape
    pub justification: String,
    /// Ordered sample points
    pub points: Vec<PlotPoint>,
}

/// Outcome of analyzing a single layer.
///
/// Created loading when a run starts and written exactly once when its
/// gateway call settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerAnalysisResult {
    /// Which layer this is
    pub layer_id: LayerId,
    /// Gateway call still in flight
    pub is_loading: bool,
    /// Unmodified model output
    pub raw_text: Option<String>,
    /// Model output with structured fields stripped
    pub cleaned_text: Option<String>,
    /// Director named in the response
    pub director_found: Option<String>,
    /// Main cast named in the response
    pub cast_found: Option<Vec<String>>,
    /// Grounding sources
    pub citations: Vec<Citation>,
    /// Score in [0, MAX_SCORE]
    pub suggested_score: Option<f64>,
    /// Potential enhancements
    pub improvement_items: Option<ImprovementItems>,
    /// Story shape (Story layer only)
    pub plot_shape: Option<PlotShape>,
    /// Placeholder substituted for a provider failure
    pub is_fallback: bool,
    /// Failure message for this layer
    pub error: Option<String>,
}

impl LayerAnalysisResult {
    /// Empty result for a layer whose call is in flight.
    pub fn loading(layer_id: LayerId) -> Self {
        Self {
            layer_id,
            is_loading: true,
            raw_text: None,
            cleaned_text: None,
            director_found: None,
            cast_found: None,
            citations: Vec::new(),
            suggested_score: None,
            improvement_items: None,
            plot_shape: None,
            is_fallback: false,
            error: None,
        }
    }

    /// Settled result for a layer whose call failed.
    pub fn failed(layer_id: LayerId, error: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(error.into()),
            ..Self::loading(layer_id)
        }
    }

    /// True once the call has resolved or failed.
    pub fn is_settled(&self) -> bool {
        !self.is_loading
    }

    /// Text used when this layer feeds the final report.
    pub fn report_text(&self) -> Option<&str> {
        self.cleaned_text
            .as_deref()
            .or(self.raw_text.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}
