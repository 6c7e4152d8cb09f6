//! Options and responses for a single gateway call.

use crate::Citation;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Expected shape of the model output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Free text
    #[default]
    Text,
    /// A JSON document, possibly fenced
    Json,
}

/// Per-call options.
///
/// `operation` labels the call in the usage ledger.
///
/// # Examples
///
/// ```
/// use greybrainer_core::{GenerateOptions, ResponseFormat};
///
/// let options = GenerateOptions::new("layer_story")
///     .with_use_search(true)
///     .with_temperature(0.5);
/// assert!(*options.use_search());
/// assert_eq!(*options.response_format(), ResponseFormat::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct GenerateOptions {
    /// Usage ledger label
    #[setters(into)]
    operation: String,
    /// Enable the provider's web search tool
    use_search: bool,
    /// Text or JSON output
    response_format: ResponseFormat,
    /// Sampling temperature
    temperature: f32,
}

impl GenerateOptions {
    /// Text-mode options without search at temperature 0.7.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            use_search: false,
            response_format: ResponseFormat::Text,
            temperature: 0.7,
        }
    }

    /// Switch to JSON mode.
    pub fn json(self) -> Self {
        self.with_response_format(ResponseFormat::Json)
    }
}

/// Text returned by a gateway plus any grounding sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    /// Response text
    pub text: String,
    /// Grounding sources
    pub citations: Vec<Citation>,
}

impl GatewayResponse {
    /// Response without citations.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }

    /// Response with citations.
    pub fn with_citations(text: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            text: text.into(),
            citations,
        }
    }
}
