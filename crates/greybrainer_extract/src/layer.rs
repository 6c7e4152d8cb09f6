//! Assemble a [`LayerAnalysisResult`] from a gateway response.

use crate::{
    clean_layer_text, parse_cast, parse_director, parse_improvements, parse_plot_shape, parse_score,
};
use greybrainer_core::{GatewayResponse, LayerAnalysisResult, LayerId};

/// Parse every structured field out of one layer response.
///
/// The story shape is only looked for in the Story layer.
#[tracing::instrument(skip(response), fields(response_len = response.text.len()))]
pub fn parse_layer_response(layer_id: LayerId, response: &GatewayResponse) -> LayerAnalysisResult {
    let raw = response.text.as_str();
    let plot_shape = match layer_id {
        LayerId::Story => parse_plot_shape(raw),
        LayerId::Conceptualization | LayerId::Performance => None,
    };

    let result = LayerAnalysisResult {
        layer_id,
        is_loading: false,
        raw_text: Some(raw.to_string()),
        cleaned_text: Some(clean_layer_text(raw)),
        director_found: parse_director(raw),
        cast_found: parse_cast(raw),
        citations: response.citations.clone(),
        suggested_score: parse_score(raw),
        improvement_items: parse_improvements(raw),
        plot_shape,
        is_fallback: false,
        error: None,
    };

    tracing::debug!(
        score = ?result.suggested_score,
        director = ?result.director_found,
        has_plot_shape = result.plot_shape.is_some(),
        citations = result.citations.len(),
        "Parsed layer response"
    );

    result
}
