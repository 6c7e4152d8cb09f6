//! Gemini `generateContent` request and response shapes.

use greybrainer_core::{Citation, GatewayResponse, GenerateOptions, ResponseFormat};
use greybrainer_error::GatewayErrorKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentRequest {
    pub(super) contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) tools: Option<Vec<GeminiTool>>,
    pub(super) generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(super) struct Content {
    pub(super) role: String,
    pub(super) parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
pub(super) struct TextPart {
    pub(super) text: String,
}

#[derive(Debug, Serialize)]
pub(super) struct GeminiTool {
    pub(super) google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
pub(super) struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerationConfig {
    pub(super) temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) response_mime_type: Option<String>,
}

impl GenerateContentRequest {
    /// Single-turn request for `prompt`.
    ///
    /// JSON mime type cannot be combined with the search tool, so search
    /// wins and JSON is left to the prompt plus fence stripping.
    pub(super) fn new(prompt: &str, options: &GenerateOptions) -> Self {
        let json = *options.response_format() == ResponseFormat::Json;
        let search = *options.use_search();
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            tools: search.then(|| {
                vec![GeminiTool {
                    google_search: GoogleSearch {},
                }]
            }),
            generation_config: GenerationConfig {
                temperature: *options.temperature(),
                response_mime_type: (json && !search).then(|| "application/json".to_string()),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    pub(super) candidates: Vec<Candidate>,
    #[serde(default)]
    pub(super) prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PromptFeedback {
    #[serde(default)]
    pub(super) block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Candidate {
    #[serde(default)]
    pub(super) content: Option<CandidateContent>,
    #[serde(default)]
    pub(super) finish_reason: Option<String>,
    #[serde(default)]
    pub(super) grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub(super) parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponsePart {
    #[serde(default)]
    pub(super) text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GroundingMetadata {
    #[serde(default)]
    pub(super) grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GroundingChunk {
    #[serde(default)]
    pub(super) web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WebSource {
    #[serde(default)]
    pub(super) uri: Option<String>,
    #[serde(default)]
    pub(super) title: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate plus its web citations.
    pub(super) fn into_gateway_response(self) -> Result<GatewayResponse, GatewayErrorKind> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => GatewayErrorKind::ResponseParse(format!("Prompt blocked: {reason}")),
                None => GatewayErrorKind::EmptyResponse,
            });
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            tracing::debug!(finish_reason = ?candidate.finish_reason, "Gemini candidate had no text");
            return Err(GatewayErrorKind::EmptyResponse);
        }

        let mut citations: Vec<Citation> = Vec::new();
        let chunks = candidate
            .grounding_metadata
            .map(|m| m.grounding_chunks)
            .unwrap_or_default();
        let sources: Vec<Citation> = chunks
            .into_iter()
            .filter_map(|chunk| chunk.web)
            .filter_map(|web| {
                let uri = web.uri?;
                let title = web.title.unwrap_or_else(|| uri.clone());
                Some(Citation::new(uri, title))
            })
            .collect();
        greybrainer_core::merge_citations(&mut citations, &sources);

        Ok(GatewayResponse::with_citations(text, citations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_has_tool_and_no_mime_type() {
        let options = GenerateOptions::new("t").with_use_search(true).json();
        let value = serde_json::to_value(GenerateContentRequest::new("hi", &options)).unwrap();

        assert_eq!(value["tools"][0]["google_search"], serde_json::json!({}));
        assert!(value["generationConfig"].get("responseMimeType").is_none());
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn json_request_without_search_sets_mime_type() {
        let options = GenerateOptions::new("t").json();
        let value = serde_json::to_value(GenerateContentRequest::new("hi", &options)).unwrap();

        assert!(value.get("tools").is_none());
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn response_text_and_citations_are_collected() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Dune was directed "}, {"text": "by Denis Villeneuve."}], "role": "model"},
                "finishReason": "STOP",
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://a.example", "title": "A"}},
                        {"web": {"uri": "https://a.example", "title": "A again"}},
                        {"web": {"uri": "https://b.example"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let response = response.into_gateway_response().unwrap();

        assert_eq!(response.text, "Dune was directed by Denis Villeneuve.");
        assert_eq!(
            response.citations,
            vec![
                Citation::new("https://a.example", "A"),
                Citation::new("https://b.example", "https://b.example"),
            ]
        );
    }

    #[test]
    fn no_candidates_is_empty_response() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(
            response.into_gateway_response(),
            Err(GatewayErrorKind::EmptyResponse)
        );
    }

    #[test]
    fn blocked_prompt_reports_reason() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            response.into_gateway_response(),
            Err(GatewayErrorKind::ResponseParse(msg)) if msg.contains("SAFETY")
        ));
    }
}
