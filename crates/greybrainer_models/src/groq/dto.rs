//! OpenAI-compatible chat completion shapes.

use greybrainer_core::{GatewayResponse, GenerateOptions, ResponseFormat};
use greybrainer_error::GatewayErrorKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct ChatCompletionRequest {
    pub(super) model: String,
    pub(super) messages: Vec<ChatMessage>,
    pub(super) temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) response_format: Option<ResponseFormatSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ChatMessage {
    pub(super) role: String,
    #[serde(default)]
    pub(super) content: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ResponseFormatSpec {
    #[serde(rename = "type")]
    pub(super) kind: String,
}

impl ChatCompletionRequest {
    pub(super) fn new(model: &str, prompt: &str, options: &GenerateOptions) -> Self {
        let json = *options.response_format() == ResponseFormat::Json;
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt.to_string()),
            }],
            temperature: *options.temperature(),
            response_format: json.then(|| ResponseFormatSpec {
                kind: "json_object".to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatCompletionResponse {
    #[serde(default)]
    pub(super) choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Choice {
    pub(super) message: ChatMessage,
    #[serde(default)]
    pub(super) finish_reason: Option<String>,
}

impl ChatCompletionResponse {
    /// First choice's text; Groq returns no grounding sources.
    pub(super) fn into_gateway_response(self) -> Result<GatewayResponse, GatewayErrorKind> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or(GatewayErrorKind::EmptyResponse)?;

        match choice.message.content {
            Some(text) if !text.trim().is_empty() => Ok(GatewayResponse::from_text(text)),
            _ => {
                tracing::debug!(finish_reason = ?choice.finish_reason, "Groq choice had no content");
                Err(GatewayErrorKind::EmptyResponse)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_mode_sets_response_format() {
        let options = GenerateOptions::new("t").json().with_temperature(0.2);
        let value =
            serde_json::to_value(ChatCompletionRequest::new("llama", "hi", &options)).unwrap();

        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["model"], "llama");
    }

    #[test]
    fn text_mode_omits_response_format() {
        let options = GenerateOptions::new("t");
        let value =
            serde_json::to_value(ChatCompletionRequest::new("llama", "hi", &options)).unwrap();
        assert!(value.get("response_format").is_none());
    }

    #[test]
    fn first_choice_text_is_returned() {
        let body = r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "Hello"}, "finish_reason": "stop"}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let response = response.into_gateway_response().unwrap();
        assert_eq!(response.text, "Hello");
        assert!(response.citations.is_empty());
    }

    #[test]
    fn empty_choices_is_empty_response() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(
            response.into_gateway_response(),
            Err(GatewayErrorKind::EmptyResponse)
        );
    }
}
