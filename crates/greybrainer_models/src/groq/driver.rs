//! Groq LPU inference driver.

use super::dto::{ChatCompletionRequest, ChatCompletionResponse};
use crate::http::{api_key_from_env, check_status, parse_error, transport_error};
use async_trait::async_trait;
use greybrainer_core::{GatewayResponse, GenerateOptions};
use greybrainer_error::{GatewayError, GreybrainerResult};
use greybrainer_interface::LlmGateway;
use reqwest::Client;
use tracing::{debug, instrument};

/// Groq's OpenAI-compatible chat completions endpoint.
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model used when none is configured.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

const PROVIDER: &str = "groq";

/// Groq chat completions driver.
///
/// Groq has no search tool, so `use_search` is ignored and responses carry
/// no citations.
#[derive(Debug, Clone)]
pub struct GroqDriver {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqDriver {
    /// Creates a driver reading the key from `GROQ_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a credential error if the variable is unset or empty.
    #[instrument(skip_all)]
    pub fn new(model: impl Into<String>) -> GreybrainerResult<Self> {
        let api_key = api_key_from_env("GROQ_API_KEY", PROVIDER)?;
        Ok(Self::with_api_key(api_key, model))
    }

    /// Creates a driver with an explicit key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Points the driver at another chat completions URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl LlmGateway for GroqDriver {
    #[instrument(
        skip(self, prompt, options),
        fields(
            provider = PROVIDER,
            model = %self.model,
            operation = %options.operation(),
            prompt_chars = prompt.chars().count(),
        )
    )]
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> GreybrainerResult<GatewayResponse> {
        if *options.use_search() {
            debug!("Groq has no search tool, sending without grounding");
        }

        let request = ChatCompletionRequest::new(&self.model, prompt, options);
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(PROVIDER, response).await?;

        let body: ChatCompletionResponse = response.json().await.map_err(parse_error)?;
        let response = body.into_gateway_response().map_err(GatewayError::new)?;

        debug!(output_chars = response.text.chars().count(), "Groq response received");
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
