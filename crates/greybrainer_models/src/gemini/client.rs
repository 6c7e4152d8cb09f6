//! Gemini API client.

use super::dto::{GenerateContentRequest, GenerateContentResponse};
use crate::http::{api_key_from_env, check_status, parse_error, transport_error};
use async_trait::async_trait;
use greybrainer_core::{GatewayResponse, GenerateOptions};
use greybrainer_error::{GatewayError, GreybrainerResult};
use greybrainer_interface::LlmGateway;
use reqwest::Client;
use tracing::{debug, instrument};

/// Public Gemini REST endpoint.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const PROVIDER: &str = "gemini";

/// Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Creates a client reading the key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a credential error if the variable is unset or empty.
    #[instrument(skip_all)]
    pub fn new(model: impl Into<String>) -> GreybrainerResult<Self> {
        let api_key = api_key_from_env("GEMINI_API_KEY", PROVIDER)?;
        Ok(Self::with_api_key(api_key, model))
    }

    /// Creates a client with an explicit key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Points the client at another endpoint (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmGateway for GeminiClient {
    #[instrument(
        skip(self, prompt, options),
        fields(
            provider = PROVIDER,
            model = %self.model,
            operation = %options.operation(),
            use_search = *options.use_search(),
            prompt_chars = prompt.chars().count(),
        )
    )]
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> GreybrainerResult<GatewayResponse> {
        let request = GenerateContentRequest::new(prompt, options);
        let url = self.endpoint();
        debug!(url = %url, "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(PROVIDER, response).await?;

        let body: GenerateContentResponse = response.json().await.map_err(parse_error)?;
        let response = body.into_gateway_response().map_err(GatewayError::new)?;

        debug!(
            output_chars = response.text.chars().count(),
            citations = response.citations.len(),
            "Gemini response received"
        );
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
