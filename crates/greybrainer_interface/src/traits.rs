//! Trait definitions for model backends and persistence.

use async_trait::async_trait;
use greybrainer_core::{GatewayResponse, GenerateOptions};
use greybrainer_error::GreybrainerResult;

/// Core trait that every model backend implements.
///
/// One call is one attempt: implementations never retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a single prompt and return the text plus grounding citations.
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> GreybrainerResult<GatewayResponse>;

    /// Provider name (e.g., "gemini", "groq").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Receives one record per successful gateway call.
///
/// Recording must not fail the call it describes, so errors stay inside
/// the implementation.
pub trait UsageSink: Send + Sync {
    /// Record a completed call.
    fn record(&self, operation: &str, input_chars: usize, output_chars: usize);
}

/// Sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUsageSink;

impl UsageSink for NoopUsageSink {
    fn record(&self, _operation: &str, _input_chars: usize, _output_chars: usize) {}
}

/// String key-value store for persisted settings.
pub trait ConfigStore: Send + Sync {
    /// Read a value, `None` when the key was never written.
    fn get(&self, key: &str) -> GreybrainerResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> GreybrainerResult<()>;

    /// Remove a value. Missing keys are not an error.
    fn remove(&self, key: &str) -> GreybrainerResult<()>;
}
