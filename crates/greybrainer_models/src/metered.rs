//! Usage-recording gateway wrapper.

use crate::metrics::{LlmMetrics, classify_error};
use async_trait::async_trait;
use greybrainer_core::{GatewayResponse, GenerateOptions};
use greybrainer_error::GreybrainerResult;
use greybrainer_interface::{LlmGateway, UsageSink};
use std::sync::Arc;
use std::time::Instant;
use tracing::{instrument, warn};

/// Wraps a gateway and reports every successful call to a usage sink.
///
/// Failed calls consumed nothing and are not recorded in the sink; they only
/// bump the error metric.
#[derive(Clone)]
pub struct MeteredGateway<G> {
    inner: G,
    sink: Arc<dyn UsageSink>,
}

impl<G: LlmGateway> MeteredGateway<G> {
    /// Wrap `inner`, recording into `sink`.
    pub fn new(inner: G, sink: Arc<dyn UsageSink>) -> Self {
        Self { inner, sink }
    }

    /// The wrapped gateway.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: LlmGateway> LlmGateway for MeteredGateway<G> {
    #[instrument(
        name = "metered_generate",
        skip(self, prompt, options),
        fields(operation = %options.operation())
    )]
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> GreybrainerResult<GatewayResponse> {
        let started = Instant::now();
        let metrics = LlmMetrics::get();
        let provider = self.inner.provider_name();
        let model = self.inner.model_name();

        match self.inner.generate(prompt, options).await {
            Ok(response) => {
                let input_chars = prompt.chars().count();
                let output_chars = response.text.chars().count();
                self.sink.record(options.operation(), input_chars, output_chars);
                metrics.record_request(
                    provider,
                    model,
                    started.elapsed().as_secs_f64(),
                    input_chars,
                    output_chars,
                );
                Ok(response)
            }
            Err(e) => {
                warn!(provider, model, error = %e, "Gateway call failed");
                metrics.record_error(provider, model, classify_error(&e));
                Err(e)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
