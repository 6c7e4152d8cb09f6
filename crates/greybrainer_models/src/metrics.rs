//! Metrics for model gateway calls.
//!
//! OpenTelemetry instruments on the global meter. Without an installed
//! meter provider they are no-ops.

use greybrainer_error::{GatewayErrorKind, GreybrainerError, GreybrainerErrorKind};
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Metrics for gateway interactions, labeled by provider and model.
#[derive(Clone)]
pub struct LlmMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Completed gateway calls
    pub requests: Counter<u64>,
    /// Failed gateway calls
    pub errors: Counter<u64>,
    /// Call duration in seconds
    pub duration: Histogram<f64>,
    /// Prompt characters sent
    pub input_chars: Counter<u64>,
    /// Response characters received
    pub output_chars: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("greybrainer_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Completed gateway calls")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed gateway calls")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("seconds")
                .with_description("Gateway call duration")
                .build(),
            input_chars: meter
                .u64_counter("llm.chars.input")
                .with_description("Prompt characters sent")
                .build(),
            output_chars: meter
                .u64_counter("llm.chars.output")
                .with_description("Response characters received")
                .build(),
        }
    }

    /// Get the global instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful call.
    pub fn record_request(
        &self,
        provider: &str,
        model: &str,
        duration_secs: f64,
        input_chars: usize,
        output_chars: usize,
    ) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
        self.input_chars.add(input_chars as u64, labels);
        self.output_chars.add(output_chars as u64, labels);
    }

    /// Record a failed call.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }
}

impl Default for LlmMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify an error for metrics labeling.
///
/// Returns one of: "auth", "rate_limit", "http", "network", "invalid_response", "other"
pub fn classify_error(error: &GreybrainerError) -> &'static str {
    match error.kind() {
        GreybrainerErrorKind::Gateway(e) => match &e.kind {
            GatewayErrorKind::MissingApiKey(_) | GatewayErrorKind::InvalidCredential { .. } => {
                "auth"
            }
            GatewayErrorKind::RateLimited(_) => "rate_limit",
            GatewayErrorKind::Http { .. } => "http",
            GatewayErrorKind::Transport(_) => "network",
            GatewayErrorKind::ResponseParse(_) | GatewayErrorKind::EmptyResponse => {
                "invalid_response"
            }
        },
        _ => "other",
    }
}
