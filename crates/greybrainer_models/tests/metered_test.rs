use async_trait::async_trait;
use greybrainer_core::{GatewayResponse, GenerateOptions};
use greybrainer_error::{GatewayError, GatewayErrorKind, GreybrainerResult};
use greybrainer_interface::{LlmGateway, UsageSink};
use greybrainer_models::MeteredGateway;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Gateway replying with fixed text, or failing when `text` is `None`.
struct FixedGateway {
    text: Option<String>,
    calls: AtomicUsize,
}

impl FixedGateway {
    fn ok(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            text: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LlmGateway for FixedGateway {
    async fn generate(
        &self,
        _prompt: &str,
        _options: &GenerateOptions,
    ) -> GreybrainerResult<GatewayResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.text {
            Some(text) => Ok(GatewayResponse::from_text(text.clone())),
            None => Err(GatewayError::new(GatewayErrorKind::Transport("offline".into())).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "fixed-1"
    }
}

#[derive(Default)]
struct RecordingSink {
    records: Mutex<Vec<(String, usize, usize)>>,
}

impl UsageSink for RecordingSink {
    fn record(&self, operation: &str, input_chars: usize, output_chars: usize) {
        self.records
            .lock()
            .unwrap()
            .push((operation.to_string(), input_chars, output_chars));
    }
}

#[tokio::test]
async fn successful_call_is_recorded_with_char_counts() -> anyhow::Result<()> {
    let sink = Arc::new(RecordingSink::default());
    let gateway = MeteredGateway::new(FixedGateway::ok("héllo"), sink.clone());

    let response = gateway
        .generate("prompt", &GenerateOptions::new("layer_story"))
        .await?;

    assert_eq!(response.text, "héllo");
    assert_eq!(
        *sink.records.lock().unwrap(),
        vec![("layer_story".to_string(), 6, 5)]
    );
    assert_eq!(gateway.provider_name(), "fixed");
    Ok(())
}

#[tokio::test]
async fn failed_call_is_not_recorded() {
    let sink = Arc::new(RecordingSink::default());
    let gateway = MeteredGateway::new(FixedGateway::failing(), sink.clone());

    let result = gateway.generate("prompt", &GenerateOptions::new("x")).await;

    assert!(result.is_err());
    assert!(sink.records.lock().unwrap().is_empty());
    assert_eq!(gateway.inner().calls.load(Ordering::SeqCst), 1);
}
