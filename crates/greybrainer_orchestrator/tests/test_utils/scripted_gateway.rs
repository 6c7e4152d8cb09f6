//! Gateway whose replies are scripted per operation.

use async_trait::async_trait;
use greybrainer_core::{Citation, GatewayResponse, GenerateOptions};
use greybrainer_error::{GatewayError, GatewayErrorKind, GreybrainerResult};
use greybrainer_interface::LlmGateway;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Behavior for one operation.
#[derive(Clone)]
pub enum Script {
    /// Return this response
    Reply(GatewayResponse),
    /// Build the reply text from the prompt
    Echo(Arc<dyn Fn(&str) -> String + Send + Sync>),
    /// Fail with this error
    Fail(GatewayErrorKind),
}

/// Mock gateway routing by `GenerateOptions::operation`.
///
/// Unscripted operations fail with `EmptyResponse`. Prompts containing a
/// gated needle wait for a permit before replying.
#[derive(Default)]
pub struct ScriptedGateway {
    scripts: Mutex<HashMap<String, Script>>,
    gates: Mutex<Vec<(String, Arc<Semaphore>)>>,
    log: Mutex<Vec<(String, String)>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, operation: &str, text: &str) -> Self {
        self.set(operation, Script::Reply(GatewayResponse::from_text(text)));
        self
    }

    pub fn reply_cited(self, operation: &str, text: &str, citations: Vec<Citation>) -> Self {
        self.set(
            operation,
            Script::Reply(GatewayResponse::with_citations(text, citations)),
        );
        self
    }

    pub fn echo(self, operation: &str, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.set(operation, Script::Echo(Arc::new(f)));
        self
    }

    pub fn fail(self, operation: &str, kind: GatewayErrorKind) -> Self {
        self.set(operation, Script::Fail(kind));
        self
    }

    /// Hold every prompt containing `needle` until `gate` has a permit.
    pub fn gate(self, needle: &str, gate: Arc<Semaphore>) -> Self {
        self.gates
            .lock()
            .expect("gates lock")
            .push((needle.to_string(), gate));
        self
    }

    /// Replace the script for an operation.
    pub fn set(&self, operation: &str, script: Script) {
        self.scripts
            .lock()
            .expect("scripts lock")
            .insert(operation.to_string(), script);
    }

    /// Script every layer operation with the same reply.
    pub fn all_layers(self, text: &str) -> Self {
        self.reply("layer_story", text)
            .reply("layer_conceptualization", text)
            .reply("layer_performance", text)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Operations in call order.
    pub fn operations(&self) -> Vec<String> {
        self.log
            .lock()
            .expect("log lock")
            .iter()
            .map(|(op, _)| op.clone())
            .collect()
    }

    pub fn calls_for(&self, operation: &str) -> usize {
        self.operations().iter().filter(|op| *op == operation).count()
    }

    pub fn prompts_for(&self, operation: &str) -> Vec<String> {
        self.log
            .lock()
            .expect("log lock")
            .iter()
            .filter(|(op, _)| op == operation)
            .map(|(_, prompt)| prompt.clone())
            .collect()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> GreybrainerResult<GatewayResponse> {
        let operation = options.operation().clone();
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log
            .lock()
            .expect("log lock")
            .push((operation.clone(), prompt.to_string()));

        let gate = self
            .gates
            .lock()
            .expect("gates lock")
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, gate)| gate.clone());
        if let Some(gate) = gate {
            gate.acquire().await.expect("gate open").forget();
        }

        let script = self
            .scripts
            .lock()
            .expect("scripts lock")
            .get(&operation)
            .cloned();
        match script {
            Some(Script::Reply(response)) => Ok(response),
            Some(Script::Echo(f)) => Ok(GatewayResponse::from_text(f(prompt))),
            Some(Script::Fail(kind)) => Err(GatewayError::new(kind).into()),
            None => Err(GatewayError::new(GatewayErrorKind::EmptyResponse).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-1"
    }
}

/// A well-formed layer reply naming a director.
pub fn layer_reply(director: &str) -> String {
    format!(
        "The film commits fully to its vision.\n\n\
         Director: {director}\n\
         Main Cast: Timothée Chalamet, Zendaya\n\
         Suggested Score: 8.5/10\n\n\
         Potential Enhancements:\n\
         - Tighter pacing in the second act\n\
         - More room for the supporting cast\n"
    )
}
