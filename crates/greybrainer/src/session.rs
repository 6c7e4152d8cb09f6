//! Wiring of gateway, usage ledger and orchestrator.

use crate::GreybrainerConfig;
use greybrainer_error::GreybrainerResult;
use greybrainer_interface::{ConfigStore, LlmGateway, UsageSink};
use greybrainer_models::{GeminiClient, GroqDriver, MeteredGateway, Provider};
use greybrainer_orchestrator::AnalysisOrchestrator;
use greybrainer_storage::{FileConfigStore, UsageLedger};
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the gateway for `provider`, metered into `sink`.
///
/// # Errors
///
/// Returns a credential error when the provider's API key is not set.
#[instrument(skip(config, sink))]
pub fn build_gateway(
    config: &GreybrainerConfig,
    provider: Provider,
    sink: Arc<dyn UsageSink>,
) -> GreybrainerResult<Arc<dyn LlmGateway>> {
    let section = config.model_section(provider);
    let gateway: Arc<dyn LlmGateway> = match provider {
        Provider::Gemini => Arc::new(MeteredGateway::new(
            GeminiClient::new(section.model.as_str())?.with_base_url(section.base_url.as_str()),
            sink,
        )),
        Provider::Groq => Arc::new(MeteredGateway::new(
            GroqDriver::new(section.model.as_str())?.with_base_url(section.base_url.as_str()),
            sink,
        )),
    };
    info!(provider = %provider, model = %section.model, "Gateway ready");
    Ok(gateway)
}

/// Everything one CLI invocation needs.
#[derive(Debug)]
pub struct Session {
    config: GreybrainerConfig,
    ledger: Arc<UsageLedger>,
}

impl Session {
    /// Open the usage ledger under the configured state directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created.
    pub fn open(config: GreybrainerConfig) -> GreybrainerResult<Self> {
        let store: Arc<dyn ConfigStore> = Arc::new(FileConfigStore::new(config.state_dir())?);
        Ok(Self::with_store(config, store))
    }

    /// Session over an explicit config store.
    pub fn with_store(config: GreybrainerConfig, store: Arc<dyn ConfigStore>) -> Self {
        Self {
            config,
            ledger: Arc::new(UsageLedger::open(store)),
        }
    }

    /// Loaded configuration.
    pub fn config(&self) -> &GreybrainerConfig {
        &self.config
    }

    /// Shared usage ledger.
    pub fn ledger(&self) -> &Arc<UsageLedger> {
        &self.ledger
    }

    /// Orchestrator over the chosen (or default) provider.
    pub fn orchestrator(&self, provider: Option<Provider>) -> GreybrainerResult<AnalysisOrchestrator> {
        let provider = provider.unwrap_or(self.config.provider.default);
        let sink: Arc<dyn UsageSink> = self.ledger.clone();
        let gateway = build_gateway(&self.config, provider, sink)?;
        Ok(AnalysisOrchestrator::with_settings(
            gateway,
            self.config.analysis.clone(),
        ))
    }
}
