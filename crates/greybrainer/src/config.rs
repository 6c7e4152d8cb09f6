//! Layered TOML configuration.
//!
//! Sources, later ones winning:
//! - Bundled defaults (include_str! from greybrainer.toml)
//! - `~/.config/greybrainer/greybrainer.toml`
//! - `./greybrainer.toml`

use config::{Config, File, FileFormat};
use greybrainer_error::{ConfigError, GreybrainerError, GreybrainerResult};
use greybrainer_models::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL,
    Provider,
};
use greybrainer_orchestrator::AnalysisSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../greybrainer.toml");

/// `[provider]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Provider used when the CLI does not pick one
    pub default: Provider,
}

/// `[gemini]` and `[groq]` sections.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelSection {
    /// Model identifier
    pub model: String,
    /// REST endpoint base
    pub base_url: String,
}

impl ModelSection {
    fn gemini() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    fn groq() -> Self {
        Self {
            model: DEFAULT_GROQ_MODEL.to_string(),
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
        }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageSection {
    /// Directory for the usage log and budget settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

/// Top-level Greybrainer configuration.
///
/// # Example
///
/// ```no_run
/// use greybrainer::GreybrainerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GreybrainerConfig::load()?;
/// println!("Default provider: {}", config.provider.default);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GreybrainerConfig {
    /// Provider selection
    pub provider: ProviderSection,
    /// Gemini endpoint and model
    pub gemini: ModelSection,
    /// Groq endpoint and model
    pub groq: ModelSection,
    /// Orchestrator tuning
    pub analysis: AnalysisSettings,
    /// Persistence location
    pub storage: StorageSection,
}

impl Default for GreybrainerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderSection::default(),
            gemini: ModelSection::gemini(),
            groq: ModelSection::groq(),
            analysis: AnalysisSettings::default(),
            storage: StorageSection::default(),
        }
    }
}

fn config_error(context: &str, e: config::ConfigError) -> GreybrainerError {
    ConfigError::new(format!("{context}: {e}")).into()
}

impl GreybrainerConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User files are optional and skipped when absent.
    #[instrument]
    pub fn load() -> GreybrainerResult<Self> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/greybrainer/greybrainer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("greybrainer").required(false));

        builder
            .build()
            .map_err(|e| config_error("Failed to build configuration", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))
    }

    /// Bundled defaults overlaid with a TOML document.
    pub fn from_toml_str(overrides: &str) -> GreybrainerResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml))
            .build()
            .map_err(|e| config_error("Failed to build configuration", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))
    }

    /// Endpoint and model for a provider.
    pub fn model_section(&self, provider: Provider) -> &ModelSection {
        match provider {
            Provider::Gemini => &self.gemini,
            Provider::Groq => &self.groq,
        }
    }

    /// Configured state directory, else the platform data directory.
    pub fn state_dir(&self) -> PathBuf {
        self.storage
            .state_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("greybrainer")))
            .unwrap_or_else(|| PathBuf::from(".greybrainer"))
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> GreybrainerResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render configuration: {e}")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config = GreybrainerConfig::from_toml_str("").unwrap();
        assert_eq!(config.provider.default, Provider::Gemini);
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.groq.base_url, DEFAULT_GROQ_BASE_URL);
        assert!(*config.analysis.use_search());
        assert!(config.storage.state_dir.is_none());
    }

    #[test]
    fn overrides_replace_single_keys() {
        let config = GreybrainerConfig::from_toml_str(
            "[provider]\ndefault = \"groq\"\n[analysis]\nuse_search = false\n",
        )
        .unwrap();
        assert_eq!(config.provider.default, Provider::Groq);
        assert!(!*config.analysis.use_search());
        assert_eq!(*config.analysis.layer_temperature(), 0.7);
    }

    #[test]
    fn explicit_state_dir_wins() {
        let config =
            GreybrainerConfig::from_toml_str("[storage]\nstate_dir = \"/tmp/greybrainer-test\"\n")
                .unwrap();
        assert_eq!(config.state_dir(), PathBuf::from("/tmp/greybrainer-test"));
    }

    #[test]
    fn renders_back_to_toml() {
        let rendered = GreybrainerConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[gemini]"));
        assert!(rendered.contains("use_search = true"));
    }
}
