//! Token budget settings for the usage ledger.

use serde::{Deserialize, Serialize};

/// Usage ledger settings.
///
/// Persisted under the `greybrainer.token_budget_config` config-store key.
///
/// # Examples
///
/// ```
/// use greybrainer_core::TokenBudgetConfig;
///
/// let config = TokenBudgetConfig::builder()
///     .max_log_entries(50)
///     .monthly_token_budget(1_000_000)
///     .build();
/// assert!(config.validate().is_ok());
///
/// let defaults = TokenBudgetConfig::default();
/// assert_eq!(*defaults.max_log_entries(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct TokenBudgetConfig {
    /// Whether calls are recorded at all (default true).
    #[serde(default = "default_enabled")]
    enabled: bool,

    /// Retention cap for the ledger (default 100).
    #[serde(default = "default_max_log_entries")]
    max_log_entries: usize,

    /// Optional monthly token allowance.
    #[serde(default)]
    monthly_token_budget: Option<u64>,

    /// Fraction of the allowance that triggers a warning (default 0.8).
    #[serde(default = "default_warn_threshold")]
    warn_threshold: f64,
}

fn default_enabled() -> bool {
    true
}

fn default_max_log_entries() -> usize {
    100
}

fn default_warn_threshold() -> f64 {
    0.8
}

impl Default for TokenBudgetConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_log_entries: default_max_log_entries(),
            monthly_token_budget: None,
            warn_threshold: default_warn_threshold(),
        }
    }
}

impl TokenBudgetConfig {
    /// Creates a new config builder.
    pub fn builder() -> TokenBudgetConfigBuilder {
        TokenBudgetConfigBuilder::default()
    }

    /// Validates retention and threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_log_entries` is zero or the warn threshold is
    /// outside (0.0, 1.0].
    pub fn validate(&self) -> Result<(), String> {
        if self.max_log_entries == 0 {
            return Err("max_log_entries must be at least 1".to_string());
        }
        if self.warn_threshold <= 0.0 || self.warn_threshold > 1.0 {
            return Err(format!(
                "warn threshold must be in (0.0, 1.0], got {}",
                self.warn_threshold
            ));
        }
        Ok(())
    }

    /// Copy with recording switched on or off.
    pub fn with_enabled(&self, enabled: bool) -> Self {
        Self {
            enabled,
            ..self.clone()
        }
    }
}

/// Builder for `TokenBudgetConfig`.
#[derive(Debug, Default)]
pub struct TokenBudgetConfigBuilder {
    enabled: Option<bool>,
    max_log_entries: Option<usize>,
    monthly_token_budget: Option<u64>,
    warn_threshold: Option<f64>,
}

impl TokenBudgetConfigBuilder {
    /// Sets whether recording is enabled.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }

    /// Sets the retention cap.
    pub fn max_log_entries(mut self, value: usize) -> Self {
        self.max_log_entries = Some(value);
        self
    }

    /// Sets the monthly allowance.
    pub fn monthly_token_budget(mut self, value: u64) -> Self {
        self.monthly_token_budget = Some(value);
        self
    }

    /// Sets the warning threshold.
    pub fn warn_threshold(mut self, value: f64) -> Self {
        self.warn_threshold = Some(value);
        self
    }

    /// Builds the `TokenBudgetConfig`.
    pub fn build(self) -> TokenBudgetConfig {
        TokenBudgetConfig {
            enabled: self.enabled.unwrap_or_else(default_enabled),
            max_log_entries: self.max_log_entries.unwrap_or_else(default_max_log_entries),
            monthly_token_budget: self.monthly_token_budget,
            warn_threshold: self.warn_threshold.unwrap_or_else(default_warn_threshold),
        }
    }
}
