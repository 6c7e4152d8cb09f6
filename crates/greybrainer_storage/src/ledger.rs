//! Append-only token usage log.

use crate::{TOKEN_BUDGET_CONFIG_KEY, TOKEN_USAGE_LOG_KEY, load_json, save_json};
use chrono::{Datelike, Utc};
use greybrainer_core::{TokenBudgetConfig, UsageLogEntry};
use greybrainer_error::{ConfigError, GreybrainerResult};
use greybrainer_interface::{ConfigStore, UsageSink};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument, warn};

/// Position of this month's usage relative to the monthly allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum BudgetStatus {
    /// Below the warning threshold
    WithinBudget,
    /// At or above the warning threshold
    NearLimit,
    /// At or above the allowance
    OverBudget,
}

/// Totals over the retained log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// Retained entries
    pub entries: usize,
    /// Summed prompt characters
    pub input_chars: usize,
    /// Summed response characters
    pub output_chars: usize,
    /// Summed token estimates
    pub tokens: usize,
    /// Token estimates per operation label
    pub tokens_by_operation: BTreeMap<String, usize>,
}

#[derive(Debug)]
struct LedgerState {
    config: TokenBudgetConfig,
    entries: VecDeque<UsageLogEntry>,
}

impl LedgerState {
    fn truncate(&mut self) {
        let cap = *self.config.max_log_entries();
        while self.entries.len() > cap {
            self.entries.pop_front();
        }
    }
}

/// Usage log shared by every gateway call site.
///
/// Appends take a single lock for push, truncate and persist, so concurrent
/// records are serialized and none are lost.
pub struct UsageLedger {
    store: Arc<dyn ConfigStore>,
    state: Mutex<LedgerState>,
}

impl std::fmt::Debug for UsageLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("UsageLedger")
            .field("config", &state.config)
            .field("entries", &state.entries.len())
            .finish()
    }
}

impl UsageLedger {
    /// Load config and log from `store`.
    ///
    /// Missing, corrupt or invalid stored data falls back to defaults.
    pub fn open(store: Arc<dyn ConfigStore>) -> Self {
        let config = load_json::<TokenBudgetConfig>(store.as_ref(), TOKEN_BUDGET_CONFIG_KEY)
            .filter(|config| match config.validate() {
                Ok(()) => true,
                Err(reason) => {
                    warn!(%reason, "Stored token budget config is invalid, using defaults");
                    false
                }
            })
            .unwrap_or_default();

        let entries: VecDeque<UsageLogEntry> =
            load_json::<Vec<UsageLogEntry>>(store.as_ref(), TOKEN_USAGE_LOG_KEY)
                .unwrap_or_default()
                .into();

        let mut state = LedgerState { config, entries };
        state.truncate();
        debug!(entries = state.entries.len(), enabled = *state.config.enabled(), "Opened usage ledger");

        Self {
            store,
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist_log(&self, state: &LedgerState) -> GreybrainerResult<()> {
        let entries: Vec<&UsageLogEntry> = state.entries.iter().collect();
        save_json(self.store.as_ref(), TOKEN_USAGE_LOG_KEY, &entries)
    }

    /// Current settings.
    pub fn config(&self) -> TokenBudgetConfig {
        self.lock().config.clone()
    }

    /// Replace and persist the settings, truncating the log to the new cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or cannot be stored.
    #[instrument(skip(self))]
    pub fn set_config(&self, config: TokenBudgetConfig) -> GreybrainerResult<()> {
        config.validate().map_err(ConfigError::new)?;

        let mut state = self.lock();
        save_json(self.store.as_ref(), TOKEN_BUDGET_CONFIG_KEY, &config)?;
        state.config = config;
        let before = state.entries.len();
        state.truncate();
        if state.entries.len() != before {
            self.persist_log(&state)?;
        }
        Ok(())
    }

    /// Record a call; a no-op returning `None` when recording is disabled.
    ///
    /// A failed write is logged and the entry kept in memory.
    #[instrument(skip(self))]
    pub fn append(
        &self,
        operation: &str,
        input_chars: usize,
        output_chars: usize,
    ) -> Option<UsageLogEntry> {
        let mut state = self.lock();
        if !*state.config.enabled() {
            return None;
        }

        let entry = UsageLogEntry::new(operation, input_chars, output_chars);
        state.entries.push_back(entry.clone());
        state.truncate();

        if let Err(e) = self.persist_log(&state) {
            warn!(error = %e, "Failed to persist usage log");
        }
        debug!(est_tokens = entry.est_tokens, entries = state.entries.len(), "Recorded usage");
        Some(entry)
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> Vec<UsageLogEntry> {
        self.lock().entries.iter().cloned().collect()
    }

    /// Totals over the retained log.
    pub fn summary(&self) -> UsageSummary {
        let state = self.lock();
        let mut summary = UsageSummary {
            entries: state.entries.len(),
            ..UsageSummary::default()
        };
        for entry in &state.entries {
            summary.input_chars += entry.est_input_chars;
            summary.output_chars += entry.est_output_chars;
            summary.tokens += entry.est_tokens;
            *summary
                .tokens_by_operation
                .entry(entry.operation.clone())
                .or_default() += entry.est_tokens;
        }
        summary
    }

    /// Tokens recorded in the current calendar month (UTC).
    pub fn tokens_this_month(&self) -> usize {
        let now = Utc::now();
        self.lock()
            .entries
            .iter()
            .filter(|e| e.timestamp.year() == now.year() && e.timestamp.month() == now.month())
            .map(|e| e.est_tokens)
            .sum()
    }

    /// Compare this month's tokens to the allowance.
    ///
    /// `None` when no monthly allowance is configured.
    pub fn budget_status(&self) -> Option<BudgetStatus> {
        let config = self.config();
        let limit = (*config.monthly_token_budget())? as f64;
        let used = self.tokens_this_month() as f64;

        let status = if used >= limit {
            BudgetStatus::OverBudget
        } else if used >= limit * config.warn_threshold() {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::WithinBudget
        };
        Some(status)
    }

    /// Drop every entry and persist the empty log.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty log cannot be stored.
    #[instrument(skip(self))]
    pub fn clear(&self) -> GreybrainerResult<()> {
        let mut state = self.lock();
        state.entries.clear();
        self.persist_log(&state)
    }
}

impl UsageSink for UsageLedger {
    fn record(&self, operation: &str, input_chars: usize, output_chars: usize) {
        self.append(operation, input_chars, output_chars);
    }
}
