//! Typed JSON blobs on top of a string config store.

use greybrainer_error::{GreybrainerResult, JsonError};
use greybrainer_interface::ConfigStore;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key of the persisted [`TokenBudgetConfig`](greybrainer_core::TokenBudgetConfig).
pub const TOKEN_BUDGET_CONFIG_KEY: &str = "greybrainer.token_budget_config";

/// Key of the persisted usage log.
pub const TOKEN_USAGE_LOG_KEY: &str = "greybrainer.token_usage_log";

/// Load and decode a blob.
///
/// Unreadable or corrupt data is logged and treated as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn ConfigStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored value, ignoring it");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding corrupt stored value");
            None
        }
    }
}

/// Encode and store a blob.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn ConfigStore,
    key: &str,
    value: &T,
) -> GreybrainerResult<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| JsonError::new(format!("Failed to serialize {key}: {e}")))?;
    store.set(key, &raw)
}
