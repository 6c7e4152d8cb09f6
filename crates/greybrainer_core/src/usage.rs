//! Usage ledger entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rough token estimate: one token per four characters, rounded up.
pub fn estimate_tokens(input_chars: usize, output_chars: usize) -> usize {
    (input_chars + output_chars).div_ceil(4)
}

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLogEntry {
    /// Unique entry id
    pub id: String,
    /// When the call completed
    pub timestamp: DateTime<Utc>,
    /// Operation label
    pub operation: String,
    /// Prompt length in characters
    pub est_input_chars: usize,
    /// Response length in characters
    pub est_output_chars: usize,
    /// Estimated tokens
    pub est_tokens: usize,
}

impl UsageLogEntry {
    /// Entry stamped now with a fresh id.
    pub fn new(operation: impl Into<String>, input_chars: usize, output_chars: usize) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            operation: operation.into(),
            est_input_chars: input_chars,
            est_output_chars: output_chars,
            est_tokens: estimate_tokens(input_chars, output_chars),
        }
    }
}
