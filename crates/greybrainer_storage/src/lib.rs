//! Persistence for Greybrainer.
//!
//! Provides [`ConfigStore`](greybrainer_interface::ConfigStore) implementations
//! (one JSON file per key, or in memory) and the [`UsageLedger`], the
//! append-only token usage log that implements
//! [`UsageSink`](greybrainer_interface::UsageSink).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blob;
mod file_store;
mod ledger;
mod memory_store;

pub use blob::{TOKEN_BUDGET_CONFIG_KEY, TOKEN_USAGE_LOG_KEY, load_json, save_json};
pub use file_store::FileConfigStore;
pub use ledger::{BudgetStatus, UsageLedger, UsageSummary};
pub use memory_store::InMemoryConfigStore;
