//! Trait definitions for the Greybrainer analysis pipeline.
//!
//! The orchestrator only talks to these seams: a text-generation gateway,
//! a sink for usage accounting and a small key-value config store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ConfigStore, LlmGateway, NoopUsageSink, UsageSink};
