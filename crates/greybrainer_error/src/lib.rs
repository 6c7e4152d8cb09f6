//! Error types for Greybrainer.
//!
//! This crate provides the foundation error types used throughout the Greybrainer workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Gateway failures keep credential problems distinguishable from transient
//! provider failures so callers can surface an actionable message.
//!
//! # Examples
//!
//! ```
//! use greybrainer_error::{GatewayError, GatewayErrorKind, GreybrainerResult};
//!
//! fn call_model() -> GreybrainerResult<String> {
//!     Err(GatewayError::new(GatewayErrorKind::InvalidCredential {
//!         provider: "gemini".to_string(),
//!         message: "API key not valid".to_string(),
//!     }))?
//! }
//!
//! let err = call_model().unwrap_err();
//! assert!(err.is_credential_error());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
mod error;
mod gateway;
mod json;
mod storage;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use config::ConfigError;
pub use error::{GreybrainerError, GreybrainerErrorKind, GreybrainerResult};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
