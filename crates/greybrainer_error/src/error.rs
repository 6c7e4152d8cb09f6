//! Top-level error wrapper types.

use crate::{AnalysisError, ConfigError, GatewayError, JsonError, StorageError};

/// Every error condition surfaced by Greybrainer crates.
///
/// # Examples
///
/// ```
/// use greybrainer_error::{GreybrainerError, JsonError};
///
/// let err: GreybrainerError = JsonError::new("trailing comma").into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GreybrainerErrorKind {
    /// Model gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Analysis workflow error
    #[from(AnalysisError)]
    Analysis(AnalysisError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Greybrainer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use greybrainer_error::{AnalysisError, AnalysisErrorKind, GreybrainerResult};
///
/// fn submit(title: &str) -> GreybrainerResult<()> {
///     if title.trim().is_empty() {
///         return Err(AnalysisError::new(AnalysisErrorKind::EmptyTitle).into());
///     }
///     Ok(())
/// }
///
/// assert!(submit("  ").is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Greybrainer Error: {}", _0)]
pub struct GreybrainerError(Box<GreybrainerErrorKind>);

impl GreybrainerError {
    /// Create a new error from a kind.
    pub fn new(kind: GreybrainerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GreybrainerErrorKind {
        &self.0
    }

    /// True when a gateway reported a missing or rejected API key.
    pub fn is_credential_error(&self) -> bool {
        matches!(self.kind(), GreybrainerErrorKind::Gateway(e) if e.kind.is_credential_error())
    }

    /// Message suitable for rendering next to the affected section.
    ///
    /// Credential failures become an actionable hint; everything else keeps the
    /// raw provider or validation message without source locations.
    pub fn user_message(&self) -> String {
        match self.kind() {
            GreybrainerErrorKind::Gateway(e) if e.kind.is_credential_error() => format!(
                "{}. Please check your API key configuration and try again.",
                e.kind
            ),
            GreybrainerErrorKind::Gateway(e) => e.kind.to_string(),
            GreybrainerErrorKind::Analysis(e) => e.kind.to_string(),
            GreybrainerErrorKind::Config(e) => e.message.clone(),
            GreybrainerErrorKind::Json(e) => e.message.clone(),
            GreybrainerErrorKind::Storage(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to GreybrainerErrorKind
impl<T> From<T> for GreybrainerError
where
    T: Into<GreybrainerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Greybrainer operations.
pub type GreybrainerResult<T> = std::result::Result<T, GreybrainerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisErrorKind, GatewayErrorKind};

    #[test]
    fn credential_errors_are_distinguishable() {
        let missing: GreybrainerError =
            GatewayError::new(GatewayErrorKind::MissingApiKey("GEMINI".to_string())).into();
        let transient: GreybrainerError = GatewayError::new(GatewayErrorKind::Http {
            status_code: 503,
            message: "overloaded".to_string(),
        })
        .into();

        assert!(missing.is_credential_error());
        assert!(!transient.is_credential_error());
    }

    #[test]
    fn user_message_hints_at_api_key() {
        let err: GreybrainerError = GatewayError::new(GatewayErrorKind::InvalidCredential {
            provider: "groq".to_string(),
            message: "Invalid API Key".to_string(),
        })
        .into();
        assert!(err.user_message().contains("check your API key"));
    }

    #[test]
    fn user_message_keeps_raw_provider_text() {
        let err: GreybrainerError =
            GatewayError::new(GatewayErrorKind::RateLimited("Resource exhausted".to_string()))
                .into();
        let message = err.user_message();
        assert!(message.contains("Resource exhausted"));
        assert!(!message.contains("line"));
    }

    #[test]
    fn analysis_errors_render_plainly() {
        let err: GreybrainerError = AnalysisError::new(AnalysisErrorKind::EmptyTitle).into();
        assert_eq!(err.user_message(), "Please enter a movie or series title");
    }
}
