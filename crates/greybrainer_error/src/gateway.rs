//! Model gateway errors.

/// Gateway-specific error conditions.
///
/// `MissingApiKey` and `InvalidCredential` are credential problems the user can
/// fix; everything else is a provider or transport failure scoped to one call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GatewayErrorKind {
    /// API key not configured for the provider
    #[display("{} API key not set", _0)]
    MissingApiKey(String),
    /// Provider rejected the configured credential
    #[display("{} rejected the API key: {}", provider, message)]
    InvalidCredential {
        /// Provider name
        provider: String,
        /// Provider message
        message: String,
    },
    /// Provider rate limit or quota exceeded
    #[display("Rate limited: {}", _0)]
    RateLimited(String),
    /// Non-success HTTP status
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Request never completed (connect, timeout, body read)
    #[display("Transport error: {}", _0)]
    Transport(String),
    /// Provider response could not be decoded
    #[display("Malformed provider response: {}", _0)]
    ResponseParse(String),
    /// Provider returned no text
    #[display("Provider returned an empty response")]
    EmptyResponse,
}

impl GatewayErrorKind {
    /// True when the failure is caused by a missing or rejected API key.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            GatewayErrorKind::MissingApiKey(_) | GatewayErrorKind::InvalidCredential { .. }
        )
    }
}

/// Gateway error with source location tracking.
///
/// # Examples
///
/// ```
/// use greybrainer_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::RateLimited("quota".to_string()));
/// assert!(!err.kind.is_credential_error());
/// assert!(format!("{}", err).contains("Rate limited"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The kind of error that occurred
    pub kind: GatewayErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
