//! Status handling shared by the REST clients.

use greybrainer_error::{GatewayError, GatewayErrorKind};
use reqwest::Response;

/// Map a non-success HTTP status to a gateway error kind.
///
/// 401 and 403 are credential failures everywhere; Gemini also reports a
/// bad key as a 400 carrying `API_KEY_INVALID`.
pub(crate) fn classify_status(provider: &str, status: u16, body: &str) -> GatewayErrorKind {
    let bad_key_400 =
        status == 400 && (body.contains("API_KEY_INVALID") || body.contains("API key not valid"));
    match status {
        401 | 403 => GatewayErrorKind::InvalidCredential {
            provider: provider.to_string(),
            message: body.to_string(),
        },
        400 if bad_key_400 => GatewayErrorKind::InvalidCredential {
            provider: provider.to_string(),
            message: body.to_string(),
        },
        429 => GatewayErrorKind::RateLimited(body.to_string()),
        _ => GatewayErrorKind::Http {
            status_code: status,
            message: body.to_string(),
        },
    }
}

/// Pass successful responses through, turn failures into gateway errors.
pub(crate) async fn check_status(
    provider: &str,
    response: Response,
) -> Result<Response, GatewayError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let error_text = response.text().await.unwrap_or_default();
    tracing::debug!(provider, status, body_len = error_text.len(), "Provider returned error status");
    Err(GatewayError::new(classify_status(provider, status, &error_text)))
}

/// Wrap a transport failure.
pub(crate) fn transport_error(error: reqwest::Error) -> GatewayError {
    GatewayError::new(GatewayErrorKind::Transport(error.to_string()))
}

/// Wrap a body decoding failure.
pub(crate) fn parse_error(error: reqwest::Error) -> GatewayError {
    GatewayError::new(GatewayErrorKind::ResponseParse(error.to_string()))
}

/// Read a non-empty API key from the environment.
pub(crate) fn api_key_from_env(var: &str, provider: &str) -> Result<String, GatewayError> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(GatewayError::new(GatewayErrorKind::MissingApiKey(
            provider.to_string(),
        ))),
    }
}
