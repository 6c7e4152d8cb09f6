//! Budget lookup payloads.

use crate::extract_json_payload;
use greybrainer_core::FetchedFinancials;

/// Parse the budget lookup JSON, tolerating fences and surrounding prose.
///
/// Returns `None` when no JSON object can be decoded. Budget validity is
/// left to the caller.
pub fn parse_financials(text: &str) -> Option<FetchedFinancials> {
    match serde_json::from_str(extract_json_payload(text)) {
        Ok(financials) => Some(financials),
        Err(e) => {
            tracing::debug!(error = %e, "Financials response was not valid JSON");
            None
        }
    }
}
