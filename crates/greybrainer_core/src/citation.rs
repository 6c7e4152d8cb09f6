//! Web citations returned by search-grounded model calls.

use serde::{Deserialize, Serialize};

/// A web source the model grounded its answer in. Compared by `uri` for dedup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    /// Source URI
    pub uri: String,
    /// Source title (may be empty)
    pub title: String,
}

impl Citation {
    /// Create a citation.
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

/// Append `incoming` to `target`, skipping URIs already present.
///
/// The first-seen entry for a URI wins, including its title.
pub fn merge_citations(target: &mut Vec<Citation>, incoming: &[Citation]) {
    for citation in incoming {
        if citation.uri.is_empty() {
            continue;
        }
        if !target.iter().any(|c| c.uri == citation.uri) {
            target.push(citation.clone());
        }
    }
}
