//! Title suggestion lists.

use crate::extract_json_payload;
use serde_json::Value;

/// Upper bound on suggestions offered to the user.
pub const MAX_SUGGESTIONS: usize = 5;

/// Strings of the top-level array, or of the first array-valued field when
/// the reply is an object (JSON-object modes force a wrapper).
fn candidate_titles(value: Value) -> Option<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(fields) => fields.into_iter().find_map(|(_, v)| match v {
            Value::Array(items) => Some(items),
            _ => None,
        })?,
        _ => return None,
    };
    Some(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(title) => Some(title),
                _ => None,
            })
            .collect(),
    )
}

/// Parse a JSON array of titles, dropping the original and duplicates.
///
/// Comparison is trimmed and case-insensitive. Unparseable input yields an
/// empty list.
pub fn parse_title_suggestions(text: &str, original: &str) -> Vec<String> {
    let parsed = serde_json::from_str::<Value>(extract_json_payload(text))
        .ok()
        .and_then(candidate_titles);
    let Some(payload) = parsed else {
        tracing::debug!("Title suggestions were not a JSON list");
        return Vec::new();
    };

    let original = original.trim().to_lowercase();
    let mut seen: Vec<String> = Vec::new();
    let mut suggestions = Vec::new();
    for suggestion in payload {
        let trimmed = suggestion.trim();
        let key = trimmed.to_lowercase();
        if trimmed.is_empty() || key == original || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        suggestions.push(trimmed.to_string());
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_case_insensitive_original() {
        let text = r#"["dune", "Dune: Part Two", "Dune (1984)"]"#;
        assert_eq!(
            parse_title_suggestions(text, " Dune "),
            vec!["Dune: Part Two".to_string(), "Dune (1984)".to_string()]
        );
    }

    #[test]
    fn only_original_yields_empty() {
        assert!(parse_title_suggestions(r#"["DUNE"]"#, "Dune").is_empty());
    }

    #[test]
    fn accepts_fenced_and_wrapped() {
        let text = "```json\n{\"suggestions\": [\"Alien\", \"Aliens\"]}\n```";
        assert_eq!(parse_title_suggestions(text, "Alein"), vec!["Alien", "Aliens"]);
    }

    #[test]
    fn accepts_single_line_fence() {
        let text = "```[\"Dune (2021)\"]```\n";
        assert_eq!(parse_title_suggestions(text, "Dune"), vec!["Dune (2021)"]);
    }

    #[test]
    fn caps_and_dedups() {
        let text = r#"["a", "A", "b", "c", "d", "e", "f", "g"]"#;
        assert_eq!(
            parse_title_suggestions(text, "x"),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn garbage_is_empty() {
        assert!(parse_title_suggestions("no idea, sorry", "Dune").is_empty());
    }
}
