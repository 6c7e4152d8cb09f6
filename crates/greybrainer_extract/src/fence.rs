//! Markdown code fence handling for JSON-mode responses.

/// Return the content of the first fenced code block, or the trimmed input
/// if there is none.
///
/// The closing fence may sit on the same line as the opening one. An
/// unterminated fence yields everything after the opening fence, which is
/// what a truncated response looks like.
pub fn strip_code_fences(text: &str) -> &str {
    let Some(start) = text.find("```") else {
        return text.trim();
    };
    let after_open = &text[start + 3..];
    let inner = match after_open.find("```") {
        Some(end) => &after_open[..end],
        None => after_open,
    };
    strip_language_tag(inner).trim()
}

/// Drop a language tag from the start of fenced content.
///
/// A first line made only of tag characters is a tag line. Without one, a
/// leading `json` word is dropped.
fn strip_language_tag(inner: &str) -> &str {
    if let Some(newline) = inner.find('\n') {
        let tag = inner[..newline].trim();
        if tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
        {
            return &inner[newline + 1..];
        }
    }

    let content = inner.trim_start();
    match content.get(..4) {
        Some(word) if word.eq_ignore_ascii_case("json") => &content[4..],
        _ => content,
    }
}

/// Best-effort JSON payload from a model response.
///
/// Fenced blocks win; otherwise the span from the first `{` or `[` to the
/// last matching closer is returned. Falls back to the trimmed input.
pub fn extract_json_payload(text: &str) -> &str {
    let unfenced = strip_code_fences(text);
    if unfenced.starts_with('{') || unfenced.starts_with('[') {
        return unfenced;
    }

    let object = unfenced.find('{');
    let array = unfenced.find('[');
    let (open, close) = match (array, object) {
        (Some(a), Some(o)) if a < o => (a, ']'),
        (Some(a), None) => (a, ']'),
        (_, Some(o)) => (o, '}'),
        (None, None) => return unfenced,
    };

    match unfenced.rfind(close) {
        Some(end) if end > open => &unfenced[open..=end],
        _ => unfenced,
    }
}
