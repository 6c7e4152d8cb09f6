//! `Suggested Score: X/10` parsing.

use greybrainer_core::MAX_SCORE;
use regex::Regex;
use std::sync::LazyLock;

static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)suggested\s+score\s*:\s*[*_]*\s*([^\s/*_]+)\s*/\s*10(?:\.0+)?\b")
        .expect("valid score regex")
});

/// Matches the whole line carrying a score, used when cleaning.
pub(crate) static SCORE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[^\n]*suggested\s+score\s*:[^\n]*\n?").expect("valid score line regex")
});

/// Parse the first `Suggested Score: X/10`, clamped into `[0, MAX_SCORE]`.
///
/// Non-numeric values (`N/A/10`) and missing lines yield `None`.
pub fn parse_score(text: &str) -> Option<f64> {
    let captures = SCORE_RE.captures(text)?;
    let value: f64 = captures[1].parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(0.0, MAX_SCORE))
}
