//! Stripping parsed fields out of layer prose.

use crate::anchors::{PLOT_SHAPE_END, PLOT_SHAPE_START};
use crate::list::enhancements_section;
use crate::personnel::{CAST_LINE_RE, DIRECTOR_LINE_RE};
use crate::score::SCORE_LINE_RE;
use crate::{
    find_delimited, parse_cast, parse_director, parse_improvements, parse_plot_shape, parse_score,
};
use regex::Regex;
use std::sync::LazyLock;

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("valid blank line regex"));

/// Collapse runs of blank lines into a single blank line and trim.
pub fn collapse_blank_lines(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    BLANK_RUN_RE
        .replace_all(&normalized, "\n\n")
        .trim()
        .to_string()
}

/// Remove every field that parses successfully from `raw`.
///
/// Fields that fail to parse stay in the prose untouched.
pub fn clean_layer_text(raw: &str) -> String {
    let mut cleaned = raw.replace("\r\n", "\n");

    if parse_plot_shape(&cleaned).is_some() {
        let outer = find_delimited(&cleaned, PLOT_SHAPE_START, PLOT_SHAPE_END).map(|b| b.outer);
        if let Some(outer) = outer {
            cleaned.replace_range(outer, "");
        }
    }

    if parse_improvements(&cleaned).is_some() {
        if let Some((section, _)) = enhancements_section(&cleaned) {
            cleaned.replace_range(section, "");
        }
    }

    if parse_score(&cleaned).is_some() {
        cleaned = SCORE_LINE_RE.replace_all(&cleaned, "").into_owned();
    }
    if parse_director(&cleaned).is_some() {
        cleaned = DIRECTOR_LINE_RE.replace_all(&cleaned, "").into_owned();
    }
    if parse_cast(&cleaned).is_some() {
        cleaned = CAST_LINE_RE.replace_all(&cleaned, "").into_owned();
    }

    collapse_blank_lines(&cleaned)
}
