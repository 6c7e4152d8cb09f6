//! `Director:` and `Main Cast:` lines.

use regex::Regex;
use std::sync::LazyLock;

static DIRECTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t>*_-]*director[*_]*[ \t]*:[*_]*[ \t]*(.+?)[ \t*_]*$")
        .expect("valid director regex")
});

static CAST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t>*_-]*main[ \t]+cast[*_]*[ \t]*:[*_]*[ \t]*(.+?)[ \t*_]*$")
        .expect("valid cast regex")
});

pub(crate) static DIRECTOR_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t>*_-]*director[*_]*[ \t]*:[^\n]*\n?").expect("valid director line regex")
});

pub(crate) static CAST_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t>*_-]*main[ \t]+cast[*_]*[ \t]*:[^\n]*\n?").expect("valid cast line regex")
});

/// Placeholder values models emit when they don't know.
fn is_placeholder(value: &str) -> bool {
    let normalized = value
        .trim()
        .trim_end_matches('.')
        .trim()
        .to_ascii_lowercase();
    normalized.is_empty()
        || matches!(
            normalized.as_str(),
            "n/a" | "na" | "none" | "unknown" | "not available" | "not applicable" | "tbd" | "tba"
        )
}

/// Director named on the first `Director:` line.
pub fn parse_director(text: &str) -> Option<String> {
    let captures = DIRECTOR_RE.captures(text)?;
    let name = captures[1].trim();
    (!is_placeholder(name)).then(|| name.to_string())
}

/// Comma separated names on the first `Main Cast:` line.
///
/// Empty entries and placeholders are dropped; nothing left yields `None`.
pub fn parse_cast(text: &str) -> Option<Vec<String>> {
    let captures = CAST_RE.captures(text)?;
    let cast: Vec<String> = captures[1]
        .split(',')
        .map(str::trim)
        .filter(|name| !is_placeholder(name))
        .map(str::to_string)
        .collect();
    (!cast.is_empty()).then_some(cast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn director_line() {
        let text = "Some prose.\nDirector: Denis Villeneuve\nMore prose.";
        assert_eq!(parse_director(text).as_deref(), Some("Denis Villeneuve"));
    }

    #[test]
    fn director_with_bold_label() {
        assert_eq!(
            parse_director("**Director:** Greta Gerwig").as_deref(),
            Some("Greta Gerwig")
        );
    }

    #[test]
    fn director_placeholder_is_none() {
        assert_eq!(parse_director("Director: N/A"), None);
        assert_eq!(parse_director("Director: Unknown."), None);
    }

    #[test]
    fn director_mid_sentence_is_ignored() {
        assert_eq!(parse_director("The director's vision: bold."), None);
    }

    #[test]
    fn cast_is_split_and_trimmed() {
        let text = "Main Cast: Timothée Chalamet,  Zendaya , , Rebecca Ferguson";
        assert_eq!(
            parse_cast(text),
            Some(vec![
                "Timothée Chalamet".to_string(),
                "Zendaya".to_string(),
                "Rebecca Ferguson".to_string(),
            ])
        );
    }

    #[test]
    fn cast_placeholder_is_none() {
        assert_eq!(parse_cast("Main Cast: Unknown"), None);
        assert_eq!(parse_cast("Main Cast: N/A, none"), None);
    }
}
