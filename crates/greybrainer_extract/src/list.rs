//! Bulleted and numbered list parsing.

use greybrainer_core::ImprovementItems;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•+]\s+(.+)$").expect("valid bullet regex"));

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").expect("valid numbered list regex"));

static ENHANCEMENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t>#*_-]*potential\s+enhancements[*_]*[ \t]*:[*_]*")
        .expect("valid enhancements regex")
});

/// Lines that end a section: another anchor or a delimiter marker.
static SECTION_STOP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t>#*_-]*(?:suggested\s+score|director|main\s+cast)[*_]*[ \t]*:|^[ \t]*---[A-Z ]+---",
    )
    .expect("valid section stop regex")
});

/// Parse a block as a list when every non-empty line shares one marker style.
///
/// All lines bulleted (`-`, `*`, `•`, `+`) or all numbered (`1.`) yields
/// [`ImprovementItems::List`] with markers stripped. Anything else, mixed
/// formatting included, yields the trimmed block as
/// [`ImprovementItems::Text`]. Blank input yields `None`.
pub fn parse_list(block: &str) -> Option<ImprovementItems> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for marker in [&*BULLET_RE, &*NUMBERED_RE] {
        let items: Option<Vec<String>> = lines
            .iter()
            .map(|line| {
                marker
                    .captures(line)
                    .map(|captures| captures[1].trim().to_string())
            })
            .collect();
        if let Some(items) = items {
            return Some(ImprovementItems::List(items));
        }
    }

    Some(ImprovementItems::Text(trimmed.to_string()))
}

/// Byte range of the `Potential Enhancements:` section (heading included)
/// and of its body.
pub(crate) fn enhancements_section(text: &str) -> Option<(Range<usize>, Range<usize>)> {
    let heading = ENHANCEMENTS_RE.find(text)?;
    let body_start = heading.end();
    let body_end = SECTION_STOP_RE
        .find(&text[body_start..])
        .map(|stop| body_start + stop.start())
        .unwrap_or(text.len());
    Some((heading.start()..body_end, body_start..body_end))
}

/// Parse the list under the [`crate::anchors::POTENTIAL_ENHANCEMENTS`] heading.
pub fn parse_improvements(text: &str) -> Option<ImprovementItems> {
    let (_, body) = enhancements_section(text)?;
    parse_list(&text[body])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_bullets_become_list() {
        let block = "- Tighten the second act\n- Give the villain a motive\n- Trim the epilogue";
        assert_eq!(
            parse_list(block),
            Some(ImprovementItems::List(vec![
                "Tighten the second act".to_string(),
                "Give the villain a motive".to_string(),
                "Trim the epilogue".to_string(),
            ]))
        );
    }

    #[test]
    fn every_bullet_character_is_accepted() {
        for marker in ["-", "*", "•", "+"] {
            let block = format!("{marker} one\n\n{marker} two\n");
            assert_eq!(
                parse_list(&block),
                Some(ImprovementItems::List(vec!["one".into(), "two".into()])),
                "marker {marker}"
            );
        }
    }

    #[test]
    fn numbered_lines_become_list() {
        let block = "1. First\n2. Second";
        assert_eq!(
            parse_list(block),
            Some(ImprovementItems::List(vec!["First".into(), "Second".into()]))
        );
    }

    #[test]
    fn mixed_markers_fall_back_to_text() {
        let block = "- First\n2. Second";
        assert_eq!(
            parse_list(block),
            Some(ImprovementItems::Text("- First\n2. Second".to_string()))
        );
    }

    #[test]
    fn prose_fallback_is_idempotent() {
        let block = "  Some prose.\n- and a bullet\n";
        let Some(ImprovementItems::Text(text)) = parse_list(block) else {
            panic!("expected text fallback");
        };
        assert_eq!(parse_list(&text), Some(ImprovementItems::Text(text.clone())));
    }

    #[test]
    fn blank_block_is_none() {
        assert_eq!(parse_list("  \n\n "), None);
    }

    #[test]
    fn improvements_stop_at_next_anchor() {
        let text = "Analysis.\n\nPotential Enhancements:\n- A\n- B\nSuggested Score: 7/10\n";
        assert_eq!(
            parse_improvements(text),
            Some(ImprovementItems::List(vec!["A".into(), "B".into()]))
        );
    }

    #[test]
    fn improvements_heading_with_markdown() {
        let text = "**Potential Enhancements:**\n* Sharper dialogue";
        assert_eq!(
            parse_improvements(text),
            Some(ImprovementItems::List(vec!["Sharper dialogue".into()]))
        );
    }
}
