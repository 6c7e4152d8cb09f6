//! Final report splitting.

use crate::anchors::{LINKEDIN_END, LINKEDIN_START, TWITTER_END, TWITTER_START};
use crate::{collapse_blank_lines, find_delimited, parse_list};
use greybrainer_core::ImprovementItems;
use regex::Regex;
use std::sync::LazyLock;

/// Improvements heading, tolerating emphasis around the label and colon.
static OVERALL_IMPROVEMENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)overall\s+improvement\s+opportunities[*_]*[ \t]*:[*_]*")
        .expect("valid overall improvements regex")
});

/// Sections of a synthesized report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSections {
    /// Report prose with social blocks and improvements removed
    pub body: String,
    /// Inner text of the Twitter block, trimmed
    pub twitter: Option<String>,
    /// Inner text of the LinkedIn block, trimmed
    pub linkedin: Option<String>,
    /// Everything after the last improvements marker
    pub improvements: Option<ImprovementItems>,
}

/// Cut one delimited block out of `body`, returning its trimmed inner text.
fn excise(body: &mut String, start: &str, end: &str) -> Option<String> {
    let block = find_delimited(body, start, end)?;
    let inner = block.inner.trim().to_string();
    let outer = block.outer;
    body.replace_range(outer, "");
    (!inner.is_empty()).then_some(inner)
}

/// Split a report into body, social snippets and overall improvements.
///
/// Social blocks are removed first. The improvements section is found by
/// the *last* occurrence of its marker so an earlier mention in prose is
/// not mistaken for the heading.
pub fn split_report(text: &str) -> ReportSections {
    let mut body = text.replace("\r\n", "\n");
    let twitter = excise(&mut body, TWITTER_START, TWITTER_END);
    let linkedin = excise(&mut body, LINKEDIN_START, LINKEDIN_END);

    let heading = OVERALL_IMPROVEMENTS_RE
        .find_iter(&body)
        .last()
        .map(|m| m.range());
    let improvements = match heading {
        Some(range) => {
            let items = parse_list(&body[range.end..]);
            body.truncate(range.start);
            items
        }
        None => None,
    };

    ReportSections {
        body: collapse_blank_lines(body.trim_end_matches(['*', '#', ' ', '\n'])),
        twitter,
        linkedin,
        improvements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::OVERALL_IMPROVEMENTS;

    #[test]
    fn splits_all_sections() {
        let text = format!(
            "Dune is a triumph.\n\n{TWITTER_START}\n  Dune soars! #Dune  \n{TWITTER_END}\n\n\
             {LINKEDIN_START}\nA lesson in world-building.\n{LINKEDIN_END}\n\n\
             {OVERALL_IMPROVEMENTS}\n- Tighter pacing\n- More Chani"
        );
        let sections = split_report(&text);

        assert_eq!(sections.body, "Dune is a triumph.");
        assert_eq!(sections.twitter.as_deref(), Some("Dune soars! #Dune"));
        assert_eq!(
            sections.linkedin.as_deref(),
            Some("A lesson in world-building.")
        );
        assert_eq!(
            sections.improvements,
            Some(ImprovementItems::List(vec![
                "Tighter pacing".into(),
                "More Chani".into()
            ]))
        );
    }

    #[test]
    fn uses_last_marker_occurrence() {
        let text = format!(
            "We discuss {OVERALL_IMPROVEMENTS} as a concept here.\n\n\
             {OVERALL_IMPROVEMENTS}\nBetter marketing."
        );
        let sections = split_report(&text);
        assert!(sections.body.contains("as a concept here."));
        assert_eq!(
            sections.improvements,
            Some(ImprovementItems::Text("Better marketing.".into()))
        );
    }

    #[test]
    fn bold_heading_markup_is_dropped() {
        let text = format!("Body.\n\n**{OVERALL_IMPROVEMENTS}**\n1. One");
        let sections = split_report(&text);
        assert_eq!(sections.body, "Body.");
        assert_eq!(
            sections.improvements,
            Some(ImprovementItems::List(vec!["One".into()]))
        );
    }

    #[test]
    fn colon_outside_bold_heading() {
        let text = "Body.\n\n**Overall Improvement Opportunities**:\n- Sharper edit\n- Louder score";
        let sections = split_report(text);
        assert_eq!(sections.body, "Body.");
        assert_eq!(
            sections.improvements,
            Some(ImprovementItems::List(vec![
                "Sharper edit".into(),
                "Louder score".into()
            ]))
        );
    }

    #[test]
    fn heading_match_ignores_case() {
        let sections = split_report("Body.\n\nOVERALL IMPROVEMENT OPPORTUNITIES:\nRecut act two.");
        assert_eq!(sections.body, "Body.");
        assert_eq!(
            sections.improvements,
            Some(ImprovementItems::Text("Recut act two.".into()))
        );
    }

    #[test]
    fn plain_report_is_all_body() {
        let sections = split_report("Just prose.\n\n\n\nMore prose.");
        assert_eq!(sections.body, "Just prose.\n\nMore prose.");
        assert_eq!(sections.twitter, None);
        assert_eq!(sections.linkedin, None);
        assert_eq!(sections.improvements, None);
    }
}
