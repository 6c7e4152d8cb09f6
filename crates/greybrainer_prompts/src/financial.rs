//! Budget lookup and ROI prompts.

use greybrainer_core::{LayerAnalysisResult, LayerId};
use std::fmt::Write;

/// JSON-mode prompt asking for budget, currency and duration.
pub fn build_financials_prompt(title: &str) -> String {
    format!(
        "Find the production budget of \"{title}\". Respond with only a JSON object of the form\n\
         {{\"budget\": <number or null>, \"currency\": <ISO code or null>, \"durationEstimate\": <string or null>}}\n\
         The budget is a plain number without separators or currency symbols. Use null for \
         anything you cannot find."
    )
}

/// Prompt for qualitative ROI commentary.
///
/// Layer scores are included so the commentary can weigh creative merit
/// against cost.
pub fn build_roi_prompt(
    title: &str,
    budget: f64,
    duration: Option<&str>,
    is_estimated: bool,
    results: &[LayerAnalysisResult],
) -> String {
    let source = if is_estimated {
        "an estimate found online"
    } else {
        "supplied by the user"
    };
    let mut prompt = format!(
        "Give qualitative return-on-investment commentary for \"{title}\". \
         The budget is {budget:.0} ({source})."
    );
    if let Some(duration) = duration {
        let _ = write!(prompt, " Duration: {duration}.");
    }
    prompt.push_str("\n\nCreative scores from the analysis:\n");

    for id in LayerId::ALL {
        let score = results
            .iter()
            .find(|r| r.layer_id == id)
            .and_then(|r| r.suggested_score)
            .map(|s| format!("{s}/10"))
            .unwrap_or_else(|| "not scored".to_string());
        let _ = writeln!(prompt, "- {}: {score}", id.definition().title);
    }

    prompt.push_str(
        "\nIn about 150 words, discuss whether the creative strengths justify the spend and \
         which audiences or markets carry the commercial risk. Do not invent box office figures \
         or forecasts.",
    );
    prompt
}
