//! Final report synthesis prompt.

use greybrainer_core::{
    FinancialAnalysisData, LayerAnalysisResult, LayerId, PersonnelAggregate, ReviewStage,
};
use greybrainer_extract::anchors::{
    LINKEDIN_END, LINKEDIN_START, OVERALL_IMPROVEMENTS, TWITTER_END, TWITTER_START,
};
use std::fmt::Write;

/// Stand-in for a layer with no usable text.
pub const NO_ANALYSIS: &str = "No analysis.";

fn layer_text<'a>(results: &'a [LayerAnalysisResult], id: LayerId) -> &'a str {
    results
        .iter()
        .find(|r| r.layer_id == id && r.error.is_none())
        .and_then(LayerAnalysisResult::report_text)
        .unwrap_or(NO_ANALYSIS)
}

fn personnel_lines(personnel: &PersonnelAggregate) -> String {
    let director = personnel.director.as_deref().unwrap_or("Unknown");
    let cast = personnel
        .cast
        .as_ref()
        .map(|cast| cast.join(", "))
        .unwrap_or_else(|| "Unknown".to_string());
    format!("Director: {director}\nMain cast: {cast}")
}

fn financial_lines(financials: &FinancialAnalysisData) -> String {
    let mut lines = String::new();
    if let Some(budget) = financials.budget {
        let currency = financials.currency.as_deref().unwrap_or("USD");
        let source = if financials.is_budget_estimated {
            "estimated"
        } else {
            "provided by the user"
        };
        let _ = writeln!(lines, "Budget: {budget:.0} {currency} ({source})");
    }
    if let Some(duration) = &financials.duration_estimate {
        let _ = writeln!(lines, "Duration: {duration}");
    }
    if let Some(roi) = &financials.roi_text {
        let _ = writeln!(lines, "ROI commentary:\n{roi}");
    }
    lines
}

/// Prompt for the cross-layer synthesis.
///
/// Every layer is represented; missing or failed ones read [`NO_ANALYSIS`].
pub fn build_final_report_prompt(
    title: &str,
    stage: ReviewStage,
    results: &[LayerAnalysisResult],
    personnel: &PersonnelAggregate,
    financials: Option<&FinancialAnalysisData>,
) -> String {
    let mut prompt = format!(
        "You are Greybrainer, a seasoned film and series analyst. Synthesize the \
         layer analyses below into one cohesive report on \"{title}\" (stage: {stage}).\n\n\
         {personnel}\n\n",
        personnel = personnel_lines(personnel),
    );

    for id in LayerId::ALL {
        let definition = id.definition();
        let _ = write!(
            prompt,
            "## {}\n{}\n\n",
            definition.title,
            layer_text(results, id)
        );
    }

    if let Some(financials) = financials {
        let _ = write!(prompt, "## Financial context\n{}\n", financial_lines(financials));
    }

    let _ = write!(
        prompt,
        "Write a report of 400 to 600 words in plain paragraphs that weighs the layers \
         against each other.\n\n\
         Then add a Twitter post under 280 characters and a LinkedIn post of about 100 \
         words, each wrapped exactly like this:\n\
         {TWITTER_START}\n<post>\n{TWITTER_END}\n\
         {LINKEDIN_START}\n<post>\n{LINKEDIN_END}\n\n\
         The very last section must start with \"{OVERALL_IMPROVEMENTS}\" followed by 3 to 5 \
         lines, each starting with \"- \".\n"
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_layers_read_no_analysis() {
        let mut story = LayerAnalysisResult::loading(LayerId::Story);
        story.is_loading = false;
        story.cleaned_text = Some("Story text.".to_string());
        let failed = LayerAnalysisResult::failed(LayerId::Performance, "boom");

        let prompt = build_final_report_prompt(
            "Dune",
            ReviewStage::Released,
            &[story, failed],
            &PersonnelAggregate::default(),
            None,
        );

        assert!(prompt.contains("Story text."));
        assert_eq!(prompt.matches(NO_ANALYSIS).count(), 2);
        assert!(!prompt.contains("Financial context"));
    }
}
