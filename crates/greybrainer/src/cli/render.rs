//! Terminal rendering of orchestrator state.

use greybrainer::{
    AnalysisPhase, AnalysisState, FinancialPhase, FinancialState, ImprovementItems, LayerAnalysisResult,
    LayerId, PersonnelAggregate, PersonnelAnalysis, SummaryReport,
};
use std::collections::HashSet;
use tokio::sync::watch;

/// Print progress lines as the state changes, until the channel closes.
pub async fn follow(mut receiver: watch::Receiver<AnalysisState>) {
    let mut last_phase = AnalysisPhase::Idle;
    let mut settled: HashSet<(u64, LayerId)> = HashSet::new();
    let mut last_financial = None;

    while receiver.changed().await.is_ok() {
        let state = receiver.borrow_and_update().clone();

        if state.phase != last_phase {
            last_phase = state.phase;
            if let Some(line) = phase_line(state.phase) {
                eprintln!("{line}");
            }
        }

        for layer in state.layers.iter().filter(|l| l.is_settled()) {
            if settled.insert((state.run_id, layer.layer_id)) {
                eprintln!("  {}", layer_status(layer));
            }
        }

        let financial = state.financials.as_ref().map(|f| f.phase);
        if financial != last_financial {
            last_financial = financial;
            if let Some(line) = state.financials.as_ref().and_then(financial_line) {
                eprintln!("  {line}");
            }
        }
    }
}

fn phase_line(phase: AnalysisPhase) -> Option<&'static str> {
    match phase {
        AnalysisPhase::Idle | AnalysisPhase::AwaitingUserChoice | AnalysisPhase::Done => None,
        AnalysisPhase::ResolvingTitle => Some("Checking title..."),
        AnalysisPhase::AnalyzingLayers => Some("Analyzing layers..."),
        AnalysisPhase::LayersDone => Some("Layer analysis complete."),
        AnalysisPhase::FinancialsPending => Some("Looking into the financials..."),
        AnalysisPhase::ReportPending => Some("Writing the final report..."),
    }
}

fn layer_status(layer: &LayerAnalysisResult) -> String {
    let title = layer.layer_id.definition().title;
    match (&layer.error, layer.suggested_score) {
        (Some(error), _) => format!("✗ {title}: {error}"),
        (None, Some(score)) => format!("✓ {title} ({score}/10)"),
        (None, None) => format!("✓ {title}"),
    }
}

fn financial_line(financials: &FinancialState) -> Option<String> {
    match financials.phase {
        FinancialPhase::Idle | FinancialPhase::LoadingBudget | FinancialPhase::LoadingRoi => None,
        FinancialPhase::BudgetLoaded => financials
            .fetched_budget
            .map(|budget| format!("✓ Budget found: {}", money(budget, financials.currency.as_deref()))),
        FinancialPhase::BudgetError => Some(format!(
            "✗ Budget: {}",
            financials.budget_error.as_deref().unwrap_or("unavailable")
        )),
        FinancialPhase::RoiLoaded => Some("✓ ROI commentary ready".to_string()),
        FinancialPhase::RoiError => Some(format!(
            "✗ ROI: {}",
            financials.roi_error.as_deref().unwrap_or("unavailable")
        )),
    }
}

fn money(amount: f64, currency: Option<&str>) -> String {
    format!("{amount:.0} {}", currency.unwrap_or("USD"))
}

fn print_items(items: &ImprovementItems) {
    match items {
        ImprovementItems::List(list) => {
            for item in list {
                println!("  - {item}");
            }
        }
        ImprovementItems::Text(text) => println!("{text}"),
    }
}

/// Print every settled layer.
pub fn print_layers(state: &AnalysisState) {
    if let Some(title) = state.title() {
        println!("\n=== {title} ===");
    }
    for layer in &state.layers {
        let definition = layer.layer_id.definition();
        println!("\n## {}", definition.title);
        if let Some(error) = &layer.error {
            println!("Error: {error}");
            continue;
        }
        if let Some(score) = layer.suggested_score {
            println!("Score: {score}/10");
        }
        if let Some(text) = layer.report_text() {
            println!("\n{text}");
        }
        if let Some(shape) = &layer.plot_shape {
            println!("\nStory shape: {} ({})", shape.shape_name, shape.justification);
            for point in &shape.points {
                println!(
                    "  t={:.2} fortune={:+.2} {}",
                    point.time, point.fortune, point.description
                );
            }
        }
        if let Some(items) = layer.improvement_items.as_ref().filter(|i| !i.is_empty()) {
            println!("\nPotential enhancements:");
            print_items(items);
        }
    }
    print_personnel(&state.personnel);
    if let Some(financials) = &state.financials {
        print_financials(financials);
    }
}

fn print_personnel(personnel: &PersonnelAggregate) {
    println!();
    if let Some(director) = &personnel.director {
        println!("Director: {director}");
    }
    if let Some(cast) = &personnel.cast {
        println!("Main cast: {}", cast.join(", "));
    }
    if !personnel.citations.is_empty() {
        println!("\nSources:");
        for citation in &personnel.citations {
            println!("  {} <{}>", citation.title, citation.uri);
        }
    }
}

fn print_financials(financials: &FinancialState) {
    println!("\n## Financials");
    match financials.effective_budget() {
        Some(budget) => {
            let source = if financials.is_budget_estimated() {
                "estimated"
            } else {
                "user supplied"
            };
            println!(
                "Budget: {} ({source})",
                money(budget, financials.currency.as_deref())
            );
        }
        None => println!(
            "Budget: {}",
            financials.budget_error.as_deref().unwrap_or("unknown")
        ),
    }
    if let Some(duration) = &financials.duration_estimate {
        println!("Duration: {duration}");
    }
    match (&financials.roi_text, &financials.roi_error) {
        (Some(roi), _) => println!("\n{roi}"),
        (None, Some(error)) => println!("ROI: {error}"),
        (None, None) => {}
    }
}

/// Print the final report.
pub fn print_report(report: &SummaryReport) {
    println!("\n## Summary report\n\n{}", report.body_text);
    if let Some(items) = report.overall_improvements.as_ref().filter(|i| !i.is_empty()) {
        println!("\nOverall improvement opportunities:");
        print_items(items);
    }
    if let Some(twitter) = &report.social_snippets.twitter {
        println!("\nTwitter:\n{twitter}");
    }
    if let Some(linkedin) = &report.social_snippets.linkedin {
        println!("\nLinkedIn:\n{linkedin}");
    }
}

/// Print a personnel deep dive.
pub fn print_personnel_analysis(analysis: &PersonnelAnalysis) {
    println!("\n## {} ({})\n\n{}", analysis.name, analysis.kind, analysis.text);
    for citation in &analysis.citations {
        println!("  {} <{}>", citation.title, citation.uri);
    }
}
