//! `greybrainer analyze` handler.

use super::commands::{AnalyzeArgs, OutputFormat};
use super::render;
use greybrainer::{
    AnalysisInput, AnalysisOrchestrator, AnalysisPhase, BudgetStatus, GreybrainerConfig,
    GreybrainerResult, JsonError, PersonnelType, Session,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// What the user picked among suggested titles.
enum TitleChoice {
    Suggestion(usize),
    Original,
    Cancel,
}

/// Run one analysis from the command line.
pub async fn run_analyze(config: GreybrainerConfig, args: AnalyzeArgs) -> GreybrainerResult<()> {
    let session = Session::open(config)?;
    let orchestrator = session.orchestrator(args.provider)?;
    let renderer = tokio::spawn(render::follow(orchestrator.subscribe()));

    let input = AnalysisInput::new(args.title.as_str(), args.stage)
        .with_user_budget(args.budget)
        .with_roi(args.roi || args.budget.is_some());

    let phase = orchestrator.submit(input).await?;
    if phase == AnalysisPhase::AwaitingUserChoice
        && !resolve_title(&orchestrator, args.yes).await?
    {
        renderer.abort();
        println!("Analysis cancelled.");
        return Ok(());
    }

    let report = if args.report {
        match orchestrator.generate_report().await {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(error = %e, "Report generation failed");
                eprintln!("Report failed: {}", e.user_message());
                None
            }
        }
    } else {
        None
    };

    let director = orchestrator.state().personnel.director;
    let deep_dive = match director.filter(|_| args.director) {
        Some(name) => match orchestrator
            .analyze_personnel(&name, PersonnelType::Director)
            .await
        {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                eprintln!("Director deep dive failed: {}", e.user_message());
                None
            }
        },
        None => None,
    };
    renderer.abort();

    let state = orchestrator.state();
    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&state)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{json}");
        }
        OutputFormat::Human => {
            render::print_layers(&state);
            if let Some(report) = &report {
                render::print_report(report);
            }
            if let Some(analysis) = &deep_dive {
                render::print_personnel_analysis(analysis);
            }
            if let Some(error) = &state.error {
                eprintln!("\n{error}");
            }
        }
    }

    match session.ledger().budget_status() {
        Some(BudgetStatus::NearLimit) => {
            eprintln!("Warning: monthly token usage is nearing the configured allowance.")
        }
        Some(BudgetStatus::OverBudget) => {
            eprintln!("Warning: monthly token allowance exceeded.")
        }
        Some(BudgetStatus::WithinBudget) | None => {}
    }
    info!(tokens = session.ledger().tokens_this_month(), "Analysis finished");
    Ok(())
}

/// Settle a pending title choice. Returns false when the user cancels.
async fn resolve_title(orchestrator: &AnalysisOrchestrator, keep_original: bool) -> GreybrainerResult<bool> {
    let choice = if keep_original {
        TitleChoice::Original
    } else {
        prompt_choice(&orchestrator.state().suggestions).await
    };

    match choice {
        TitleChoice::Suggestion(index) => {
            orchestrator.choose_suggestion(index).await?;
        }
        TitleChoice::Original => {
            orchestrator.proceed_with_original().await?;
        }
        TitleChoice::Cancel => {
            orchestrator.cancel();
            return Ok(false);
        }
    }
    Ok(true)
}

async fn prompt_choice(suggestions: &[String]) -> TitleChoice {
    println!("Did you mean one of these?");
    for (i, title) in suggestions.iter().enumerate() {
        println!("  {}. {title}", i + 1);
    }
    println!("  0. Keep the title as entered");
    println!("  c. Cancel");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("Choice: ");
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            // Closed stdin keeps the original title
            Ok(None) | Err(_) => return TitleChoice::Original,
        };
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("c") {
            return TitleChoice::Cancel;
        }
        match answer.parse::<usize>() {
            Ok(0) => return TitleChoice::Original,
            Ok(n) if n <= suggestions.len() => return TitleChoice::Suggestion(n - 1),
            _ => eprintln!("Enter a number between 0 and {}, or c.", suggestions.len()),
        }
    }
}
