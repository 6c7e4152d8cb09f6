//! `greybrainer usage` handler.

use greybrainer::{GreybrainerConfig, GreybrainerResult, Session, TokenBudgetConfig};

/// Print usage totals, optionally clearing the log or setting the allowance.
pub fn handle_usage(
    config: GreybrainerConfig,
    clear: bool,
    monthly_budget: Option<u64>,
) -> GreybrainerResult<()> {
    let session = Session::open(config)?;
    let ledger = session.ledger();

    if let Some(budget) = monthly_budget {
        let current = ledger.config();
        let updated = TokenBudgetConfig::builder()
            .enabled(*current.enabled())
            .max_log_entries(*current.max_log_entries())
            .warn_threshold(*current.warn_threshold())
            .monthly_token_budget(budget)
            .build();
        ledger.set_config(updated)?;
        println!("Monthly token allowance set to {budget}");
    }

    if clear {
        ledger.clear()?;
        println!("Usage log cleared");
        return Ok(());
    }

    let summary = ledger.summary();
    let config = ledger.config();
    println!(
        "Logging: {}",
        if *config.enabled() { "enabled" } else { "disabled" }
    );
    println!(
        "Entries: {} (kept up to {})",
        summary.entries,
        config.max_log_entries()
    );
    println!(
        "Characters: {} in / {} out",
        summary.input_chars, summary.output_chars
    );
    println!("Estimated tokens: {}", summary.tokens);
    for (operation, tokens) in &summary.tokens_by_operation {
        println!("  {operation:<28} {tokens}");
    }

    match (config.monthly_token_budget(), ledger.budget_status()) {
        (Some(limit), Some(status)) => println!(
            "This month: {} of {} tokens ({status})",
            ledger.tokens_this_month(),
            limit
        ),
        _ => println!("This month: {} tokens", ledger.tokens_this_month()),
    }
    Ok(())
}
