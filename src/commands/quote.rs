use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use voice_pricer::config;
use voice_pricer::format::{format_percent, format_rate, format_usd, group_thousands};
use voice_pricer::pricing::{compute_costs, markup_scenarios, QuoteRequest};

/// Execute the quote command
///
/// Computes the cost breakdown for a bundle and prints it together with the
/// resale markup scenarios.
pub fn execute(config_path: &Path, request: QuoteRequest, json: bool) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    info!(
        minutes = request.total_minutes,
        concurrency = request.concurrency_limit,
        "Computing bundle quote"
    );

    let breakdown = compute_costs(&request, &cfg.pricing);
    let scenarios = markup_scenarios(&breakdown, request.total_minutes, &cfg.pricing.markups);

    if json {
        let out = serde_json::json!({
            "request": request,
            "breakdown": breakdown,
            "scenarios": scenarios,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let minutes = group_thousands(request.total_minutes);

    println!("{}", "Bundle Cost Breakdown".bold());
    println!(
        "  {}: {} minutes ({} tier)",
        "Bundle".cyan(),
        minutes,
        breakdown.tier_name.bold()
    );
    println!();

    print_line(
        "Orchestration",
        &format!("{}/min × {} min", format_rate(breakdown.orchestration_rate), minutes),
        breakdown.orchestration_cost,
    );
    print_line(
        "LLM",
        &format!("{}/min × {} min", format_rate(breakdown.llm_rate), minutes),
        breakdown.llm_cost,
    );
    print_line(
        "Telephony",
        &format!(
            "{}/min × {} min",
            format_rate(cfg.pricing.telephony_cost_per_minute),
            minutes
        ),
        breakdown.telephony_cost,
    );
    print_line(
        "Phone lines",
        &format!(
            "{} lines, {} included",
            request.phone_lines, cfg.pricing.free_phone_lines
        ),
        breakdown.phone_line_cost,
    );

    let extra_concurrency = request
        .concurrency_limit
        .saturating_sub(cfg.pricing.free_concurrency);
    if extra_concurrency > 0 {
        print_line(
            "Concurrency (annual)",
            &format!(
                "{} slots × {}/mo × 12",
                extra_concurrency,
                format_usd(cfg.pricing.concurrency_cost_per_line)
            ),
            breakdown.concurrency_cost,
        );
    }

    println!();
    println!(
        "  {:<22} {}",
        "Total bundle cost".bold(),
        format_usd(breakdown.total).green().bold()
    );
    println!(
        "  {:<22} {}",
        "Effective cost/minute",
        format_rate(breakdown.cost_per_minute)
    );

    println!();
    println!("{}", "Revenue & Margin Scenarios".bold());
    for scenario in &scenarios {
        println!();
        println!("  {} {}", format_percent(scenario.markup).bold(), "markup".bold());
        println!(
            "    {:<22} {}",
            "Customer price".cyan(),
            format_usd(scenario.customer_price)
        );
        println!(
            "    {:<22} {}",
            "Profit".cyan(),
            format_usd(scenario.profit).green()
        );
        println!(
            "    {:<22} {}",
            "Customer cost/minute".cyan(),
            format_rate(scenario.customer_cost_per_minute)
        );
    }

    info!(total = breakdown.total, "Quote computed");
    Ok(())
}

fn print_line(label: &str, detail: &str, amount: f64) {
    println!(
        "  {:<22} {:<36} {}",
        label.cyan(),
        detail.dimmed(),
        format_usd(amount)
    );
}
