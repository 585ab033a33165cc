use anyhow::Result;
use colored::Colorize;

use voice_pricer::format::{format_rate, group_thousands};
use voice_pricer::pricing::ORCHESTRATION_TIERS;

/// Execute the tiers command
///
/// Prints the orchestration tier table with each tier's minute range and
/// overage rate.
pub fn execute() -> Result<()> {
    println!("{}", "Orchestration Tiers (annual minutes)".bold());
    println!();

    let mut lower = 0u64;
    for tier in &ORCHESTRATION_TIERS {
        let range = match tier.max_annual_minutes {
            Some(max) => format!("{} – {}", group_thousands(lower), group_thousands(max)),
            None => format!("{} and up", group_thousands(lower)),
        };
        let rate = match tier.cost_per_minute {
            Some(rate) => format!("{}/min overage", format_rate(rate)),
            None => "included, no overage".dimmed().to_string(),
        };

        println!("  {:<12} {:<22} {}", tier.name.cyan(), range, rate);

        if let Some(max) = tier.max_annual_minutes {
            lower = max + 1;
        }
    }

    Ok(())
}
