use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use voice_pricer::config;
use voice_pricer::pricing::ORCHESTRATION_TIERS;

/// Execute the config show command
///
/// Displays the effective configuration (file and environment layered over
/// defaults) in TOML format.
pub fn show(config_path: &Path) -> Result<()> {
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Effective Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Orchestration Tiers: {}", ORCHESTRATION_TIERS.len());
    println!("  Markup Rates: {}", cfg.pricing.markups.len());
    println!(
        "  Telephony: ${:.4}/min",
        cfg.pricing.telephony_cost_per_minute
    );
    println!(
        "  Free Concurrency: {} slots (${}/slot/mo after)",
        cfg.pricing.free_concurrency, cfg.pricing.concurrency_cost_per_line
    );

    info!("Configuration validation successful");
    Ok(())
}
