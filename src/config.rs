use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pricing::models::KnowledgeBaseSize;
use crate::pricing::tiers;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub pricing: PricingConfig,
}

/// Pricing assumptions that can be overridden without a rebuild.
///
/// The orchestration tier table stays compiled in (`pricing::tiers`); only
/// scalar rates and the markup list are configurable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    pub telephony_cost_per_minute: f64,
    pub free_phone_lines: u32,
    pub free_concurrency: u32,
    /// Monthly rate per concurrent slot beyond the free allotment.
    pub concurrency_cost_per_line: f64,
    pub llm_rates: LlmRates,
    /// Resale markup rates as fractions, e.g. 0.20 for 20%.
    pub markups: Vec<f64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            telephony_cost_per_minute: tiers::TELEPHONY_COST_PER_MINUTE,
            free_phone_lines: tiers::FREE_PHONE_LINES,
            free_concurrency: tiers::FREE_CONCURRENCY,
            concurrency_cost_per_line: tiers::CONCURRENCY_COST_PER_LINE,
            llm_rates: LlmRates::default(),
            markups: tiers::DEFAULT_MARKUPS.to_vec(),
        }
    }
}

/// LLM rate per minute for each knowledge-base size.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmRates {
    pub none: f64,
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl Default for LlmRates {
    fn default() -> Self {
        Self {
            none: tiers::LLM_RATE_NONE,
            small: tiers::LLM_RATE_SMALL,
            medium: tiers::LLM_RATE_MEDIUM,
            large: tiers::LLM_RATE_LARGE,
        }
    }
}

impl LlmRates {
    pub fn rate_for(&self, size: KnowledgeBaseSize) -> f64 {
        match size {
            KnowledgeBaseSize::None => self.none,
            KnowledgeBaseSize::Small => self.small,
            KnowledgeBaseSize::Medium => self.medium,
            KnowledgeBaseSize::Large => self.large,
        }
    }
}

/// Load configuration from an optional TOML file layered with `PRICER__`
/// environment variables over the built-in defaults.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("PRICER").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    let pricing = &cfg.pricing;

    let rates = [
        ("telephony_cost_per_minute", pricing.telephony_cost_per_minute),
        ("concurrency_cost_per_line", pricing.concurrency_cost_per_line),
        ("llm_rates.none", pricing.llm_rates.none),
        ("llm_rates.small", pricing.llm_rates.small),
        ("llm_rates.medium", pricing.llm_rates.medium),
        ("llm_rates.large", pricing.llm_rates.large),
    ];
    for (name, rate) in rates {
        if !rate.is_finite() || rate < 0.0 {
            anyhow::bail!("Rate '{}' must be a non-negative finite number", name);
        }
    }

    if pricing.markups.is_empty() {
        anyhow::bail!("At least one markup rate must be configured");
    }
    for markup in &pricing.markups {
        if !markup.is_finite() || *markup < 0.0 {
            anyhow::bail!("Markup rate {} must be a non-negative finite number", markup);
        }
    }

    Ok(())
}
