use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Knowledge-base size configured for the voice agent. Drives the LLM rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeBaseSize {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

/// Usage parameters for one bundle quote.
///
/// Fields are unsigned on purpose: the caller sanitizes raw input, and the
/// engine never sees a negative value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuoteRequest {
    pub total_minutes: u64,
    pub phone_lines: u32,
    pub concurrency_limit: u32,
    pub knowledge_base: KnowledgeBaseSize,
}

/// Cost breakdown for a bundle quote.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    /// Name of the selected orchestration tier.
    pub tier_name: &'static str,
    /// Effective orchestration rate per minute (0.0 for included tiers).
    pub orchestration_rate: f64,
    pub orchestration_cost: f64,
    pub llm_rate: f64,
    pub llm_cost: f64,
    pub telephony_cost: f64,
    /// Always 0.0 — line pricing is a placeholder pending real rates.
    pub phone_line_cost: f64,
    /// Annualized surcharge for concurrency beyond the included allotment.
    pub concurrency_cost: f64,
    pub total: f64,
    /// Blended cost per minute; 0.0 when the bundle is empty.
    pub cost_per_minute: f64,
}

/// Resale outcome for one markup rate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarkupScenario {
    /// Markup as a fraction, e.g. 0.20 for 20%.
    pub markup: f64,
    pub customer_price: f64,
    pub profit: f64,
    /// Price per minute the customer pays; 0.0 when the bundle is empty.
    pub customer_cost_per_minute: f64,
}
