use crate::config::PricingConfig;
use crate::pricing::models::{CostBreakdown, MarkupScenario, QuoteRequest};
use crate::pricing::tiers::select_tier;

/// Compute the full cost breakdown for a bundle quote.
///
/// Pure function of the request, the static tier table, and the pricing
/// config. Never fails; degenerate inputs (empty bundle) produce zeros
/// rather than non-finite values.
pub fn compute_costs(request: &QuoteRequest, pricing: &PricingConfig) -> CostBreakdown {
    let minutes = request.total_minutes as f64;

    let tier = select_tier(request.total_minutes);
    // Included tiers bill no overage: a tier is only selected when the
    // bundle fits inside its allotment, so the rate clamps to zero.
    let orchestration_rate = tier.cost_per_minute.unwrap_or(0.0);
    let orchestration_cost = minutes * orchestration_rate;

    let llm_rate = pricing.llm_rates.rate_for(request.knowledge_base);
    let llm_cost = minutes * llm_rate;

    let telephony_cost = minutes * pricing.telephony_cost_per_minute;

    // Placeholder until line pricing is known; the field stays explicit.
    let phone_line_cost = 0.0;

    let extra_concurrency = request
        .concurrency_limit
        .saturating_sub(pricing.free_concurrency);
    let concurrency_cost = f64::from(extra_concurrency) * pricing.concurrency_cost_per_line * 12.0;

    let total = orchestration_cost + llm_cost + telephony_cost + phone_line_cost + concurrency_cost;
    let cost_per_minute = if request.total_minutes == 0 {
        0.0
    } else {
        total / minutes
    };

    CostBreakdown {
        tier_name: tier.name,
        orchestration_rate,
        orchestration_cost,
        llm_rate,
        llm_cost,
        telephony_cost,
        phone_line_cost,
        concurrency_cost,
        total,
        cost_per_minute,
    }
}

/// Derive resale scenarios from a breakdown, one per markup rate.
pub fn markup_scenarios(
    breakdown: &CostBreakdown,
    total_minutes: u64,
    markups: &[f64],
) -> Vec<MarkupScenario> {
    markups
        .iter()
        .map(|&markup| {
            let customer_price = breakdown.total * (1.0 + markup);
            let profit = breakdown.total * markup;
            let customer_cost_per_minute = if total_minutes == 0 {
                0.0
            } else {
                customer_price / total_minutes as f64
            };
            MarkupScenario {
                markup,
                customer_price,
                profit,
                customer_cost_per_minute,
            }
        })
        .collect()
}
