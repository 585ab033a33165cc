//! Static pricing reference tables.
//!
//! Values come from the upstream providers' published pricing (orchestration
//! tiers converted to annual from monthly plans). When provider pricing
//! changes, update the constants here.

/// One orchestration volume bracket.
#[derive(Debug, Clone, Copy)]
pub struct OrchestrationTier {
    pub name: &'static str,
    /// Upper bound in annual minutes, inclusive. `None` means unbounded.
    pub max_annual_minutes: Option<u64>,
    /// Overage rate per minute. `None` means usage is included in the plan
    /// and no overage is billed.
    pub cost_per_minute: Option<f64>,
}

/// Orchestration tiers ordered ascending by upper bound. The last tier is
/// unbounded so every minute count maps to a tier.
pub const ORCHESTRATION_TIERS: [OrchestrationTier; 7] = [
    OrchestrationTier {
        name: "Free",
        max_annual_minutes: Some(180), // 15 min/mo
        cost_per_minute: None,
    },
    OrchestrationTier {
        name: "Starter",
        max_annual_minutes: Some(600), // 50 min/mo
        cost_per_minute: None,
    },
    OrchestrationTier {
        name: "Creator",
        max_annual_minutes: Some(3_000), // 250 min/mo
        cost_per_minute: Some(0.12),
    },
    OrchestrationTier {
        name: "Pro",
        max_annual_minutes: Some(13_200), // 1,100 min/mo
        cost_per_minute: Some(0.11),
    },
    OrchestrationTier {
        name: "Scale",
        max_annual_minutes: Some(43_200), // 3,600 min/mo
        cost_per_minute: Some(0.10),
    },
    OrchestrationTier {
        name: "Business",
        max_annual_minutes: Some(165_000), // 13,750 min/mo
        cost_per_minute: Some(0.096),
    },
    OrchestrationTier {
        name: "Enterprise",
        max_annual_minutes: None, // Business rate for anything above
        cost_per_minute: Some(0.096),
    },
];

/// Default LLM rate per minute by knowledge-base size (Gemini 2.0 Flash).
pub const LLM_RATE_NONE: f64 = 0.001;
pub const LLM_RATE_SMALL: f64 = 0.005;
pub const LLM_RATE_MEDIUM: f64 = 0.010;
pub const LLM_RATE_LARGE: f64 = 0.012;

/// Default telephony (Twilio) rate per minute.
pub const TELEPHONY_COST_PER_MINUTE: f64 = 0.016;

/// Phone lines included with the plan.
pub const FREE_PHONE_LINES: u32 = 2;

/// Concurrent call slots included with the plan.
pub const FREE_CONCURRENCY: u32 = 15;

/// Monthly surcharge per concurrent slot beyond the included allotment.
pub const CONCURRENCY_COST_PER_LINE: f64 = 10.0;

/// Default resale markup rates.
pub const DEFAULT_MARKUPS: [f64; 3] = [0.20, 0.30, 0.40];

/// Select the orchestration tier for a bundle size.
///
/// First-match linear scan over the table; upper bounds are inclusive. The
/// unbounded last tier guarantees a match, but we still fall back to it
/// explicitly rather than panic.
pub fn select_tier(total_minutes: u64) -> &'static OrchestrationTier {
    ORCHESTRATION_TIERS
        .iter()
        .find(|tier| match tier.max_annual_minutes {
            Some(max) => total_minutes <= max,
            None => true,
        })
        .unwrap_or(&ORCHESTRATION_TIERS[ORCHESTRATION_TIERS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_ordered_and_end_unbounded() {
        let mut previous = 0u64;
        for tier in &ORCHESTRATION_TIERS[..ORCHESTRATION_TIERS.len() - 1] {
            let max = tier.max_annual_minutes.expect("only the last tier is unbounded");
            assert!(max > previous, "tier {} breaks ascending order", tier.name);
            previous = max;
        }
        assert!(ORCHESTRATION_TIERS.last().unwrap().max_annual_minutes.is_none());
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(select_tier(180).name, "Free");
        assert_eq!(select_tier(181).name, "Starter");
        assert_eq!(select_tier(3_000).name, "Creator");
        assert_eq!(select_tier(3_001).name, "Pro");
        assert_eq!(select_tier(13_200).name, "Pro");
        assert_eq!(select_tier(165_000).name, "Business");
    }

    #[test]
    fn test_zero_minutes_selects_first_tier() {
        assert_eq!(select_tier(0).name, "Free");
    }

    #[test]
    fn test_huge_bundle_falls_into_unbounded_tier() {
        let tier = select_tier(u64::MAX);
        assert_eq!(tier.name, "Enterprise");
        assert_eq!(tier.cost_per_minute, Some(0.096));
    }

    #[test]
    fn test_only_first_two_tiers_are_included() {
        for (idx, tier) in ORCHESTRATION_TIERS.iter().enumerate() {
            if idx < 2 {
                assert!(tier.cost_per_minute.is_none(), "{} should be included", tier.name);
            } else {
                assert!(tier.cost_per_minute.is_some(), "{} should have a rate", tier.name);
            }
        }
    }
}
