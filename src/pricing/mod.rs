pub mod calculator;
pub mod models;
pub mod tiers;

pub use calculator::{compute_costs, markup_scenarios};
pub use models::{CostBreakdown, KnowledgeBaseSize, MarkupScenario, QuoteRequest};
pub use tiers::{select_tier, OrchestrationTier, ORCHESTRATION_TIERS};
