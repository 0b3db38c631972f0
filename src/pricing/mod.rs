pub mod calculator;
pub mod loader;
pub mod models;
pub mod page;
pub mod store;
pub mod transformer;

pub use calculator::OverageCalculator;
pub use loader::{calculate_hash, load_catalog_file, parse_catalog, CatalogFormat};
pub use models::{
    BillingInterval, BillingRates, DisplayModel, EnrichedPlan, OverageBreakdown, OverageRate,
    OverageRateTable, PlanCatalog, PlanDefinition, SubscriberTier, TierPricing,
};
pub use page::{PricingPage, SubscriptionSummary, DEFAULT_SUBSCRIBER_TIER_OPTIONS};
pub use store::{PricingSnapshot, PricingStore};
pub use transformer::{compute_display_model, normalize_plan_key};
