use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static plan catalog, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCatalog {
    pub plans: Vec<PlanDefinition>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<PlanDefinition>) -> Self {
        Self { plans }
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// A named subscription offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub name: String,
    #[serde(default)]
    pub base_features: Vec<String>,
    #[serde(default)]
    pub subscriber_tiers: Vec<SubscriberTier>,
    /// Tier key to price from; the first tier when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_magnet_types: Option<Vec<String>>,
}

/// Subscriber-count bracket within a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberTier {
    pub key: String,
    #[serde(flatten)]
    pub pricing: TierPricing,
}

/// Tier prices, in minor currency units (cents)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_subscriber_limit: Option<u64>,
    /// Per subscriber beyond the included limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overage_price_per_subscriber: Option<u32>,
    /// Per 1,000 additional contacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_overage_price_per_thousand: Option<u32>,
}

/// Plan definition after feature enrichment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPlan {
    /// Normalized plan key
    pub key: String,
    /// Key of the tier the features and rates were derived from
    pub selected_tier: String,
    #[serde(flatten)]
    pub definition: PlanDefinition,
}

impl EnrichedPlan {
    /// Pricing of the selected tier
    pub fn tier_pricing(&self) -> Option<&TierPricing> {
        self.definition
            .subscriber_tiers
            .iter()
            .find(|tier| tier.key == self.selected_tier)
            .map(|tier| &tier.pricing)
    }
}

/// Billing cadence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    #[default]
    Monthly,
    Yearly,
}

impl std::fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// Unit overage rates in major currency units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRates {
    /// Per subscriber beyond the included limit
    pub new_subscriber: f64,
    /// Per 1,000 additional account contacts
    pub account_subscriber: f64,
}

/// Monthly and yearly overage rates for one plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverageRate {
    pub monthly: BillingRates,
    pub yearly: BillingRates,
}

impl OverageRate {
    pub fn for_interval(&self, interval: BillingInterval) -> &BillingRates {
        match interval {
            BillingInterval::Monthly => &self.monthly,
            BillingInterval::Yearly => &self.yearly,
        }
    }
}

/// Normalized plan key -> overage rates
pub type OverageRateTable = BTreeMap<String, OverageRate>;

/// Rendering-ready pricing model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    pub enriched_catalog: Vec<EnrichedPlan>,
    pub overage_rates: OverageRateTable,
    /// Plan display names, in catalog order
    pub plan_keys: Vec<String>,
    /// Slider breakpoints, passed through unchanged
    pub subscriber_tier_options: Vec<u64>,
}

impl DisplayModel {
    pub fn plan(&self, key: &str) -> Option<&EnrichedPlan> {
        self.enriched_catalog.iter().find(|plan| plan.key == key)
    }
}

/// Overage estimate for a subscriber count
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverageBreakdown {
    pub plan_key: String,
    pub interval: BillingInterval,
    pub subscribers: u64,
    pub included_subscribers: Option<u64>,
    pub billable_subscribers: u64,
    pub new_subscriber_rate: f64,
    pub new_subscriber_cost: f64,
}

impl OverageBreakdown {
    /// Create a zero-cost breakdown
    pub fn zero(plan_key: &str, interval: BillingInterval, subscribers: u64) -> Self {
        Self {
            plan_key: plan_key.to_string(),
            interval,
            subscribers,
            ..Self::default()
        }
    }
}
