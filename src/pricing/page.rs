use crate::pricing::models::{BillingInterval, DisplayModel, EnrichedPlan, OverageRateTable};
use serde::Serialize;

/// Stock slider breakpoints for the pricing calculator
pub const DEFAULT_SUBSCRIBER_TIER_OPTIONS: &[u64] = &[
    0, 25, 50, 75, 100, 125, 150, 175, 200, 250, 300, 350, 400, 500, 600, 700, 800, 900, 1000,
    1200, 1400, 1600, 1800, 2000, 2500, 3000, 3500, 4000, 4500, 5000, 6000, 7000, 8000, 9000,
    10000, 15000, 15001,
];

/// Subscription shown to a visitor with no account
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub status: String,
    pub plan_name: String,
    pub billing_interval: BillingInterval,
}

impl Default for SubscriptionSummary {
    fn default() -> Self {
        Self {
            status: "none".to_string(),
            plan_name: "Free".to_string(),
            billing_interval: BillingInterval::Monthly,
        }
    }
}

/// Payload handed to the pricing page renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPage {
    pub subscription: SubscriptionSummary,
    pub is_annual: bool,
    pub overage_rates: OverageRateTable,
    pub subscriber_tier_options: Vec<u64>,
    pub plan_types: Vec<String>,
    pub pricing_data: Vec<EnrichedPlan>,
    pub show_sidebar: bool,
}

impl PricingPage {
    /// Wrap a display model with the page defaults (monthly billing, no sidebar)
    pub fn build(model: DisplayModel) -> Self {
        Self {
            subscription: SubscriptionSummary::default(),
            is_annual: false,
            overage_rates: model.overage_rates,
            subscriber_tier_options: model.subscriber_tier_options,
            plan_types: model.plan_keys,
            pricing_data: model.enriched_catalog,
            show_sidebar: false,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{PlanCatalog, PlanDefinition, SubscriberTier, TierPricing};
    use crate::pricing::transformer::compute_display_model;

    #[test]
    fn test_default_tier_options_ascend() {
        assert!(DEFAULT_SUBSCRIBER_TIER_OPTIONS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(DEFAULT_SUBSCRIBER_TIER_OPTIONS.first(), Some(&0));
        assert_eq!(DEFAULT_SUBSCRIBER_TIER_OPTIONS.last(), Some(&15001));
    }

    #[test]
    fn test_page_json_shape() {
        let catalog = PlanCatalog::new(vec![PlanDefinition {
            name: "Growth".to_string(),
            base_features: vec![],
            subscriber_tiers: vec![SubscriberTier {
                key: "5000".to_string(),
                pricing: TierPricing {
                    included_subscriber_limit: Some(5000),
                    overage_price_per_subscriber: Some(150),
                    account_overage_price_per_thousand: Some(300),
                },
            }],
            default_tier: None,
            lead_magnet_types: None,
        }]);
        let model = compute_display_model(&catalog, DEFAULT_SUBSCRIBER_TIER_OPTIONS, 10.0).unwrap();

        let page = PricingPage::build(model);
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["subscription"]["status"], "none");
        assert_eq!(value["subscription"]["planName"], "Free");
        assert_eq!(value["subscription"]["billingInterval"], "monthly");
        assert_eq!(value["isAnnual"], false);
        assert_eq!(value["showSidebar"], false);
        assert_eq!(value["planTypes"][0], "Growth");
        assert_eq!(value["overageRates"]["growth"]["monthly"]["newSubscriber"], 1.5);
        assert_eq!(value["pricingData"][0]["key"], "growth");
        assert_eq!(value["pricingData"][0]["selectedTier"], "5000");
        assert_eq!(
            value["pricingData"][0]["baseFeatures"][0],
            "Store up to 5,000 total subscribers*"
        );
        assert_eq!(
            value["pricingData"][0]["subscriberTiers"][0]["overagePricePerSubscriber"],
            150
        );
        assert_eq!(
            value["subscriberTierOptions"].as_array().unwrap().len(),
            DEFAULT_SUBSCRIBER_TIER_OPTIONS.len()
        );
    }
}
