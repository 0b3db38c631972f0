use crate::error::PricingError;
use crate::pricing::models::{BillingInterval, DisplayModel, OverageBreakdown};
use crate::pricing::transformer::FREE_PLAN_KEY;
use std::sync::Arc;
use tracing::warn;

/// Calculator for overage charges at a given subscriber count
pub struct OverageCalculator {
    model: Arc<DisplayModel>,
}

impl OverageCalculator {
    /// Create a new overage calculator
    pub fn new(model: Arc<DisplayModel>) -> Self {
        Self { model }
    }

    /// Estimate new-subscriber overage for a plan
    ///
    /// Subscribers up to the included limit are free; a plan without a limit
    /// bills nothing. The free plan always yields a zero breakdown.
    pub fn estimate(
        &self,
        plan_key: &str,
        subscribers: u64,
        interval: BillingInterval,
    ) -> Result<OverageBreakdown, PricingError> {
        let plan = self
            .model
            .plan(plan_key)
            .ok_or_else(|| PricingError::UnknownPlan(plan_key.to_string()))?;

        if plan.key == FREE_PLAN_KEY {
            return Ok(OverageBreakdown::zero(plan_key, interval, subscribers));
        }

        let rate = match self.model.overage_rates.get(plan_key) {
            Some(r) => *r.for_interval(interval),
            None => {
                warn!("No overage rates for plan: {}", plan_key);
                return Ok(OverageBreakdown::zero(plan_key, interval, subscribers));
            }
        };

        let included = plan.tier_pricing().and_then(|p| p.included_subscriber_limit);
        let billable = included.map_or(0, |limit| subscribers.saturating_sub(limit));

        Ok(OverageBreakdown {
            plan_key: plan_key.to_string(),
            interval,
            subscribers,
            included_subscribers: included,
            billable_subscribers: billable,
            new_subscriber_rate: rate.new_subscriber,
            new_subscriber_cost: billable as f64 * rate.new_subscriber,
        })
    }

    /// Estimate every breakpoint of the pricing slider
    pub fn estimate_breakpoints(
        &self,
        plan_key: &str,
        interval: BillingInterval,
    ) -> Result<Vec<OverageBreakdown>, PricingError> {
        self.model
            .subscriber_tier_options
            .iter()
            .map(|&subscribers| self.estimate(plan_key, subscribers, interval))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{PlanCatalog, PlanDefinition, SubscriberTier, TierPricing};
    use crate::pricing::transformer::compute_display_model;

    fn create_test_calculator() -> OverageCalculator {
        let plan = |name: &str, limit: Option<u64>, per_sub: Option<u32>| PlanDefinition {
            name: name.to_string(),
            base_features: vec![],
            subscriber_tiers: vec![SubscriberTier {
                key: "default".to_string(),
                pricing: TierPricing {
                    included_subscriber_limit: limit,
                    overage_price_per_subscriber: per_sub,
                    account_overage_price_per_thousand: None,
                },
            }],
            default_tier: None,
            lead_magnet_types: None,
        };

        let catalog = PlanCatalog::new(vec![
            plan("Free", Some(100), Some(500)),
            plan("Growth", Some(5000), Some(150)),
            plan("Enterprise", None, Some(50)),
        ]);

        let model = compute_display_model(&catalog, &[0, 5000, 6000], 10.0).unwrap();
        OverageCalculator::new(Arc::new(model))
    }

    #[test]
    fn test_estimate_above_limit() {
        let calculator = create_test_calculator();

        let monthly = calculator.estimate("growth", 6000, BillingInterval::Monthly).unwrap();
        assert_eq!(monthly.included_subscribers, Some(5000));
        assert_eq!(monthly.billable_subscribers, 1000);
        assert!((monthly.new_subscriber_cost - 1500.0).abs() < 1e-6);

        let yearly = calculator.estimate("growth", 6000, BillingInterval::Yearly).unwrap();
        assert!((yearly.new_subscriber_rate - 0.15).abs() < 1e-9);
        assert!((yearly.new_subscriber_cost - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_estimate_within_limit() {
        let calculator = create_test_calculator();

        let breakdown = calculator.estimate("growth", 4000, BillingInterval::Monthly).unwrap();
        assert_eq!(breakdown.billable_subscribers, 0);
        assert_eq!(breakdown.new_subscriber_cost, 0.0);
    }

    #[test]
    fn test_free_plan_is_zero() {
        let calculator = create_test_calculator();

        let breakdown = calculator.estimate("free", 10_000, BillingInterval::Monthly).unwrap();
        assert_eq!(breakdown.new_subscriber_cost, 0.0);
        assert_eq!(breakdown.subscribers, 10_000);
    }

    #[test]
    fn test_plan_without_limit_bills_nothing() {
        let calculator = create_test_calculator();

        let breakdown = calculator.estimate("enterprise", 50_000, BillingInterval::Monthly).unwrap();
        assert_eq!(breakdown.included_subscribers, None);
        assert_eq!(breakdown.billable_subscribers, 0);
    }

    #[test]
    fn test_unknown_plan() {
        let calculator = create_test_calculator();

        let result = calculator.estimate("platinum", 10, BillingInterval::Monthly);
        assert!(matches!(result, Err(PricingError::UnknownPlan(ref key)) if key == "platinum"));
    }

    #[test]
    fn test_estimate_breakpoints() {
        let calculator = create_test_calculator();

        let estimates = calculator
            .estimate_breakpoints("growth", BillingInterval::Monthly)
            .unwrap();
        let billable: Vec<u64> = estimates.iter().map(|e| e.billable_subscribers).collect();
        assert_eq!(billable, vec![0, 0, 1000]);
    }
}
