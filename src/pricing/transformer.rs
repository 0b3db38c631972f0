//! Catalog -> display model transformation
//!
//! Derives per-plan feature lists and the flat overage-rate table consumed by
//! the pricing page. The source catalog is never modified: every call returns a
//! fresh [`DisplayModel`], so the same catalog can be transformed any number of
//! times, from any number of threads, with identical results.

use crate::error::PricingError;
use crate::pricing::models::{
    BillingRates, DisplayModel, EnrichedPlan, OverageRate, OverageRateTable, PlanCatalog,
    PlanDefinition, SubscriberTier, TierPricing,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Normalized key of the plan that never carries overage rates
pub const FREE_PLAN_KEY: &str = "free";

/// Minor currency units per major unit
const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Build the display model for a catalog
///
/// Fails fast on an empty catalog, a plan without tiers, an unknown default
/// tier, duplicate plans, a yearly factor outside (0, 12) or tier options that
/// are not strictly ascending.
pub fn compute_display_model(
    catalog: &PlanCatalog,
    subscriber_tier_options: &[u64],
    yearly_months_factor: f64,
) -> Result<DisplayModel, PricingError> {
    validate_yearly_months_factor(yearly_months_factor)?;
    validate_tier_options(subscriber_tier_options)?;

    if catalog.is_empty() {
        return Err(PricingError::EmptyCatalog);
    }

    let mut seen_names = HashSet::new();
    let mut seen_keys = HashSet::new();
    let mut enriched_catalog = Vec::with_capacity(catalog.len());
    let mut overage_rates = OverageRateTable::new();
    let mut plan_keys = Vec::with_capacity(catalog.len());

    for plan in &catalog.plans {
        let key = normalize_plan_key(&plan.name);
        if !seen_names.insert(plan.name.as_str()) {
            return Err(PricingError::DuplicatePlan(plan.name.clone()));
        }
        if !seen_keys.insert(key.clone()) {
            return Err(PricingError::DuplicatePlan(key));
        }

        let tier = select_tier(plan)?;
        let features = enrich_features(plan, &tier.pricing);

        if key != FREE_PLAN_KEY {
            let rate = overage_rate(&tier.pricing, yearly_months_factor);
            debug!(
                plan = %plan.name,
                tier = %tier.key,
                monthly_new_subscriber = rate.monthly.new_subscriber,
                monthly_account_subscriber = rate.monthly.account_subscriber,
                "Computed overage rates"
            );
            overage_rates.insert(key.clone(), rate);
        }

        plan_keys.push(plan.name.clone());
        enriched_catalog.push(EnrichedPlan {
            key,
            selected_tier: tier.key.clone(),
            definition: PlanDefinition {
                base_features: features,
                ..plan.clone()
            },
        });
    }

    info!(
        "Computed display model for {} plans ({} with overage rates)",
        enriched_catalog.len(),
        overage_rates.len()
    );

    Ok(DisplayModel {
        enriched_catalog,
        overage_rates,
        plan_keys,
        subscriber_tier_options: subscriber_tier_options.to_vec(),
    })
}

/// Lower-case the plan name and replace its first space with an underscore
///
/// Only the first space is replaced: "Pro Plus Max" becomes "pro_plus max".
pub fn normalize_plan_key(name: &str) -> String {
    name.to_lowercase().replacen(' ', "_", 1)
}

/// Pick the tier a plan is priced from
///
/// An explicit `default_tier` must exist; otherwise the first declared tier is used.
pub fn select_tier(plan: &PlanDefinition) -> Result<&SubscriberTier, PricingError> {
    if let Some(wanted) = &plan.default_tier {
        return plan
            .subscriber_tiers
            .iter()
            .find(|tier| &tier.key == wanted)
            .ok_or_else(|| PricingError::UnknownDefaultTier {
                plan: plan.name.clone(),
                tier: wanted.clone(),
            });
    }

    plan.subscriber_tiers
        .first()
        .ok_or_else(|| PricingError::NoSubscriberTiers {
            plan: plan.name.clone(),
        })
}

/// Base features plus the subscriber-cap and lead-magnet entries
fn enrich_features(plan: &PlanDefinition, pricing: &TierPricing) -> Vec<String> {
    let mut features = plan.base_features.clone();

    if let Some(limit) = pricing.included_subscriber_limit {
        features.push(subscriber_cap_feature(limit));
    }

    if let Some(types) = plan.lead_magnet_types.as_deref() {
        if !types.is_empty() {
            features.push(lead_magnet_feature(types));
        }
    }

    features
}

/// Feature line advertising the included subscriber cap
pub fn subscriber_cap_feature(limit: u64) -> String {
    format!("Store up to {} total subscribers*", format_number(limit))
}

/// Feature line listing lead magnet capabilities in declared order
pub fn lead_magnet_feature(types: &[String]) -> String {
    format!("Lead magnet types: {}", types.join(", "))
}

/// Monthly rates in major units; yearly rates discounted by the factor
fn overage_rate(pricing: &TierPricing, yearly_months_factor: f64) -> OverageRate {
    let monthly = BillingRates {
        new_subscriber: to_major_units(pricing.overage_price_per_subscriber),
        account_subscriber: to_major_units(pricing.account_overage_price_per_thousand),
    };

    OverageRate {
        monthly,
        yearly: BillingRates {
            new_subscriber: monthly.new_subscriber / yearly_months_factor,
            account_subscriber: monthly.account_subscriber / yearly_months_factor,
        },
    }
}

fn to_major_units(minor: Option<u32>) -> f64 {
    minor.map_or(0.0, |cents| f64::from(cents) / MINOR_UNITS_PER_MAJOR)
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let len = s.len();

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

pub(crate) fn validate_yearly_months_factor(factor: f64) -> Result<(), PricingError> {
    if !factor.is_finite() || factor <= 0.0 || factor >= 12.0 {
        return Err(PricingError::InvalidYearlyMonthsFactor(factor));
    }
    Ok(())
}

pub(crate) fn validate_tier_options(options: &[u64]) -> Result<(), PricingError> {
    if let Some(pair) = options.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(PricingError::InvalidTierOptions(format!(
            "{} is followed by {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}
