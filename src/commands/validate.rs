use anyhow::Result;
use colored::Colorize;
use pricing_page::config::Config;
use pricing_page::pricing::{compute_display_model, load_catalog_file, DisplayModel};
use tracing::info;

/// Execute the validate command
///
/// Loads the catalog and runs the full transformation without rendering
pub fn execute(cfg: &Config) -> Result<()> {
    println!("{}", "Validating pricing catalog...".yellow());
    info!("Validating catalog {}", cfg.pricing.catalog_path.display());

    let (catalog, hash) = load_catalog_file(&cfg.pricing.catalog_path)?;
    let model = compute_display_model(
        &catalog,
        &cfg.pricing.subscriber_tier_options,
        cfg.pricing.yearly_months_factor,
    )?;

    println!("{}", "✓ Pricing catalog is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Catalog: {}", cfg.pricing.catalog_path.display());
    println!("  SHA256: {}", hash);
    println!("  Yearly Months Factor: {}", cfg.pricing.yearly_months_factor);
    println!("  Slider Breakpoints: {}", model.subscriber_tier_options.len());
    println!("  Plans: {}", model.plan_keys.len());
    for line in plan_summary(&model) {
        println!("    {}", line);
    }

    info!("Catalog validation successful");
    Ok(())
}

/// One line per plan: name, key, selected tier and feature count
fn plan_summary(model: &DisplayModel) -> Vec<String> {
    model
        .enriched_catalog
        .iter()
        .map(|plan| {
            let rates = if model.overage_rates.contains_key(&plan.key) {
                "overage rates"
            } else {
                "no overage"
            };
            format!(
                "{} ({}) tier {} · {} features · {}",
                plan.definition.name,
                plan.key,
                plan.selected_tier,
                plan.definition.base_features.len(),
                rates
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_page::pricing::parse_catalog;
    use pricing_page::pricing::CatalogFormat;

    #[test]
    fn test_plan_summary() {
        let catalog = parse_catalog(
            r#"{"plans":[
                {"name":"Free","baseFeatures":["a"],"subscriberTiers":[{"key":"100","includedSubscriberLimit":100}]},
                {"name":"Growth","subscriberTiers":[{"key":"5000","overagePricePerSubscriber":150}]}
            ]}"#,
            CatalogFormat::Json,
        )
        .unwrap();
        let model = compute_display_model(&catalog, &[], 10.0).unwrap();

        let lines = plan_summary(&model);
        assert_eq!(lines[0], "Free (free) tier 100 · 2 features · no overage");
        assert_eq!(lines[1], "Growth (growth) tier 5000 · 0 features · overage rates");
    }
}
