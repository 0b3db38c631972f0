use anyhow::Result;
use colored::Colorize;
use pricing_page::config::Config;
use pricing_page::pricing::{
    compute_display_model, load_catalog_file, BillingInterval, OverageCalculator,
};
use pricing_page::pricing::transformer::format_number;
use std::sync::Arc;
use tracing::info;

/// Execute the quote command
pub fn execute(cfg: &Config, plan: &str, subscribers: u64, yearly: bool) -> Result<()> {
    let (catalog, _) = load_catalog_file(&cfg.pricing.catalog_path)?;
    let model = compute_display_model(
        &catalog,
        &cfg.pricing.subscriber_tier_options,
        cfg.pricing.yearly_months_factor,
    )?;

    let interval = if yearly {
        BillingInterval::Yearly
    } else {
        BillingInterval::Monthly
    };

    let calculator = OverageCalculator::new(Arc::new(model));
    let breakdown = calculator.estimate(plan, subscribers, interval)?;
    info!(plan, subscribers, %interval, "Computed overage estimate");

    println!("{}", format!("Overage quote for '{}' ({})", plan, interval).bold());
    println!("  {}: {}", "Subscribers".cyan(), format_number(breakdown.subscribers));
    println!(
        "  {}: {}",
        "Included".cyan(),
        breakdown
            .included_subscribers
            .map(format_number)
            .unwrap_or_else(|| "unlimited".to_string())
    );
    println!("  {}: {}", "Billable".cyan(), format_number(breakdown.billable_subscribers));
    println!("  {}: ${:.4}", "Rate / subscriber".cyan(), breakdown.new_subscriber_rate);
    println!(
        "  {}: {}",
        "Overage".cyan(),
        format!("${:.2}", breakdown.new_subscriber_cost).green()
    );

    Ok(())
}
