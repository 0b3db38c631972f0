use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use pricing_page::config::Config;
use pricing_page::pricing::PricingStore;

/// Execute the rates command
///
/// Displays monthly and yearly overage rates for every paid plan
pub fn execute(cfg: &Config) -> Result<()> {
    let store = PricingStore::load(cfg.pricing.clone())?;
    let snapshot = store.current();
    let page = &snapshot.page;

    println!(
        "Overage Rates (yearly factor: {}):",
        cfg.pricing.yearly_months_factor
    );
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("PLAN").fg(Color::Cyan),
        Cell::new("KEY").fg(Color::Cyan),
        Cell::new("MONTHLY / SUB").fg(Color::Cyan),
        Cell::new("MONTHLY / 1K").fg(Color::Cyan),
        Cell::new("YEARLY / SUB").fg(Color::Cyan),
        Cell::new("YEARLY / 1K").fg(Color::Cyan),
    ]);

    for plan in &page.pricing_data {
        let Some(rate) = page.overage_rates.get(&plan.key) else {
            continue;
        };

        table.add_row(vec![
            Cell::new(&plan.definition.name),
            Cell::new(&plan.key),
            Cell::new(format!("${:.4}", rate.monthly.new_subscriber)),
            Cell::new(format!("${:.4}", rate.monthly.account_subscriber)),
            Cell::new(format!("${:.4}", rate.yearly.new_subscriber)),
            Cell::new(format!("${:.4}", rate.yearly.account_subscriber)),
        ]);
    }

    println!("{}", table);
    Ok(())
}
