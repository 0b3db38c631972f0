use anyhow::{Context, Result};
use pricing_page::config::Config;
use pricing_page::pricing::PricingStore;
use std::path::PathBuf;
use tracing::info;

/// Execute the render command
///
/// Builds the pricing page payload and writes it as pretty JSON
pub fn execute(cfg: &Config, output: Option<PathBuf>) -> Result<()> {
    let store = PricingStore::load(cfg.pricing.clone())?;
    let snapshot = store.current();
    let json = snapshot.page.to_json_pretty()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Pricing page written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
