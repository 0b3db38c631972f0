use crate::config::PricingConfig;
use crate::error::PricingError;
use crate::pricing::loader::load_catalog_file;
use crate::pricing::page::PricingPage;
use crate::pricing::transformer::compute_display_model;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{error, info};

/// Immutable pricing page built from one version of the catalog
#[derive(Debug)]
pub struct PricingSnapshot {
    /// SHA256 of the catalog file content
    pub hash: String,
    pub page: PricingPage,
}

/// Shared pricing snapshot, swapped atomically on reload
///
/// Readers never block and always see a complete page; the catalog is
/// transformed once per version rather than once per request.
pub struct PricingStore {
    settings: PricingConfig,
    snapshot: ArcSwap<PricingSnapshot>,
}

impl PricingStore {
    /// Load the catalog and build the first snapshot
    pub fn load(settings: PricingConfig) -> Result<Self, PricingError> {
        let snapshot = build_snapshot(&settings)?;
        info!(
            "Pricing store ready: {} plans, catalog hash {}",
            snapshot.page.plan_types.len(),
            &snapshot.hash[..12]
        );

        Ok(Self {
            settings,
            snapshot: ArcSwap::from_pointee(snapshot),
        })
    }

    /// Current snapshot
    pub fn current(&self) -> Arc<PricingSnapshot> {
        self.snapshot.load_full()
    }

    pub fn settings(&self) -> &PricingConfig {
        &self.settings
    }

    /// Re-read the catalog and swap in a new snapshot if its content changed
    ///
    /// Returns true if the snapshot was replaced. On error the previous
    /// snapshot stays in place.
    pub fn reload(&self) -> Result<bool, PricingError> {
        let (catalog, hash) = match load_catalog_file(&self.settings.catalog_path) {
            Ok(loaded) => loaded,
            Err(e) => {
                error!("Pricing catalog reload failed: {}", e);
                return Err(e);
            }
        };

        if self.snapshot.load().hash == hash {
            info!("Pricing catalog unchanged (no reload needed)");
            return Ok(false);
        }

        let model = match compute_display_model(
            &catalog,
            &self.settings.subscriber_tier_options,
            self.settings.yearly_months_factor,
        ) {
            Ok(model) => model,
            Err(e) => {
                error!(error_type = e.type_name(), "Rejecting pricing catalog reload: {}", e);
                return Err(e);
            }
        };

        self.snapshot.store(Arc::new(PricingSnapshot {
            hash,
            page: PricingPage::build(model),
        }));
        info!("Pricing catalog reloaded successfully");

        Ok(true)
    }
}

fn build_snapshot(settings: &PricingConfig) -> Result<PricingSnapshot, PricingError> {
    let (catalog, hash) = load_catalog_file(&settings.catalog_path)?;
    let model = compute_display_model(
        &catalog,
        &settings.subscriber_tier_options,
        settings.yearly_months_factor,
    )?;

    Ok(PricingSnapshot {
        hash,
        page: PricingPage::build(model),
    })
}
