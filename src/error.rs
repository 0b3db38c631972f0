use thiserror::Error;

/// Pricing error types
#[derive(Debug, Error)]
pub enum PricingError {
    /// Catalog contains no plans
    #[error("Configuration error: pricing catalog has no plans")]
    EmptyCatalog,

    /// A plan has no subscriber tiers to price from
    #[error("Configuration error: plan '{plan}' has no subscriber tiers")]
    NoSubscriberTiers { plan: String },

    /// A plan's `defaultTier` names a tier that does not exist
    #[error("Configuration error: plan '{plan}' selects unknown default tier '{tier}'")]
    UnknownDefaultTier { plan: String, tier: String },

    /// Two plans share a display name or a normalized key
    #[error("Configuration error: duplicate plan '{0}'")]
    DuplicatePlan(String),

    /// Yearly discount denominator outside (0, 12)
    #[error("Configuration error: yearly months factor must be in (0, 12), got {0}")]
    InvalidYearlyMonthsFactor(f64),

    /// Slider breakpoints are not strictly ascending
    #[error("Configuration error: subscriber tier options must be strictly ascending ({0})")]
    InvalidTierOptions(String),

    /// Lookup of a plan key that is not in the rate table
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// Catalog could not be decoded
    #[error("Failed to parse pricing catalog: {0}")]
    Parse(String),

    /// Catalog file could not be read
    #[error("Failed to read pricing catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl PricingError {
    /// Short machine-readable name, used in structured log fields
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::EmptyCatalog => "empty_catalog",
            Self::NoSubscriberTiers { .. } => "no_subscriber_tiers",
            Self::UnknownDefaultTier { .. } => "unknown_default_tier",
            Self::DuplicatePlan(_) => "duplicate_plan",
            Self::InvalidYearlyMonthsFactor(_) => "invalid_yearly_months_factor",
            Self::InvalidTierOptions(_) => "invalid_tier_options",
            Self::UnknownPlan(_) => "unknown_plan",
            Self::Parse(_) => "parse_error",
            Self::Io(_) => "io_error",
        }
    }
}

impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for PricingError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(format!("TOML error: {}", err))
    }
}
