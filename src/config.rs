use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub recommendation: RecommendationConfig,
    pub mock_data: MockDataConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Deal score a hotel must clear to appear on the top-deals feed.
    pub top_deal_min_score: Decimal,
    /// Number of results returned when the caller states no limit.
    pub default_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Recommendations below this composite score are dropped.
    pub min_recommendation_score: Decimal,
    /// Price ceiling as a multiple of the stated budget.
    pub budget_headroom: Decimal,
    /// Amenities assumed when the caller states none.
    pub default_amenities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MockDataConfig {
    /// Seed for the historical price generator. Same seed, same prices.
    pub seed: u64,
    /// Anchor date for the trailing price window. Today when unset.
    pub anchor_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from config/default.toml, with a .env overlay
    /// for environment-driven settings such as RUST_LOG.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new("config/default.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
