use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;

use hotel_deals_agent::catalog::mock::{MockCatalog, MockPriceFeed};
use hotel_deals_agent::config::AppConfig;
use hotel_deals_agent::deals::discovery::{DealDiscoveryAgent, DealFilters};
use hotel_deals_agent::hotel::models::{LocationPreferences, UserPreferences};
use hotel_deals_agent::monitoring::logger;
use hotel_deals_agent::recommend::engine::RecommendationAgent;
use hotel_deals_agent::recommend::filters::RecommendationFilters;

#[derive(Parser)]
#[command(
    name = "hotel-deals-agent",
    about = "Deal discovery and personalized recommendations over the hotel catalog"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank deals for a location, best first.
    Deals {
        #[arg(long)]
        location: String,
        /// Drop deals scoring below this value.
        #[arg(long)]
        min_deal_score: Option<Decimal>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Strong deals only, projected to compact summaries.
    TopDeals {
        #[arg(long)]
        location: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Deal insights for a single hotel.
    Insights {
        #[arg(long)]
        hotel_id: String,
    },
    /// Personalized recommendations for a location.
    Recommend {
        #[arg(long)]
        location: String,
        /// Nightly budget.
        #[arg(long)]
        budget: Option<Decimal>,
        /// Comma-separated preferred amenities.
        #[arg(long, value_delimiter = ',')]
        amenities: Vec<String>,
        /// Minimum acceptable user rating, 0-10.
        #[arg(long)]
        min_rating: Option<Decimal>,
        /// Comma-separated preferred neighborhoods.
        #[arg(long, value_delimiter = ',')]
        neighborhoods: Vec<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_from(&cli.config)?;

    logger::init_logging(&config.monitoring)?;

    let today = config
        .mock_data
        .anchor_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let catalog = Arc::new(MockCatalog::new());
    let prices = Arc::new(MockPriceFeed::new(today, config.mock_data.seed));

    match cli.command {
        Command::Deals {
            location,
            min_deal_score,
            limit,
        } => {
            let agent = DealDiscoveryAgent::new(catalog, prices);
            let filters = DealFilters { min_deal_score };
            let deals = agent.find_best_deals(&location, &filters).await?;
            let limit = limit.unwrap_or(config.search.default_limit);
            print_json(&deals.into_iter().take(limit).collect::<Vec<_>>())
        }
        Command::TopDeals { location, limit } => {
            let agent = DealDiscoveryAgent::new(catalog, prices);
            let limit = limit.unwrap_or(config.search.default_limit);
            let deals = agent
                .top_deals(&location, config.search.top_deal_min_score, limit)
                .await?;
            print_json(&deals)
        }
        Command::Insights { hotel_id } => {
            let agent = DealDiscoveryAgent::new(catalog, prices);
            let insights = agent.hotel_deal_insights(&hotel_id).await?;
            print_json(&insights)
        }
        Command::Recommend {
            location,
            budget,
            amenities,
            min_rating,
            neighborhoods,
            limit,
        } => {
            let agent = RecommendationAgent::new(catalog, prices);

            let amenities = if amenities.is_empty() {
                config.recommendation.default_amenities.clone()
            } else {
                amenities
            };
            let location_prefs = if neighborhoods.is_empty() {
                None
            } else {
                Some(LocationPreferences {
                    neighborhoods,
                    near_public_transport: false,
                })
            };
            let prefs = UserPreferences {
                budget,
                amenities,
                min_rating,
                location: location_prefs,
            };

            // Mirror the search surface: a little headroom over budget,
            // and only solid matches make the cut.
            let filters = RecommendationFilters {
                max_price: budget.map(|b| b * config.recommendation.budget_headroom),
                min_rating,
                amenities: Vec::new(),
                min_recommendation_score: Some(config.recommendation.min_recommendation_score),
            };

            let recommendations = agent.recommend(&prefs, &location, &filters).await?;
            let limit = limit.unwrap_or(config.search.default_limit);
            print_json(&recommendations.into_iter().take(limit).collect::<Vec<_>>())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
