//! Deal discovery over the hotel catalog.
//!
//! Fetches candidates and prices from the injected collaborators, runs the
//! deal scorer per hotel, and ranks the survivors.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::catalog::{HotelCatalog, PriceFeed};
use crate::deals::score::score_deal;
use crate::error::AgentError;
use crate::hotel::models::{HotelDeal, HotelInsight, TopDeal};

/// Filters for deal discovery. Unset fields are unconstrained.
#[derive(Debug, Clone, Default)]
pub struct DealFilters {
    pub min_deal_score: Option<Decimal>,
}

pub struct DealDiscoveryAgent {
    catalog: Arc<dyn HotelCatalog>,
    prices: Arc<dyn PriceFeed>,
}

impl DealDiscoveryAgent {
    pub fn new(catalog: Arc<dyn HotelCatalog>, prices: Arc<dyn PriceFeed>) -> Self {
        Self { catalog, prices }
    }

    /// Find and rank deals for a location, best deal first.
    ///
    /// Each result is a fresh record embedding the catalog entity; inputs
    /// are never mutated. The sort is stable, so equally scored hotels
    /// keep the catalog's order.
    #[instrument(skip(self, filters))]
    pub async fn find_best_deals(
        &self,
        location: &str,
        filters: &DealFilters,
    ) -> Result<Vec<HotelDeal>, AgentError> {
        let hotels = self.catalog.hotels_in_location(location).await?;
        info!(count = hotels.len(), "Candidate hotels fetched");

        let min_score = filters.min_deal_score.unwrap_or(Decimal::ZERO);
        let mut deals = Vec::new();

        for hotel in hotels {
            let current = self.prices.current_price(&hotel.hotel_id).await?;
            let history = self.prices.historical_prices(&hotel.hotel_id).await?;

            let analysis = score_deal(&hotel, &current, &history)?;
            if analysis.deal_score < min_score {
                continue;
            }

            let deal_summary = analysis
                .deal_insights
                .first()
                .map(|insight| insight.description.clone());
            deals.push(HotelDeal {
                hotel,
                price: current.price,
                original_price: current.original_price,
                currency: current.currency,
                deal_score: analysis.deal_score,
                deal_summary,
            });
        }

        deals.sort_by(|a, b| b.deal_score.cmp(&a.deal_score));

        info!(deals = deals.len(), "Deals ranked");
        Ok(deals)
    }

    /// Generate annotated insights for a single hotel.
    #[instrument(skip(self))]
    pub async fn hotel_deal_insights(
        &self,
        hotel_id: &str,
    ) -> Result<Vec<HotelInsight>, AgentError> {
        let hotel = self
            .catalog
            .hotel_by_id(hotel_id)
            .await?
            .ok_or_else(|| AgentError::HotelNotFound {
                hotel_id: hotel_id.to_string(),
            })?;

        let current = self.prices.current_price(hotel_id).await?;
        let history = self.prices.historical_prices(hotel_id).await?;
        let analysis = score_deal(&hotel, &current, &history)?;

        let thumbnail = hotel.thumbnail_or_first_image();
        Ok(analysis
            .deal_insights
            .into_iter()
            .map(|insight| HotelInsight {
                hotel_id: hotel.hotel_id.clone(),
                hotel_name: hotel.name.clone(),
                thumbnail: thumbnail.clone(),
                insight,
            })
            .collect())
    }

    /// Top-deals feed: strong deals only, projected to compact summaries.
    #[instrument(skip(self))]
    pub async fn top_deals(
        &self,
        location: &str,
        min_deal_score: Decimal,
        limit: usize,
    ) -> Result<Vec<TopDeal>, AgentError> {
        let filters = DealFilters {
            min_deal_score: Some(min_deal_score),
        };
        let deals = self.find_best_deals(location, &filters).await?;
        Ok(deals.into_iter().take(limit).map(TopDeal::from).collect())
    }
}
