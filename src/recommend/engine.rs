//! Personalized recommendation pipeline.
//!
//! Fetches candidates from the catalog, scores each against the traveler's
//! preferences (embedding a deal-scoring pass per hotel), filters, ranks,
//! and attaches explanations.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, instrument, warn};

use crate::catalog::{HotelCatalog, PriceFeed};
use crate::deals::score::score_deal;
use crate::error::AgentError;
use crate::hotel::models::{
    Hotel, PricePoint, RecommendationFactors, RecommendedHotel, ScoredHotel, UserPreferences,
};
use crate::recommend::explain::explain_recommendations;
use crate::recommend::filters::{apply_filters, RecommendationFilters};
use crate::recommend::score::score_for_user;

pub struct RecommendationAgent {
    catalog: Arc<dyn HotelCatalog>,
    prices: Arc<dyn PriceFeed>,
}

impl RecommendationAgent {
    pub fn new(catalog: Arc<dyn HotelCatalog>, prices: Arc<dyn PriceFeed>) -> Self {
        Self { catalog, prices }
    }

    /// Generate ranked, explained recommendations for a location.
    ///
    /// Sorting happens before explanation generation; attaching
    /// explanations never reorders the results.
    #[instrument(skip(self, prefs, filters))]
    pub async fn recommend(
        &self,
        prefs: &UserPreferences,
        location: &str,
        filters: &RecommendationFilters,
    ) -> Result<Vec<RecommendedHotel>, AgentError> {
        let hotels = self.catalog.hotels_in_location(location).await?;
        info!(count = hotels.len(), "Scoring hotels for user");

        let mut scored = Vec::with_capacity(hotels.len());
        for hotel in hotels {
            let current = self.prices.current_price(&hotel.hotel_id).await?;
            let (recommendation_score, factor_scores) =
                self.score_for_user(&hotel, &current, prefs).await;

            scored.push(ScoredHotel {
                price: current.price,
                original_price: current.original_price,
                currency: current.currency,
                recommendation_score,
                factor_scores,
                hotel,
            });
        }

        let mut filtered = apply_filters(scored, filters);
        // Stable sort keeps catalog order between equal scores.
        filtered.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));

        info!(recommendations = filtered.len(), "Recommendations ranked");
        Ok(explain_recommendations(filtered, prefs))
    }

    /// Score a single hotel against the traveler's preferences,
    /// resolving the deal sub-score internally.
    pub async fn score_for_user(
        &self,
        hotel: &Hotel,
        current: &PricePoint,
        prefs: &UserPreferences,
    ) -> (Decimal, RecommendationFactors) {
        let deal = self.deal_sub_score(hotel, current).await;
        score_for_user(hotel, current, prefs, deal)
    }

    /// Resolve the deal sub-score for one hotel.
    ///
    /// An upstream-attached score takes precedence; otherwise the full
    /// deal scorer runs over fetched history. Any failure along that path
    /// degrades to a neutral 50 so one hotel's bad feed cannot sink the
    /// whole batch.
    async fn deal_sub_score(&self, hotel: &Hotel, current: &PricePoint) -> Decimal {
        if let Some(score) = hotel.deal_score {
            return score;
        }

        let history = match self.prices.historical_prices(&hotel.hotel_id).await {
            Ok(history) => history,
            Err(error) => {
                warn!(
                    hotel_id = %hotel.hotel_id,
                    %error,
                    "History fetch failed; using neutral deal score"
                );
                return dec!(50);
            }
        };

        match score_deal(hotel, current, &history) {
            Ok(analysis) => analysis.deal_score,
            Err(error) => {
                warn!(
                    hotel_id = %hotel.hotel_id,
                    %error,
                    "Deal scoring failed; using neutral deal score"
                );
                dec!(50)
            }
        }
    }
}
