//! Post-scoring recommendation filters.
//!
//! All filters are AND-combined; an unset field means no constraint.

use rust_decimal::Decimal;

use crate::hotel::models::ScoredHotel;

#[derive(Debug, Clone, Default)]
pub struct RecommendationFilters {
    pub max_price: Option<Decimal>,
    /// Minimum user rating, 0-10 scale.
    pub min_rating: Option<Decimal>,
    /// Amenities the hotel must all offer.
    pub amenities: Vec<String>,
    pub min_recommendation_score: Option<Decimal>,
}

/// Drop scored hotels that violate any active filter. Order is preserved.
pub fn apply_filters(
    scored: Vec<ScoredHotel>,
    filters: &RecommendationFilters,
) -> Vec<ScoredHotel> {
    scored
        .into_iter()
        .filter(|hotel| passes(hotel, filters))
        .collect()
}

fn passes(scored: &ScoredHotel, filters: &RecommendationFilters) -> bool {
    if let Some(max_price) = filters.max_price {
        if scored.price > max_price {
            return false;
        }
    }
    if let Some(min_rating) = filters.min_rating {
        if scored.hotel.user_rating < min_rating {
            return false;
        }
    }
    if filters
        .amenities
        .iter()
        .any(|amenity| !scored.hotel.amenities.contains(amenity))
    {
        return false;
    }
    if let Some(min_score) = filters.min_recommendation_score {
        if scored.recommendation_score < min_score {
            return false;
        }
    }
    true
}
