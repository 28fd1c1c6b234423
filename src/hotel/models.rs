use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Our domain representation of a bookable hotel.
///
/// Entities are constructed fresh per request from the catalog collaborator
/// and never mutated by the scoring pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub address: Address,
    /// 1-5 stars.
    pub star_rating: u8,
    /// Review average on a 0-10 scale.
    pub user_rating: Decimal,
    pub amenities: Vec<String>,
    /// Deal score attached by an upstream scoring pass. When present the
    /// recommendation engine uses it instead of rescoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_score: Option<Decimal>,
}

impl Hotel {
    /// Thumbnail for list views, falling back to the first gallery image.
    pub fn thumbnail_or_first_image(&self) -> Option<String> {
        self.thumbnail
            .clone()
            .or_else(|| self.images.first().cloned())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub near_public_transport: bool,
}

/// A quoted nightly rate for a stay window.
///
/// Used both as the current quote and as an element of a hotel's trailing
/// price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: Decimal,
    /// Provider's pre-discount rate, when the quote is marked down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub currency: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

/// Sub-scores feeding the composite deal score, each 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealFactors {
    pub historical_comparison: Decimal,
    pub value_assessment: Decimal,
    pub seasonal_factor: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    PriceDrop,
    GoodValue,
    SeasonalDeal,
    /// Part of the insight vocabulary; the current generator never emits it.
    HighRating,
}

/// A generated statement about why a deal is good. Ephemeral, produced
/// per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealInsight {
    pub insight_type: InsightKind,
    pub description: String,
    /// 0-100; carries the triggering sub-score.
    pub confidence_score: Decimal,
}

/// A deal insight annotated with the hotel it belongs to, as returned by
/// the per-hotel insight lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelInsight {
    pub hotel_id: String,
    pub hotel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub insight: DealInsight,
}

/// A ranked deal-search result: the candidate hotel plus its current quote
/// and composite deal score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelDeal {
    pub hotel: Hotel,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub currency: String,
    pub deal_score: Decimal,
    /// First generated insight, surfaced as a one-line summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_summary: Option<String>,
}

/// Compact projection of a ranked deal, as surfaced on the top-deals feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDeal {
    pub hotel_id: String,
    pub hotel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub currency: String,
    pub deal_score: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_summary: Option<String>,
}

impl From<HotelDeal> for TopDeal {
    fn from(deal: HotelDeal) -> Self {
        let HotelDeal {
            hotel,
            price,
            original_price,
            currency,
            deal_score,
            deal_summary,
        } = deal;
        let thumbnail = hotel.thumbnail_or_first_image();
        Self {
            hotel_id: hotel.hotel_id,
            hotel_name: hotel.name,
            thumbnail,
            price,
            original_price,
            currency,
            deal_score,
            deal_summary,
        }
    }
}

/// A traveler's stated preferences. Every field is optional; unset fields
/// resolve to neutral scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Minimum acceptable user rating, 0-10 scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationPreferences>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationPreferences {
    #[serde(default)]
    pub neighborhoods: Vec<String>,
    /// Accepted on the wire but not yet scored.
    /// TODO: fold preferred transit proximity into the location sub-score.
    #[serde(default)]
    pub near_public_transport: bool,
}

/// Sub-scores feeding the composite recommendation score, each 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationFactors {
    pub budget: Decimal,
    pub amenities: Decimal,
    pub location: Decimal,
    pub rating: Decimal,
    pub deal: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationKind {
    Budget,
    Amenities,
    Location,
    Rating,
    Deal,
    General,
}

/// A generated statement about why a hotel fits the traveler's preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    #[serde(rename = "type")]
    pub kind: ExplanationKind,
    pub description: String,
}

/// A hotel scored against a traveler's preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredHotel {
    pub hotel: Hotel,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub currency: String,
    pub recommendation_score: Decimal,
    pub factor_scores: RecommendationFactors,
}

/// A scored hotel with its per-factor explanations attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedHotel {
    #[serde(flatten)]
    pub scored: ScoredHotel,
    pub recommendation_explanations: Vec<Explanation>,
}
