//! Integration tests for the scoring pipelines over the seeded fixtures.

use std::sync::Arc;

use anyhow::bail;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use hotel_deals_agent::catalog::mock::{MockCatalog, MockPriceFeed};
use hotel_deals_agent::catalog::{HotelCatalog, PriceFeed};
use hotel_deals_agent::deals::discovery::{DealDiscoveryAgent, DealFilters};
use hotel_deals_agent::deals::score::score_deal;
use hotel_deals_agent::error::AgentError;
use hotel_deals_agent::hotel::models::{
    Address, Hotel, InsightKind, PricePoint, UserPreferences,
};
use hotel_deals_agent::recommend::engine::RecommendationAgent;
use hotel_deals_agent::recommend::filters::RecommendationFilters;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, 15).unwrap()
}

fn deal_agent() -> DealDiscoveryAgent {
    DealDiscoveryAgent::new(
        Arc::new(MockCatalog::new()),
        Arc::new(MockPriceFeed::new(anchor(), 42)),
    )
}

fn recommendation_agent() -> RecommendationAgent {
    RecommendationAgent::new(
        Arc::new(MockCatalog::new()),
        Arc::new(MockPriceFeed::new(anchor(), 42)),
    )
}

// ──────────────────────────────────────────
// Deal discovery
// ──────────────────────────────────────────

#[tokio::test]
async fn deals_are_sorted_by_score_descending() {
    let deals = deal_agent()
        .find_best_deals("New York", &DealFilters::default())
        .await
        .unwrap();

    assert!(!deals.is_empty());
    for pair in deals.windows(2) {
        assert!(pair[0].deal_score >= pair[1].deal_score);
    }
}

#[tokio::test]
async fn min_deal_score_filter_is_enforced() {
    let filters = DealFilters {
        min_deal_score: Some(dec!(80)),
    };
    let deals = deal_agent().find_best_deals("New York", &filters).await.unwrap();

    for deal in &deals {
        assert!(deal.deal_score >= dec!(80));
    }
}

#[tokio::test]
async fn strong_deals_carry_a_summary() {
    let deals = deal_agent()
        .find_best_deals("New York", &DealFilters::default())
        .await
        .unwrap();

    for deal in deals.iter().filter(|d| d.deal_score > dec!(60)) {
        assert!(
            deal.deal_summary.is_some(),
            "deal {} scored {} without a summary",
            deal.hotel.hotel_id,
            deal.deal_score
        );
    }
}

#[tokio::test]
async fn top_deals_are_projected_and_capped() {
    let top = deal_agent().top_deals("New York", dec!(70), 3).await.unwrap();

    assert!(top.len() <= 3);
    for deal in &top {
        assert!(deal.deal_score >= dec!(70));
        assert!(deal.thumbnail.is_some());
    }
}

#[tokio::test]
async fn insights_are_annotated_with_the_hotel() {
    let insights = deal_agent().hotel_deal_insights("hotel1").await.unwrap();

    assert!(!insights.is_empty());
    for insight in &insights {
        assert_eq!(insight.hotel_id, "hotel1");
        assert_eq!(insight.hotel_name, "Urban Budget Hotel");
        assert!(insight.thumbnail.is_some());
    }
}

#[tokio::test]
async fn unknown_hotel_is_a_not_found_error() {
    let result = deal_agent().hotel_deal_insights("hotel999").await;
    assert!(matches!(
        result,
        Err(AgentError::HotelNotFound { hotel_id }) if hotel_id == "hotel999"
    ));
}

// ──────────────────────────────────────────
// End-to-end deal scenario
// ──────────────────────────────────────────

#[tokio::test]
async fn july_markdown_scenario_yields_two_price_drops() {
    let hotel = Hotel {
        hotel_id: "h1".to_string(),
        name: "Urban Budget Hotel".to_string(),
        thumbnail: None,
        images: vec![],
        address: Address {
            city: "New York".to_string(),
            country: "USA".to_string(),
            neighborhood: None,
            near_public_transport: false,
        },
        star_rating: 3,
        user_rating: dec!(8.5),
        amenities: vec!["wifi".to_string()],
        deal_score: None,
    };

    // 30 trailing days at 95/night, spanning late June and early July.
    let history: Vec<PricePoint> = (1..=30)
        .map(|days_back| {
            let date_from = anchor() - Duration::days(days_back);
            PricePoint {
                price: dec!(95),
                original_price: None,
                currency: "USD".to_string(),
                date_from,
                date_to: date_from + Duration::days(5),
            }
        })
        .collect();
    let current = PricePoint {
        price: dec!(75),
        original_price: Some(dec!(95)),
        currency: "USD".to_string(),
        date_from: anchor(),
        date_to: anchor() + Duration::days(5),
    };

    let analysis = score_deal(&hotel, &current, &history).unwrap();

    assert!(analysis.deal_score > dec!(60));

    let price_drops: Vec<_> = analysis
        .deal_insights
        .iter()
        .filter(|i| i.insight_type == InsightKind::PriceDrop)
        .collect();
    assert_eq!(price_drops.len(), 2);

    // The markdown insight: (95-75)/95 rounds to 21%, fixed confidence.
    assert_eq!(price_drops[1].description, "Price dropped 21% recently");
    assert_eq!(price_drops[1].confidence_score, dec!(90));
}

// ──────────────────────────────────────────
// Recommendations
// ──────────────────────────────────────────

#[tokio::test]
async fn recommendations_are_sorted_and_explained() {
    let prefs = UserPreferences {
        budget: Some(dec!(100)),
        amenities: vec!["wifi".to_string()],
        ..Default::default()
    };
    let recommendations = recommendation_agent()
        .recommend(&prefs, "New York", &RecommendationFilters::default())
        .await
        .unwrap();

    assert!(!recommendations.is_empty());
    for pair in recommendations.windows(2) {
        assert!(pair[0].scored.recommendation_score >= pair[1].scored.recommendation_score);
    }
    for rec in &recommendations {
        assert!(!rec.recommendation_explanations.is_empty());
    }
}

#[tokio::test]
async fn recommendation_filters_are_enforced() {
    let prefs = UserPreferences {
        budget: Some(dec!(100)),
        amenities: vec!["wifi".to_string()],
        ..Default::default()
    };
    let filters = RecommendationFilters {
        max_price: Some(dec!(80)),
        min_recommendation_score: Some(dec!(60)),
        ..Default::default()
    };
    let recommendations = recommendation_agent()
        .recommend(&prefs, "New York", &filters)
        .await
        .unwrap();

    for rec in &recommendations {
        assert!(rec.scored.price <= dec!(80));
        assert!(rec.scored.recommendation_score >= dec!(60));
    }
}

/// Price feed whose history lookups always fail.
struct BrokenHistoryFeed {
    inner: MockPriceFeed,
}

#[async_trait]
impl PriceFeed for BrokenHistoryFeed {
    async fn current_price(&self, hotel_id: &str) -> anyhow::Result<PricePoint> {
        self.inner.current_price(hotel_id).await
    }

    async fn historical_prices(&self, _hotel_id: &str) -> anyhow::Result<Vec<PricePoint>> {
        bail!("price archive unavailable")
    }
}

#[tokio::test]
async fn broken_history_degrades_to_neutral_deal_factor() {
    let agent = RecommendationAgent::new(
        Arc::new(MockCatalog::new()),
        Arc::new(BrokenHistoryFeed {
            inner: MockPriceFeed::new(anchor(), 42),
        }),
    );

    let recommendations = agent
        .recommend(
            &UserPreferences::default(),
            "New York",
            &RecommendationFilters::default(),
        )
        .await
        .unwrap();

    assert_eq!(recommendations.len(), 5);
    for rec in &recommendations {
        assert_eq!(rec.scored.factor_scores.deal, dec!(50));
    }
}

/// Catalog whose hotels already carry an upstream deal score.
struct PreScoredCatalog {
    inner: MockCatalog,
    deal_score: Decimal,
}

#[async_trait]
impl HotelCatalog for PreScoredCatalog {
    async fn hotels_in_location(&self, location: &str) -> anyhow::Result<Vec<Hotel>> {
        let mut hotels = self.inner.hotels_in_location(location).await?;
        for hotel in &mut hotels {
            hotel.deal_score = Some(self.deal_score);
        }
        Ok(hotels)
    }

    async fn hotel_by_id(&self, hotel_id: &str) -> anyhow::Result<Option<Hotel>> {
        self.inner.hotel_by_id(hotel_id).await
    }
}

#[tokio::test]
async fn upstream_deal_score_takes_precedence() {
    let agent = RecommendationAgent::new(
        Arc::new(PreScoredCatalog {
            inner: MockCatalog::new(),
            deal_score: dec!(90),
        }),
        // History is broken, so only the attached score can explain 90.
        Arc::new(BrokenHistoryFeed {
            inner: MockPriceFeed::new(anchor(), 42),
        }),
    );

    let recommendations = agent
        .recommend(
            &UserPreferences::default(),
            "New York",
            &RecommendationFilters::default(),
        )
        .await
        .unwrap();

    for rec in &recommendations {
        assert_eq!(rec.scored.factor_scores.deal, dec!(90));
    }
}
