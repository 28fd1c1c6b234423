//! Deal insight generation.
//!
//! Produces the human-readable statements that accompany a strong deal
//! score. Nothing is emitted for deals scoring 60 or below — including the
//! original-price discount insight, which sits behind the same gate.
//!
//! Emission order (historical, value, seasonal, discount) is relied on by
//! callers that surface the first insight as a one-line summary.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::deals::score::{mean_price, round_score};
use crate::hotel::models::{DealFactors, DealInsight, Hotel, InsightKind, PricePoint};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Generate insights for a scored deal.
pub fn generate_deal_insights(
    hotel: &Hotel,
    current: &PricePoint,
    history: &[PricePoint],
    deal_score: Decimal,
    factors: &DealFactors,
) -> Vec<DealInsight> {
    let mut insights = Vec::new();

    if deal_score <= dec!(60) {
        return insights;
    }

    // A historical score above 70 implies non-empty history.
    if factors.historical_comparison > dec!(70) {
        let avg = mean_price(history);
        let drop_pct = round_score((avg - current.price) / avg * dec!(100));
        insights.push(DealInsight {
            insight_type: InsightKind::PriceDrop,
            description: format!("{drop_pct}% cheaper than typical prices for this hotel"),
            confidence_score: factors.historical_comparison,
        });
    }

    if factors.value_assessment > dec!(70) {
        let description = if hotel.star_rating >= 4 && current.price < dec!(100) {
            format!(
                "Great value: {}-star amenities at budget prices",
                hotel.star_rating
            )
        } else if hotel.user_rating > dec!(8) && current.price < dec!(80) {
            format!(
                "Highly rated ({}/10) at a budget-friendly price",
                hotel.user_rating
            )
        } else {
            "Better amenities than most hotels at this price point".to_string()
        };
        insights.push(DealInsight {
            insight_type: InsightKind::GoodValue,
            description,
            confidence_score: factors.value_assessment,
        });
    }

    if factors.seasonal_factor > dec!(70) {
        let month = month_name(current.date_from);
        insights.push(DealInsight {
            insight_type: InsightKind::SeasonalDeal,
            description: format!("Exceptional price for {month} (typically a more expensive time)"),
            confidence_score: factors.seasonal_factor,
        });
    }

    // Markdown from the provider's own list price, independent of the
    // factor thresholds above.
    if let Some(original) = current.original_price {
        if current.price < original {
            let discount_pct = round_score((original - current.price) / original * dec!(100));
            if discount_pct >= dec!(15) {
                insights.push(DealInsight {
                    insight_type: InsightKind::PriceDrop,
                    description: format!("Price dropped {discount_pct}% recently"),
                    confidence_score: dec!(90),
                });
            }
        }
    }

    insights
}
