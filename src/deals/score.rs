//! Deal factor scoring.
//!
//! Converts a hotel's current quote and trailing price history into three
//! weighted sub-scores and the composite 0-100 deal score.
//!
//! # Composite
//! ```text
//! deal_score = round(0.5 * historical + 0.3 * value + 0.2 * seasonal)
//! ```
//! The 167 multiplier in the price-comparison transform is 50 / 0.30: a
//! price 30% under the reference average saturates to 100, 30% over
//! saturates to 0. The scaling constants are load-bearing; downstream
//! thresholds assume them.

use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::deals::insights::generate_deal_insights;
use crate::error::AgentError;
use crate::hotel::models::{DealFactors, DealInsight, Hotel, PricePoint};

/// A fully scored deal: composite, per-factor breakdown, and insights.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DealAnalysis {
    pub deal_score: Decimal,
    pub deal_factors: DealFactors,
    pub deal_insights: Vec<DealInsight>,
}

/// Score a hotel's current quote against its price history.
///
/// Pure apart from input validation: every supplied price — current and
/// historical — must be strictly positive, because the factor math divides
/// by the current price and by historical averages.
pub fn score_deal(
    hotel: &Hotel,
    current: &PricePoint,
    history: &[PricePoint],
) -> Result<DealAnalysis, AgentError> {
    validate_prices(current, history)?;

    let historical_comparison = historical_comparison_score(current, history);
    let value_assessment = value_assessment_score(hotel, current);
    let seasonal_factor = seasonal_factor_score(current, history);

    let deal_score = round_score(
        historical_comparison * dec!(0.5)
            + value_assessment * dec!(0.3)
            + seasonal_factor * dec!(0.2),
    );

    let deal_factors = DealFactors {
        historical_comparison,
        value_assessment,
        seasonal_factor,
    };
    let deal_insights = generate_deal_insights(hotel, current, history, deal_score, &deal_factors);

    Ok(DealAnalysis {
        deal_score,
        deal_factors,
        deal_insights,
    })
}

/// Score the current price against the trailing average. Neutral 50
/// without history.
pub fn historical_comparison_score(current: &PricePoint, history: &[PricePoint]) -> Decimal {
    if history.is_empty() {
        return dec!(50);
    }

    let avg = mean_price(history);
    // Positive when the current quote is cheaper than average.
    let diff = (avg - current.price) / avg;
    clamp_score(dec!(50) + diff * dec!(167))
}

/// Quality-per-dollar score. Purely current-state; no historical input.
pub fn value_assessment_score(hotel: &Hotel, current: &PricePoint) -> Decimal {
    let quality = Decimal::from(hotel.star_rating) * dec!(10) + hotel.user_rating * dec!(5);
    let ratio = quality / current.price;
    clamp_score(ratio * dec!(200))
}

/// Score the current price against history from the same calendar month
/// (any year). Neutral 50 without history or without same-month entries.
pub fn seasonal_factor_score(current: &PricePoint, history: &[PricePoint]) -> Decimal {
    if history.is_empty() {
        return dec!(50);
    }

    let month = current.date_from.month0();
    let same_month: Vec<&PricePoint> = history
        .iter()
        .filter(|p| p.date_from.month0() == month)
        .collect();
    if same_month.is_empty() {
        return dec!(50);
    }

    let total: Decimal = same_month.iter().map(|p| p.price).sum();
    let avg = total / Decimal::from(same_month.len() as u64);
    let diff = (avg - current.price) / avg;
    clamp_score(dec!(50) + diff * dec!(167))
}

pub(crate) fn mean_price(points: &[PricePoint]) -> Decimal {
    let total: Decimal = points.iter().map(|p| p.price).sum();
    total / Decimal::from(points.len() as u64)
}

pub(crate) fn clamp_score(raw: Decimal) -> Decimal {
    raw.clamp(Decimal::ZERO, dec!(100))
}

/// Round half away from zero, the convention used by every composite and
/// percentage in the engine.
pub(crate) fn round_score(raw: Decimal) -> Decimal {
    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_prices(current: &PricePoint, history: &[PricePoint]) -> Result<(), AgentError> {
    if current.price <= Decimal::ZERO {
        return Err(AgentError::InvalidPrice {
            price: current.price,
        });
    }
    if let Some(bad) = history.iter().find(|p| p.price <= Decimal::ZERO) {
        return Err(AgentError::InvalidPrice { price: bad.price });
    }
    Ok(())
}
