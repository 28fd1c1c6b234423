//! Per-factor recommendation explanations.
//!
//! Each factor scoring above 80 contributes exactly one statement, in
//! factor order (budget, amenities, location, rating, deal). A hotel with
//! no triggered factor gets a single generic statement, so every
//! recommendation carries at least one explanation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::deals::score::round_score;
use crate::hotel::models::{
    Explanation, ExplanationKind, RecommendedHotel, ScoredHotel, UserPreferences,
};

/// Attach explanations to already-sorted scored hotels. Order is preserved.
pub fn explain_recommendations(
    scored: Vec<ScoredHotel>,
    prefs: &UserPreferences,
) -> Vec<RecommendedHotel> {
    scored
        .into_iter()
        .map(|hotel| {
            let recommendation_explanations = explanations_for(&hotel, prefs);
            RecommendedHotel {
                scored: hotel,
                recommendation_explanations,
            }
        })
        .collect()
}

fn explanations_for(scored: &ScoredHotel, prefs: &UserPreferences) -> Vec<Explanation> {
    let mut explanations = Vec::new();
    let factors = &scored.factor_scores;
    let hotel = &scored.hotel;

    if factors.budget > dec!(80) {
        let well_below_budget = prefs
            .budget
            .filter(|budget| *budget > Decimal::ZERO && scored.price < budget * dec!(0.8));
        match well_below_budget {
            Some(budget) => {
                let savings = round_score((budget - scored.price) / budget * dec!(100));
                explanations.push(Explanation {
                    kind: ExplanationKind::Budget,
                    description: format!("Well below your budget ({savings}% savings)"),
                });
            }
            None => explanations.push(Explanation {
                kind: ExplanationKind::Budget,
                description: "Great value for budget travelers".to_string(),
            }),
        }
    }

    if factors.amenities > dec!(80) && !prefs.amenities.is_empty() {
        let matched = prefs
            .amenities
            .iter()
            .filter(|amenity| hotel.amenities.contains(amenity))
            .count();
        if matched == prefs.amenities.len() {
            explanations.push(Explanation {
                kind: ExplanationKind::Amenities,
                description: "Has all your preferred amenities".to_string(),
            });
        } else if matched > 0 {
            explanations.push(Explanation {
                kind: ExplanationKind::Amenities,
                description: format!(
                    "Has {matched} of your {} preferred amenities",
                    prefs.amenities.len()
                ),
            });
        }
    }

    if factors.location > dec!(80) {
        let preferred_neighborhood = match (&prefs.location, &hotel.address.neighborhood) {
            (Some(location), Some(neighborhood))
                if location.neighborhoods.contains(neighborhood) =>
            {
                Some(neighborhood.clone())
            }
            _ => None,
        };
        if let Some(neighborhood) = preferred_neighborhood {
            explanations.push(Explanation {
                kind: ExplanationKind::Location,
                description: format!("Located in your preferred neighborhood ({neighborhood})"),
            });
        } else if hotel.address.near_public_transport {
            explanations.push(Explanation {
                kind: ExplanationKind::Location,
                description: "Conveniently located near public transportation".to_string(),
            });
        }
    }

    if factors.rating > dec!(80) {
        // Tiers key off the raw 0-10 rating, not the sub-score.
        if hotel.user_rating >= dec!(8.5) {
            explanations.push(Explanation {
                kind: ExplanationKind::Rating,
                description: format!("Exceptionally well-rated ({}/10)", hotel.user_rating),
            });
        } else if hotel.user_rating >= dec!(8.0) {
            explanations.push(Explanation {
                kind: ExplanationKind::Rating,
                description: format!("Very well-rated ({}/10)", hotel.user_rating),
            });
        }
    }

    if factors.deal > dec!(80) {
        match scored.original_price {
            Some(original) if scored.price < original => {
                let discount = round_score((original - scored.price) / original * dec!(100));
                explanations.push(Explanation {
                    kind: ExplanationKind::Deal,
                    description: format!("{discount}% cheaper than usual price"),
                });
            }
            _ => explanations.push(Explanation {
                kind: ExplanationKind::Deal,
                description: "Exceptional value for the quality offered".to_string(),
            }),
        }
    }

    if explanations.is_empty() {
        explanations.push(Explanation {
            kind: ExplanationKind::General,
            description: "Good match for budget travelers".to_string(),
        });
    }

    explanations
}
