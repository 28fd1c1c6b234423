//! Preference-fit scoring.
//!
//! Five weighted sub-scores measuring how well a hotel matches a
//! traveler's stated preferences:
//!
//! ```text
//! recommendation_score =
//!     round(0.3*budget + 0.2*amenities + 0.15*location + 0.15*rating + 0.2*deal)
//! ```
//!
//! The deal sub-score is an input here; the engine resolves it from an
//! upstream-attached score or a full deal-scoring pass before calling in.
//! Unset preference fields always resolve to a neutral 50, never an error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::deals::score::{clamp_score, round_score};
use crate::hotel::models::{
    Address, Hotel, LocationPreferences, PricePoint, RecommendationFactors, UserPreferences,
};

/// Compute the factor breakdown and composite score for one hotel.
pub fn score_for_user(
    hotel: &Hotel,
    current: &PricePoint,
    prefs: &UserPreferences,
    deal: Decimal,
) -> (Decimal, RecommendationFactors) {
    let budget = budget_score(current.price, prefs.budget);
    let amenities = amenity_score(&hotel.amenities, &prefs.amenities);
    let location = location_score(&hotel.address, prefs.location.as_ref());
    let rating = rating_score(hotel.user_rating, prefs.min_rating);

    let recommendation_score = round_score(
        budget * dec!(0.3)
            + amenities * dec!(0.2)
            + location * dec!(0.15)
            + rating * dec!(0.15)
            + deal * dec!(0.2),
    );

    let factors = RecommendationFactors {
        budget,
        amenities,
        location,
        rating,
        deal,
    };
    (recommendation_score, factors)
}

/// Budget fit. At-budget scores exactly 70; each 1% under budget adds a
/// point, while going over budget decays twice as fast.
pub fn budget_score(price: Decimal, budget: Option<Decimal>) -> Decimal {
    // A zero or negative budget is treated as unset.
    let budget = match budget {
        Some(b) if b > Decimal::ZERO => b,
        _ => return dec!(50),
    };

    if price <= budget {
        let under = (budget - price) / budget;
        clamp_score(dec!(70) + under * dec!(100))
    } else {
        let over = (price - budget) / budget;
        clamp_score(dec!(70) - over * dec!(200))
    }
}

/// Integer percentage of preferred amenities the hotel offers.
pub fn amenity_score(hotel_amenities: &[String], preferred: &[String]) -> Decimal {
    if preferred.is_empty() {
        return dec!(50);
    }

    let matched = preferred
        .iter()
        .filter(|amenity| hotel_amenities.contains(amenity))
        .count();
    round_score(Decimal::from(matched as u64) / Decimal::from(preferred.len() as u64) * dec!(100))
}

/// Location fit: +25 for a preferred neighborhood, +25 for public
/// transport nearby, on a 50 baseline.
pub fn location_score(address: &Address, prefs: Option<&LocationPreferences>) -> Decimal {
    let Some(prefs) = prefs else {
        return dec!(50);
    };

    let mut score = dec!(50);

    if let Some(neighborhood) = &address.neighborhood {
        if prefs.neighborhoods.contains(neighborhood) {
            score += dec!(25);
        }
    }
    if address.near_public_transport {
        score += dec!(25);
    }

    clamp_score(score)
}

/// Rating fit. Without a stated minimum this is the rating as a
/// percentage of the 0-10 scale; with one, each point above the minimum
/// is worth 25, and anything below it scores a hard 0.
pub fn rating_score(user_rating: Decimal, min_rating: Option<Decimal>) -> Decimal {
    // A zero minimum is treated as unset.
    let min = match min_rating {
        Some(m) if m > Decimal::ZERO => m,
        _ => return round_score(user_rating * dec!(10)).min(dec!(100)),
    };

    if user_rating >= min {
        clamp_score(dec!(50) + (user_rating - min) * dec!(25))
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn address(neighborhood: Option<&str>, near_public_transport: bool) -> Address {
        Address {
            city: "New York".to_string(),
            country: "USA".to_string(),
            neighborhood: neighborhood.map(|n| n.to_string()),
            near_public_transport,
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn budget_neutral_when_unset() {
        assert_eq!(budget_score(dec!(100), None), dec!(50));
        // Zero budget behaves as unset.
        assert_eq!(budget_score(dec!(100), Some(Decimal::ZERO)), dec!(50));
    }

    #[test]
    fn budget_boundary_is_exactly_70() {
        assert_eq!(budget_score(dec!(100), Some(dec!(100))), dec!(70));
    }

    #[test]
    fn budget_rewards_staying_under() {
        // 30% under budget: 70 + 30 = 100.
        assert_eq!(budget_score(dec!(70), Some(dec!(100))), dec!(100));
        // 10% under: 70 + 10 = 80.
        assert_eq!(budget_score(dec!(90), Some(dec!(100))), dec!(80));
    }

    #[test]
    fn budget_decays_twice_as_fast_over() {
        // 20% over budget: 70 - 40 = 30.
        assert_eq!(budget_score(dec!(120), Some(dec!(100))), dec!(30));
        // 50% over: 70 - 100 -> clamped to 0.
        assert_eq!(budget_score(dec!(150), Some(dec!(100))), Decimal::ZERO);
    }

    #[test]
    fn amenity_score_is_an_exact_integer_percentage() {
        let hotel = strings(&["wifi", "pool"]);
        let preferred = strings(&["wifi", "breakfast", "gym"]);
        assert_eq!(amenity_score(&hotel, &preferred), dec!(33));
    }

    #[test]
    fn amenity_full_match_and_no_match() {
        let hotel = strings(&["wifi", "breakfast", "pool", "gym"]);
        assert_eq!(amenity_score(&hotel, &strings(&["wifi", "breakfast"])), dec!(100));
        assert_eq!(
            amenity_score(&strings(&["pool", "gym"]), &strings(&["wifi", "breakfast"])),
            Decimal::ZERO
        );
    }

    #[test]
    fn amenity_neutral_without_preferences() {
        assert_eq!(amenity_score(&strings(&["wifi"]), &[]), dec!(50));
    }

    #[test]
    fn location_neutral_without_preferences() {
        assert_eq!(location_score(&address(Some("Downtown"), true), None), dec!(50));
    }

    #[test]
    fn location_bonuses_are_additive() {
        let prefs = LocationPreferences {
            neighborhoods: strings(&["Downtown"]),
            near_public_transport: false,
        };

        assert_eq!(
            location_score(&address(Some("Downtown"), true), Some(&prefs)),
            dec!(100)
        );
        assert_eq!(
            location_score(&address(Some("Downtown"), false), Some(&prefs)),
            dec!(75)
        );
        assert_eq!(
            location_score(&address(Some("Uptown"), true), Some(&prefs)),
            dec!(75)
        );
        assert_eq!(
            location_score(&address(None, false), Some(&prefs)),
            dec!(50)
        );
    }

    #[test]
    fn rating_without_minimum_is_a_percentage() {
        assert_eq!(rating_score(dec!(8.5), None), dec!(85));
        assert_eq!(rating_score(dec!(10), None), dec!(100));
    }

    #[test]
    fn rating_with_minimum_rewards_headroom() {
        // At the minimum: 50. Each point above is worth 25.
        assert_eq!(rating_score(dec!(8.0), Some(dec!(8.0))), dec!(50));
        assert_eq!(rating_score(dec!(8.5), Some(dec!(8.0))), dec!(62.5));
        assert_eq!(rating_score(dec!(10), Some(dec!(7.0))), dec!(100));
    }

    #[test]
    fn rating_below_minimum_is_a_hard_zero() {
        assert_eq!(rating_score(dec!(7.9), Some(dec!(8.0))), Decimal::ZERO);
    }

    #[test]
    fn rating_never_decreases_as_rating_rises() {
        let mut last = Decimal::ZERO;
        for tenths in 80..=100u32 {
            let rating = Decimal::from(tenths) / dec!(10);
            let score = rating_score(rating, Some(dec!(8.0)));
            assert!(score >= last);
            last = score;
        }
    }

    #[test]
    fn composite_is_the_weighted_rounded_sum() {
        let hotel = Hotel {
            hotel_id: "h1".to_string(),
            name: "Test Hotel".to_string(),
            thumbnail: None,
            images: vec![],
            address: address(None, false),
            star_rating: 3,
            user_rating: dec!(8.0),
            amenities: strings(&["wifi"]),
            deal_score: None,
        };
        let current = PricePoint {
            price: dec!(100),
            original_price: None,
            currency: "USD".to_string(),
            date_from: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
        };
        // No stated preferences: budget, amenities, and location are all
        // neutral; the rating factor defaults to the raw percentage.
        let prefs = UserPreferences::default();

        let (score, factors) = score_for_user(&hotel, &current, &prefs, dec!(50));
        assert_eq!(factors.budget, dec!(50));
        assert_eq!(factors.amenities, dec!(50));
        assert_eq!(factors.location, dec!(50));
        assert_eq!(factors.rating, dec!(80));
        // 0.3*50 + 0.2*50 + 0.15*50 + 0.15*80 + 0.2*50 = 54.5 -> 55
        assert_eq!(score, dec!(55));
    }
}
