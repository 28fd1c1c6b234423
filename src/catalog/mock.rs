//! Seeded in-memory fixtures implementing the catalog and price-feed ports.
//!
//! Historical prices are generated from an explicit seed and anchor date,
//! so demo runs and tests are fully reproducible. Same seed, same prices.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::catalog::{HotelCatalog, PriceFeed};
use crate::hotel::models::{Address, Hotel, PricePoint};

/// Fixture catalog with five budget hotels.
#[derive(Debug, Default)]
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HotelCatalog for MockCatalog {
    async fn hotels_in_location(&self, location: &str) -> Result<Vec<Hotel>> {
        Ok(fixture_hotels(location))
    }

    async fn hotel_by_id(&self, hotel_id: &str) -> Result<Option<Hotel>> {
        // Fixture hotels are anchored to New York for id lookups.
        Ok(fixture_hotels("New York")
            .into_iter()
            .find(|h| h.hotel_id == hotel_id))
    }
}

/// Fixture price feed with a fixed current-price table and a seeded
/// trailing 30-day history per hotel.
#[derive(Debug)]
pub struct MockPriceFeed {
    today: NaiveDate,
    seed: u64,
}

impl MockPriceFeed {
    pub fn new(today: NaiveDate, seed: u64) -> Self {
        Self { today, seed }
    }
}

#[async_trait]
impl PriceFeed for MockPriceFeed {
    async fn current_price(&self, hotel_id: &str) -> Result<PricePoint> {
        let (price, original_price) = match hotel_id {
            "hotel1" => (dec!(75), Some(dec!(95))),
            "hotel2" => (dec!(82), Some(dec!(110))),
            "hotel3" => (dec!(25), Some(dec!(35))),
            "hotel4" => (dec!(89), None),
            "hotel5" => (dec!(65), Some(dec!(80))),
            _ => (dec!(100), None),
        };

        Ok(PricePoint {
            price,
            original_price,
            currency: "USD".to_string(),
            date_from: self.today,
            date_to: self.today + Duration::days(5),
        })
    }

    async fn historical_prices(&self, hotel_id: &str) -> Result<Vec<PricePoint>> {
        let base = match hotel_id {
            "hotel1" => dec!(95),
            "hotel2" => dec!(105),
            "hotel3" => dec!(35),
            "hotel4" => dec!(95),
            "hotel5" => dec!(75),
            _ => dec!(100),
        };
        // Rates never dip below 70% of the base rate.
        let floor = base * dec!(0.7);

        let mut rng = SeededRng::new(hotel_stream_seed(self.seed, hotel_id));
        let mut prices = Vec::with_capacity(30);

        for days_back in 1..=30i64 {
            let price = (base + rng.price_variation())
                .max(floor)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            let date_from = self.today - Duration::days(days_back);
            prices.push(PricePoint {
                price,
                original_price: None,
                currency: "USD".to_string(),
                date_from,
                date_to: date_from + Duration::days(5),
            });
        }

        Ok(prices)
    }
}

fn fixture_hotels(city: &str) -> Vec<Hotel> {
    vec![
        fixture(
            "hotel1",
            "Urban Budget Hotel",
            city,
            "Downtown",
            true,
            3,
            dec!(8.5),
            &["wifi", "breakfast", "pool"],
        ),
        fixture(
            "hotel2",
            "Cozy Stay Inn",
            city,
            "Midtown",
            true,
            3,
            dec!(8.2),
            &["wifi", "breakfast"],
        ),
        fixture(
            "hotel3",
            "Backpacker's Paradise",
            city,
            "Downtown",
            true,
            2,
            dec!(7.9),
            &["wifi"],
        ),
        fixture(
            "hotel4",
            "Downtown Budget Suites",
            city,
            "Downtown",
            false,
            3,
            dec!(8.0),
            &["wifi", "pool"],
        ),
        fixture(
            "hotel5",
            "Traveler's Rest Hotel",
            city,
            "Uptown",
            false,
            2,
            dec!(7.5),
            &["wifi", "breakfast"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn fixture(
    hotel_id: &str,
    name: &str,
    city: &str,
    neighborhood: &str,
    near_public_transport: bool,
    star_rating: u8,
    user_rating: Decimal,
    amenities: &[&str],
) -> Hotel {
    let slug = name.replace('\'', "").replace(' ', "+");
    Hotel {
        hotel_id: hotel_id.to_string(),
        name: name.to_string(),
        thumbnail: Some(format!("https://via.placeholder.com/300x200?text={slug}")),
        images: vec![format!("https://via.placeholder.com/800x500?text={slug}")],
        address: Address {
            city: city.to_string(),
            country: "USA".to_string(),
            neighborhood: Some(neighborhood.to_string()),
            near_public_transport,
        },
        star_rating,
        user_rating,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        deal_score: None,
    }
}

/// Mix the hotel id into the seed so each hotel gets its own price stream.
fn hotel_stream_seed(seed: u64, hotel_id: &str) -> u64 {
    // FNV-1a over the id bytes.
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in hotel_id.bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h ^ seed
}

/// Minimal xorshift generator; deterministic for a given seed.
struct SeededRng(u64);

impl SeededRng {
    fn new(seed: u64) -> Self {
        // xorshift state must be non-zero.
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Nightly-rate variation in -10..=10 dollars.
    fn price_variation(&mut self) -> Decimal {
        Decimal::from((self.next_u64() % 21) as i64 - 10)
    }
}
