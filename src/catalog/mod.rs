//! Collaborator ports for hotel and price data.
//!
//! The scoring engine is deliberately ignorant of where hotel data comes
//! from. Callers inject implementations of these traits; the in-repo
//! implementation is the seeded fixture set in [`mock`].

pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::hotel::models::{Hotel, PricePoint};

/// Source of candidate hotels.
#[async_trait]
pub trait HotelCatalog: Send + Sync {
    /// All hotels available in a location.
    async fn hotels_in_location(&self, location: &str) -> Result<Vec<Hotel>>;

    /// Look up a single hotel. `None` when the id is unknown.
    async fn hotel_by_id(&self, hotel_id: &str) -> Result<Option<Hotel>>;
}

/// Source of current and historical nightly rates.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// The best currently bookable rate for a hotel.
    async fn current_price(&self, hotel_id: &str) -> Result<PricePoint>;

    /// Trailing window of past rates (typically 30 days). May be empty.
    async fn historical_prices(&self, hotel_id: &str) -> Result<Vec<PricePoint>>;
}
