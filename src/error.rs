use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the scoring engine.
///
/// Missing optional inputs are never errors — those resolve to neutral
/// scores inside the scoring functions.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The catalog has no hotel with the requested id.
    #[error("hotel not found: {hotel_id}")]
    HotelNotFound { hotel_id: String },

    /// Scoring divides by prices; callers must guarantee they are positive.
    #[error("invalid price {price}: prices must be strictly positive")]
    InvalidPrice { price: Decimal },

    /// A catalog or price-feed collaborator failed.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}
