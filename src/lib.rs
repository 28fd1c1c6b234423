pub mod catalog;
pub mod config;
pub mod deals;
pub mod error;
pub mod hotel;
pub mod monitoring;
pub mod recommend;

pub use deals::discovery::DealDiscoveryAgent;
pub use recommend::engine::RecommendationAgent;
