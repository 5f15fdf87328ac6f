pub mod config;
pub mod error;
pub mod types;

pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use types::{Count, Points, Tier, TIER_MAX, TIER_MIN};
