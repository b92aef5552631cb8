use thiserror::Error;

pub mod outcome;
pub mod distribution;
pub mod num_distribution;
pub mod map_dist;
pub mod calculator;
pub mod logger;

pub use calculator::MomentSummary;
pub use distribution::Distribution;
pub use map_dist::MapDist;
pub use num_distribution::NumDistribution;
pub use outcome::Outcome;

/// Largest allowed distance between the probability total and one.
pub const PROB_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistError {
    #[error("Probabilities must sum to 1, got {0}")]
    InvalidDistribution(f64),
    #[error("invalid bounds")]
    InvalidBounds,
    #[error("distribution must be non-empty")]
    Empty,
}
