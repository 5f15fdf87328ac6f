//! Faint Memory scoring: point totals, special action scaling and tier limits
//!
//! Everything here is a pure function of the counter set and rule table
//! passed in. Nothing is cached between calls.

pub mod score;
pub mod special;
pub mod status;
pub mod tier;

pub use score::{contribution, score, ScoreBreakdown};
pub use special::{scaled_points, scaled_points_iterative};
pub use status::{progress, Evaluation, LimitStatus};
pub use tier::{tier_limit, BASE_CAPACITY, CAPACITY_PER_TIER};
