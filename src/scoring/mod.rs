pub mod engine;
pub mod filter;
pub mod seat;
pub mod validation;
pub mod weights;

pub use engine::{rank, Bounds, Ranked, ScoreBreakdown};
pub use filter::{filter_candidates, Candidate, HardFilters};
pub use seat::{seat_height_range, SeatBand};
pub use validation::validate_preferences;
pub use weights::Weights;
