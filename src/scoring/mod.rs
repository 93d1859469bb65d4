pub mod context;
pub mod engine;
pub mod tracks;

pub use context::{Condition, RaceContext};
pub use engine::{
    base_score, calculate_points, calculate_score, FactorContribution, ScoreBreakdown, ScoreResult,
};
pub use tracks::{drs_effectiveness, TrackType};
