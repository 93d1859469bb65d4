pub mod config;
pub mod error;
pub mod grid;
pub mod logger;
pub mod output;
pub mod predict;
pub mod ranking;
pub mod scoring;
pub mod weather;

pub use error::{PredictorError, Result};
pub use predict::{predict_race, score_and_rank, Prediction};
