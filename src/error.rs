use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Failed to load config from {}: {message}", path.display())]
    ConfigLoad { path: PathBuf, message: String },

    #[error("Driver '{driver}' references team index {index}, but only {team_count} teams are configured")]
    InvalidTeamReference {
        driver: String,
        index: i64,
        team_count: usize,
    },

    #[error("Race number {number} is used by both '{first}' and '{second}'")]
    DuplicateRaceNumber {
        number: u32,
        first: String,
        second: String,
    },

    #[error("Invalid config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, PredictorError>;
