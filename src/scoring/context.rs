use crate::error::PredictorError;
use crate::weather::WeatherSnapshot;
use std::fmt;
use std::str::FromStr;

/// Declared race condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Wet,
    Dry,
}

impl FromStr for Condition {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("wet") {
            Ok(Condition::Wet)
        } else if s.eq_ignore_ascii_case("dry") {
            Ok(Condition::Dry)
        } else {
            Err(PredictorError::Usage(format!(
                "Race condition must be 'wet' or 'dry', got '{}'",
                s
            )))
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Wet => write!(f, "wet"),
            Condition::Dry => write!(f, "dry"),
        }
    }
}

/// Everything known about the race weekend besides the grid itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaceContext {
    pub track: Option<String>,
    pub condition: Option<Condition>,
    pub weather: Option<WeatherSnapshot>,
}

impl RaceContext {
    /// Blank or whitespace-only track names are treated as no track.
    pub fn new(track: Option<&str>, condition: Option<Condition>) -> Self {
        let track = track
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Self {
            track,
            condition,
            weather: None,
        }
    }

    pub fn with_weather(mut self, weather: Option<WeatherSnapshot>) -> Self {
        self.weather = weather;
        self
    }

    pub fn track(&self) -> Option<&str> {
        self.track.as_deref()
    }

    /// The enhanced policy applies once there is a track or weather to reason about.
    pub fn is_enhanced(&self) -> bool {
        self.track.is_some() || self.weather.is_some()
    }
}
