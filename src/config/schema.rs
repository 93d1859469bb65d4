use serde::Deserialize;

/// Ratings live on a 0-10 scale.
pub const RATING_MIN: i32 = 0;
pub const RATING_MAX: i32 = 10;

/// Neutral mid-scale value used when a rating is missing from the file.
pub const RATING_DEFAULT: i32 = 5;

fn default_rating() -> i32 {
    RATING_DEFAULT
}

/// Top-level configuration file.
///
/// Example JSON:
/// ```json
/// {
///   "teams": [
///     { "name": "Ferrari", "engine": "Ferrari", "isTopTeam": true, "aerodynamics": 8 }
///   ],
///   "drivers": [
///     { "name": "Leclerc", "number": 16, "country": "Monaco", "favoriteTrack": "Monaco",
///       "homeTrack": "Monaco", "teamIndex": 0, "isTopDriver": true, "isEliteDriver": false }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub teams: Vec<TeamRecord>,
    pub drivers: Vec<DriverRecord>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub engine: String,

    #[serde(default)]
    pub is_top_team: bool,

    #[serde(default = "default_rating")]
    pub pit_stop_efficiency: i32,

    #[serde(default = "default_rating")]
    pub tire_strategy: i32,

    #[serde(default = "default_rating")]
    pub aerodynamics: i32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverRecord {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub number: u32,

    #[serde(default)]
    pub country: String,

    #[serde(default)]
    pub favorite_track: String,

    #[serde(default)]
    pub home_track: String,

    /// Position of the owning team in `teams`. Signed so that a negative
    /// index in the file surfaces as a team reference error, not a parse error.
    pub team_index: i64,

    #[serde(default)]
    pub is_top_driver: bool,

    #[serde(default)]
    pub is_elite_driver: bool,

    #[serde(default = "default_rating")]
    pub overtaking_ability: i32,

    #[serde(default = "default_rating")]
    pub consistency: i32,

    #[serde(default = "default_rating")]
    pub experience_level: i32,

    #[serde(default = "default_rating")]
    pub wet_weather_skill: i32,
}
