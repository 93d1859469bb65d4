pub mod live;
pub mod simulated;

pub use live::{fetch_live_weather, parse_weather_response};
pub use simulated::{simulate_weather, simulate_weather_seeded};

use std::fmt;
use std::time::Duration;

/// Environment variable holding the OpenWeatherMap API key
pub const ENV_API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherSource {
    Live,
    Simulated,
}

impl fmt::Display for WeatherSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherSource::Live => write!(f, "live"),
            WeatherSource::Simulated => write!(f, "simulated"),
        }
    }
}

/// Conditions at the circuit for one prediction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub description: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kph: f64,
    pub rain_probability: i32, // 0-100
    pub source: WeatherSource,
}

#[derive(Debug, Clone)]
pub struct WeatherSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
    /// Seed for the simulated generator; None draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            seed: None,
        }
    }
}

impl WeatherSettings {
    /// Default settings with the API key taken from `OPENWEATHER_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            api_key: get_api_key_from_env(),
            ..Self::default()
        }
    }
}

/// Read the API key from the environment. Blank values count as unset.
pub fn get_api_key_from_env() -> Option<String> {
    match std::env::var(ENV_API_KEY_VAR) {
        Ok(val) => {
            let trimmed = val.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

/// Get weather for a location.
///
/// Tries the live service once when an API key is configured. Any failure
/// (network, timeout, HTTP status, malformed body) falls back to the
/// simulated generator, so this always yields a usable snapshot.
pub async fn get_weather(location: &str, settings: &WeatherSettings) -> WeatherSnapshot {
    let Some(api_key) = settings.api_key.as_deref() else {
        tracing::debug!("No weather API key configured, simulating weather for {}", location);
        return simulate(location, settings.seed);
    };

    match fetch_live_weather(&settings.base_url, location, api_key, settings.timeout).await {
        Ok(snapshot) => {
            tracing::info!("Live weather for {}: {}", location, snapshot.description);
            snapshot
        }
        Err(e) => {
            tracing::debug!("Live weather failed for {}: {:#}. Using simulated weather", location, e);
            simulate(location, settings.seed)
        }
    }
}

fn simulate(location: &str, seed: Option<u64>) -> WeatherSnapshot {
    match seed {
        Some(seed) => simulate_weather_seeded(location, seed),
        None => simulate_weather(location, &mut rand::rng()),
    }
}
