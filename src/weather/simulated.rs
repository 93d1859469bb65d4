use super::{WeatherSnapshot, WeatherSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Base value plus a uniform integer offset in `[0, spread)`.
#[derive(Debug, Clone, Copy)]
struct Reading {
    base: i32,
    spread: i32,
}

impl Reading {
    const fn new(base: i32, spread: i32) -> Self {
        Self { base, spread }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.base + rng.random_range(0..self.spread)
    }
}

/// Typical race-weekend climate for a circuit.
#[derive(Debug)]
struct ClimateProfile {
    locations: &'static [&'static str],
    description: &'static str,
    temperature_c: Reading,
    humidity_pct: Reading,
    wind_speed_kph: Reading,
    rain_probability: Reading,
}

const PROFILES: &[ClimateProfile] = &[
    ClimateProfile {
        locations: &["Monaco"],
        description: "partly cloudy",
        temperature_c: Reading::new(22, 8),
        humidity_pct: Reading::new(65, 20),
        wind_speed_kph: Reading::new(10, 15),
        rain_probability: Reading::new(20, 30),
    },
    ClimateProfile {
        locations: &["Silverstone", "Great Britain"],
        description: "overcast",
        temperature_c: Reading::new(15, 10),
        humidity_pct: Reading::new(70, 25),
        wind_speed_kph: Reading::new(15, 20),
        rain_probability: Reading::new(40, 40),
    },
    ClimateProfile {
        locations: &["Singapore"],
        description: "humid",
        temperature_c: Reading::new(28, 6),
        humidity_pct: Reading::new(85, 10),
        wind_speed_kph: Reading::new(5, 10),
        rain_probability: Reading::new(60, 30),
    },
];

static DEFAULT_PROFILE: ClimateProfile = ClimateProfile {
    locations: &[],
    description: "clear",
    temperature_c: Reading::new(20, 15),
    humidity_pct: Reading::new(50, 30),
    wind_speed_kph: Reading::new(8, 12),
    rain_probability: Reading::new(10, 40),
};

fn profile_for(location: &str) -> &'static ClimateProfile {
    PROFILES
        .iter()
        .find(|p| p.locations.iter().any(|l| l.eq_ignore_ascii_case(location)))
        .unwrap_or(&DEFAULT_PROFILE)
}

/// Generate plausible weather for a location.
pub fn simulate_weather<R: Rng + ?Sized>(location: &str, rng: &mut R) -> WeatherSnapshot {
    let profile = profile_for(location);

    WeatherSnapshot {
        description: profile.description.to_string(),
        temperature_c: profile.temperature_c.sample(rng) as f64,
        humidity_pct: profile.humidity_pct.sample(rng) as f64,
        wind_speed_kph: profile.wind_speed_kph.sample(rng) as f64,
        rain_probability: profile.rain_probability.sample(rng),
        source: WeatherSource::Simulated,
    }
}

/// Reproducible variant of [`simulate_weather`].
pub fn simulate_weather_seeded(location: &str, seed: u64) -> WeatherSnapshot {
    let mut rng = StdRng::seed_from_u64(seed);
    simulate_weather(location, &mut rng)
}
