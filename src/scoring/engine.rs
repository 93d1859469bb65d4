use super::context::{Condition, RaceContext};
use super::tracks::{drs_effectiveness, is_elite_engine, TrackType};
use crate::grid::{Driver, Grid, Team};
use crate::weather::WeatherSnapshot;

pub const TOP_TEAM_BONUS: i32 = 10;
pub const TOP_DRIVER_BONUS: i32 = 12;
pub const ELITE_DRIVER_BONUS: i32 = 15;
pub const ENGINE_BONUS: i32 = 5;
pub const FAVORITE_AND_HOME_BONUS: i32 = 12;
pub const SINGLE_AFFINITY_BONUS: i32 = 6;
pub const WET_TOP_DRIVER_BONUS: i32 = 6;

pub const RAIN_THRESHOLD: i32 = 30;
pub const HOT_THRESHOLD_C: f64 = 30.0;
pub const COLD_THRESHOLD_C: f64 = 15.0;
pub const WIND_THRESHOLD_KPH: f64 = 20.0;
pub const HUMIDITY_THRESHOLD_PCT: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Top team", "DRS", "Rain"
    pub description: String, // e.g. "overtaking 9 x DRS 8 / 10"
    pub before: i32,         // Points before this factor
    pub after: i32,          // Points after this factor
}

impl FactorContribution {
    pub fn delta(&self) -> i32 {
        self.after - self.before
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub points: i32,
    pub enhanced: bool,
    pub breakdown: ScoreBreakdown,
}

/// Running total for one driver, recording every rule that fires.
struct Tally {
    points: i32,
    factors: Vec<FactorContribution>,
}

impl Tally {
    fn new() -> Self {
        Self {
            points: 0,
            factors: Vec::new(),
        }
    }

    fn add(&mut self, label: &str, description: String, delta: i32) {
        let before = self.points;
        self.points += delta;
        self.factors.push(FactorContribution {
            label: label.to_string(),
            description,
            before,
            after: self.points,
        });
    }

    fn finish(self, enhanced: bool) -> ScoreResult {
        ScoreResult {
            points: self.points,
            enhanced,
            breakdown: ScoreBreakdown {
                factors: self.factors,
            },
        }
    }
}

/// Points from the base policy only: team, driver tier, engine, track
/// affinity and declared condition.
pub fn base_score(driver: &Driver, team: &Team, ctx: &RaceContext) -> ScoreResult {
    let mut tally = Tally::new();
    apply_base(&mut tally, driver, team, ctx);
    tally.finish(false)
}

/// Points for one driver. The enhanced terms are layered on top of the base
/// policy whenever the context carries a track or weather.
pub fn calculate_score(driver: &Driver, team: &Team, ctx: &RaceContext) -> ScoreResult {
    let mut tally = Tally::new();
    apply_base(&mut tally, driver, team, ctx);

    let enhanced = ctx.is_enhanced();
    if enhanced {
        apply_enhanced(&mut tally, driver, team, ctx);
        if let Some(ref weather) = ctx.weather {
            apply_weather(&mut tally, driver, team, weather);
        }
    }

    tally.finish(enhanced)
}

/// Score the whole grid, resetting derived fields first so a pass can be
/// repeated. Results are returned in grid order.
pub fn calculate_points(grid: &mut Grid, ctx: &RaceContext) -> Vec<ScoreResult> {
    let Grid { teams, drivers } = grid;

    let results: Vec<ScoreResult> = drivers
        .iter_mut()
        .map(|driver| {
            driver.reset();
            let result = calculate_score(driver, &teams[driver.team_index], ctx);
            driver.points = result.points;
            result
        })
        .collect();

    tracing::debug!(
        "Scored {} drivers ({} policy)",
        results.len(),
        if ctx.is_enhanced() { "enhanced" } else { "base" }
    );

    results
}

fn apply_base(tally: &mut Tally, driver: &Driver, team: &Team, ctx: &RaceContext) {
    if team.is_top_team {
        tally.add("Top team", team.name.clone(), TOP_TEAM_BONUS);
    }

    // Independent tiers: an elite driver who is also a top driver gets both
    if driver.is_top_driver {
        tally.add("Top driver", String::new(), TOP_DRIVER_BONUS);
    }
    if driver.is_elite_driver {
        tally.add("Elite driver", String::new(), ELITE_DRIVER_BONUS);
    }

    if is_elite_engine(&team.engine) {
        tally.add("Engine", team.engine.clone(), ENGINE_BONUS);
    }

    if let Some(track) = ctx.track() {
        let is_favorite = track.eq_ignore_ascii_case(&driver.favorite_track);
        let is_home = track.eq_ignore_ascii_case(&driver.home_track)
            || track.eq_ignore_ascii_case(&driver.country);

        match (is_favorite, is_home) {
            (true, true) => tally.add(
                "Track affinity",
                format!("favorite and home track ({})", track),
                FAVORITE_AND_HOME_BONUS,
            ),
            (true, false) => tally.add(
                "Track affinity",
                format!("favorite track ({})", track),
                SINGLE_AFFINITY_BONUS,
            ),
            (false, true) => tally.add(
                "Track affinity",
                format!("home track ({})", track),
                SINGLE_AFFINITY_BONUS,
            ),
            (false, false) => {}
        }
    }

    if ctx.condition == Some(Condition::Wet) && driver.is_top_driver {
        tally.add("Wet race", "top driver".to_string(), WET_TOP_DRIVER_BONUS);
    }
}

fn apply_enhanced(tally: &mut Tally, driver: &Driver, team: &Team, ctx: &RaceContext) {
    let drs = drs_effectiveness(ctx.track());
    tally.add(
        "DRS",
        format!("overtaking {} x DRS {} / 10", driver.overtaking_ability, drs),
        driver.overtaking_ability * drs / 10,
    );
    tally.add(
        "Consistency",
        format!("consistency {}", driver.consistency),
        driver.consistency,
    );
    tally.add(
        "Experience",
        format!("experience {} / 2", driver.experience_level),
        driver.experience_level / 2,
    );
    tally.add(
        "Pit stops",
        format!("pit-stop efficiency {} / 2", team.pit_stop_efficiency),
        team.pit_stop_efficiency / 2,
    );
    tally.add(
        "Tire strategy",
        format!("tire strategy {} / 2", team.tire_strategy),
        team.tire_strategy / 2,
    );

    let track_type = TrackType::classify(ctx.track());
    match track_type {
        TrackType::HighSpeed => tally.add(
            "Track type",
            format!("{}: aerodynamics {} / 2", track_type, team.aerodynamics),
            team.aerodynamics / 2,
        ),
        TrackType::Street => tally.add(
            "Track type",
            format!("{}: overtaking {} / 2", track_type, driver.overtaking_ability),
            driver.overtaking_ability / 2,
        ),
        TrackType::Technical => {}
    }
}

fn apply_weather(tally: &mut Tally, driver: &Driver, team: &Team, weather: &WeatherSnapshot) {
    if weather.rain_probability > RAIN_THRESHOLD {
        tally.add(
            "Rain",
            format!(
                "wet-weather skill {} x {}% rain / 100",
                driver.wet_weather_skill, weather.rain_probability
            ),
            driver.wet_weather_skill * weather.rain_probability / 100,
        );
    }

    if weather.temperature_c > HOT_THRESHOLD_C {
        tally.add(
            "Heat",
            format!("{:.1}C: tire strategy {} / 3", weather.temperature_c, team.tire_strategy),
            team.tire_strategy / 3,
        );
    } else if weather.temperature_c < COLD_THRESHOLD_C {
        tally.add(
            "Cold",
            format!("{:.1}C: experience {} / 3", weather.temperature_c, driver.experience_level),
            driver.experience_level / 3,
        );
    }

    if weather.wind_speed_kph > WIND_THRESHOLD_KPH {
        tally.add(
            "Wind",
            format!("{:.1} km/h: aerodynamics {} / 4", weather.wind_speed_kph, team.aerodynamics),
            team.aerodynamics / 4,
        );
    }

    if weather.humidity_pct > HUMIDITY_THRESHOLD_PCT {
        tally.add(
            "Humidity",
            format!("{:.0}%: consistency {} / 3", weather.humidity_pct, driver.consistency),
            driver.consistency / 3,
        );
    }
}
