use crate::grid::Grid;
use crate::ranking::{calculate_percentages, predict_positions};
use crate::scoring::{calculate_points, Condition, RaceContext, ScoreResult};
use crate::weather::{get_weather, WeatherSettings};

/// Outcome of one prediction pass. `results` is in grid order.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub context: RaceContext,
    pub results: Vec<ScoreResult>,
}

/// Score the grid, then derive percentages and predicted positions.
///
/// Every derived field is recomputed, so calling this again with a different
/// context gives a fresh prediction.
pub fn score_and_rank(grid: &mut Grid, ctx: &RaceContext) -> Vec<ScoreResult> {
    let results = calculate_points(grid, ctx);
    calculate_percentages(&mut grid.drivers);
    predict_positions(&mut grid.drivers);

    tracing::debug!("Field total: {} points", grid.total_points());

    results
}

/// Build the race context, acquire weather for the track when asked to,
/// and run a scoring pass.
///
/// `weather` is None when weather acquisition is disabled. Weather is only
/// looked up for a named track.
pub async fn predict_race(
    grid: &mut Grid,
    track: Option<&str>,
    condition: Option<Condition>,
    weather: Option<&WeatherSettings>,
) -> Prediction {
    let context = RaceContext::new(track, condition);

    let snapshot = match (context.track(), weather) {
        (Some(track), Some(settings)) => Some(get_weather(track, settings).await),
        _ => None,
    };

    if let Some(ref snapshot) = snapshot {
        tracing::info!(
            "Weather: {} ({}), {:.1}C, {}% rain",
            snapshot.description,
            snapshot.source,
            snapshot.temperature_c,
            snapshot.rain_probability
        );
    }

    let context = context.with_weather(snapshot);
    let results = score_and_rank(grid, &context);

    Prediction { context, results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::grid::build_grid;
    use crate::weather::WeatherSource;

    fn two_driver_grid() -> Grid {
        let config: Config = serde_json::from_str(
            r#"{
            "teams": [
                { "name": "Red Bull", "engine": "Honda RBPT", "isTopTeam": true },
                { "name": "Sauber", "engine": "Audi" }
            ],
            "drivers": [
                { "name": "Bottas", "number": 77, "country": "Finland", "teamIndex": 1 },
                { "name": "Verstappen", "number": 1, "country": "Netherlands", "teamIndex": 0,
                  "isTopDriver": true, "isEliteDriver": true }
            ]
        }"#,
        )
        .unwrap();
        build_grid(&config).unwrap()
    }

    #[tokio::test]
    async fn test_no_track_uses_base_policy_without_weather() {
        let mut grid = two_driver_grid();
        let settings = WeatherSettings::default();
        let prediction = predict_race(&mut grid, None, None, Some(&settings)).await;

        assert!(prediction.context.weather.is_none());
        assert!(!prediction.results[0].enhanced);
        assert_eq!(grid.drivers[1].points, 10 + 12 + 15 + 5);
        assert_eq!(grid.drivers[1].predicted_position, 1);
        assert_eq!(grid.drivers[0].points, 0);
        assert_eq!(grid.drivers[1].percentage, 100.0);
    }

    #[tokio::test]
    async fn test_track_with_simulated_weather() {
        let mut grid = two_driver_grid();
        let settings = WeatherSettings {
            seed: Some(11),
            ..WeatherSettings::default()
        };
        let prediction = predict_race(&mut grid, Some("Singapore"), Some(Condition::Wet), Some(&settings)).await;

        let weather = prediction.context.weather.as_ref().unwrap();
        assert_eq!(weather.source, WeatherSource::Simulated);
        assert!(prediction.results.iter().all(|r| r.enhanced));
        let sum: f64 = grid.drivers.iter().map(|d| d.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_weather_disabled_still_enhances_for_track() {
        let mut grid = two_driver_grid();
        let prediction = predict_race(&mut grid, Some("Monza"), None, None).await;

        assert!(prediction.context.weather.is_none());
        assert!(prediction.results[0].enhanced);
    }

    #[test]
    fn test_zero_point_field_is_well_defined() {
        let config: Config = serde_json::from_str(
            r#"{
            "teams": [{ "name": "Privateer", "engine": "Cosworth" }],
            "drivers": [
                { "name": "A", "number": 2, "teamIndex": 0 },
                { "name": "B", "number": 1, "teamIndex": 0 }
            ]
        }"#,
        )
        .unwrap();
        let mut grid = build_grid(&config).unwrap();
        score_and_rank(&mut grid, &RaceContext::default());

        assert!(grid.drivers.iter().all(|d| d.points == 0 && d.percentage == 0.0));
        // Tie broken by race number
        assert_eq!(grid.drivers[1].predicted_position, 1);
        assert_eq!(grid.drivers[0].predicted_position, 2);
    }
}
