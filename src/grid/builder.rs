use super::types::{Driver, Grid, Team};
use crate::config::{validate_config, Config, DriverRecord, TeamRecord};
use crate::error::{PredictorError, Result};
use std::collections::HashMap;

/// Build the team and driver sequences from a loaded configuration.
///
/// Fails without a partial result if the config does not validate (see
/// [`validate_config`]), if any driver points at a team index that does not
/// exist, or if two drivers share a race number.
pub fn build_grid(config: &Config) -> Result<Grid> {
    validate_config(config).map_err(PredictorError::InvalidConfig)?;

    let teams: Vec<Team> = config.teams.iter().map(team_from_record).collect();

    let mut seen_numbers: HashMap<u32, &str> = HashMap::new();
    let mut drivers = Vec::with_capacity(config.drivers.len());

    for record in &config.drivers {
        let team_index = resolve_team_index(record, teams.len())?;

        if let Some(first) = seen_numbers.insert(record.number, &record.name) {
            return Err(PredictorError::DuplicateRaceNumber {
                number: record.number,
                first: first.to_string(),
                second: record.name.clone(),
            });
        }

        drivers.push(driver_from_record(record, team_index));
    }

    tracing::debug!("Built grid: {} teams, {} drivers", teams.len(), drivers.len());

    Ok(Grid { teams, drivers })
}

fn resolve_team_index(record: &DriverRecord, team_count: usize) -> Result<usize> {
    usize::try_from(record.team_index)
        .ok()
        .filter(|&i| i < team_count)
        .ok_or_else(|| PredictorError::InvalidTeamReference {
            driver: record.name.clone(),
            index: record.team_index,
            team_count,
        })
}

fn team_from_record(record: &TeamRecord) -> Team {
    Team {
        name: record.name.clone(),
        engine: record.engine.clone(),
        is_top_team: record.is_top_team,
        pit_stop_efficiency: record.pit_stop_efficiency,
        tire_strategy: record.tire_strategy,
        aerodynamics: record.aerodynamics,
    }
}

fn driver_from_record(record: &DriverRecord, team_index: usize) -> Driver {
    Driver {
        name: record.name.clone(),
        number: record.number,
        country: record.country.clone(),
        favorite_track: record.favorite_track.clone(),
        home_track: record.home_track.clone(),
        team_index,
        is_top_driver: record.is_top_driver,
        is_elite_driver: record.is_elite_driver,
        overtaking_ability: record.overtaking_ability,
        consistency: record.consistency,
        experience_level: record.experience_level,
        wet_weather_skill: record.wet_weather_skill,
        points: 0,
        percentage: 0.0,
        predicted_position: 0,
    }
}
