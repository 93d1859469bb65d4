use super::schema::{Config, RATING_MAX, RATING_MIN};

/// Validate a loaded configuration before any entities are built.
/// Returns all validation errors at once (not just the first).
///
/// Team references and race-number uniqueness are checked by the grid
/// builder, which owns those invariants.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.drivers.is_empty() {
        errors.push("drivers: at least one driver is required".to_string());
    }

    for (i, team) in config.teams.iter().enumerate() {
        if team.name.trim().is_empty() {
            errors.push(format!("teams[{}].name: must not be empty", i));
        }
        check_rating(&mut errors, "teams", i, "pitStopEfficiency", team.pit_stop_efficiency);
        check_rating(&mut errors, "teams", i, "tireStrategy", team.tire_strategy);
        check_rating(&mut errors, "teams", i, "aerodynamics", team.aerodynamics);
    }

    for (i, driver) in config.drivers.iter().enumerate() {
        if driver.name.trim().is_empty() {
            errors.push(format!("drivers[{}].name: must not be empty", i));
        }
        check_rating(&mut errors, "drivers", i, "overtakingAbility", driver.overtaking_ability);
        check_rating(&mut errors, "drivers", i, "consistency", driver.consistency);
        check_rating(&mut errors, "drivers", i, "experienceLevel", driver.experience_level);
        check_rating(&mut errors, "drivers", i, "wetWeatherSkill", driver.wet_weather_skill);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_rating(errors: &mut Vec<String>, list: &str, index: usize, field: &str, value: i32) {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        errors.push(format!(
            "{}[{}].{}: {} is outside {}-{}",
            list, index, field, value, RATING_MIN, RATING_MAX
        ));
    }
}
