#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub engine: String,
    pub is_top_team: bool,
    pub pit_stop_efficiency: i32,
    pub tire_strategy: i32,
    pub aerodynamics: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub name: String,
    pub number: u32,            // Unique within the grid
    pub country: String,
    pub favorite_track: String,
    pub home_track: String,
    pub team_index: usize,      // Index into Grid::teams, checked by build_grid
    pub is_top_driver: bool,
    pub is_elite_driver: bool,
    pub overtaking_ability: i32,
    pub consistency: i32,
    pub experience_level: i32,
    pub wet_weather_skill: i32,

    // Derived per prediction pass
    pub points: i32,
    pub percentage: f64,
    pub predicted_position: usize, // 1-based; 0 until ranked
}

impl Driver {
    /// Clear the fields derived by scoring and ranking.
    pub fn reset(&mut self) {
        self.points = 0;
        self.percentage = 0.0;
        self.predicted_position = 0;
    }
}

/// The field for one race weekend, in configuration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub teams: Vec<Team>,
    pub drivers: Vec<Driver>,
}

impl Grid {
    /// The team a driver races for.
    pub fn team_of(&self, driver: &Driver) -> &Team {
        &self.teams[driver.team_index]
    }

    pub fn total_points(&self) -> i64 {
        self.drivers.iter().map(|d| d.points as i64).sum()
    }
}
