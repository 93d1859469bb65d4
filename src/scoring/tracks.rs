use std::fmt;

pub const DRS_HIGH: i32 = 8;
pub const DRS_MEDIUM: i32 = 6;
pub const DRS_LOW: i32 = 3;
pub const DRS_DEFAULT: i32 = 5;

const HIGH_DRS_TRACKS: &[&str] = &["Monza", "Spa", "Baku", "Jeddah"];
const MEDIUM_DRS_TRACKS: &[&str] = &["Silverstone", "Austria", "Bahrain"];
const LOW_DRS_TRACKS: &[&str] = &["Monaco", "Hungary", "Singapore"];

const STREET_TRACKS: &[&str] = &["Monaco", "Singapore", "Baku", "Jeddah"];
const HIGH_SPEED_TRACKS: &[&str] = &["Monza", "Spa", "Silverstone"];

/// Engine suppliers that earn the engine bonus. Matched case-sensitively.
pub const ELITE_ENGINES: &[&str] = &["Mercedes", "Ferrari", "Honda RBPT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    Street,
    HighSpeed,
    Technical,
}

impl TrackType {
    /// Classify a circuit by name; unknown or missing tracks are technical.
    pub fn classify(track: Option<&str>) -> Self {
        match track {
            Some(t) if matches_any(t, STREET_TRACKS) => TrackType::Street,
            Some(t) if matches_any(t, HIGH_SPEED_TRACKS) => TrackType::HighSpeed,
            _ => TrackType::Technical,
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackType::Street => write!(f, "street"),
            TrackType::HighSpeed => write!(f, "high-speed"),
            TrackType::Technical => write!(f, "technical"),
        }
    }
}

/// How much DRS helps overtaking at a circuit.
pub fn drs_effectiveness(track: Option<&str>) -> i32 {
    match track {
        Some(t) if matches_any(t, HIGH_DRS_TRACKS) => DRS_HIGH,
        Some(t) if matches_any(t, MEDIUM_DRS_TRACKS) => DRS_MEDIUM,
        Some(t) if matches_any(t, LOW_DRS_TRACKS) => DRS_LOW,
        _ => DRS_DEFAULT,
    }
}

pub fn is_elite_engine(engine: &str) -> bool {
    ELITE_ENGINES.contains(&engine)
}

fn matches_any(track: &str, names: &[&str]) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(track))
}
