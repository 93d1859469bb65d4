pub mod builder;
pub mod types;

pub use builder::build_grid;
pub use types::{Driver, Grid, Team};
