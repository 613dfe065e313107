mod config;
mod simulation;

pub use config::{ConfigError, MAX_CELLS, Settings};
pub use simulation::Simulation;
