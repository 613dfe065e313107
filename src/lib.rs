// Domain layer - Core simulation engine
pub mod domain;

// Application layer - Driver and settings
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridEngine, GridError, Pattern, presets};
pub use application::{ConfigError, Settings, Simulation};
