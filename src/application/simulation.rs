use log::{info, warn};

use crate::application::Settings;
use crate::domain::{Cell, GridEngine, GridError, Pattern};

/// Grids with at least this many cells advance on the rayon pool
const PARALLEL_THRESHOLD: usize = 100 * 100;

/// Simulation drives the engine: timed advancement, pause/resume,
/// stop/reset and user toggling. It holds no rendering state.
pub struct Simulation {
    pub engine: GridEngine,
    pub is_running: bool,
    pub update_timer: f32,
    /// Seconds between automatic generations
    pub tick_interval: f32,
    pub random_density: f64,
    pub last_advance_time_ms: f32,
}

impl Simulation {
    /// Create a paused simulation with an all-dead grid
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: GridEngine::new(settings.rows, settings.columns),
            is_running: false,
            update_timer: 0.0,
            tick_interval: settings.tick_interval().as_secs_f32(),
            random_density: settings.random_density,
            last_advance_time_ms: 0.0,
        }
    }

    /// Begin timed advancement
    pub fn start(mut self) -> Self {
        if self.is_running {
            warn!("simulation is already running");
            return self;
        }
        info!("simulation started at generation {}", self.engine.generation());
        self.is_running = true;
        self.update_timer = 0.0;
        self
    }

    /// Suspend timed advancement, keeping the grid
    pub fn pause(mut self) -> Self {
        if !self.is_running {
            warn!("simulation is not running");
            return self;
        }
        info!("simulation paused at generation {}", self.engine.generation());
        self.is_running = false;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running { self.pause() } else { self.start() }
    }

    /// Pause and clear the grid to all dead
    pub fn stop(mut self) -> Self {
        if self.is_running {
            info!("simulation stopped");
        } else {
            warn!("simulation is not running; clearing grid");
        }
        self.is_running = false;
        self.update_timer = 0.0;
        self.engine.reset();
        self
    }

    /// Randomize grid and pause
    pub fn randomize(mut self) -> Self {
        self.engine.randomize(&mut rand::rng(), self.random_density);
        self.is_running = false;
        self
    }

    /// Advance exactly one generation
    pub fn step(mut self) -> Self {
        self.advance();
        self
    }

    /// Flip the cell at (row, col), returning its new state
    pub fn toggle_cell(&mut self, row: isize, col: isize) -> Result<Cell, GridError> {
        self.engine.toggle_state(row, col)
    }

    /// Place a preset with its top-left corner at (row, col)
    pub fn place_pattern(&mut self, pattern: &Pattern, row: isize, col: isize) -> Result<(), GridError> {
        pattern.place_on(&mut self.engine, row, col)
    }

    /// Update simulation by one frame. At most one generation is computed
    /// per call, however long the frame took.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.tick_interval {
            self.advance();
            self.update_timer = 0.0;
        }
        self
    }

    fn advance(&mut self) {
        let start = std::time::Instant::now();
        if self.engine.rows() * self.engine.columns() >= PARALLEL_THRESHOLD {
            self.engine.advance_parallel();
        } else {
            self.engine.advance();
        }
        self.last_advance_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }
}
