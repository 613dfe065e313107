//! The simulation engine: one current generation, replaced wholesale on
//! every advance.

use log::{debug, trace};
use rand::Rng;

use super::{Cell, Grid, GridError};

/// GridEngine owns the current generation and computes its successors.
///
/// Not internally synchronized. Callers sharing an engine across threads
/// must wrap it in a lock so that `advance` never interleaves with a
/// `set_state`.
#[derive(Clone, Debug)]
pub struct GridEngine {
    grid: Grid,
    generation: u64,
}

impl GridEngine {
    /// Create an engine with a `rows` x `columns` grid, every cell dead.
    /// Zero-sized grids are legal; every advance on them is a no-op.
    pub fn new(rows: usize, columns: usize) -> Self {
        debug!("creating {rows}x{columns} grid");
        Self {
            grid: Grid::new(rows, columns),
            generation: 0,
        }
    }

    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub const fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Number of advances since construction or the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Read-only view of the current generation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get_state(&self, row: isize, col: isize) -> Result<Cell, GridError> {
        self.grid.get(row, col)
    }

    pub fn set_state(&mut self, row: isize, col: isize, state: Cell) -> Result<(), GridError> {
        self.grid.set(row, col, state)
    }

    /// Flip a cell and return its new state
    pub fn toggle_state(&mut self, row: isize, col: isize) -> Result<Cell, GridError> {
        let next = self.grid.get(row, col)?.toggle();
        self.grid.set(row, col, next)?;
        Ok(next)
    }

    pub fn count_alive_neighbors(&self, row: isize, col: isize) -> Result<u8, GridError> {
        self.grid.count_alive_neighbors(row, col)
    }

    /// Advance one generation. The successor is computed in full from the
    /// current grid before it replaces it.
    pub fn advance(&mut self) {
        self.grid = self.grid.evolve();
        self.generation += 1;
        trace!("advanced to generation {}", self.generation);
    }

    /// Same as `advance`, computing rows in parallel
    pub fn advance_parallel(&mut self) {
        self.grid = self.grid.evolve_parallel();
        self.generation += 1;
        trace!("advanced to generation {} (parallel)", self.generation);
    }

    /// Every (row, col, state) of the current generation in row-major
    /// order. Can be called any number of times.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.grid.iter_cells()
    }

    /// Set every cell dead and restart the generation count
    pub fn reset(&mut self) {
        debug!("resetting grid after {} generations", self.generation);
        self.grid.clear();
        self.generation = 0;
    }

    /// Random fill, alive with probability `density`; restarts the
    /// generation count
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.grid.randomize(rng, density);
        self.generation = 0;
    }
}
