use super::{Cell, GridEngine, GridError};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let columns = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, rows, columns, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Nothing is written unless every cell fits on the grid.
    pub fn place_on(&self, engine: &mut GridEngine, row: isize, col: isize) -> Result<(), GridError> {
        let out_of_bounds = GridError::OutOfBounds {
            row,
            col,
            rows: engine.rows(),
            columns: engine.columns(),
        };
        let offset = |base: isize, delta: usize| {
            isize::try_from(delta).ok().and_then(|d| base.checked_add(d))
        };
        let targets: Vec<(isize, isize)> = self
            .cells
            .iter()
            .map(|&(dr, dc)| offset(row, dr).zip(offset(col, dc)).ok_or(out_of_bounds))
            .collect::<Result<_, _>>()?;

        for &(r, c) in &targets {
            engine.get_state(r, c)?;
        }
        for (r, c) in targets {
            engine.set_state(r, c, Cell::Alive)?;
        }
        Ok(())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Get all available patterns, in hotkey order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }
}
