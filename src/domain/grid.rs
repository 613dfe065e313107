use super::{Cell, GridError};
use rand::Rng;
use rayon::prelude::*;

/// Offsets of the eight surrounding cells, as (row, col) deltas.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is a fixed-size, row-major buffer of cells.
/// The edge is a hard boundary: coordinates past it have no cell and
/// never contribute to a neighbor count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// # Panics
    ///
    /// If `rows * columns` does not fit in `usize`.
    pub fn new(rows: usize, columns: usize) -> Self {
        let len = rows
            .checked_mul(columns)
            .unwrap_or_else(|| panic!("{rows}x{columns} grid exceeds the addressable cell count"));
        Self {
            rows,
            columns,
            cells: vec![Cell::Dead; len],
        }
    }

    /// Get grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// Map a signed coordinate to its buffer index, or fail with OutOfBounds
    fn checked_index(&self, row: isize, col: isize) -> Result<usize, GridError> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < self.rows && c < self.columns => Ok(self.index(r, c)),
            _ => Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            }),
        }
    }

    /// Get cell at position
    pub fn get(&self, row: isize, col: isize) -> Result<Cell, GridError> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite a single cell; no other cell is touched
    pub fn set(&mut self, row: isize, col: isize, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count alive cells among the up to eight in-bounds neighbors
    pub fn count_alive_neighbors(&self, row: isize, col: isize) -> Result<u8, GridError> {
        self.checked_index(row, col)?;
        Ok(self.live_neighbors(row as usize, col as usize))
    }

    /// Neighbor count for a coordinate already known to be in bounds
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < self.rows && c < self.columns).then(|| self.cells[self.index(r, c)])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the successor grid (serial). `self` is left untouched, so
    /// every cell is evaluated against the same generation.
    pub fn evolve(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.evolve(self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Same result as `evolve`, with rows computed in parallel by rayon.
    /// Worth it for grids larger than roughly 100x100.
    pub fn evolve_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];
        cells
            .par_chunks_mut(self.columns.max(1))
            .enumerate()
            .for_each(|(row, out)| {
                for (col, next) in out.iter_mut().enumerate() {
                    let current = self.cells[self.index(row, col)];
                    *next = current.evolve(self.live_neighbors(row, col));
                }
            });

        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill each cell independently, alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Iterate over all cells with their positions, in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / columns, idx % columns, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(rows: usize, columns: usize, alive: &[(isize, isize)]) -> Grid {
        let mut grid = Grid::new(rows, columns);
        for &(r, c) in alive {
            grid.set(r, c, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
        assert_eq!(grid.iter_cells().count(), 24);
    }

    #[test]
    #[should_panic(expected = "exceeds the addressable cell count")]
    fn test_overflowing_dimensions_panic() {
        Grid::new(usize::MAX / 2, 3);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3, 5);
        for (r, c) in [(-1, 0), (3, 0), (0, -1), (0, 5)] {
            assert_eq!(
                grid.get(r, c),
                Err(GridError::OutOfBounds { row: r, col: c, rows: 3, columns: 5 })
            );
            assert!(grid.set(r, c, Cell::Alive).is_err());
            assert!(grid.count_alive_neighbors(r, c).is_err());
        }
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_set_only_touches_one_cell() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 2, Cell::Alive).unwrap();
        grid.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(1, 2), Ok(Cell::Alive));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_corner_and_edge_neighbor_limits() {
        let mut grid = Grid::new(5, 5);
        grid.randomize(&mut StdRng::seed_from_u64(1), 1.0);
        assert_eq!(grid.count_alive_neighbors(0, 0), Ok(3));
        assert_eq!(grid.count_alive_neighbors(4, 4), Ok(3));
        assert_eq!(grid.count_alive_neighbors(0, 2), Ok(5));
        assert_eq!(grid.count_alive_neighbors(2, 4), Ok(5));
        assert_eq!(grid.count_alive_neighbors(2, 2), Ok(8));
    }

    #[test]
    fn test_no_wraparound() {
        // Alive cells on the far edges must not count for the opposite corner
        let grid = grid_with(4, 4, &[(3, 3), (0, 3), (3, 0)]);
        assert_eq!(grid.count_alive_neighbors(0, 0), Ok(0));
    }

    #[test]
    fn test_evolve_leaves_source_untouched() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let next = grid.evolve();
        assert_eq!(grid.get(2, 1), Ok(Cell::Alive));
        assert_eq!(next.get(2, 1), Ok(Cell::Dead));
        assert_eq!(next.get(1, 2), Ok(Cell::Alive));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(37, 53);
        grid.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        assert_eq!(grid.evolve(), grid.evolve_parallel());
    }

    #[test]
    fn test_zero_sized_grids() {
        for (rows, columns) in [(0, 0), (0, 4), (4, 0)] {
            let grid = Grid::new(rows, columns);
            assert_eq!(grid.evolve(), grid);
            assert_eq!(grid.evolve_parallel(), grid);
            assert_eq!(grid.iter_cells().count(), 0);
            assert!(grid.get(0, 0).is_err());
        }
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = grid_with(2, 3, &[(1, 0)]);
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells[0], (0, 0, Cell::Dead));
        assert_eq!(cells[2], (0, 2, Cell::Dead));
        assert_eq!(cells[3], (1, 0, Cell::Alive));
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(10, 10);
        grid.randomize(&mut StdRng::seed_from_u64(3), 0.5);
        assert!(grid.population() > 0);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
