use conway_grid::{Cell, GridEngine, GridError};
use proptest::prelude::*;

/// An engine of arbitrary size with an arbitrary set of alive cells
fn arb_engine() -> impl Strategy<Value = GridEngine> {
    (0usize..12, 0usize..12).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(any::<bool>(), rows * columns).prop_map(move |alive| {
            let mut engine = GridEngine::new(rows, columns);
            for (idx, is_alive) in alive.into_iter().enumerate() {
                let (row, col) = ((idx / columns) as isize, (idx % columns) as isize);
                engine.set_state(row, col, Cell::from(is_alive)).unwrap();
            }
            engine
        })
    })
}

proptest! {
    #[test]
    fn dead_grid_stays_dead(rows in 0usize..20, columns in 0usize..20) {
        let mut engine = GridEngine::new(rows, columns);
        engine.advance();
        prop_assert_eq!(engine.population(), 0);
        prop_assert_eq!(engine.cells().count(), rows * columns);
    }

    #[test]
    fn parallel_matches_serial(engine in arb_engine()) {
        let mut serial = engine.clone();
        let mut parallel = engine;
        serial.advance();
        parallel.advance_parallel();
        prop_assert_eq!(serial.grid(), parallel.grid());
    }

    #[test]
    fn neighbor_count_respects_position(engine in arb_engine()) {
        let (rows, columns) = (engine.rows(), engine.columns());
        for (row, col, _) in engine.cells() {
            let count = engine.count_alive_neighbors(row as isize, col as isize).unwrap();
            let on_row_edge = row == 0 || row + 1 == rows;
            let on_col_edge = col == 0 || col + 1 == columns;
            let limit = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            prop_assert!(count <= limit);
        }
    }

    #[test]
    fn advance_follows_rule(engine in arb_engine()) {
        let mut next = engine.clone();
        next.advance();
        for (row, col, cell) in engine.cells() {
            let (r, c) = (row as isize, col as isize);
            let expected = cell.evolve(engine.count_alive_neighbors(r, c).unwrap());
            prop_assert_eq!(next.get_state(r, c).unwrap(), expected);
        }
    }

    #[test]
    fn edges_are_out_of_bounds(rows in 1usize..30, columns in 1usize..30) {
        let mut engine = GridEngine::new(rows, columns);
        let (r, c) = (rows as isize, columns as isize);
        for (row, col) in [(-1, 0), (r, 0), (0, -1), (0, c)] {
            let expected = Err(GridError::OutOfBounds { row, col, rows, columns });
            prop_assert_eq!(engine.get_state(row, col), expected);
            prop_assert_eq!(engine.set_state(row, col, Cell::Alive), expected.map(|_| ()));
        }
        prop_assert_eq!(engine.population(), 0);
    }

    #[test]
    fn enumeration_is_row_major_and_restartable(engine in arb_engine()) {
        let first: Vec<_> = engine.cells().collect();
        let second: Vec<_> = engine.cells().collect();
        prop_assert_eq!(&first, &second);

        let coords: Vec<_> = first.iter().map(|&(r, c, _)| (r, c)).collect();
        let expected: Vec<_> = (0..engine.rows())
            .flat_map(|r| (0..engine.columns()).map(move |c| (r, c)))
            .collect();
        prop_assert_eq!(coords, expected);
    }
}
