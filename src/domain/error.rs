/// Errors raised by grid point queries and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        columns: usize,
    },
}
