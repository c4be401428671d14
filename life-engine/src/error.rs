use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatternError {
    #[error("Pattern {name:?} has no cells")]
    Empty { name: String },
    #[error("Pattern {name:?} row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Pattern {name:?} has {found:?} at row {row}, column {col}; only '0' and '1' are allowed")]
    InvalidChar {
        name: String,
        row: usize,
        col: usize,
        found: char,
    },
    #[error("Soup density {density} is outside [0, 1]")]
    InvalidDensity { density: f64 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    #[error("Cell size must be positive")]
    ZeroCellSize,
    #[error("Tick period must be positive")]
    ZeroTickPeriod,
    #[error("A {width}x{height} area holds no {cell_size}-unit cells")]
    EmptyGrid {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("Cell ({row}, {col}) is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        columns: u32,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
