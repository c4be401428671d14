#![deny(clippy::all)]
#![forbid(unsafe_code)]

use arrayvec::ArrayVec;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Moore-neighborhood offsets as `(dx, dy)`: `dx` moves across rows, `dy` across columns.
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A fixed-size grid of alive/dead cells, stored row-major.
///
/// Dimensions never change after construction. Indexing with a [`Loc`] outside the
/// grid is a contract violation and panics; use [`Board::cell`] for checked access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: u32,
    rows: u32,
    cells: Vec<bool>,
}

impl Board {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            cells: vec![false; columns as usize * rows as usize],
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: u32, col: u32) -> bool {
        self[Loc::new(row, col)]
    }

    pub fn set(&mut self, row: u32, col: u32, alive: bool) {
        self[Loc::new(row, col)] = alive;
    }

    pub fn toggle(&mut self, loc: Loc) -> bool {
        let cell = &mut self[loc];
        *cell = !*cell;
        *cell
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.grid_index(self.columns, self.rows).is_some()
    }

    pub fn cell(&self, loc: Loc) -> Option<bool> {
        loc.grid_index(self.columns, self.rows)
            .map(|index| self.cells[index])
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics; an empty board has no cells to chunk anyway.
        self.cells.chunks(self.columns.max(1) as usize)
    }

    pub fn locs(&self) -> impl Iterator<Item = Loc> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |col| Loc::new(row, col)))
    }
}

impl Index<Loc> for Board {
    type Output = bool;

    fn index(&self, loc: Loc) -> &Self::Output {
        let index = loc.grid_index(self.columns, self.rows).unwrap_or_else(|| {
            panic!(
                "Index indices {}, {} out of bounds for {}x{} board",
                loc.row, loc.col, self.rows, self.columns
            )
        });
        &self.cells[index]
    }
}

impl IndexMut<Loc> for Board {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        let index = loc.grid_index(self.columns, self.rows).unwrap_or_else(|| {
            panic!(
                "Index_mut indices {}, {} out of bounds for {}x{} board",
                loc.row, loc.col, self.rows, self.columns
            )
        });
        &mut self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// The in-bounds Moore neighbors of one cell. Grid edges are hard: nothing wraps.
pub struct Neighborhood<'a> {
    board: &'a Board,
    neighbors: ArrayVec<Loc, 8>,
}

impl<'a> Neighborhood<'a> {
    pub fn new(board: &'a Board, center: Loc) -> Self {
        let neighbors = MOORE_OFFSETS
            .iter()
            .filter_map(|&offset| center.offset(offset, board.columns(), board.rows()))
            .collect();
        Self { board, neighbors }
    }

    pub fn neighbor_locs(&self) -> &[Loc] {
        &self.neighbors
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(bool),
    {
        for &loc in &self.neighbors {
            f(self.board[loc]);
        }
    }

    pub fn num_live_neighbors(&self) -> u32 {
        let mut result = 0;
        self.for_neighbor_cells(|alive| {
            if alive {
                result += 1;
            }
        });
        result
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, width: u32, height: u32) -> Option<usize> {
        if self.row < height && self.col < width {
            Some(self.row as usize * width as usize + self.col as usize)
        } else {
            None
        }
    }

    pub fn offset(&self, (dx, dy): (i32, i32), width: u32, height: u32) -> Option<Loc> {
        let row = self.row.checked_add_signed(dx)?;
        let col = self.col.checked_add_signed(dy)?;
        (row < height && col < width).then(|| Loc::new(row, col))
    }
}
