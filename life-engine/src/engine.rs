use crate::config::EngineConfig;
use life_grid::{Board, Loc, Neighborhood};
use rayon::prelude::*;

/// Conway's rule: a live cell survives with 2 or 3 live neighbors, a dead cell is
/// born with exactly 3, everything else is dead next generation.
pub fn cell_fate(alive: bool, live_neighbors: u32) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

#[derive(Clone, Copy, Debug)]
pub struct SimulationEngine {
    parallel_threshold: usize,
}

impl SimulationEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            parallel_threshold: config.parallel_threshold,
        }
    }

    pub fn next_generation(&self, board: &Board) -> Board {
        let mut next = Board::new(board.columns(), board.rows());
        let columns = board.columns() as usize;
        if columns == 0 {
            return next;
        }

        if board.num_cells() >= self.parallel_threshold {
            next.cells_mut()
                .par_chunks_mut(columns)
                .enumerate()
                .for_each(|(row, next_row)| Self::update_row(board, row as u32, next_row));
        } else {
            next.cells_mut()
                .chunks_mut(columns)
                .enumerate()
                .for_each(|(row, next_row)| Self::update_row(board, row as u32, next_row));
        }
        next
    }

    fn update_row(board: &Board, row: u32, next_row: &mut [bool]) {
        for (col, next_cell) in next_row.iter_mut().enumerate() {
            let loc = Loc::new(row, col as u32);
            let live_neighbors = Neighborhood::new(board, loc).num_live_neighbors();
            *next_cell = cell_fate(board[loc], live_neighbors);
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use life_grid::MOORE_OFFSETS;

    fn serial() -> SimulationEngine {
        SimulationEngine::new(&EngineConfig::default().with_parallel_threshold(usize::MAX))
    }

    fn board_with(columns: u32, rows: u32, live: &[(u32, u32)]) -> Board {
        let mut board = Board::new(columns, rows);
        for &(row, col) in live {
            board.set(row, col, true);
        }
        board
    }

    fn center_with_neighbors(center_alive: bool, count: usize) -> Board {
        let mut board = Board::new(5, 5);
        board.set(2, 2, center_alive);
        for &offset in MOORE_OFFSETS.iter().take(count) {
            let loc = Loc::new(2, 2).offset(offset, 5, 5).unwrap();
            board[loc] = true;
        }
        board
    }

    #[test]
    fn rule_table() {
        for neighbors in 0..=8 {
            assert_eq!(cell_fate(true, neighbors), neighbors == 2 || neighbors == 3);
            assert_eq!(cell_fate(false, neighbors), neighbors == 3);
        }
    }

    #[test]
    fn dead_board_stays_dead() {
        let next = serial().next_generation(&Board::new(3, 3));
        assert_eq!(next, Board::new(3, 3));
    }

    #[test]
    fn birth_needs_exactly_three() {
        for count in 0..=8 {
            let next = serial().next_generation(&center_with_neighbors(false, count));
            assert_eq!(next.get(2, 2), count == 3, "{count} neighbors");
        }
    }

    #[test]
    fn survival_needs_two_or_three() {
        for count in 0..=8 {
            let next = serial().next_generation(&center_with_neighbors(true, count));
            assert_eq!(next.get(2, 2), count == 2 || count == 3, "{count} neighbors");
        }
    }

    #[test]
    fn block_is_still_life() {
        let block = board_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(serial().next_generation(&block), block);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = board_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = board_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let once = serial().next_generation(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(serial().next_generation(&once), horizontal);
    }

    #[test]
    fn edges_do_not_wrap() {
        // On a torus (0, 0) would see all three of these and be born.
        let board = board_with(4, 4, &[(3, 3), (0, 3), (3, 0)]);
        let next = serial().next_generation(&board);
        assert!(!next.get(0, 0));

        let lonely_corner = board_with(4, 4, &[(0, 0), (3, 3)]);
        assert_eq!(serial().next_generation(&lonely_corner).population(), 0);
    }

    #[test]
    fn input_board_is_not_modified() {
        let board = board_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = board.clone();
        serial().next_generation(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn glider_moves_one_cell_diagonally_every_four_generations() {
        let glider = Pattern::parse("glider", &["010", "001", "111"], 10).unwrap();
        let mut board = Board::new(10, 10);
        glider.seed(&mut board);

        let engine = serial();
        let mut moved = board.clone();
        for _ in 0..4 {
            moved = engine.next_generation(&moved);
        }

        let mut expected = Board::new(10, 10);
        for loc in board.locs().filter(|&loc| board[loc]) {
            expected.set(loc.row + 1, loc.col + 1, true);
        }
        assert_eq!(moved, expected);
    }

    #[test]
    fn parallel_matches_serial() {
        let soup = Pattern::random_soup("soup", 80, 60, 0.4, 42, 8).unwrap();
        let parallel = SimulationEngine::new(&EngineConfig::default().with_parallel_threshold(0));

        let mut serial_board = soup.cells().clone();
        let mut parallel_board = soup.cells().clone();
        for _ in 0..10 {
            serial_board = serial().next_generation(&serial_board);
            parallel_board = parallel.next_generation(&parallel_board);
        }
        assert_eq!(serial_board, parallel_board);
    }

    #[test]
    fn empty_board_has_empty_successor() {
        let next = SimulationEngine::default().next_generation(&Board::new(0, 0));
        assert_eq!(next.num_cells(), 0);
    }
}
