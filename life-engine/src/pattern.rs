use crate::error::PatternError;
use life_grid::{Board, Loc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Board,
    cell_size: u32,
}

impl Pattern {
    pub fn parse<S>(name: &str, rows: &[S], cell_size: u32) -> Result<Self, PatternError>
    where
        S: AsRef<str>,
    {
        let expected = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if expected == 0 {
            return Err(PatternError::Empty { name: name.into() });
        }

        let mut cells = Board::new(expected as u32, rows.len() as u32);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(PatternError::RaggedRow {
                    name: name.into(),
                    row: row_index,
                    expected,
                    found,
                });
            }
            for (col_index, ch) in row.chars().enumerate() {
                let alive = match ch {
                    '1' => true,
                    '0' => false,
                    found => {
                        return Err(PatternError::InvalidChar {
                            name: name.into(),
                            row: row_index,
                            col: col_index,
                            found,
                        });
                    }
                };
                cells.set(row_index as u32, col_index as u32, alive);
            }
        }

        Ok(Self {
            name: name.into(),
            cells,
            cell_size,
        })
    }

    /// A `columns` x `rows` block where each cell is alive with probability `density`.
    /// The same seed always produces the same pattern.
    pub fn random_soup(
        name: &str,
        columns: u32,
        rows: u32,
        density: f64,
        seed: u64,
        cell_size: u32,
    ) -> Result<Self, PatternError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(PatternError::InvalidDensity { density });
        }
        if columns == 0 || rows == 0 {
            return Err(PatternError::Empty { name: name.into() });
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut cells = Board::new(columns, rows);
        for cell in cells.cells_mut() {
            *cell = rng.random_bool(density);
        }
        Ok(Self {
            name: name.into(),
            cells,
            cell_size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> u32 {
        self.cells.rows()
    }

    pub fn columns(&self) -> u32 {
        self.cells.columns()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn cells(&self) -> &Board {
        &self.cells
    }

    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.cells.get(row, col)
    }

    /// Top-left corner of the pattern when centered on `board`. Either coordinate is
    /// negative when the pattern is larger than the board along that axis.
    pub fn origin_on(&self, board: &Board) -> (i64, i64) {
        let start_row = (i64::from(board.rows()) - i64::from(self.rows())).div_euclid(2);
        let start_col = (i64::from(board.columns()) - i64::from(self.columns())).div_euclid(2);
        (start_row, start_col)
    }

    /// Stamps the pattern, centered, onto `board` and returns how many cells were written.
    /// Pattern cells that land outside the board are skipped.
    pub fn seed(&self, board: &mut Board) -> usize {
        let (start_row, start_col) = self.origin_on(board);
        let mut written = 0;
        for loc in self.cells.locs() {
            let target = Self::shifted(loc, start_row, start_col);
            if let Some(target) = target.filter(|&target| board.contains(target)) {
                board[target] = self.cells[loc];
                written += 1;
            }
        }
        written
    }

    pub fn seeded_board(&self, columns: u32, rows: u32) -> Board {
        let mut board = Board::new(columns, rows);
        self.seed(&mut board);
        board
    }

    fn shifted(loc: Loc, start_row: i64, start_col: i64) -> Option<Loc> {
        let row = u32::try_from(start_row + i64::from(loc.row)).ok()?;
        let col = u32::try_from(start_col + i64::from(loc.col)).ok()?;
        Some(Loc::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_one_rows() {
        let pattern = Pattern::parse("glider", &["010", "001", "111"], 12).unwrap();
        assert_eq!(pattern.name(), "glider");
        assert_eq!(pattern.rows(), 3);
        assert_eq!(pattern.columns(), 3);
        assert_eq!(pattern.cell_size(), 12);
        assert!(pattern.is_alive(0, 1));
        assert!(!pattern.is_alive(0, 0));
        assert_eq!(pattern.cells().population(), 5);
    }

    #[test]
    fn rejects_empty_pattern() {
        let no_rows: [&str; 0] = [];
        assert!(matches!(
            Pattern::parse("none", &no_rows, 10),
            Err(PatternError::Empty { .. })
        ));
        assert!(matches!(
            Pattern::parse("blank", &[""], 10),
            Err(PatternError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Pattern::parse("ragged", &["0101", "010"], 10).unwrap_err();
        assert_eq!(
            err,
            PatternError::RaggedRow {
                name: "ragged".into(),
                row: 1,
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn rejects_other_characters() {
        let err = Pattern::parse("bad", &["01", "0x"], 10).unwrap_err();
        assert_eq!(
            err,
            PatternError::InvalidChar {
                name: "bad".into(),
                row: 1,
                col: 1,
                found: 'x',
            }
        );
    }

    #[test]
    fn seeds_centered_with_matching_axes() {
        let blinker = Pattern::parse("blinker", &["111"], 10).unwrap();
        let mut board = Board::new(5, 5);

        assert_eq!(blinker.origin_on(&board), (2, 1));
        assert_eq!(blinker.seed(&mut board), 3);
        assert_eq!(board.to_string(), ".....\n.....\n.###.\n.....\n.....");
    }

    #[test]
    fn centering_rounds_down() {
        let pattern = Pattern::parse("pair", &["11"], 10).unwrap();
        let board = Board::new(5, 4);
        // (4 - 1) / 2 = 1.5 and (5 - 2) / 2 = 1.5 both floor to 1.
        assert_eq!(pattern.origin_on(&board), (1, 1));
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let pattern = Pattern::parse("big", &["10001", "01010", "00100", "01010", "10001"], 10)
            .unwrap();
        let mut board = Board::new(3, 3);

        assert_eq!(pattern.origin_on(&board), (-1, -1));
        assert_eq!(pattern.seed(&mut board), 9);
        assert_eq!(board.to_string(), "#.#\n.#.\n#.#");
    }

    #[test]
    fn seeding_overwrites_existing_cells_under_the_pattern() {
        let pattern = Pattern::parse("dead", &["000"], 10).unwrap();
        let mut board = Board::new(3, 1);
        board.set(0, 1, true);
        pattern.seed(&mut board);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn seeding_is_deterministic() {
        let pattern = Pattern::parse("r-pentomino", &["011", "110", "010"], 10).unwrap();
        let first = pattern.seeded_board(20, 15);
        let second = pattern.seeded_board(20, 15);
        assert_eq!(first, second);
        assert_eq!(first.population(), 5);
    }

    #[test]
    fn seeding_leaves_pattern_untouched() {
        let pattern = Pattern::parse("block", &["11", "11"], 10).unwrap();
        let before = pattern.clone();
        pattern.seeded_board(6, 6);
        assert_eq!(pattern, before);
    }

    #[test]
    fn soup_is_reproducible_from_seed() {
        let first = Pattern::random_soup("soup", 30, 20, 0.4, 7, 8).unwrap();
        let second = Pattern::random_soup("soup", 30, 20, 0.4, 7, 8).unwrap();
        let other = Pattern::random_soup("soup", 30, 20, 0.4, 8, 8).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn soup_density_extremes() {
        let empty = Pattern::random_soup("empty", 4, 4, 0.0, 1, 8).unwrap();
        let full = Pattern::random_soup("full", 4, 4, 1.0, 1, 8).unwrap();
        assert_eq!(empty.cells().population(), 0);
        assert_eq!(full.cells().population(), 16);
    }

    #[test]
    fn soup_rejects_bad_density() {
        assert_eq!(
            Pattern::random_soup("soup", 4, 4, 1.5, 1, 8),
            Err(PatternError::InvalidDensity { density: 1.5 })
        );
        assert!(Pattern::random_soup("soup", 4, 4, f64::NAN, 1, 8).is_err());
    }
}
