use life_grid::{Board, Loc};

/// Turns pointer positions into board cells: `row = floor(y / cell_size)`,
/// `col = floor(x / cell_size)`. Positions are in the same units as the cell size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerMapper {
    cell_size: u32,
}

impl PointerMapper {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn cell_at(&self, x: f64, y: f64, board: &Board) -> Option<Loc> {
        if self.cell_size == 0 || x.is_nan() || y.is_nan() || x < 0.0 || y < 0.0 {
            return None;
        }
        let cell_size = f64::from(self.cell_size);
        let row = (y / cell_size).floor();
        let col = (x / cell_size).floor();
        if row >= f64::from(board.rows()) || col >= f64::from(board.columns()) {
            return None;
        }
        Some(Loc::new(row as u32, col as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_to_containing_cell() {
        let board = Board::new(8, 6);
        let mapper = PointerMapper::new(10);

        assert_eq!(mapper.cell_at(0.0, 0.0, &board), Some(Loc::new(0, 0)));
        assert_eq!(mapper.cell_at(25.0, 13.5, &board), Some(Loc::new(1, 2)));
        assert_eq!(mapper.cell_at(79.9, 59.9, &board), Some(Loc::new(5, 7)));
    }

    #[test]
    fn off_board_positions_map_to_nothing() {
        let board = Board::new(8, 6);
        let mapper = PointerMapper::new(10);

        assert_eq!(mapper.cell_at(-0.5, 10.0, &board), None);
        assert_eq!(mapper.cell_at(10.0, -3.0, &board), None);
        assert_eq!(mapper.cell_at(80.0, 10.0, &board), None);
        assert_eq!(mapper.cell_at(10.0, 60.0, &board), None);
        assert_eq!(mapper.cell_at(f64::NAN, 10.0, &board), None);
        assert_eq!(mapper.cell_at(10.0, f64::INFINITY, &board), None);
    }

    #[test]
    fn zero_cell_size_maps_to_nothing() {
        let board = Board::new(8, 6);
        assert_eq!(PointerMapper::new(0).cell_at(5.0, 5.0, &board), None);
    }
}
