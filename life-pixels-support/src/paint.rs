use life_engine::{Board, Loc};

// Cadet blue.
pub const ALIVE_COLOR: [u8; 4] = [0x5f, 0x9e, 0xa0, 0xff];
pub const DEAD_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
pub const GRID_COLOR: [u8; 4] = [0xe1, 0xe1, 0xe1, 0xff];

// Cells this small are drawn without grid lines.
const MIN_OUTLINED_CELL_SIZE: u32 = 3;

pub fn frame_size(board: &Board, cell_size: u32) -> (u32, u32) {
    (board.columns() * cell_size, board.rows() * cell_size)
}

/// Paints `board` into an RGBA frame of [`frame_size`]: live cells filled, dead cells
/// blank with a grid line along their top and left edges.
pub fn paint_board(board: &Board, cell_size: u32, frame: &mut [u8]) {
    let (width, height) = frame_size(board, cell_size);
    debug_assert_eq!(frame.len(), 4 * width as usize * height as usize);

    for (index, pixel) in frame.chunks_exact_mut(4).enumerate() {
        let x = (index % width as usize) as u32;
        let y = (index / width as usize) as u32;
        pixel.copy_from_slice(&pixel_color_rgba(board, cell_size, x, y));
    }
}

fn pixel_color_rgba(board: &Board, cell_size: u32, x: u32, y: u32) -> [u8; 4] {
    if board[Loc::new(y / cell_size, x / cell_size)] {
        ALIVE_COLOR
    } else if cell_size >= MIN_OUTLINED_CELL_SIZE && (x % cell_size == 0 || y % cell_size == 0) {
        GRID_COLOR
    } else {
        DEAD_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let start = 4 * (y * width + x) as usize;
        frame[start..start + 4].try_into().unwrap()
    }

    #[test]
    fn frame_covers_every_cell() {
        let board = Board::new(7, 3);
        assert_eq!(frame_size(&board, 10), (70, 30));
    }

    #[test]
    fn paints_live_dead_and_grid() {
        let mut board = Board::new(2, 1);
        board.set(0, 1, true);
        let (width, height) = frame_size(&board, 4);
        let mut frame = vec![0; 4 * (width * height) as usize];

        paint_board(&board, 4, &mut frame);

        assert_eq!(pixel(&frame, width, 0, 0), GRID_COLOR);
        assert_eq!(pixel(&frame, width, 2, 2), DEAD_COLOR);
        assert_eq!(pixel(&frame, width, 4, 0), ALIVE_COLOR);
        assert_eq!(pixel(&frame, width, 7, 3), ALIVE_COLOR);
    }

    #[test]
    fn tiny_cells_have_no_grid() {
        let board = Board::new(2, 2);
        let mut frame = vec![0; 4 * 16];
        paint_board(&board, 2, &mut frame);
        assert!(frame.chunks_exact(4).all(|pixel| pixel == DEAD_COLOR));
    }
}
