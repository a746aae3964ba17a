use common::games::tictactoe::{BOARD_SIZE, EndInfo, EndType};
use egui::{Pos2, Rect, Vec2, pos2, vec2};

/// Maps a pointer position relative to the board's top-left corner to
/// `(row, column)`.
pub fn cell_at(board_size: Vec2, pointer: Vec2) -> Option<(usize, usize)> {
    if board_size.x <= 0.0 || board_size.y <= 0.0 {
        return None;
    }
    if pointer.x < 0.0 || pointer.y < 0.0 || pointer.x >= board_size.x || pointer.y >= board_size.y {
        return None;
    }

    let cell_width = board_size.x / BOARD_SIZE as f32;
    let cell_height = board_size.y / BOARD_SIZE as f32;
    let row = ((pointer.y / cell_height) as usize).min(BOARD_SIZE - 1);
    let column = ((pointer.x / cell_width) as usize).min(BOARD_SIZE - 1);
    Some((row, column))
}

pub fn cell_rect(board: Rect, row: usize, column: usize) -> Rect {
    let cell = board.size() / BOARD_SIZE as f32;
    Rect::from_min_size(
        board.min + vec2(column as f32 * cell.x, row as f32 * cell.y),
        cell,
    )
}

/// Strike-through endpoints, relative to the board's top-left corner.
///
/// Rows and columns are crossed through the middle of their cells edge to
/// edge; diagonals run corner to corner. A tie has no line.
pub fn end_line_points(end_info: EndInfo, board_size: Vec2) -> Option<(Pos2, Pos2)> {
    let cell_width = board_size.x / BOARD_SIZE as f32;
    let cell_height = board_size.y / BOARD_SIZE as f32;

    match end_info.end_type {
        EndType::Row => {
            let y = end_info.index as f32 * cell_height + cell_height / 2.0;
            Some((pos2(0.0, y), pos2(board_size.x, y)))
        }
        EndType::Column => {
            let x = end_info.index as f32 * cell_width + cell_width / 2.0;
            Some((pos2(x, 0.0), pos2(x, board_size.y)))
        }
        EndType::MajorDiagonal => Some((pos2(0.0, 0.0), pos2(board_size.x, board_size.y))),
        EndType::MinorDiagonal => Some((pos2(board_size.x, 0.0), pos2(0.0, board_size.y))),
        EndType::Tie => None,
    }
}
