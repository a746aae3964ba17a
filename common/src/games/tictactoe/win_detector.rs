use super::board::{BOARD_SIZE, Board};
use super::types::{EndInfo, Mark};

/// Looks for a completed line of `mark` passing through `(row, column)`.
///
/// Only lines through the last placed cell can have been completed by it, so
/// the row and the column are always checked and each diagonal only when the
/// cell lies on it. Lines are tried in the order row, column, major diagonal,
/// minor diagonal and the first match wins.
pub fn check_win_through(board: &Board, row: usize, column: usize, mark: Mark) -> Option<EndInfo> {
    if mark == Mark::Empty {
        return None;
    }

    if is_line(board, |i| (row, i), mark) {
        return Some(EndInfo::row(row));
    }
    if is_line(board, |i| (i, column), mark) {
        return Some(EndInfo::column(column));
    }
    if row == column && is_line(board, |i| (i, i), mark) {
        return Some(EndInfo::major_diagonal());
    }
    if on_minor_diagonal(row, column) && is_line(board, |i| (i, BOARD_SIZE - 1 - i), mark) {
        return Some(EndInfo::minor_diagonal());
    }

    None
}

fn on_minor_diagonal(row: usize, column: usize) -> bool {
    (row == 1 && column == 1) || row + column == BOARD_SIZE - 1
}

fn is_line(board: &Board, cell: impl Fn(usize) -> (usize, usize), mark: Mark) -> bool {
    (0..BOARD_SIZE).all(|i| {
        let (row, column) = cell(i);
        board.get(row, column) == mark
    })
}
