mod board;
mod game_state;
mod observer;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use game_state::TicTacToeGameState;
pub use observer::{GameObserver, SubscriptionId};
pub use types::{EndInfo, EndType, GameEvent, GameResult, Mark, Player};
pub use win_detector::check_win_through;
