use super::board::{Board, CELL_COUNT};
use super::observer::{GameObserver, Observers, SubscriptionId};
use super::types::{GameEvent, GameResult, Mark, Player};
use super::win_detector::check_win_through;

/// Turn-based state of a single 3x3 game.
///
/// The game is in progress until a move completes a line or fills the
/// board; after that every move is ignored until [`TicTacToeGameState::reset`].
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    turns_played: usize,
    finished: bool,
    result: Option<GameResult>,
    observers: Observers,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub const STARTING_PLAYER: Player = Player::X;

    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Self::STARTING_PLAYER,
            turns_played: 0,
            finished: false,
            result: None,
            observers: Observers::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Panics if `row` or `column` is outside `0..3`.
    pub fn cell(&self, row: usize, column: usize) -> Mark {
        self.board.get(row, column)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Placements that did not end the game.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[cfg(test)]
    pub(crate) fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Panics if `row` or `column` is outside `0..3`.
    pub fn can_make_move(&self, row: usize, column: usize) -> bool {
        !self.finished && self.board.is_empty_at(row, column)
    }

    /// Applies a move for the current player. Returns `false`, with no side
    /// effects, when [`Self::can_make_move`] rejects it.
    pub fn make_move(&mut self, row: usize, column: usize) -> bool {
        if !self.can_make_move(row, column) {
            return false;
        }

        let player = self.current_player;
        self.board.set(row, column, player.mark());
        self.observers.emit(GameEvent::MoveMade { row, column });

        if let Some(end_info) = check_win_through(&self.board, row, column, player.mark()) {
            self.finish(GameResult::win(player, end_info));
            return true;
        }

        self.turns_played += 1;
        if self.turns_played == CELL_COUNT {
            self.finish(GameResult::tie());
            return true;
        }

        self.current_player = player.opponent();
        true
    }

    /// Starts over. An unfinished game is dropped without a result.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Self::STARTING_PLAYER;
        self.turns_played = 0;
        self.finished = false;
        self.result = None;

        self.observers.emit(GameEvent::GameRestarted);
    }

    fn finish(&mut self, result: GameResult) {
        self.finished = true;
        self.result = Some(result);
        self.observers.emit(GameEvent::GameFinished(result));
    }
}
