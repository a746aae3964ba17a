use common::games::tictactoe::{EndInfo, GameEvent, Player};

use super::end_sequence::EndSequenceStep;

/// What the tic-tac-toe window currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// The board, plus the strike line once the end sequence has drawn it.
    Board { end_line: Option<EndInfo> },
    EndScreen { winner: Option<Player> },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Board { end_line: None }
    }
}

impl Screen {
    pub fn apply_event(&mut self, event: &GameEvent) {
        if let GameEvent::GameRestarted = event {
            *self = Screen::default();
        }
    }

    /// A step can race a restart, so it is dropped unless the game is
    /// still finished.
    pub fn apply_step(&mut self, step: EndSequenceStep, game_finished: bool) {
        if !game_finished {
            return;
        }
        *self = match step {
            EndSequenceStep::ShowEndLine(end_info) => Screen::Board { end_line: Some(end_info) },
            EndSequenceStep::ShowEndScreen(winner) => Screen::EndScreen { winner },
        };
    }

    pub fn end_line(&self) -> Option<EndInfo> {
        match self {
            Screen::Board { end_line } => *end_line,
            Screen::EndScreen { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::GameResult;

    #[test]
    fn test_win_sequence_moves_from_line_to_end_screen() {
        let mut screen = Screen::default();
        screen.apply_step(EndSequenceStep::ShowEndLine(EndInfo::minor_diagonal()), true);
        assert_eq!(screen.end_line(), Some(EndInfo::minor_diagonal()));

        screen.apply_step(EndSequenceStep::ShowEndScreen(Some(Player::X)), true);
        assert_eq!(screen, Screen::EndScreen { winner: Some(Player::X) });
        assert_eq!(screen.end_line(), None);
    }

    #[test]
    fn test_restart_returns_to_clean_board() {
        let mut screen = Screen::EndScreen { winner: None };
        screen.apply_event(&GameEvent::GameFinished(GameResult::tie()));
        assert_eq!(screen, Screen::EndScreen { winner: None });

        screen.apply_event(&GameEvent::GameRestarted);
        assert_eq!(screen, Screen::default());
    }

    #[test]
    fn test_step_after_restart_is_ignored() {
        let mut screen = Screen::default();
        screen.apply_step(EndSequenceStep::ShowEndLine(EndInfo::row(1)), true);
        screen.apply_event(&GameEvent::GameRestarted);

        screen.apply_step(EndSequenceStep::ShowEndScreen(Some(Player::O)), false);
        assert_eq!(screen, Screen::default());

        screen.apply_step(EndSequenceStep::ShowEndLine(EndInfo::column(0)), false);
        assert_eq!(screen.end_line(), None);
    }
}
