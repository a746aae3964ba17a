use std::time::Duration;

use common::games::tictactoe::{EndInfo, GameEvent, GameResult, Player};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndSequenceStep {
    ShowEndLine(EndInfo),
    /// `None` for a draw.
    ShowEndScreen(Option<Player>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndSequenceDelays {
    pub end_line: Duration,
    pub end_screen: Duration,
}

/// Timed steps between the end of a game and its end screen. A win pauses,
/// strikes the winning line, pauses again and shows the winner; a draw goes
/// to the end screen after the first pause.
pub fn steps_for(result: &GameResult, delays: EndSequenceDelays) -> Vec<(Duration, EndSequenceStep)> {
    match result.winner {
        Some(winner) => vec![
            (delays.end_line, EndSequenceStep::ShowEndLine(result.end_info)),
            (delays.end_screen, EndSequenceStep::ShowEndScreen(Some(winner))),
        ],
        None => vec![(delays.end_line, EndSequenceStep::ShowEndScreen(None))],
    }
}

enum Interrupt {
    Completed,
    Restarted,
    Closed,
}

/// Turns `GameFinished` events into delayed [`EndSequenceStep`]s.
///
/// A `GameRestarted` that arrives while steps are still pending drops the
/// rest of that sequence. `on_step` runs after every delivered step so the
/// UI can schedule a repaint. Returns once either channel is closed.
pub async fn run_end_sequence(
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
    step_tx: mpsc::UnboundedSender<EndSequenceStep>,
    delays: EndSequenceDelays,
    on_step: impl Fn(),
) {
    while let Some(event) = event_rx.recv().await {
        let GameEvent::GameFinished(result) = event else {
            continue;
        };

        match play_steps(&mut event_rx, &step_tx, steps_for(&result, delays), &on_step).await {
            Interrupt::Completed | Interrupt::Restarted => {}
            Interrupt::Closed => break,
        }
    }
}

async fn play_steps(
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
    step_tx: &mpsc::UnboundedSender<EndSequenceStep>,
    steps: Vec<(Duration, EndSequenceStep)>,
    on_step: &impl Fn(),
) -> Interrupt {
    for (delay, step) in steps {
        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => {
                    if step_tx.send(step).is_err() {
                        return Interrupt::Closed;
                    }
                    on_step();
                    break;
                }
                event = event_rx.recv() => match event {
                    Some(GameEvent::GameRestarted) => return Interrupt::Restarted,
                    Some(_) => {}
                    None => return Interrupt::Closed,
                },
            }
        }
    }
    Interrupt::Completed
}
