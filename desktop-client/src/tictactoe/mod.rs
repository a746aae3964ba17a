mod board_geometry;
mod end_sequence;
mod view;

use common::games::tictactoe::{BOARD_SIZE, GameEvent, GameResult, Mark, Player, TicTacToeGameState};
use common::{log, log_error};
use eframe::egui;
use tokio::sync::mpsc;

use crate::config::TicTacToeConfig;
use board_geometry::{cell_at, cell_rect, end_line_points};
use end_sequence::run_end_sequence;
pub use end_sequence::{EndSequenceDelays, EndSequenceStep};
use view::Screen;

pub struct TicTacToeApp {
    game_state: TicTacToeGameState,
    screen: Screen,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
    step_rx: mpsc::UnboundedReceiver<EndSequenceStep>,
    last_hover: Option<(usize, usize)>,
}

impl TicTacToeApp {
    const BOARD_SIDE: f32 = 300.0;
    const LINE_WIDTH: f32 = 3.0;
    const END_LINE_WIDTH: f32 = 6.0;
    const MARK_PREVIEW_SIDE: f32 = 32.0;
    const END_SCREEN_MARK_SIDE: f32 = 120.0;

    pub fn new(ctx: &egui::Context, config: &TicTacToeConfig) -> Self {
        let (ui_tx, event_rx) = mpsc::unbounded_channel();
        let (sequence_tx, sequence_rx) = mpsc::unbounded_channel();
        let (step_tx, step_rx) = mpsc::unbounded_channel();

        let mut game_state = TicTacToeGameState::new();
        game_state.subscribe(forward_events(ui_tx, sequence_tx));

        let delays = config.end_sequence_delays();
        let repaint_ctx = ctx.clone();
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log_error!("Failed to start end sequence runtime: {}", e);
                    return;
                }
            };
            rt.block_on(run_end_sequence(sequence_rx, step_tx, delays, move || {
                repaint_ctx.request_repaint();
            }));
        });

        Self {
            game_state,
            screen: Screen::default(),
            event_rx,
            step_rx,
            last_hover: None,
        }
    }

    fn drain_updates(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                GameEvent::MoveMade { row, column } => log!("Mark placed at ({}, {})", row, column),
                GameEvent::GameFinished(result) => log!("{}", describe_result(&result)),
                GameEvent::GameRestarted => log!("Game restarted"),
            }
            self.screen.apply_event(&event);
        }

        while let Ok(step) = self.step_rx.try_recv() {
            self.screen.apply_step(step, self.game_state.is_finished());
        }
    }

    fn render_game(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Current player:");
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(Self::MARK_PREVIEW_SIDE, Self::MARK_PREVIEW_SIDE),
                    egui::Sense::hover(),
                );
                draw_mark(ui.painter(), rect, self.game_state.current_player().mark());
            });

            ui.add_space(10.0);
            self.render_board(ui);
            ui.add_space(10.0);

            if ui.button("Restart").clicked() {
                self.game_state.reset();
            }
        });
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(Self::BOARD_SIDE, Self::BOARD_SIDE),
            egui::Sense::click(),
        );

        self.last_hover = response
            .hover_pos()
            .and_then(|pos| cell_at(rect.size(), pos - rect.min))
            .filter(|&(row, column)| self.game_state.can_make_move(row, column));

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * rect.width() / BOARD_SIZE as f32;
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        if let Some((row, column)) = self.last_hover {
            painter.rect_filled(
                cell_rect(rect, row, column),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                draw_mark(painter, cell_rect(rect, row, column), self.game_state.cell(row, column));
            }
        }

        if let Some(end_info) = self.screen.end_line()
            && let Some((start, end)) = end_line_points(end_info, rect.size())
        {
            painter.line_segment(
                [start + rect.min.to_vec2(), end + rect.min.to_vec2()],
                egui::Stroke::new(Self::END_LINE_WIDTH, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        if response.clicked()
            && let Some((row, column)) = self.last_hover
        {
            self.game_state.make_move(row, column);
        }
    }

    fn render_end_screen(&mut self, ui: &mut egui::Ui, winner: Option<Player>) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            match winner {
                Some(player) => {
                    ui.heading(egui::RichText::new("Winner:").size(28.0));
                    ui.add_space(10.0);
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(Self::END_SCREEN_MARK_SIDE, Self::END_SCREEN_MARK_SIDE),
                        egui::Sense::hover(),
                    );
                    draw_mark(ui.painter(), rect, player.mark());
                }
                None => {
                    ui.heading(egui::RichText::new("It's a draw!").size(28.0));
                }
            }

            ui.add_space(20.0);
            if ui.button(egui::RichText::new("Play again").size(18.0)).clicked() {
                self.game_state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_updates();

        let screen = self.screen;
        egui::CentralPanel::default().show(ctx, |ui| match screen {
            Screen::Board { .. } => self.render_game(ui),
            Screen::EndScreen { winner } => self.render_end_screen(ui, winner),
        });

        // Moves and restarts queue events for the next frame.
        if !self.event_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

/// Copies every core event to the window and to the end sequence task. A
/// closed end sequence channel is reported once and the window keeps going.
fn forward_events(
    ui_tx: mpsc::UnboundedSender<GameEvent>,
    sequence_tx: mpsc::UnboundedSender<GameEvent>,
) -> impl FnMut(&GameEvent) {
    let mut sequence_lost = false;
    move |event: &GameEvent| {
        if ui_tx.send(*event).is_err() {
            log_error!("Game window stopped receiving events");
        }
        if sequence_tx.send(*event).is_err() && !sequence_lost {
            sequence_lost = true;
            log_error!("End sequence is not running, strike line and end screen are disabled");
        }
    }
}

fn describe_result(result: &GameResult) -> String {
    match result.winner {
        Some(player) => format!(
            "Game over: {} wins ({:?}, index {})",
            player, result.end_info.end_type, result.end_info.index
        ),
        None => "Game over: draw".to_string(),
    }
}

fn draw_mark(painter: &egui::Painter, rect: egui::Rect, mark: Mark) {
    let padding = rect.width() * 0.2;

    match mark {
        Mark::X => {
            let stroke = egui::Stroke::new(rect.width() * 0.06, egui::Color32::from_rgb(220, 50, 50));
            painter.line_segment(
                [
                    egui::pos2(rect.left() + padding, rect.top() + padding),
                    egui::pos2(rect.right() - padding, rect.bottom() - padding),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.right() - padding, rect.top() + padding),
                    egui::pos2(rect.left() + padding, rect.bottom() - padding),
                ],
                stroke,
            );
        }
        Mark::O => {
            let stroke = egui::Stroke::new(rect.width() * 0.06, egui::Color32::from_rgb(50, 50, 220));
            painter.circle_stroke(rect.center(), rect.width() / 2.0 - padding, stroke);
        }
        Mark::Empty => {}
    }
}
