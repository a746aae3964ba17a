mod config;
mod editor;
mod tictactoe;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::{log, log_error, logger};
use eframe::egui;

use config::{CONFIG_FILE, Config, get_config_manager};
use editor::EditorApp;
use tictactoe::TicTacToeApp;

#[derive(Parser)]
#[command(name = "desk_apps", about = "Tic-tac-toe and a plain text editor")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    app: Option<AppCommand>,
}

#[derive(Subcommand, Clone)]
enum AppCommand {
    /// Two-player tic-tac-toe (default)
    Tictactoe,
    /// Plain text editor
    Editor {
        file: Option<PathBuf>,
    },
}

impl AppCommand {
    fn log_prefix(&self) -> &'static str {
        match self {
            AppCommand::Tictactoe => "TicTacToe",
            AppCommand::Editor { .. } => "Editor",
        }
    }
}

fn load_config(path: &std::path::Path) -> Config {
    match get_config_manager(path).get_config() {
        Ok(config) => config,
        Err(e) => {
            log_error!("{} ({}), using defaults", e, path.display());
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let app = args.app.unwrap_or(AppCommand::Tictactoe);

    let prefix = if args.use_log_prefix {
        Some(app.log_prefix().to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args.config);

    match app {
        AppCommand::Tictactoe => {
            let cfg = config.tictactoe;
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([cfg.window_width as f32, cfg.window_height as f32])
                    .with_title("Tic Tac Toe"),
                ..Default::default()
            };

            log!("Starting tic-tac-toe");
            eframe::run_native(
                "Tic Tac Toe",
                options,
                Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(&cc.egui_ctx, &cfg)))),
            )?;
        }
        AppCommand::Editor { file } => {
            let cfg = config.editor;
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([cfg.window_width as f32, cfg.window_height as f32])
                    .with_title("Text Editor"),
                ..Default::default()
            };

            log!("Starting text editor");
            eframe::run_native(
                "Text Editor",
                options,
                Box::new(move |_cc| Ok(Box::new(EditorApp::new(file)))),
            )?;
        }
    }

    Ok(())
}
