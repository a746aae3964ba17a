use std::path::{Path, PathBuf};

use common::editor::{FILE_FILTERS, TextDocument};
use common::{log, log_error};
use eframe::egui;

const OPEN_SHORTCUT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SAVE_SHORTCUT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);

pub struct EditorApp {
    document: TextDocument,
    status: Option<String>,
    shown_title: Option<String>,
}

impl EditorApp {
    pub fn new(initial_file: Option<PathBuf>) -> Self {
        let mut app = Self {
            document: TextDocument::new(),
            status: None,
            shown_title: None,
        };
        if let Some(path) = initial_file {
            app.open(&path);
        }
        app
    }

    fn file_dialog() -> rfd::FileDialog {
        FILE_FILTERS
            .iter()
            .fold(rfd::FileDialog::new(), |dialog, (name, extensions)| dialog.add_filter(*name, *extensions))
    }

    fn open_with_dialog(&mut self) {
        if let Some(path) = Self::file_dialog().pick_file() {
            self.open(&path);
        }
    }

    fn open(&mut self, path: &Path) {
        match self.document.open(path) {
            Ok(()) => {
                log!("Opened {}", path.display());
                self.status = None;
            }
            Err(e) => {
                log_error!("Failed to open {}: {}", path.display(), e);
                self.status = Some(format!("Could not open {}: {}", path.display(), e));
            }
        }
    }

    fn save_with_dialog(&mut self) {
        if !self.document.can_save() {
            return;
        }
        let mut dialog = Self::file_dialog();
        if let Some(path) = self.document.path() {
            if let Some(dir) = path.parent() {
                dialog = dialog.set_directory(dir);
            }
            dialog = dialog.set_file_name(self.document.title());
        }
        let Some(path) = dialog.save_file() else {
            return;
        };

        match self.document.save_to(&path) {
            Ok(()) => {
                log!("Saved {}", path.display());
                self.status = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log_error!("Failed to save {}: {}", path.display(), e);
                self.status = Some(format!("Could not save {}: {}", path.display(), e));
            }
        }
    }

    fn cut(&mut self, ctx: &egui::Context) {
        let removed = self.document.cut();
        if !removed.is_empty() {
            ctx.copy_text(removed);
        }
        self.status = None;
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = format!("{} - Text Editor", self.document.title());
        if self.shown_title.as_deref() != Some(title.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = Some(title);
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open = egui::Button::new("Open").shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT));
                if ui.add(open).clicked() {
                    ui.close();
                    self.open_with_dialog();
                }

                let save = egui::Button::new("Save").shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT));
                if ui.add_enabled(self.document.can_save(), save).clicked() {
                    ui.close();
                    self.save_with_dialog();
                }

                if ui.button("Cut").clicked() {
                    ui.close();
                    self.cut(ctx);
                }
            });
        });
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            self.open_with_dialog();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            self.save_with_dialog();
        }

        self.update_title(ctx);

        egui::TopBottomPanel::top("editor_menu").show(ctx, |ui| {
            self.render_menu(ui, ctx);
        });

        egui::TopBottomPanel::bottom("editor_status").show(ctx, |ui| {
            let text = match (&self.status, self.document.path()) {
                (Some(status), _) => status.clone(),
                (None, Some(path)) => path.display().to_string(),
                (None, None) => "New document".to_string(),
            };
            ui.label(egui::RichText::new(text).small());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(self.document.text_mut()),
                );
            });
        });
    }
}
