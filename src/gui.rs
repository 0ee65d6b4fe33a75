// EssaySort - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels, the menu bar and the status bar.

use crate::app::state::AppState;
use crate::core::model::Theme;
use crate::ui;
use crate::util::error::ExportError;
use std::path::Path;

/// Export formats offered in the File menu.
#[derive(Debug, Clone, Copy)]
enum ExportKind {
    Html,
    Json,
    Csv,
}

impl ExportKind {
    fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    fn write(self, state: &AppState, dest: &Path) -> Result<usize, ExportError> {
        match self {
            Self::Html => state.export_html(dest),
            Self::Json => state.export_json(dest),
            Self::Csv => state.export_csv(dest),
        }
    }
}

/// The EssaySort application.
pub struct EssaySortApp {
    pub state: AppState,
    /// Theme most recently pushed into the egui context.
    applied_theme: Option<Theme>,
}

impl EssaySortApp {
    /// Create a new application instance with the given state.
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let font_size = state.config.font_size;
        ctx.all_styles_mut(|style| {
            for (text_style, font) in style.text_styles.iter_mut() {
                match text_style {
                    egui::TextStyle::Body | egui::TextStyle::Button => font.size = font_size,
                    egui::TextStyle::Small => font.size = font_size * 0.8,
                    _ => {}
                }
            }
        });
        Self {
            state,
            applied_theme: None,
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let current = self.state.page.current_theme();
        if self.applied_theme != Some(current) {
            ctx.set_theme(ui::theme::egui_theme(current));
            self.applied_theme = Some(current);
        }
    }

    fn open_page_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML pages", &["html", "htm"])
            .pick_file()
        {
            // Errors are already logged and shown in the status bar.
            let _ = self.state.open_page(&path);
        }
    }

    fn export_dialog(&mut self, kind: ExportKind) {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(kind.label(), &[kind.extension()])
            .set_file_name(format!("topics.{}", kind.extension()))
            .save_file()
        else {
            return;
        };
        self.state.status_message = match kind.write(&self.state, &dest) {
            Ok(n) => {
                tracing::info!(path = %dest.display(), topics = n, format = kind.label(), "Exported");
                format!("Exported {n} topics to {}.", kind.label())
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("{} export failed: {e}", kind.label())
            }
        };
    }
}

impl eframe::App for EssaySortApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Page\u{2026}").clicked() {
                        ui.close_menu();
                        self.open_page_dialog();
                    }
                    ui.separator();
                    let has_topics = self.state.page.collection.total() > 0;
                    ui.add_enabled_ui(has_topics, |ui| {
                        ui.menu_button("Export", |ui| {
                            for kind in [ExportKind::Html, ExportKind::Json, ExportKind::Csv] {
                                if ui.button(format!("Export {}\u{2026}", kind.label())).clicked() {
                                    ui.close_menu();
                                    self.export_dialog(kind);
                                }
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar: filters, search and theme toggle
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::toolbar::render(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                if !self.state.warnings.is_empty() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("\u{26a0} {}", self.state.warnings.len()))
                            .color(egui::Color32::from_rgb(234, 179, 8)), // Yellow 500
                    )
                    .on_hover_text(self.state.warnings.join("\n"));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.page.collection.total();
                    if total > 0 {
                        ui.label(format!("{total} topics"));
                    }
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").small().weak());
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::sections::render(ui, &self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);

        // A toggle this frame changes the document theme; pick it up now.
        self.sync_theme(ctx);
    }
}
