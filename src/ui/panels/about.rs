// EssaySort - ui/panels/about.rs
//
// About dialog: shown from Help > About.
// Rendered as a centred, non-resizable, non-collapsible modal window.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {}", constants::APP_NAME))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("\u{1f4da}  {}", constants::APP_NAME))
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", constants::APP_VERSION))
                        .size(14.0)
                        .weak(),
                );
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Sorts essay-topic links into descriptive,");
                ui.label("narrative and expository sections.");
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            let stats = &state.page.collection;
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} topics loaded", stats.total()))
                        .small()
                        .weak(),
                );
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
