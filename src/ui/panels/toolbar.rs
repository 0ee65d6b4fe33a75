// EssaySort - ui/panels/toolbar.rs
//
// Filter buttons, search box and theme toggle.
// Every interaction is raised as an event through the app state; this
// panel never changes the document directly.

use crate::app::state::AppState;
use crate::core::document::NodeId;
use crate::util::constants;

/// One filter button as read from the document.
struct FilterButton {
    id: String,
    label: String,
    active: bool,
}

fn read_buttons(state: &AppState, nodes: &[NodeId]) -> Vec<FilterButton> {
    let doc = &state.page.doc;
    nodes
        .iter()
        .filter_map(|node| {
            Some(FilterButton {
                id: doc.attribute(*node, "id")?.to_string(),
                label: doc.text_content(*node),
                active: doc.has_class(*node, constants::ACTIVE_CLASS),
            })
        })
        .collect()
}

/// Render the toolbar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let buttons = read_buttons(state, state.page.filter.buttons());

    ui.horizontal(|ui| {
        for button in &buttons {
            if ui.selectable_label(button.active, &button.label).clicked() {
                state.click(&button.id);
            }
        }

        ui.separator();

        let search = ui.add(
            egui::TextEdit::singleline(&mut state.search_text)
                .hint_text("Search topics\u{2026}")
                .desired_width(crate::ui::theme::SEARCH_BOX_WIDTH),
        );
        if search.changed() {
            state.submit_search();
        }
        if !state.page.search.query().is_empty() {
            if let Some(n) = state.last_match_count {
                ui.label(egui::RichText::new(format!("{n} found")).weak());
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle = state.page.doc.element_by_id(constants::THEME_TOGGLE_ID);
            let icon = toggle
                .map(|t| state.page.doc.text_content(t))
                .unwrap_or_default();
            let pressed = toggle
                .and_then(|t| state.page.doc.attribute(t, "aria-pressed"))
                == Some("true");
            let hover = if pressed {
                "Switch to light theme"
            } else {
                "Switch to dark theme"
            };
            if ui
                .selectable_label(pressed, icon)
                .on_hover_text(hover)
                .clicked()
            {
                state.click(constants::THEME_TOGGLE_ID);
            }
        });
    });
}
