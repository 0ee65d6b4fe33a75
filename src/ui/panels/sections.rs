// EssaySort - ui/panels/sections.rs
//
// Central panel: paints the rendered topic sections.
// Reads the document only. Visibility comes from the same class and style
// state the controllers write, so what is painted always matches the markup.

use crate::app::state::AppState;
use crate::core::document::{Document, NodeId};
use crate::core::model::{CategoryKey, Theme};
use crate::core::search::{is_displayed, is_placeholder, is_shown};
use crate::ui::theme;
use crate::util::constants;

/// A visible entry inside a section.
enum Entry {
    Link { text: String, href: String },
    Placeholder(String),
}

struct SectionView {
    key: Option<CategoryKey>,
    title: String,
    entries: Vec<Entry>,
}

fn read_section(doc: &Document, section: NodeId) -> SectionView {
    let key = doc
        .attribute(section, constants::DATA_KEY_ATTR)
        .and_then(CategoryKey::parse);
    let title = doc
        .select_tag(section, "h2")
        .first()
        .map(|h| doc.text_content(*h))
        .unwrap_or_default();

    let entries = doc
        .select_tag(section, "li")
        .into_iter()
        .filter(|li| is_displayed(doc, *li))
        .filter_map(|li| {
            if is_placeholder(doc, li) {
                return Some(Entry::Placeholder(doc.text_content(li)));
            }
            let anchor = *doc.select_tag(li, "a").first()?;
            Some(Entry::Link {
                text: doc.text_content(anchor),
                href: doc.attribute(anchor, "href").unwrap_or_default().to_string(),
            })
        })
        .collect();

    SectionView {
        key,
        title,
        entries,
    }
}

/// Render all shown sections.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let doc = &state.page.doc;
    let current = state.page.current_theme();
    let views: Vec<SectionView> = state
        .page
        .sections()
        .into_iter()
        .filter(|s| is_shown(doc, *s))
        .map(|s| read_section(doc, s))
        .collect();

    if views.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("No topics loaded. Use File \u{2192} Open Page\u{2026}").weak());
        });
        return;
    }

    // Multi-row layout stretches sections to the full width; a single
    // filtered section is kept to a readable column.
    let rows = doc.has_class(state.page.list, constants::ROWS_CLASS);
    let width = if rows {
        ui.available_width()
    } else {
        ui.available_width().min(theme::SINGLE_SECTION_MAX_WIDTH)
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for view in &views {
                ui.set_max_width(width);
                render_section(ui, view, current);
                ui.add_space(theme::SECTION_SPACING);
            }
        });
}

fn render_section(ui: &mut egui::Ui, view: &SectionView, current: Theme) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        let mut heading = egui::RichText::new(&view.title)
            .size(theme::HEADING_SIZE)
            .strong();
        if let Some(key) = view.key {
            heading = heading.color(theme::category_colour(key));
        }
        ui.label(heading);
        ui.add_space(4.0);

        for entry in &view.entries {
            match entry {
                Entry::Link { text, href } => {
                    let response = ui.link(text).on_hover_text(href);
                    if response.clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(href));
                    }
                }
                Entry::Placeholder(text) => {
                    ui.label(egui::RichText::new(text).color(theme::muted_colour(current)));
                }
            }
        }
    });
}
