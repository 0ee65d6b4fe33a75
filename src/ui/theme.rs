// EssaySort - ui/theme.rs
//
// Colour scheme, theme mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{CategoryKey, Theme};
use egui::Color32;

/// egui theme for an application theme.
pub fn egui_theme(theme: Theme) -> egui::Theme {
    match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    }
}

/// Colour of placeholder and secondary text.
pub fn muted_colour(theme: Theme) -> Color32 {
    match theme {
        Theme::Light => Color32::from_rgb(107, 114, 128), // Gray 500
        Theme::Dark => Color32::from_rgb(156, 163, 175),  // Gray 400
    }
}

/// Accent stripe colour for a section heading.
pub fn category_colour(key: CategoryKey) -> Color32 {
    match key {
        CategoryKey::Descriptive => Color32::from_rgb(14, 165, 233), // Sky 500
        CategoryKey::Narrative => Color32::from_rgb(234, 88, 12),    // Orange 600
        CategoryKey::Expository => Color32::from_rgb(22, 163, 74),   // Green 600
    }
}

/// Layout constants.
pub const SECTION_SPACING: f32 = 12.0;
pub const SINGLE_SECTION_MAX_WIDTH: f32 = 720.0;
pub const SEARCH_BOX_WIDTH: f32 = 260.0;
pub const HEADING_SIZE: f32 = 18.0;
