// EssaySort - app/state.rs
//
// Application state management. Holds the loaded page, its event router,
// the preference store and status text.
// Owned by the eframe::App implementation and by the headless runner.

use crate::app::events::{EventRouter, Outcome, UiEvent};
use crate::app::page::Page;
use crate::core::export;
use crate::core::model::AnchorRef;
use crate::core::theme::PreferenceStore;
use crate::platform::config::AppConfig;
use crate::platform::source;
use crate::util::constants;
use crate::util::error::{ExportError, SourceError};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use url::Url;

/// Top-level application state.
pub struct AppState {
    /// Validated configuration.
    pub config: AppConfig,

    /// The currently loaded page.
    pub page: Page,

    /// Handlers bound to the page's controls.
    pub router: EventRouter,

    /// Durable preference store (theme).
    store: Box<dyn PreferenceStore>,

    /// Operating environment's dark-mode signal, if known.
    pub prefers_dark: Option<bool>,

    /// Path of the loaded page (None until a page is opened).
    pub page_path: Option<PathBuf>,

    /// Base URL for resolving link targets; None resolves against the page file.
    pub base_url: Option<Url>,

    /// Text currently in the search box.
    pub search_text: String,

    /// Match count from the most recent search.
    pub last_match_count: Option<usize>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (config problems, load failures).
    pub warnings: Vec<String>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with an empty page.
    pub fn new(
        config: AppConfig,
        mut store: Box<dyn PreferenceStore>,
        prefers_dark: Option<bool>,
        debug_mode: bool,
    ) -> Self {
        let page = Page::start(&[], store.as_mut(), prefers_dark, config.default_theme);
        let router = router_for(&page);
        Self {
            config,
            page,
            router,
            store,
            prefers_dark,
            page_path: None,
            base_url: None,
            search_text: String::new(),
            last_match_count: None,
            status_message: "Ready. Open a topic page to begin.".to_string(),
            warnings: Vec::new(),
            show_about: false,
            debug_mode,
        }
    }

    /// Start a fresh page over `anchors`, discarding view state.
    pub fn load_anchors(&mut self, anchors: &[AnchorRef]) {
        self.page = Page::start(
            anchors,
            self.store.as_mut(),
            self.prefers_dark,
            self.config.default_theme,
        );
        self.router = router_for(&self.page);
        self.search_text.clear();
        self.last_match_count = None;
        self.status_message = format!("Sorted {} topics.", self.page.collection.total());
    }

    /// Load the page at `path` and start it. Returns the topic count.
    pub fn open_page(&mut self, path: &Path) -> Result<usize, SourceError> {
        let anchors = match source::load_page(path, self.base_url.as_ref()) {
            Ok(a) => a,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load page");
                self.status_message = format!("Cannot open page: {e}");
                return Err(e);
            }
        };
        self.load_anchors(&anchors);
        self.page_path = Some(path.to_path_buf());
        self.status_message = format!(
            "Sorted {} topics from {}.",
            anchors.len(),
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        );
        Ok(anchors.len())
    }

    /// Dispatch a UI event and reflect its outcome in the status bar.
    pub fn handle(&mut self, event: &UiEvent) -> Outcome {
        let outcome = self
            .router
            .dispatch(&mut self.page, self.store.as_mut(), event);
        match outcome {
            Outcome::FilterApplied(key) => {
                self.status_message = format!("Showing: {}", key.label());
            }
            Outcome::SearchApplied { matches } => {
                self.last_match_count = Some(matches);
                self.status_message = if self.page.search.query().is_empty() {
                    "Search cleared.".to_string()
                } else {
                    format!("{matches} matching topics.")
                };
            }
            Outcome::ThemeChanged(theme) => {
                self.status_message = format!("Theme: {theme}");
            }
            Outcome::Ignored => {}
        }
        outcome
    }

    /// Click a bound button by element id.
    pub fn click(&mut self, element_id: &str) -> Outcome {
        self.handle(&UiEvent::click(element_id))
    }

    /// Push the search box text through the search handler.
    pub fn submit_search(&mut self) -> Outcome {
        let value = self.search_text.clone();
        self.handle(&UiEvent::input(constants::SEARCH_INPUT_ID, value))
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Write the rendered page as HTML.
    pub fn export_html(&self, dest: &Path) -> Result<usize, ExportError> {
        let writer = create(dest)?;
        export::export_html(&self.page.doc, self.page.doc.root(), writer, dest)?;
        Ok(self.page.collection.total())
    }

    /// Write the categorized collection as JSON.
    pub fn export_json(&self, dest: &Path) -> Result<usize, ExportError> {
        let writer = create(dest)?;
        export::export_json(&self.page.collection, writer, dest)
    }

    /// Write the categorized collection as CSV.
    pub fn export_csv(&self, dest: &Path) -> Result<usize, ExportError> {
        let writer = create(dest)?;
        export::export_csv(&self.page.collection, &self.page.categories, writer, dest)
    }
}

fn create(dest: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(dest)
        .map(BufWriter::new)
        .map_err(|e| ExportError::Io {
            path: dest.to_path_buf(),
            source: e,
        })
}

fn router_for(page: &Page) -> EventRouter {
    EventRouter::for_page(page).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to bind page controls");
        EventRouter::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{FilterKey, Theme};
    use crate::core::theme::MemoryPreferenceStore;
    use tempfile::TempDir;

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            Box::new(MemoryPreferenceStore::default()),
            None,
            false,
        )
    }

    fn write_page(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("topics.html");
        std::fs::write(
            &path,
            r#"<div id="source">
                 <a href="a.html">Describe a busy market</a>
                 <a href="b.html">Narrate an incident at school</a>
               </div>"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_new_state_has_empty_rendered_page() {
        let s = state();
        assert_eq!(s.page.collection.total(), 0);
        assert_eq!(s.page.sections().len(), 3);
        assert_eq!(s.page.current_theme(), Theme::Light);
    }

    #[test]
    fn test_open_page_sorts_topics() {
        let dir = TempDir::new().unwrap();
        let mut s = state();
        let n = s.open_page(&write_page(&dir)).unwrap();
        assert_eq!(n, 2);
        assert!(s.status_message.contains("topics.html"));
        assert_eq!(s.page_path.as_deref(), Some(dir.path().join("topics.html").as_path()));
    }

    #[test]
    fn test_open_missing_page_keeps_previous_page() {
        let dir = TempDir::new().unwrap();
        let mut s = state();
        s.open_page(&write_page(&dir)).unwrap();
        assert!(s.open_page(&dir.path().join("missing.html")).is_err());
        assert_eq!(s.page.collection.total(), 2);
        assert!(s.status_message.starts_with("Cannot open page"));
    }

    #[test]
    fn test_search_updates_match_count_and_status() {
        let dir = TempDir::new().unwrap();
        let mut s = state();
        s.open_page(&write_page(&dir)).unwrap();
        s.search_text = "market".to_string();
        s.submit_search();
        assert_eq!(s.last_match_count, Some(1));
        assert_eq!(s.status_message, "1 matching topics.");
        s.search_text.clear();
        s.submit_search();
        assert_eq!(s.status_message, "Search cleared.");
    }

    #[test]
    fn test_theme_choice_survives_page_reload() {
        let dir = TempDir::new().unwrap();
        let mut s = state();
        s.click("theme-toggle");
        s.open_page(&write_page(&dir)).unwrap();
        assert_eq!(s.page.current_theme(), Theme::Dark);
    }

    #[test]
    fn test_click_filter_sets_status() {
        let mut s = state();
        s.click("filter-narrative");
        assert_eq!(
            s.page.filter.active(),
            FilterKey::parse("narrative").unwrap()
        );
        assert_eq!(s.status_message, "Showing: Narrative");
    }

    #[test]
    fn test_exports_write_files() {
        let dir = TempDir::new().unwrap();
        let mut s = state();
        s.open_page(&write_page(&dir)).unwrap();
        let html = dir.path().join("out.html");
        let json = dir.path().join("out.json");
        let csv = dir.path().join("out.csv");
        assert_eq!(s.export_html(&html).unwrap(), 2);
        assert_eq!(s.export_json(&json).unwrap(), 2);
        assert_eq!(s.export_csv(&csv).unwrap(), 2);
        let markup = std::fs::read_to_string(&html).unwrap();
        assert!(markup.starts_with("<!DOCTYPE html>"));
        assert!(markup.contains("Describe a busy market"));
        assert!(std::fs::read_to_string(&csv).unwrap().contains("narrative,"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let s = state();
        let result = s.export_json(&dir.path().join("no").join("out.json"));
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
