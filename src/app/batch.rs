// EssaySort - app/batch.rs
//
// Headless run: start a page, replay the requested filter and search as
// UI events, then write the requested exports.

use crate::app::events::{Outcome, UiEvent};
use crate::app::state::AppState;
use crate::core::model::FilterKey;
use crate::util::constants;
use crate::util::error::Result;
use std::path::PathBuf;

/// What a headless run should do after the page starts.
#[derive(Debug, Clone, Default)]
pub struct BatchRequest {
    /// Filter button to click first.
    pub filter: Option<FilterKey>,
    /// Search text to enter after the filter.
    pub search: Option<String>,
    /// Rendered page destination.
    pub html: Option<PathBuf>,
    /// Collection JSON destination.
    pub json: Option<PathBuf>,
    /// Collection CSV destination.
    pub csv: Option<PathBuf>,
}

impl BatchRequest {
    /// True if at least one export destination is set.
    pub fn has_exports(&self) -> bool {
        self.html.is_some() || self.json.is_some() || self.csv.is_some()
    }
}

/// Summary of a headless run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub topics: usize,
    pub matches: Option<usize>,
    pub written: Vec<PathBuf>,
}

/// Apply the request's filter and search to the loaded page, in that
/// order. Returns the search match count when a search ran.
pub fn apply_view(state: &mut AppState, request: &BatchRequest) -> Option<usize> {
    if let Some(key) = request.filter {
        let id = format!("{}{}", constants::FILTER_BUTTON_ID_PREFIX, key.as_str());
        state.handle(&UiEvent::click(id));
    }

    let query = request.search.as_ref()?;
    state.search_text = query.clone();
    match state.submit_search() {
        Outcome::SearchApplied { matches } => Some(matches),
        _ => None,
    }
}

/// Replay the request against an already-loaded page and write exports.
pub fn run(state: &mut AppState, request: &BatchRequest) -> Result<BatchReport> {
    let mut report = BatchReport {
        topics: state.page.collection.total(),
        ..Default::default()
    };
    report.matches = apply_view(state, request);

    if let Some(ref dest) = request.html {
        state.export_html(dest)?;
        report.written.push(dest.clone());
    }
    if let Some(ref dest) = request.json {
        state.export_json(dest)?;
        report.written.push(dest.clone());
    }
    if let Some(ref dest) = request.csv {
        state.export_csv(dest)?;
        report.written.push(dest.clone());
    }

    tracing::info!(
        topics = report.topics,
        matches = ?report.matches,
        files = report.written.len(),
        "Headless run complete"
    );
    Ok(report)
}
