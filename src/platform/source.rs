// EssaySort - platform/source.rs
//
// Input collaborator: reads the topic anchors out of an HTML page.
//
// The page must contain an element with id "source"; every `<a>` inside
// it becomes one `AnchorRef`, in document order. Link targets are resolved
// against a base URL the way a browser resolves `a.href`.

use crate::core::model::AnchorRef;
use crate::platform::fs::{read_text_limited, ReadError};
use crate::util::constants;
use crate::util::error::SourceError;
use scraper::{Html, Selector};
use std::path::Path;
use url::Url;

/// Parse a user-supplied base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, SourceError> {
    Url::parse(raw).map_err(|e| SourceError::InvalidBaseUrl {
        url: raw.to_string(),
        source: e,
    })
}

/// Extract the source anchors from `html`.
///
/// Text is taken verbatim (trimming happens when items are built);
/// `href` is resolved against `base` when one is given and the join
/// succeeds, otherwise kept as written. Anchors without `href` get an
/// empty reference.
pub fn parse_anchors(html: &str, base: Option<&Url>) -> Result<Vec<AnchorRef>, SourceError> {
    let document = Html::parse_document(html);

    // Both selectors are constants covered by the tests below.
    let container_sel = Selector::parse(&format!("#{}", constants::SOURCE_CONTAINER_ID))
        .expect("source: invalid container selector");
    let anchor_sel = Selector::parse("a").expect("source: invalid anchor selector");

    let container = document
        .select(&container_sel)
        .next()
        .ok_or(SourceError::MissingContainer {
            id: constants::SOURCE_CONTAINER_ID,
        })?;

    let anchors: Vec<AnchorRef> = container
        .select(&anchor_sel)
        .map(|el| {
            let text: String = el.text().collect();
            let href = el
                .value()
                .attr("href")
                .map(|raw| resolve_href(raw, base))
                .unwrap_or_default();
            AnchorRef { text, href }
        })
        .collect();

    tracing::debug!(anchors = anchors.len(), "Source anchors extracted");
    Ok(anchors)
}

fn resolve_href(raw: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => match base.join(raw.trim()) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                tracing::debug!(href = raw, error = %e, "Keeping unresolvable href as written");
                raw.to_string()
            }
        },
        None => raw.to_string(),
    }
}

/// Read the page at `path` and extract its anchors.
///
/// Without an explicit `base_url`, links resolve against the page's own
/// `file://` location.
pub fn load_page(path: &Path, base_url: Option<&Url>) -> Result<Vec<AnchorRef>, SourceError> {
    let html = read_text_limited(path, constants::MAX_SOURCE_FILE_SIZE).map_err(|e| match e {
        ReadError::Io(source) => SourceError::Io {
            path: path.to_path_buf(),
            source,
        },
        ReadError::TooLarge { size } => SourceError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_SOURCE_FILE_SIZE,
        },
    })?;

    let file_base = std::fs::canonicalize(path)
        .ok()
        .and_then(|abs| Url::from_file_path(abs).ok());
    let base = base_url.or(file_base.as_ref());

    tracing::info!(path = %path.display(), base = ?base.map(Url::as_str), "Loading page");
    parse_anchors(&html, base)
}
