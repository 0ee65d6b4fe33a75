// EssaySort - core/search.rs
//
// Free-text search over rendered list items.
// Core layer: pure logic over document nodes.
//
// Search hides items and sections with an inline `display: none`
// declaration, separate from the filter's `hidden` class. A section the
// filter hides stays hidden however many of its items match.
//
// Placeholder entries are matched on their text like any other item.

use crate::core::document::{Document, NodeId, RenderTarget};
use crate::core::filter::{is_filtered_out, FilterController};
use crate::core::model::FilterKey;
use crate::util::constants;

/// Tracks the last applied query for the render-target container.
#[derive(Debug, Clone)]
pub struct SearchController {
    container: NodeId,
    query: String,
}

impl SearchController {
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            query: String::new(),
        }
    }

    /// The last query as applied (trimmed, lowercased).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Apply `raw_query` and return the number of matching items.
    ///
    /// A non-empty query first resets the filter to "all" so the search
    /// always runs over the full section set. Each call fully overwrites
    /// the visibility left by the previous one.
    pub fn search(
        &mut self,
        doc: &mut Document,
        filter: &mut FilterController,
        raw_query: &str,
    ) -> usize {
        let query = raw_query.trim().to_lowercase();

        if !query.is_empty() {
            filter.set_filter(doc, FilterKey::All);
        }

        let sections = doc.select_class(self.container, constants::SECTION_CLASS);
        let mut match_count = 0;

        for section in &sections {
            let mut visible_items = 0;
            for item in doc.select_tag(*section, "li") {
                let shown = doc.text_content(item).to_lowercase().contains(&query);
                set_displayed(doc, item, shown);
                if shown {
                    visible_items += 1;
                }
            }
            set_displayed(doc, *section, visible_items > 0);
            match_count += visible_items;
        }

        tracing::debug!(query = %query, matches = match_count, "Search applied");
        self.query = query;
        match_count
    }
}

/// True if `node` is the "no items" placeholder entry.
pub fn is_placeholder(doc: &Document, node: NodeId) -> bool {
    doc.attribute(node, constants::DATA_PLACEHOLDER_ATTR).is_some()
}

/// True unless the node's inline style carries `display: none`.
pub fn is_displayed(doc: &Document, node: NodeId) -> bool {
    !doc
        .attribute(node, "style")
        .unwrap_or("")
        .split(';')
        .any(is_display_none)
}

/// True if neither the filter nor search hides `node`.
pub fn is_shown(doc: &Document, node: NodeId) -> bool {
    is_displayed(doc, node) && !is_filtered_out(doc, node)
}

fn is_display_none(declaration: &str) -> bool {
    let compact: String = declaration.chars().filter(|c| !c.is_whitespace()).collect();
    compact.eq_ignore_ascii_case("display:none")
}

fn is_display_declaration(declaration: &str) -> bool {
    declaration
        .split(':')
        .next()
        .is_some_and(|prop| prop.trim().eq_ignore_ascii_case("display"))
}

/// Add or remove the `display: none` declaration, keeping other inline styles.
fn set_displayed(doc: &mut Document, node: NodeId, shown: bool) {
    let mut declarations: Vec<String> = doc
        .attribute(node, "style")
        .unwrap_or("")
        .split(';')
        .map(str::trim)
        .filter(|d| !d.is_empty() && !is_display_declaration(d))
        .map(str::to_string)
        .collect();

    if !shown {
        declarations.push(constants::SEARCH_HIDDEN_STYLE.to_string());
    }

    if declarations.is_empty() {
        doc.remove_attribute(node, "style");
    } else {
        doc.set_attribute(node, "style", &declarations.join("; "));
    }
}
