// EssaySort - app/page.rs
//
// Page assembly: builds the fixed page chrome in a fresh document and
// runs the startup sequence (collect, render, theme, filter).

use crate::core::collect::collect;
use crate::core::document::{Document, NodeId, RenderTarget};
use crate::core::filter::FilterController;
use crate::core::model::{
    AnchorRef, CategorizedCollection, CategoryDescriptor, FilterKey, Theme, DEFAULT_CATEGORIES,
};
use crate::core::render::render;
use crate::core::search::SearchController;
use crate::core::theme::{PreferenceStore, ThemeController, ThemeSource};
use crate::util::constants;

/// One loaded page: its document, controllers and the collection it was
/// rendered from.
#[derive(Debug, Clone)]
pub struct Page {
    pub doc: Document,
    pub list: NodeId,
    pub search_input: NodeId,
    pub filter: FilterController,
    pub search: SearchController,
    pub theme: ThemeController,
    pub collection: CategorizedCollection,
    pub categories: Vec<CategoryDescriptor>,
    pub theme_source: ThemeSource,
}

/// Element ids of the chrome, in document order.
struct Chrome {
    doc: Document,
    buttons: Vec<NodeId>,
    search_input: NodeId,
    toggle: NodeId,
    list: NodeId,
}

fn build_chrome() -> Chrome {
    let mut doc = Document::new("html");
    let root = doc.root();

    let body = doc.create_element("body");
    doc.append_child(root, body);

    let header = doc.create_element("header");
    doc.append_child(body, header);

    let nav = doc.create_element("nav");
    doc.add_class(nav, constants::FILTER_GROUP_CLASS);
    doc.append_child(header, nav);

    let mut buttons = Vec::new();
    for key in FilterKey::all_controls() {
        let button = doc.create_element("button");
        doc.set_attribute(
            button,
            "id",
            &format!("{}{}", constants::FILTER_BUTTON_ID_PREFIX, key.as_str()),
        );
        doc.set_attribute(button, constants::DATA_FILTER_ATTR, key.as_str());
        doc.set_text(button, key.label());
        doc.append_child(nav, button);
        buttons.push(button);
    }

    let search_input = doc.create_element("input");
    doc.set_attribute(search_input, "id", constants::SEARCH_INPUT_ID);
    doc.set_attribute(search_input, "type", "search");
    doc.set_attribute(search_input, "placeholder", "Search topics\u{2026}");
    doc.append_child(header, search_input);

    let toggle = doc.create_element("button");
    doc.set_attribute(toggle, "id", constants::THEME_TOGGLE_ID);
    doc.set_attribute(toggle, "aria-label", "Toggle theme");
    doc.append_child(header, toggle);

    let list = doc.create_element("main");
    doc.set_attribute(list, "id", constants::LIST_CONTAINER_ID);
    doc.append_child(body, list);

    Chrome {
        doc,
        buttons,
        search_input,
        toggle,
        list,
    }
}

impl Page {
    /// Build the chrome and run the startup sequence over `anchors`.
    ///
    /// The collection is built exactly once here; later events only
    /// change visibility.
    pub fn start(
        anchors: &[AnchorRef],
        store: &mut dyn PreferenceStore,
        prefers_dark: Option<bool>,
        fallback_theme: Theme,
    ) -> Self {
        let Chrome {
            mut doc,
            buttons,
            search_input,
            toggle,
            list,
        } = build_chrome();

        let collection = collect(anchors);
        let categories = DEFAULT_CATEGORIES.to_vec();
        render(&mut doc, list, &collection, &categories);

        let theme = ThemeController::new(doc.root(), toggle, fallback_theme);
        let theme_source = theme.init_theme(&mut doc, store, prefers_dark);

        let mut filter = FilterController::new(buttons, list);
        filter.set_filter(&mut doc, FilterKey::All);

        tracing::info!(
            topics = collection.total(),
            theme = %theme.current(&doc),
            "Page ready"
        );

        Self {
            doc,
            list,
            search_input,
            filter,
            search: SearchController::new(list),
            theme,
            collection,
            categories,
            theme_source,
        }
    }

    /// Rendered sections in render order.
    pub fn sections(&self) -> Vec<NodeId> {
        self.doc.select_class(self.list, constants::SECTION_CLASS)
    }

    /// Current effective theme.
    pub fn current_theme(&self) -> Theme {
        self.theme.current(&self.doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CategoryKey;
    use crate::core::theme::MemoryPreferenceStore;

    fn anchors() -> Vec<AnchorRef> {
        vec![
            AnchorRef::new("Describe your favourite place", "p"),
            AnchorRef::new("Write a short story about a journey", "j"),
            AnchorRef::new("Discuss the importance of education", "e"),
            AnchorRef::new("Composition: My Best Friend", "f"),
        ]
    }

    #[test]
    fn test_start_builds_chrome_with_ids() {
        let mut store = MemoryPreferenceStore::default();
        let page = Page::start(&anchors(), &mut store, None, Theme::Light);
        let doc = &page.doc;
        assert_eq!(doc.element_by_id("list"), Some(page.list));
        assert_eq!(doc.element_by_id("search"), Some(page.search_input));
        assert!(doc.element_by_id("theme-toggle").is_some());
        for key in FilterKey::all_controls() {
            let id = format!("filter-{}", key.as_str());
            let button = doc.element_by_id(&id).unwrap();
            assert_eq!(doc.attribute(button, "data-filter"), Some(key.as_str()));
        }
    }

    #[test]
    fn test_start_renders_all_filter_and_theme() {
        let mut store = MemoryPreferenceStore::default();
        let page = Page::start(&anchors(), &mut store, Some(true), Theme::Light);
        assert_eq!(page.sections().len(), 3);
        assert_eq!(page.collection.count(CategoryKey::Descriptive), 2);
        assert_eq!(page.filter.active(), FilterKey::All);
        assert!(page.doc.has_class(page.list, "rows"));
        let all = page.doc.element_by_id("filter-all").unwrap();
        assert!(page.doc.has_class(all, "active"));
        assert_eq!(page.current_theme(), Theme::Dark);
        assert_eq!(page.theme_source, ThemeSource::Environment);
    }
}
