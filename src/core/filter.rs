// EssaySort - core/filter.rs
//
// Category filter: shows one rendered section, or all of them.
// Core layer: a pure state transition over document nodes; the
// categorized collection is never touched.
//
// Filter visibility is tracked with the `hidden` class, independently of
// the inline `display: none` used by search, so the two never overwrite
// each other. A section is shown only when neither marks it hidden.

use crate::core::document::{Document, NodeId, RenderTarget};
use crate::core::model::FilterKey;
use crate::util::constants;

/// Holds the fixed filter-button set and the active filter.
#[derive(Debug, Clone)]
pub struct FilterController {
    buttons: Vec<NodeId>,
    container: NodeId,
    active: FilterKey,
}

impl FilterController {
    /// `buttons` is the control set fixed at startup; each carries a
    /// `data-filter` attribute. `container` is the render target.
    pub fn new(buttons: Vec<NodeId>, container: NodeId) -> Self {
        Self {
            buttons,
            container,
            active: FilterKey::All,
        }
    }

    /// The most recently applied filter.
    pub fn active(&self) -> FilterKey {
        self.active
    }

    pub fn buttons(&self) -> &[NodeId] {
        &self.buttons
    }

    /// Apply `key`: mark the matching button active, then show or hide
    /// sections and switch the container between multi-row and single
    /// layout.
    pub fn set_filter(&mut self, doc: &mut Document, key: FilterKey) {
        let wanted = key.as_str();

        for button in &self.buttons {
            let matches = doc.attribute(*button, constants::DATA_FILTER_ATTR) == Some(wanted);
            doc.toggle_class(*button, constants::ACTIVE_CLASS, matches);
        }

        let sections = doc.select_class(self.container, constants::SECTION_CLASS);
        match key {
            FilterKey::All => {
                for section in &sections {
                    doc.remove_class(*section, constants::HIDDEN_CLASS);
                }
                doc.add_class(self.container, constants::ROWS_CLASS);
            }
            FilterKey::Category(_) => {
                for section in &sections {
                    let keep = doc.attribute(*section, constants::DATA_KEY_ATTR) == Some(wanted);
                    doc.toggle_class(*section, constants::HIDDEN_CLASS, !keep);
                }
                doc.remove_class(self.container, constants::ROWS_CLASS);
            }
        }

        if self.active != key {
            tracing::debug!(from = %self.active, to = %key, "Filter changed");
        }
        self.active = key;
    }
}

/// True if the category filter currently hides `section`.
pub fn is_filtered_out(doc: &Document, section: NodeId) -> bool {
    doc.has_class(section, constants::HIDDEN_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collect::collect;
    use crate::core::model::{AnchorRef, CategoryKey, DEFAULT_CATEGORIES};
    use crate::core::render::render;

    fn setup() -> (Document, FilterController) {
        let mut doc = Document::new("html");
        let root = doc.root();
        let mut buttons = Vec::new();
        for key in FilterKey::all_controls() {
            let b = doc.create_element("button");
            doc.set_attribute(b, "data-filter", key.as_str());
            doc.append_child(root, b);
            buttons.push(b);
        }
        let list = doc.create_element("div");
        doc.append_child(root, list);
        let collection = collect(&[
            AnchorRef::new("Describe a garden", "g"),
            AnchorRef::new("Narrate an incident", "i"),
        ]);
        render(&mut doc, list, &collection, &DEFAULT_CATEGORIES);
        (doc, FilterController::new(buttons, list))
    }

    fn hidden_keys(doc: &Document, list: NodeId) -> Vec<String> {
        doc.select_class(list, "card")
            .into_iter()
            .filter(|s| is_filtered_out(doc, *s))
            .filter_map(|s| doc.attribute(s, "data-key").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_all_shows_every_section_in_rows_layout() {
        let (mut doc, mut filter) = setup();
        let list = filter.container;
        filter.set_filter(&mut doc, FilterKey::Category(CategoryKey::Narrative));
        filter.set_filter(&mut doc, FilterKey::All);
        assert!(hidden_keys(&doc, list).is_empty());
        assert!(doc.has_class(list, "rows"));
        assert_eq!(filter.active(), FilterKey::All);
    }

    #[test]
    fn test_all_adds_rows_class_once() {
        let (mut doc, mut filter) = setup();
        let list = filter.container;
        assert!(doc.classes(list).is_empty());
        filter.set_filter(&mut doc, FilterKey::All);
        filter.set_filter(&mut doc, FilterKey::All);
        assert_eq!(doc.classes(list), ["rows".to_string()]);
    }

    #[test]
    fn test_single_category_hides_the_others() {
        let (mut doc, mut filter) = setup();
        let list = filter.container;
        filter.set_filter(&mut doc, FilterKey::Category(CategoryKey::Narrative));
        assert_eq!(hidden_keys(&doc, list), vec!["descriptive", "expository"]);
        assert!(!doc.has_class(list, "rows"));
    }

    #[test]
    fn test_exactly_one_button_active() {
        let (mut doc, mut filter) = setup();
        filter.set_filter(&mut doc, FilterKey::Category(CategoryKey::Expository));
        let active: Vec<_> = filter
            .buttons()
            .iter()
            .filter(|b| doc.has_class(**b, "active"))
            .filter_map(|b| doc.attribute(*b, "data-filter"))
            .collect();
        assert_eq!(active, vec!["expository"]);

        filter.set_filter(&mut doc, FilterKey::All);
        let active: Vec<_> = filter
            .buttons()
            .iter()
            .filter(|b| doc.has_class(**b, "active"))
            .filter_map(|b| doc.attribute(*b, "data-filter"))
            .collect();
        assert_eq!(active, vec!["all"]);
    }

    #[test]
    fn test_no_all_button_leaves_none_active() {
        let (mut doc, filter) = setup();
        let category_buttons = filter.buttons()[1..].to_vec();
        let mut filter = FilterController::new(category_buttons, filter.container);
        filter.set_filter(&mut doc, FilterKey::All);
        assert!(filter.buttons().iter().all(|b| !doc.has_class(*b, "active")));
    }

    #[test]
    fn test_filter_does_not_touch_items() {
        let (mut doc, mut filter) = setup();
        let list = filter.container;
        let before = crate::core::export::to_html(&doc, list);
        filter.set_filter(&mut doc, FilterKey::Category(CategoryKey::Descriptive));
        filter.set_filter(&mut doc, FilterKey::All);
        let after = crate::core::export::to_html(&doc, list);
        // Only the container's own class list differs.
        assert_eq!(
            before.replacen("<div>", "<div class=\"rows\">", 1),
            after
        );
    }
}
