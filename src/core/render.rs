// EssaySort - core/render.rs
//
// Rebuilds the render-target container from a categorized collection.
// Core layer: writes only through the `RenderTarget` trait.
//
// Every call clears the container first, so rendering the same collection
// twice yields identical markup.

use crate::core::document::RenderTarget;
use crate::core::model::{CategorizedCollection, CategoryDescriptor};
use crate::util::constants;

/// Replace the container's children with one section per descriptor.
///
/// Each section carries the section class and a `data-key` attribute,
/// a heading with the descriptor title, and a list of links. An empty
/// category gets a single placeholder entry instead of links.
pub fn render<T: RenderTarget>(
    target: &mut T,
    container: T::Node,
    collection: &CategorizedCollection,
    categories: &[CategoryDescriptor],
) {
    target.clear_children(container);

    for descriptor in categories {
        let section = target.create_element("section");
        target.add_class(section, constants::SECTION_CLASS);
        target.set_attribute(section, constants::DATA_KEY_ATTR, descriptor.key.as_str());

        let heading = target.create_element("h2");
        target.set_text(heading, descriptor.title);
        target.append_child(section, heading);

        let list = target.create_element("ul");
        let items = collection.items(descriptor.key);
        if items.is_empty() {
            let li = target.create_element("li");
            target.set_text(li, constants::EMPTY_SECTION_TEXT);
            target.set_attribute(li, "style", constants::PLACEHOLDER_STYLE);
            target.set_attribute(li, constants::DATA_PLACEHOLDER_ATTR, "true");
            target.append_child(list, li);
        } else {
            for item in items {
                let li = target.create_element("li");
                let link = target.create_element("a");
                target.set_attribute(link, "href", item.href());
                target.set_attribute(link, "target", constants::LINK_TARGET_NEW);
                target.set_text(link, item.text());
                target.append_child(li, link);
                target.append_child(list, li);
            }
        }

        target.append_child(section, list);
        target.append_child(container, section);
    }

    tracing::debug!(
        sections = categories.len(),
        items = collection.total(),
        "Sections rendered"
    );
}
