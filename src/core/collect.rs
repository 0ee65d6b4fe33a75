// EssaySort - core/collect.rs
//
// Groups source anchors by category.
// Core layer: reads its input only and returns a fresh collection.

use crate::core::classify::classify;
use crate::core::model::{AnchorRef, CategorizedCollection, LinkItem};
use crate::util::logging::preview;

/// Classify every anchor and group the resulting items, preserving
/// source order within each group. No deduplication is performed.
pub fn collect(anchors: &[AnchorRef]) -> CategorizedCollection {
    let mut collection = CategorizedCollection::new();

    for anchor in anchors {
        let item = LinkItem::from_anchor(anchor);
        let category = classify(item.text());
        tracing::trace!(text = %preview(item.text()), %category, "Classified topic");
        collection.push(category, item);
    }

    tracing::debug!(
        total = collection.total(),
        descriptive = collection.count(crate::core::model::CategoryKey::Descriptive),
        narrative = collection.count(crate::core::model::CategoryKey::Narrative),
        expository = collection.count(crate::core::model::CategoryKey::Expository),
        "Topics collected"
    );

    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CategoryKey;

    fn anchors() -> Vec<AnchorRef> {
        vec![
            AnchorRef::new("Describe your favourite place", "https://e.x/1"),
            AnchorRef::new("Write a short story about a journey", "https://e.x/2"),
            AnchorRef::new("Discuss the importance of education", "https://e.x/3"),
            AnchorRef::new("Composition: My Best Friend", "https://e.x/4"),
        ]
    }

    #[test]
    fn test_groups_by_category_in_source_order() {
        let c = collect(&anchors());
        let descriptive: Vec<_> = c
            .items(CategoryKey::Descriptive)
            .iter()
            .map(|i| i.text())
            .collect();
        assert_eq!(
            descriptive,
            vec!["Describe your favourite place", "Composition: My Best Friend"]
        );
        assert_eq!(c.count(CategoryKey::Narrative), 1);
        assert_eq!(c.count(CategoryKey::Expository), 1);
        assert_eq!(c.items(CategoryKey::Narrative)[0].href(), "https://e.x/2");
    }

    #[test]
    fn test_total_equals_anchor_count() {
        let input = anchors();
        assert_eq!(collect(&input).total(), input.len());
        assert_eq!(collect(&[]).total(), 0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let input = vec![
            AnchorRef::new("A story", "s.html"),
            AnchorRef::new("A story", "s.html"),
        ];
        let c = collect(&input);
        assert_eq!(c.count(CategoryKey::Narrative), 2);
    }

    #[test]
    fn test_text_is_trimmed_before_classification() {
        let input = vec![AnchorRef::new("\n   Narrate a day   \t", "n.html")];
        let c = collect(&input);
        assert_eq!(c.items(CategoryKey::Narrative)[0].text(), "Narrate a day");
    }

    #[test]
    fn test_each_call_produces_a_fresh_collection() {
        let input = anchors();
        assert_eq!(collect(&input), collect(&input));
    }
}
