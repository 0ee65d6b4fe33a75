// EssaySort - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Category keys
// =============================================================================

/// The closed set of essay categories a topic link is sorted into.
///
/// Declaration order is the render order of the default descriptors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Descriptive,
    Narrative,
    Expository,
}

impl CategoryKey {
    /// Returns all variants in render order.
    pub fn all() -> &'static [CategoryKey] {
        &[
            CategoryKey::Descriptive,
            CategoryKey::Narrative,
            CategoryKey::Expository,
        ]
    }

    /// Key as it appears in `data-key` / `data-filter` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Descriptive => "descriptive",
            CategoryKey::Narrative => "narrative",
            CategoryKey::Expository => "expository",
        }
    }

    /// Parse an attribute value back into a key. Case-sensitive, like the
    /// attribute comparison it replaces.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "descriptive" => Some(CategoryKey::Descriptive),
            "narrative" => Some(CategoryKey::Narrative),
            "expository" => Some(CategoryKey::Expository),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Category descriptors
// =============================================================================

/// A category key paired with its human-readable section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub key: CategoryKey,
    pub title: &'static str,
}

/// The fixed descriptor sequence; its order is the render order.
pub const DEFAULT_CATEGORIES: [CategoryDescriptor; 3] = [
    CategoryDescriptor {
        key: CategoryKey::Descriptive,
        title: "Descriptive Composition",
    },
    CategoryDescriptor {
        key: CategoryKey::Narrative,
        title: "Narrative & Stories",
    },
    CategoryDescriptor {
        key: CategoryKey::Expository,
        title: "Expository / Opinion",
    },
];

// =============================================================================
// Links
// =============================================================================

/// A source anchor as read from the input page, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRef {
    /// Raw text content (may carry surrounding whitespace).
    pub text: String,
    /// Resolved target reference.
    pub href: String,
}

impl AnchorRef {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// A classified link: trimmed display text and target reference.
///
/// Derived once from an `AnchorRef`; fields are private so the value
/// cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    text: String,
    href: String,
}

impl LinkItem {
    /// Build an item from a source anchor, trimming its text.
    pub fn from_anchor(anchor: &AnchorRef) -> Self {
        Self {
            text: anchor.text.trim().to_string(),
            href: anchor.href.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

// =============================================================================
// Categorized collection
// =============================================================================

/// Links grouped by category, each group in source document order.
///
/// Every key is present from construction, so lookups never miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorizedCollection {
    groups: BTreeMap<CategoryKey, Vec<LinkItem>>,
}

impl Default for CategorizedCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorizedCollection {
    /// Create a collection with an empty group for every key.
    pub fn new() -> Self {
        let groups = CategoryKey::all()
            .iter()
            .map(|key| (*key, Vec::new()))
            .collect();
        Self { groups }
    }

    /// Append an item to the end of a group.
    pub fn push(&mut self, key: CategoryKey, item: LinkItem) {
        self.groups.entry(key).or_default().push(item);
    }

    /// Items of one group in source order.
    pub fn items(&self, key: CategoryKey) -> &[LinkItem] {
        self.groups.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of items in one group.
    pub fn count(&self, key: CategoryKey) -> usize {
        self.items(key).len()
    }

    /// Sum of items across all groups.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterate `(key, items)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, &[LinkItem])> {
        self.groups.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

// =============================================================================
// View state values
// =============================================================================

/// Active category filter: one key, or every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKey {
    #[default]
    All,
    Category(CategoryKey),
}

impl FilterKey {
    /// Control set in button order: the "all" sentinel, then every key.
    pub fn all_controls() -> Vec<FilterKey> {
        std::iter::once(FilterKey::All)
            .chain(CategoryKey::all().iter().copied().map(FilterKey::Category))
            .collect()
    }

    /// Value as it appears in a `data-filter` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::All => crate::util::constants::FILTER_ALL,
            FilterKey::Category(key) => key.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s == crate::util::constants::FILTER_ALL {
            Some(FilterKey::All)
        } else {
            CategoryKey::parse(s).map(FilterKey::Category)
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::All => "All",
            FilterKey::Category(CategoryKey::Descriptive) => "Descriptive",
            FilterKey::Category(CategoryKey::Narrative) => "Narrative",
            FilterKey::Category(CategoryKey::Expository) => "Expository",
        }
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted or configured value. Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
