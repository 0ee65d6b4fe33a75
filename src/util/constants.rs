// EssaySort - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "EssaySort";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "EssaySort";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Page element identifiers
// =============================================================================

/// `id` of the container holding the source anchors in an input page.
pub const SOURCE_CONTAINER_ID: &str = "source";

/// `id` of the render-target container owned by the renderer.
pub const LIST_CONTAINER_ID: &str = "list";

/// `id` of the free-text search input.
pub const SEARCH_INPUT_ID: &str = "search";

/// `id` of the light/dark theme toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Class carried by the filter-control button group.
pub const FILTER_GROUP_CLASS: &str = "topics";

/// Prefix for generated filter button ids (`filter-all`, `filter-narrative`, ...).
pub const FILTER_BUTTON_ID_PREFIX: &str = "filter-";

// =============================================================================
// Markup vocabulary
// =============================================================================

/// Class carried by each rendered category section.
pub const SECTION_CLASS: &str = "card";

/// Class marking a section hidden by the category filter.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class marking the active filter button.
pub const ACTIVE_CLASS: &str = "active";

/// Class on the list container while every section is shown (multi-row layout).
pub const ROWS_CLASS: &str = "rows";

/// Attribute naming a section's category key.
pub const DATA_KEY_ATTR: &str = "data-key";

/// Attribute naming a filter button's target key or the "all" sentinel.
pub const DATA_FILTER_ATTR: &str = "data-filter";

/// Document-level theme attribute.
pub const DATA_THEME_ATTR: &str = "data-theme";

/// Attribute marking the "no items" placeholder entry.
pub const DATA_PLACEHOLDER_ATTR: &str = "data-placeholder";

/// Inline style used to hide items and sections collapsed by search.
pub const SEARCH_HIDDEN_STYLE: &str = "display: none";

/// Inline style of the placeholder entry.
pub const PLACEHOLDER_STYLE: &str = "color: var(--muted)";

/// Text of the placeholder entry rendered for an empty category.
pub const EMPTY_SECTION_TEXT: &str = "No items found for this section.";

/// Link target opening a new browsing context.
pub const LINK_TARGET_NEW: &str = "_blank";

/// Filter sentinel selecting every category.
pub const FILTER_ALL: &str = "all";

// =============================================================================
// Theme
// =============================================================================

/// Preference-store key under which the theme choice is persisted.
pub const THEME_PREFERENCE_KEY: &str = "essay.theme";

/// Toggle icon shown while the dark theme is active (offers a switch to light).
pub const THEME_ICON_DARK: &str = "\u{2600}\u{fe0f}";

/// Toggle icon shown while the light theme is active (offers a switch to dark).
pub const THEME_ICON_LIGHT: &str = "\u{1f319}";

// =============================================================================
// Source limits
// =============================================================================

/// Maximum size of an input page in bytes.
pub const MAX_SOURCE_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of link text included in debug output.
pub const DEBUG_MAX_TEXT_PREVIEW: usize = 80;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Preference store file name (stored in the platform data directory).
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
