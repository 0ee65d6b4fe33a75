// EssaySort - core/theme.rs
//
// Light/dark theme controller and the preference-store seam it persists
// through. Core layer: the store is injected, so the controller can be
// tested without a filesystem.

use crate::core::document::{Document, NodeId, RenderTarget};
use crate::core::model::Theme;
use crate::util::constants;
use crate::util::error::PreferenceError;
use std::collections::HashMap;

/// Durable key-value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-lifetime store used by tests and `--no-persist`.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Where the startup theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// A previously persisted choice.
    Persisted,
    /// The operating environment's dark-mode preference.
    Environment,
    /// The configured fallback.
    Default,
}

/// Applies themes to the document root and the toggle control.
#[derive(Debug, Clone)]
pub struct ThemeController {
    root: NodeId,
    toggle: NodeId,
    fallback: Theme,
}

impl ThemeController {
    /// `root` receives the theme attribute; `toggle` is the toggle button.
    /// `fallback` is used when nothing else decides the theme.
    pub fn new(root: NodeId, toggle: NodeId, fallback: Theme) -> Self {
        Self {
            root,
            toggle,
            fallback,
        }
    }

    /// Effective theme: anything other than "dark" counts as light.
    pub fn current(&self, doc: &Document) -> Theme {
        match doc.attribute(self.root, constants::DATA_THEME_ATTR) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Set the theme attribute, update the toggle's icon and pressed state,
    /// and persist the choice. A failed write is logged; the theme still
    /// applies for this session.
    pub fn apply_theme(&self, doc: &mut Document, store: &mut dyn PreferenceStore, theme: Theme) {
        doc.set_attribute(self.root, constants::DATA_THEME_ATTR, theme.as_str());

        let icon = if theme.is_dark() {
            constants::THEME_ICON_DARK
        } else {
            constants::THEME_ICON_LIGHT
        };
        doc.set_text(self.toggle, icon);
        doc.set_attribute(
            self.toggle,
            "aria-pressed",
            if theme.is_dark() { "true" } else { "false" },
        );

        if let Err(e) = store.set(constants::THEME_PREFERENCE_KEY, theme.as_str()) {
            tracing::warn!(error = %e, theme = %theme, "Failed to persist theme preference");
        }
    }

    /// Resolve and apply the startup theme: persisted value, else the
    /// environment's dark-mode signal when present and true, else the
    /// fallback.
    pub fn init_theme(
        &self,
        doc: &mut Document,
        store: &mut dyn PreferenceStore,
        prefers_dark: Option<bool>,
    ) -> ThemeSource {
        let persisted = store.get(constants::THEME_PREFERENCE_KEY).and_then(|raw| {
            let parsed = Theme::parse(&raw);
            if parsed.is_none() {
                tracing::warn!(value = %raw, "Ignoring unrecognised persisted theme");
            }
            parsed
        });

        let (theme, source) = match (persisted, prefers_dark) {
            (Some(theme), _) => (theme, ThemeSource::Persisted),
            (None, Some(true)) => (Theme::Dark, ThemeSource::Environment),
            (None, _) => (self.fallback, ThemeSource::Default),
        };

        tracing::info!(theme = %theme, source = ?source, "Theme initialised");
        self.apply_theme(doc, store, theme);
        source
    }

    /// Switch to the opposite of the effective theme and return it.
    pub fn toggle(&self, doc: &mut Document, store: &mut dyn PreferenceStore) -> Theme {
        let next = self.current(doc).toggled();
        self.apply_theme(doc, store, next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Io {
                path: "prefs.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }
    }

    fn setup() -> (Document, ThemeController) {
        let mut doc = Document::new("html");
        let root = doc.root();
        let toggle = doc.create_element("button");
        doc.append_child(root, toggle);
        (doc, ThemeController::new(root, toggle, Theme::Light))
    }

    #[test]
    fn test_apply_sets_attribute_icon_and_persists() {
        let (mut doc, theme) = setup();
        let mut store = MemoryPreferenceStore::default();
        theme.apply_theme(&mut doc, &mut store, Theme::Dark);
        assert_eq!(doc.attribute(doc.root(), "data-theme"), Some("dark"));
        assert_eq!(doc.text(theme.toggle), constants::THEME_ICON_DARK);
        assert_eq!(doc.attribute(theme.toggle, "aria-pressed"), Some("true"));
        assert_eq!(store.get("essay.theme").as_deref(), Some("dark"));

        theme.apply_theme(&mut doc, &mut store, Theme::Light);
        assert_eq!(doc.text(theme.toggle), constants::THEME_ICON_LIGHT);
        assert_eq!(doc.attribute(theme.toggle, "aria-pressed"), Some("false"));
    }

    #[test]
    fn test_persisted_value_survives_reload_over_environment() {
        let mut store = MemoryPreferenceStore::default();
        let (mut doc, theme) = setup();
        theme.apply_theme(&mut doc, &mut store, Theme::Dark);

        // Fresh document simulates a reload; environment says light.
        let (mut reloaded, theme2) = setup();
        let source = theme2.init_theme(&mut reloaded, &mut store, Some(false));
        assert_eq!(source, ThemeSource::Persisted);
        assert_eq!(theme2.current(&reloaded), Theme::Dark);
    }

    #[test]
    fn test_environment_signal_used_without_persisted_value() {
        let (mut doc, theme) = setup();
        let mut store = MemoryPreferenceStore::default();
        let source = theme.init_theme(&mut doc, &mut store, Some(true));
        assert_eq!(source, ThemeSource::Environment);
        assert_eq!(theme.current(&doc), Theme::Dark);
    }

    #[test]
    fn test_fallback_when_no_signal() {
        let (mut doc, theme) = setup();
        let mut store = MemoryPreferenceStore::default();
        assert_eq!(theme.init_theme(&mut doc, &mut store, None), ThemeSource::Default);
        assert_eq!(theme.current(&doc), Theme::Light);

        let (mut doc, light_default) = setup();
        let dark_default = ThemeController {
            fallback: Theme::Dark,
            ..light_default
        };
        let mut store = MemoryPreferenceStore::default();
        dark_default.init_theme(&mut doc, &mut store, Some(false));
        assert_eq!(dark_default.current(&doc), Theme::Dark);
    }

    #[test]
    fn test_unrecognised_persisted_value_is_ignored() {
        let (mut doc, theme) = setup();
        let mut store = MemoryPreferenceStore::default();
        store.set("essay.theme", "sepia").unwrap();
        let source = theme.init_theme(&mut doc, &mut store, Some(true));
        assert_eq!(source, ThemeSource::Environment);
        assert_eq!(store.get("essay.theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_flips_effective_theme() {
        let (mut doc, theme) = setup();
        let mut store = MemoryPreferenceStore::default();
        // No attribute yet: treated as light.
        assert_eq!(theme.toggle(&mut doc, &mut store), Theme::Dark);
        assert_eq!(theme.toggle(&mut doc, &mut store), Theme::Light);
        let root = doc.root();
        doc.set_attribute(root, "data-theme", "weird");
        assert_eq!(theme.toggle(&mut doc, &mut store), Theme::Dark);
    }

    #[test]
    fn test_write_failure_still_applies_theme() {
        let (mut doc, theme) = setup();
        let mut store = ReadOnlyStore;
        theme.apply_theme(&mut doc, &mut store, Theme::Dark);
        assert_eq!(theme.current(&doc), Theme::Dark);
    }
}
