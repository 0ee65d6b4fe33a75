// EssaySort - app/events.rs
//
// Event dispatch: element ids are bound to actions once at page start,
// and each incoming UI event runs its action to completion before the
// next is handled. Nothing is queued; a newer event of the same kind
// simply overwrites the visible effect of the previous one.

use crate::app::page::Page;
use crate::core::document::RenderTarget;
use crate::core::model::{FilterKey, Theme};
use crate::core::theme::PreferenceStore;
use crate::util::constants;
use crate::util::error::EventError;
use std::collections::HashMap;

/// A discrete user input raised by the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A button was activated.
    Click { element_id: String },
    /// A text control's value changed.
    Input { element_id: String, value: String },
}

impl UiEvent {
    pub fn click(element_id: impl Into<String>) -> Self {
        Self::Click {
            element_id: element_id.into(),
        }
    }

    pub fn input(element_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            element_id: element_id.into(),
            value: value.into(),
        }
    }

    fn element_id(&self) -> &str {
        match self {
            Self::Click { element_id } | Self::Input { element_id, .. } => element_id,
        }
    }
}

/// Handler kinds that can be bound to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click: apply a category filter.
    SetFilter(FilterKey),
    /// Input: run a search with the control's value.
    Search,
    /// Click: switch to the opposite theme.
    ToggleTheme,
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FilterApplied(FilterKey),
    SearchApplied { matches: usize },
    ThemeChanged(Theme),
    /// No binding for the element, or the event kind does not fit it.
    Ignored,
}

/// Element-id to action bindings.
#[derive(Debug, Default, Clone)]
pub struct EventRouter {
    bindings: HashMap<String, Action>,
}

impl EventRouter {
    /// Bind `action` to `element_id`. Each element is bound at most once.
    pub fn bind(&mut self, element_id: &str, action: Action) -> Result<(), EventError> {
        if self.bindings.contains_key(element_id) {
            return Err(EventError::AlreadyBound {
                element_id: element_id.to_string(),
            });
        }
        tracing::debug!(element = element_id, action = ?action, "Handler bound");
        self.bindings.insert(element_id.to_string(), action);
        Ok(())
    }

    /// Bind the page's filter buttons, search input and theme toggle.
    ///
    /// Filter buttons are bound by reading their `data-filter` attribute;
    /// buttons with an unrecognised value are left unbound.
    pub fn for_page(page: &Page) -> Result<Self, EventError> {
        let mut router = Self::default();

        for button in page.filter.buttons() {
            let Some(id) = page.doc.attribute(*button, "id") else {
                continue;
            };
            match page
                .doc
                .attribute(*button, constants::DATA_FILTER_ATTR)
                .and_then(FilterKey::parse)
            {
                Some(key) => router.bind(id, Action::SetFilter(key))?,
                None => tracing::warn!(element = id, "Filter button has no valid data-filter"),
            }
        }

        router.bind(constants::SEARCH_INPUT_ID, Action::Search)?;
        router.bind(constants::THEME_TOGGLE_ID, Action::ToggleTheme)?;
        Ok(router)
    }

    pub fn action_for(&self, element_id: &str) -> Option<Action> {
        self.bindings.get(element_id).copied()
    }

    /// Run the handler bound to the event's element.
    pub fn dispatch(
        &self,
        page: &mut Page,
        store: &mut dyn PreferenceStore,
        event: &UiEvent,
    ) -> Outcome {
        let Some(action) = self.action_for(event.element_id()) else {
            tracing::debug!(element = event.element_id(), "No handler bound; event ignored");
            return Outcome::Ignored;
        };

        match (action, event) {
            (Action::SetFilter(key), UiEvent::Click { .. }) => {
                page.filter.set_filter(&mut page.doc, key);
                Outcome::FilterApplied(key)
            }
            (Action::ToggleTheme, UiEvent::Click { .. }) => {
                let theme = page.theme.toggle(&mut page.doc, store);
                Outcome::ThemeChanged(theme)
            }
            (Action::Search, UiEvent::Input { value, .. }) => {
                page.doc.set_attribute(page.search_input, "value", value);
                let matches = page.search.search(&mut page.doc, &mut page.filter, value);
                Outcome::SearchApplied { matches }
            }
            _ => {
                tracing::debug!(
                    element = event.element_id(),
                    action = ?action,
                    "Event kind does not match bound handler; ignored"
                );
                Outcome::Ignored
            }
        }
    }
}
