//! Theme initialization and toggle.
//!
//! Reads the saved theme name from `localStorage` and applies it as a
//! `data-theme` attribute on the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Available color themes. `Business` is dark, `Winter` is light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Business,
    Winter,
}

impl Theme {
    /// Attribute/storage value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Winter => "winter",
        }
    }

    /// Parse a stored theme name. Unknown names yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "business" => Some(Self::Business),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Business => Self::Winter,
            Self::Winter => Self::Business,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Business)
    }
}

/// Read the theme preference from localStorage, defaulting to `Business`.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and persist the new choice to localStorage.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_str());
            }
        }
    }
    log::debug!("theme switched to {}", next.as_str());
    next
}
