//! Light/dark theme, persisted under `theme` and applied as a `dark` class
//! on `<html>`.

use std::fmt;

use dioxus::prelude::*;
use store::KeyValueStore;

pub const THEME_KEY: &str = "theme";

const UI_CSS: Asset = asset!("/assets/ui.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
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

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ThemeSignal = Signal<Theme>;

/// Saved theme, else the system preference.
pub fn load_theme(storage: &dyn KeyValueStore) -> Theme {
    storage
        .get(THEME_KEY)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_else(system_theme)
}

fn system_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        if prefers_dark {
            return Theme::Dark;
        }
    }
    Theme::Light
}

/// Toggle the `dark` class on the document root.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            let result = match theme {
                Theme::Dark => classes.add_1("dark"),
                Theme::Light => classes.remove_1("dark"),
            };
            if result.is_err() {
                tracing::warn!("Failed to apply {} theme", theme);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Provides the [`ThemeSignal`]. Must sit inside
/// [`AuthProvider`](crate::AuthProvider), whose storage it shares.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let storage = crate::auth::use_auth().peek().storage();
    let theme = use_signal(|| load_theme(storage.as_ref()));

    use_effect(move || {
        let current = theme();
        apply_theme(current);
        if let Err(e) = storage.set(THEME_KEY, current.as_str()) {
            tracing::warn!("Failed to save theme: {}", e);
        }
    });

    use_context_provider(|| theme);

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStorage;

    #[test]
    fn test_saved_theme_wins() {
        let storage = MemoryStorage::new();
        storage.set(THEME_KEY, "dark").unwrap();
        assert_eq!(load_theme(&storage), Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let storage = MemoryStorage::new();
        storage.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&storage), Theme::Light);
        assert_eq!(load_theme(&MemoryStorage::new()), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().to_string(), "light");
    }
}
