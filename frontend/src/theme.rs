use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;

use crate::error::{document, UiError};

pub const THEME_KEY: &str = "theme";
const THEME_ATTR: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Dark mode offers the sun to switch back, light mode the moon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Key-value store for user preferences. The theme is the only thing kept.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`; silently does nothing where storage is blocked.
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        window()?.local_storage().ok()??.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(key, value).is_err() {
                    warn!("Could not persist {}", key);
                }
            }
        }
    }
}

pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Sets `data-theme` on `<html>` so the stylesheet can switch palettes.
pub fn apply_theme(theme: Theme) -> Result<(), UiError> {
    let root = document()?
        .document_element()
        .ok_or_else(|| UiError::MissingElement("html".to_string()))?;
    root.set_attribute(THEME_ATTR, theme.as_str())?;
    Ok(())
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| load_theme(&LocalStorage));

    {
        use_effect_with_deps(
            move |theme: &Theme| {
                debug!("Applying {} theme", theme.as_str());
                if let Err(e) = apply_theme(*theme) {
                    warn!("Could not apply theme: {}", e);
                }
                save_theme(&LocalStorage, *theme);
                || ()
            },
            *theme,
        );
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set(theme.toggled());
        })
    };

    html! {
        <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme" {onclick}>
            <i class={theme.icon_class()}></i>
        </button>
    }
}
