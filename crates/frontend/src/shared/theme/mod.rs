//! Theme management module for the application.
//!
//! Light/dark switch persisted in localStorage under the `theme` key.
//! The active theme is exposed to CSS as `data-theme` on `<body>`.

use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "theme";

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string, unknown values fall back to light.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome icon of the toggle button.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

/// Persistent key/value slot holding the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Browser localStorage backend.
#[derive(Clone, Copy, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
    }

    fn save(&self, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_STORAGE_KEY, value);
        }
    }
}

/// Read the persisted preference, defaulting to light.
pub fn init_theme(store: &impl ThemeStore) -> Theme {
    store
        .load()
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

/// Flip the theme and persist the new value.
pub fn toggle_theme(current: Theme, store: &impl ThemeStore) -> Theme {
    let next = current.toggled();
    store.save(next.as_str());
    next
}

/// Set `data-theme` on body so the stylesheet picks the palette.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = toggle_theme(self.theme.get_untracked(), &LocalThemeStore);
        self.theme.set(next);
        apply_theme(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = init_theme(&LocalThemeStore);
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Round button switching between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="theme-toggle"
            title="Alternar tema"
            on:click=move |_| ctx.toggle()
        >
            <i class=move || ctx.theme.get().icon_class()></i>
        </button>
    }
}
