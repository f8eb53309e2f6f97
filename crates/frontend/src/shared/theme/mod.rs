//! Light/dark theme service.
//!
//! `ThemeService` is created once in `App`, provided through context and
//! initialised explicitly. The choice is persisted in localStorage and exposed
//! to CSS through the `data-theme` attribute on `<body>`.

use crate::shared::icons::icon;
use crate::shared::storage;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used for the `data-theme` attribute and localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
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

const THEME_STORAGE_KEY: &str = "app-theme";

fn apply_theme(theme: Option<Theme>) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = match theme {
        Some(theme) => body.set_attribute("data-theme", theme.as_str()),
        None => body.remove_attribute("data-theme"),
    };
}

#[derive(Clone, Copy)]
pub struct ThemeService {
    theme: RwSignal<Theme>,
    active: RwSignal<bool>,
}

impl ThemeService {
    pub fn new(default: Theme) -> Self {
        Self {
            theme: RwSignal::new(default),
            active: RwSignal::new(false),
        }
    }

    /// Restores the stored choice and applies it. Call once at startup.
    pub fn init(&self) {
        if self.active.get_untracked() {
            return;
        }
        if let Some(stored) = storage::get_item(THEME_STORAGE_KEY).and_then(|s| Theme::parse(&s)) {
            self.theme.set(stored);
        }
        self.active.set(true);
        apply_theme(Some(self.theme.get_untracked()));
        log::debug!("theme service initialised: {}", self.theme.get_untracked().as_str());
    }

    /// Removes the theme attribute. Later `set_theme` calls are ignored.
    pub fn dispose(&self) {
        self.active.set(false);
        apply_theme(None);
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn set_theme(&self, theme: Theme) {
        if !self.active.get_untracked() {
            log::warn!("theme change ignored: service is not initialised");
            return;
        }
        self.theme.set(theme);
        storage::set_item(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(Some(theme));
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

pub fn use_theme() -> Option<ThemeService> {
    use_context::<ThemeService>()
}

/// Light/dark toggle button for the header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let Some(service) = use_theme() else {
        log::warn!("ThemeToggle rendered without ThemeService");
        return ().into_any();
    };
    let theme = service.theme();

    view! {
        <button
            class="top-header-icon-btn"
            on:click=move |_| service.toggle()
            title=move || match theme.get() {
                Theme::Light => "Switch to dark mode",
                Theme::Dark => "Switch to light mode",
            }
        >
            {move || match theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
    .into_any()
}
