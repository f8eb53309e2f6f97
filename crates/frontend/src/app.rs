use crate::invoices::InvoiceListPage;
use crate::shared::config::load_ui_config;
use crate::shared::theme::{Theme, ThemeService, ThemeToggle};
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_ui_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("UI configuration is unusable: {err:#}");
            return view! {
                <div class="app-error">"Configuration error: " {format!("{err:#}")}</div>
            }
            .into_any();
        }
    };

    // App-wide services: created and initialised once, disposed with the root owner.
    let theme = ThemeService::new(Theme::parse(&config.theme.default).unwrap_or_default());
    let toasts = ToastService::new(
        config.notifications.capacity,
        config.notifications.dismiss_after_ms,
    );
    provide_context(theme);
    provide_context(toasts);
    theme.init();
    toasts.init();
    on_cleanup(move || {
        toasts.dispose();
        theme.dispose();
    });

    view! {
        <div class="app">
            <header class="top-header">
                <span class="top-header__title">"Back office"</span>
                <ThemeToggle />
            </header>
            <main class="app__main">
                <InvoiceListPage config=config />
            </main>
            <ToastHost />
        </div>
    }
    .into_any()
}
