use contracts::shared::status::{BadgeVariant, DocumentStatus, ReminderLevel};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant, `Neutral` by default
    #[prop(optional, into)]
    variant: MaybeProp<BadgeVariant>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || variant.get().unwrap_or_default().css_class();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Invoice / down-payment status badge
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<DocumentStatus>) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--status {}", status.get().badge_variant().css_class())>
            {move || status.get().label()}
        </span>
    }
}

#[component]
pub fn ReminderBadge(#[prop(into)] level: Signal<ReminderLevel>) -> impl IntoView {
    view! {
        <Show when=move || level.get() != ReminderLevel::None>
            <span class=move || format!("badge badge--reminder {}", level.get().badge_variant().css_class())>
                {move || level.get().label()}
            </span>
        </Show>
    }
}
