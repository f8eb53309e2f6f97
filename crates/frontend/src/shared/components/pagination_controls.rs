use crate::shared::icons::icon;
use contracts::shared::pagination::{page_window, PageSlot};
use leptos::prelude::*;

/// PaginationControls component - numbered page buttons with ellipses,
/// prev/next buttons and a page size selector.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes (1-indexed)
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [10, 25, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);
    let fallback_size = page_size_opts.first().copied().unwrap_or(25);

    let last_page = move || total_pages.get().max(1);
    let go_to = move |page: usize| {
        if page != current_page.get_untracked() {
            log::debug!("page change: {} -> {}", current_page.get_untracked(), page);
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        go_to(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, last_page())
                    .into_iter()
                    .map(|slot| match slot {
                        PageSlot::Page(page) => view! {
                            <button
                                class=if page == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                on:click=move |_| go_to(page)
                            >
                                {page.to_string()}
                            </button>
                        }.into_any(),
                        PageSlot::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < last_page() {
                        go_to(page + 1);
                    }
                }
                disabled=move || current_page.get() >= last_page()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || format!("{} items", total_count.get())}
            </span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
