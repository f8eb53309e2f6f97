use super::sample::sample_invoices;
use crate::shared::components::ui::{Badge, ReminderBadge, StatusBadge};
use crate::shared::components::{AmountInput, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::invoice::{InvoiceId, InvoiceSummary};
use contracts::shared::config::UiConfig;
use contracts::shared::locale_number::format_with_unit;
use contracts::shared::pagination::PageState;
use contracts::shared::status::BadgeVariant;
use leptos::prelude::*;
use thaw::*;

const CURRENCY: &str = "€";

/// Case-insensitive match on invoice number or customer.
pub fn filter_invoices(rows: &[InvoiceSummary], filter: &str) -> Vec<InvoiceSummary> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|r| {
            r.number.to_lowercase().contains(&needle) || r.customer.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn InvoiceListPage(config: UiConfig) -> impl IntoView {
    let toasts = use_toasts();

    let invoices = RwSignal::new(sample_invoices(137));
    let filter = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<InvoiceId>);
    let page_state = RwSignal::new(PageState::new(config.pagination.default_page_size, 0));

    let filtered = Memo::new(move |_| invoices.with(|rows| filter_invoices(rows, &filter.get())));

    Effect::new(move |_| {
        let count = filtered.with(|rows| rows.len());
        page_state.update(|s| s.set_total_count(count));
    });

    let page_rows = move || {
        let state = page_state.get();
        filtered.with(|rows| {
            rows.iter()
                .skip(state.offset())
                .take(state.page_size)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    // Tracks only the selection: edits of the open row must not rebuild the panel.
    let selected_invoice = move || {
        let id = selected.get()?;
        invoices.with_untracked(|rows| rows.iter().find(|r| r.id == id).cloned())
    };

    let send_reminder = move |id: InvoiceId| {
        let mut sent = None;
        invoices.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id == id && r.status.is_open()) {
                row.reminder = row.reminder.escalate();
                sent = Some((row.number.clone(), row.reminder));
            }
        });
        if let (Some((number, level)), Some(t)) = (sent, toasts) {
            t.info(format!("{}: {} queued", number, level.label()));
        }
    };

    let set_down_payment = move |id: InvoiceId, amount: Option<u64>| {
        invoices.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                row.down_payment = amount;
            }
        });
    };

    let page_size_options = config.pagination.page_size_options.clone();
    let amount_min = config.amount.min;
    let amount_max = config.amount.max;

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{icon("invoices")} " Invoices"</h1>
                <input
                    class="form__input page__search"
                    type="search"
                    placeholder="Search by number or customer"
                    prop:value=move || filter.get()
                    on:input=move |ev| {
                        filter.set(event_target_value(&ev));
                        page_state.update(|s| { s.go_to(1); });
                    }
                />
            </div>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=110.0>"Number"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Customer"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Issued"</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>"Total"</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>"Down payment"</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>"Outstanding"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Reminders"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=page_rows
                            key=|row| (row.id, row.down_payment, row.reminder)
                            children=move |row| {
                                let id = row.id;
                                let status = row.status;
                                let reminder = row.reminder;
                                let number = row.number.clone();
                                let customer = row.customer.clone();
                                let issued_on = row.issued_on_display();
                                let total_amount = row.total_amount;
                                let down_payment = row.down_payment;
                                let outstanding = row.outstanding();
                                view! {
                                    <TableRow
                                        class:table__row--selected=move || selected.get() == Some(id)
                                        on:click=move |_| selected.set(Some(id))
                                        attr:style="cursor: pointer;"
                                    >
                                        <TableCell>{number}</TableCell>
                                        <TableCell>{customer}</TableCell>
                                        <TableCell>{issued_on}</TableCell>
                                        <TableCell class="text-right">
                                            {format_with_unit(Some(total_amount), CURRENCY)}
                                        </TableCell>
                                        <TableCell class="text-right">
                                            {format_with_unit(down_payment, CURRENCY)}
                                        </TableCell>
                                        <TableCell class="text-right">
                                            {format_with_unit(Some(outstanding), CURRENCY)}
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=status />
                                        </TableCell>
                                        <TableCell>
                                            <ReminderBadge level=reminder />
                                            <Show when=move || status.is_open()>
                                                <button
                                                    class="button button--ghost button--smallall"
                                                    title="Send payment reminder"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        send_reminder(id);
                                                    }
                                                >
                                                    {icon("bell")}
                                                </button>
                                            </Show>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <PaginationControls
                    current_page=Signal::derive(move || page_state.get().page)
                    total_pages=Signal::derive(move || page_state.get().total_pages())
                    total_count=Signal::derive(move || page_state.get().total_count)
                    page_size=Signal::derive(move || page_state.get().page_size)
                    on_page_change=Callback::new(move |page: usize| {
                        page_state.update(|s| { s.go_to(page); });
                    })
                    on_page_size_change=Callback::new(move |size: usize| {
                        page_state.update(|s| s.set_page_size(size));
                    })
                    page_size_options=page_size_options
                />
            </div>

            {move || selected_invoice().map(|invoice| {
                let id = invoice.id;
                let total = invoice.total_amount;
                let max = amount_max.map_or(total, |m| m.min(total));
                let down_payment = Signal::derive(move || {
                    invoices.with(|rows| rows.iter().find(|r| r.id == id).and_then(|r| r.down_payment))
                });
                view! {
                    <aside class="details-panel">
                        <div class="details-panel__header">
                            <h2>{invoice.number.clone()}</h2>
                            <Badge variant=BadgeVariant::Primary>{invoice.customer.clone()}</Badge>
                            <button
                                class="button button--ghost"
                                title="Close"
                                on:click=move |_| selected.set(None)
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <p class="details-panel__total">
                            "Total: " {format_with_unit(Some(total), CURRENCY)}
                        </p>
                        <AmountInput
                            label="Down payment"
                            value=down_payment
                            min=amount_min.unwrap_or(0)
                            max=max
                            unit=CURRENCY
                            placeholder="No down payment"
                            on_change=Callback::new(move |amount: Option<u64>| {
                                set_down_payment(id, amount);
                            })
                        />
                        <button
                            class="button button--primary"
                            on:click=move |_| {
                                let amount = down_payment.get_untracked();
                                if let Some(t) = toasts {
                                    t.success(format!(
                                        "Down payment saved: {}",
                                        format_with_unit(amount, CURRENCY)
                                    ));
                                }
                            }
                        >
                            {icon("payments")} " Save"
                        </button>
                    </aside>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_invoices() {
        let rows = sample_invoices(30);
        assert_eq!(filter_invoices(&rows, "").len(), 30);
        assert_eq!(filter_invoices(&rows, "  ").len(), 30);

        let by_number = filter_invoices(&rows, "inv-0012");
        assert_eq!(by_number.len(), 1);
        assert_eq!(by_number[0].number, "INV-0012");

        let by_customer = filter_invoices(&rows, "SOLAR");
        assert!(!by_customer.is_empty());
        assert!(by_customer.iter().all(|r| r.customer == "Bakker Solar BV"));

        assert!(filter_invoices(&rows, "no such customer").is_empty());
    }
}
