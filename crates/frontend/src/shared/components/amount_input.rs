//! Currency-style amount input.
//!
//! Displays `1.250.000` style grouping. The parent owns the value: it passes
//! it in through `value` and receives edits through `on_change`. Keystrokes
//! report the raw parsed amount, blur reports the amount clamped to
//! `min`/`max`. While focused, changes to `value` do not touch the text.

use contracts::shared::amount_field::{AmountBounds, AmountField, FocusEffect};
use leptos::prelude::*;

#[component]
pub fn AmountInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Amount owned by the parent (`None` = empty field)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Receives every parsed edit and the committed value on blur
    on_change: Callback<Option<u64>>,
    /// Lower bound applied on blur
    #[prop(optional)]
    min: Option<u64>,
    /// Upper bound applied on blur
    #[prop(optional)]
    max: Option<u64>,
    /// Unit shown after the field, e.g. "€"
    #[prop(optional, into)]
    unit: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let bounds = AmountBounds::new(min, max).unwrap_or_else(|err| {
        log::warn!("AmountInput: {err}, bounds ignored");
        AmountBounds::unbounded()
    });

    let field = StoredValue::new(AmountField::new(value.get_untracked(), bounds));
    let display = RwSignal::new(field.with_value(|f| f.display().to_string()));

    let refresh_display = move || {
        display.set(field.with_value(|f| f.display().to_string()));
    };

    Effect::new(move |_| {
        let external = value.get();
        field.update_value(|f| f.set_value(external));
        refresh_display();
    });

    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="amount-input">
                <input
                    id=input_id
                    class="form__input amount-input__field"
                    type="text"
                    inputmode="numeric"
                    autocomplete="off"
                    placeholder=input_placeholder
                    disabled=disabled
                    prop:value=move || display.get()
                    on:focus=move |ev| {
                        let mut effect = FocusEffect::None;
                        field.update_value(|f| effect = f.focus());
                        if effect == FocusEffect::SelectAll {
                            event_target::<web_sys::HtmlInputElement>(&ev).select();
                        }
                    }
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let mut parsed = None;
                        field.update_value(|f| parsed = f.input(&text));
                        refresh_display();
                        on_change.run(parsed);
                    }
                    on:blur=move |_| {
                        let was_editing = field.with_value(|f| f.is_editing());
                        let mut committed = None;
                        field.update_value(|f| committed = f.blur());
                        refresh_display();
                        if was_editing {
                            on_change.run(committed);
                        }
                    }
                />
                {move || unit.get().map(|u| view! {
                    <span class="amount-input__unit">{u}</span>
                })}
            </div>
        </div>
    }
}
