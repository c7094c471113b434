//! One reviewable field: confirm checkbox, value input, and edit toggle.

use leptos::prelude::*;

use crate::state::approval::{ApprovalWizard, FieldKey, ReviewField, WizardError};

/// Apply a fallible wizard action, logging rejections instead of surfacing them.
pub fn run_wizard<T>(
    wizard: RwSignal<ApprovalWizard>,
    action: impl FnOnce(&mut ApprovalWizard) -> Result<T, WizardError>,
) -> Option<T> {
    match wizard.try_update(action)? {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("approval: action rejected: {e}");
            None
        }
    }
}

#[component]
pub fn ReviewFieldRow(wizard: RwSignal<ApprovalWizard>, field_key: FieldKey) -> impl IntoView {
    let read = move |f: fn(&ReviewField) -> bool| wizard.with(|w| w.data.field(field_key).is_ok_and(f));
    let confirmed = move || read(|f| f.confirmed);
    let editing = move || read(|f| f.editing);
    let value = move || wizard.with(|w| w.data.field(field_key).map(|f| f.value.clone()).unwrap_or_default());

    view! {
        <div class="review-field" class:review-field--confirmed=confirmed>
            <input
                type="checkbox"
                class="review-field__check"
                prop:checked=confirmed
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    run_wizard(wizard, |w| w.set_field_confirmed(field_key, checked));
                }
            />
            <label class="review-field__body">
                <span class="review-field__label">{field_key.label()}</span>
                <input
                    type="text"
                    class="review-field__input"
                    class:review-field__input--editing=editing
                    prop:value=value
                    readonly=move || !editing()
                    on:input=move |ev| {
                        let next = event_target_value(&ev);
                        run_wizard(wizard, |w| w.set_field_value(field_key, next));
                    }
                />
            </label>
            <button
                class="review-field__edit"
                class:review-field__edit--active=editing
                title="Edit"
                on:click=move |_| {
                    run_wizard(wizard, |w| w.toggle_field_editing(field_key));
                }
            >
                "✎"
            </button>
        </div>
    }
}
