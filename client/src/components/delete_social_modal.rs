//! Confirmation dialog for removing a social media entry.

use leptos::prelude::*;

#[component]
pub fn DeleteSocialModal(
    #[prop(into)] platform_name: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_cancel.run(());
                    }
                }
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Confirm Deletion"</h2>
                </div>
                <p class="dialog__body">
                    "Are you sure you want to remove "
                    <strong>{move || platform_name.get()}</strong>
                    " from your Socials List?"
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
