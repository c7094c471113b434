//! Dialog for adding a social media profile from the platform catalog.

use leptos::prelude::*;

use crate::util::social::{build_profile_link, filter_platforms, url_prefix_for};

/// A profile chosen in the dialog: platform name and full link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSocialProfile {
    pub platform: String,
    pub link: String,
}

#[component]
pub fn AddSocialModal(on_add: Callback<NewSocialProfile>, on_cancel: Callback<()>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());
    let handle = RwSignal::new(String::new());
    let dropdown_open = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let platform = selected.get_untracked();
        let Some(link) = build_profile_link(&platform, &handle.get_untracked()) else {
            return;
        };
        on_add.run(NewSocialProfile { platform, link });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <div class="dialog__header">
                    <h2>"Add Social Media"</h2>
                </div>
                <label class="dialog__label">
                    "Platform"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Select or type to search"
                        autofocus=true
                        prop:value=move || search.get()
                        on:focus=move |_| dropdown_open.set(true)
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            if text != selected.get_untracked() {
                                selected.set(String::new());
                            }
                            search.set(text);
                            dropdown_open.set(true);
                        }
                    />
                </label>
                <Show when=move || dropdown_open.get()>
                    <ul class="dialog__options">
                        {move || {
                            let matches = filter_platforms(&search.get());
                            if matches.is_empty() {
                                return view! { <li class="dialog__option--empty">"No platforms found"</li> }
                                    .into_any();
                            }
                            matches
                                .into_iter()
                                .map(|platform| {
                                    view! {
                                        <li
                                            class="dialog__option"
                                            on:click=move |_| {
                                                selected.set(platform.name.to_owned());
                                                search.set(platform.name.to_owned());
                                                dropdown_open.set(false);
                                            }
                                        >
                                            {platform.name}
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </ul>
                </Show>
                <label class="dialog__label">
                    "Username"
                    <div class="dialog__prefixed">
                        <span class="dialog__prefix">{move || url_prefix_for(&selected.get())}</span>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="username"
                            prop:value=move || handle.get()
                            on:input=move |ev| handle.set(event_target_value(&ev))
                        />
                    </div>
                </label>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || build_profile_link(&selected.get(), &handle.get()).is_none()
                    >
                        "Add"
                    </button>
                </div>
            </form>
        </div>
    }
}
