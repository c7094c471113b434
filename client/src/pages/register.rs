//! Registration page: validated sign-up form with animated hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry route of the onboarding flow. A valid submit spins the logo out,
//! shows the success message, then moves on to `/approval`. Both delays
//! are cancelled if the page unmounts first.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::asset_path;
use crate::state::register::{
    RegisterField, RegisterFlow, SUBMIT_ANIMATION_MS, SUCCESS_REDIRECT_MS, SubmitPhase,
};
use crate::util::delay::{self, DelayHandle};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let flow = expect_context::<RwSignal<RegisterFlow>>();
    let form_error = RwSignal::new(None::<String>);
    let go_approval = RwSignal::new(false);
    let timers = StoredValue::new(Vec::<DelayHandle>::new());

    // A finished registration starts over when the route is revisited.
    if flow.get_untracked().phase != SubmitPhase::Editing {
        flow.update(RegisterFlow::reset);
    }

    on_cleanup(move || {
        timers.try_with_value(|handles| delay::cancel_all(handles));
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if go_approval.get() {
            navigate("/approval", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match flow.try_update(RegisterFlow::submit) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                log::debug!("register: submit rejected: {e}");
                form_error.set(Some(e.to_string()));
                return;
            }
            None => return,
        }
        form_error.set(None);
        log::info!("register: submitted");

        let success = delay::after(Duration::from_millis(SUBMIT_ANIMATION_MS), move || {
            flow.update(RegisterFlow::show_success);
            let redirect = delay::after(Duration::from_millis(SUCCESS_REDIRECT_MS), move || go_approval.set(true));
            timers.update_value(|handles| handles.push(redirect));
        });
        timers.update_value(|handles| handles.push(success));
    };

    let submitting = move || flow.with(|f| f.phase == SubmitPhase::Submitting);

    view! {
        <div class="register-page">
            <Show
                when=move || flow.with(|f| f.phase != SubmitPhase::Success)
                fallback=|| {
                    view! {
                        <div class="register-page__success">
                            <h1>"That's it!"</h1>
                            <p>"We'll email you when your brand profile is ready"</p>
                        </div>
                    }
                }
            >
                <img
                    class="register-page__logo"
                    class:spin-out=submitting
                    class:spin-in=move || !submitting()
                    src=asset_path("/logo.svg")
                    alt="Qusaiq Logo"
                    width="150"
                    height="150"
                />
                <div class="register-page__card" class:send-to-cyberspace=submitting>
                    <h1>"Qusaiq"</h1>
                    <p class="register-page__tagline">"The easiest way to find your brand value"</p>
                    <form class="register-form" on:submit=on_submit>
                        <div class="register-form__row">
                            <FloatingField flow=flow field=RegisterField::FirstName/>
                            <FloatingField flow=flow field=RegisterField::LastName/>
                        </div>
                        <FloatingField flow=flow field=RegisterField::CompanyName/>
                        <FloatingField flow=flow field=RegisterField::BrandName/>
                        <FloatingField flow=flow field=RegisterField::Email/>
                        <FloatingField flow=flow field=RegisterField::Mobile/>
                        <FloatingField flow=flow field=RegisterField::Password/>
                        <FloatingField flow=flow field=RegisterField::ConfirmPassword/>
                        <Show when=move || form_error.get().is_some()>
                            <p class="field-error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button
                            class="btn btn--primary btn--block"
                            type="submit"
                            disabled=move || !flow.with(|f| f.form.is_form_valid())
                        >
                            "Register"
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}

/// Input with a floating label; shows its inline error after blur.
#[component]
fn FloatingField(flow: RwSignal<RegisterFlow>, field: RegisterField) -> impl IntoView {
    view! {
        <div class="float-field">
            <input
                class="float-field__input"
                type=field.input_type()
                id=field.id()
                required=true
                placeholder=" "
                prop:value=move || flow.with(|f| f.form.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    flow.update(|f| f.form.set(field, &value));
                }
                on:blur=move |_| flow.update(|f| f.touch(field))
            />
            <label class="float-field__label" for=field.id()>
                {field.label()}
            </label>
        </div>
        {move || {
            flow.with(|f| f.visible_error(field))
                .map(|error| view! { <p class="field-error">{error.to_string()}</p> })
        }}
    }
}
