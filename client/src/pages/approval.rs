//! Approval page: section-by-section confirmation of onboarding data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from registration. The wizard state is page-scoped: it is seeded
//! on mount and dropped when the user leaves. Submitting the last section
//! schedules the move to `/dashboard`; leaving earlier cancels that timer.
//!
//! DESIGN
//! ======
//! Rows read their own `ReviewField` through the wizard signal, so typing in
//! one input never rebuilds the section. Only step changes (memoized) and
//! list length changes re-render structure.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::add_social_modal::{AddSocialModal, NewSocialProfile};
use crate::components::delete_social_modal::DeleteSocialModal;
use crate::components::review_field::{ReviewFieldRow, run_wizard};
use crate::config::asset_path;
use crate::state::approval::{ApprovalWizard, FieldKey, SUBMIT_REDIRECT_MS, WizardSection, WizardStep};
use crate::util::delay::{self, DelayHandle};

#[component]
pub fn ApprovalPage() -> impl IntoView {
    let wizard = RwSignal::new(ApprovalWizard::default());
    let show_add = RwSignal::new(false);
    let go_dashboard = RwSignal::new(false);
    let redirect = StoredValue::new(None::<DelayHandle>);

    on_cleanup(move || {
        redirect.try_with_value(|handle| {
            if let Some(handle) = handle {
                handle.cancel();
            }
        });
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if go_dashboard.get() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let rotation = move || format!("transform: rotate({}deg)", wizard.with(|w| w.rotation_deg));

    let on_start = move |_| {
        if let Some(next) = run_wizard(wizard, ApprovalWizard::proceed) {
            log::debug!("approval: started at {next:?}");
        }
    };
    let on_back = move |_| {
        if let Some(prev) = run_wizard(wizard, ApprovalWizard::back) {
            log::debug!("approval: back to {prev:?}");
        }
    };
    let on_next = move |_| match run_wizard(wizard, ApprovalWizard::advance) {
        Some(WizardStep::Submitted) => {
            log::info!("approval: submitted, opening dashboard in {SUBMIT_REDIRECT_MS} ms");
            let handle = delay::after(Duration::from_millis(SUBMIT_REDIRECT_MS), move || go_dashboard.set(true));
            redirect.set_value(Some(handle));
        }
        Some(next) => log::debug!("approval: advanced to {next:?}"),
        None => {}
    };

    let on_add = Callback::new(move |profile: NewSocialProfile| {
        wizard.update(|w| {
            w.add_social_profile(&profile.platform, &profile.link);
        });
        show_add.set(false);
    });
    let on_add_cancel = Callback::new(move |_| show_add.set(false));
    let on_delete_confirm = Callback::new(move |_| {
        if let Some(removed) = run_wizard(wizard, ApprovalWizard::confirm_removal) {
            log::debug!("approval: removed {:?} entry {}", removed.section, removed.index);
        }
    });
    let on_delete_cancel = Callback::new(move |_| wizard.update(ApprovalWizard::cancel_removal));
    let pending_label =
        Signal::derive(move || wizard.with(|w| w.pending_removal_label().unwrap_or_default()));

    view! {
        <div class="approval-page">
            <img
                class="approval-page__logo"
                src=asset_path("/logo.svg")
                alt="Qusaiq"
                width="96"
                height="96"
                style=rotation
            />
            {move || match step.get() {
                WizardStep::Intro => {
                    let first_name = wizard.with_untracked(|w| w.data.basics.first_name.value.clone());
                    view! {
                        <div class="approval-intro">
                            <h2>{format!("Hi {first_name}, Welcome back to QUSAIQ")}</h2>
                            <p>
                                "Before we build your brand profile, please review what we found. "
                                "Check each item to confirm it, or use the pencil to correct it."
                            </p>
                            <button class="btn btn--primary" on:click=on_start>
                                "Let's Begin"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                WizardStep::Section(section) => {
                    view! {
                        <div class="approval-card">
                            <h2 class="approval-card__title">{section.title().to_uppercase()}</h2>
                            <SectionBody wizard=wizard section=section/>
                            {(section == WizardSection::SocialMedia)
                                .then(|| {
                                    view! {
                                        <button class="btn approval-card__add" on:click=move |_| show_add.set(true)>
                                            "+ Add Social Media"
                                        </button>
                                    }
                                })}
                            <div class="approval-card__nav">
                                <Show when=move || wizard.with(ApprovalWizard::can_go_back)>
                                    <button class="btn" on:click=on_back>
                                        "Back"
                                    </button>
                                </Show>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || !wizard.with(ApprovalWizard::can_advance)
                                    on:click=on_next
                                >
                                    {if section.is_last() { "Submit" } else { "Next" }}
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                WizardStep::Submitted => {
                    view! {
                        <div class="approval-done">
                            <h2>"All sections confirmed!"</h2>
                            <p>"Submitting your approval. Your dashboard is on its way..."</p>
                        </div>
                    }
                        .into_any()
                }
            }}
            <Show when=move || show_add.get()>
                <AddSocialModal on_add=on_add on_cancel=on_add_cancel/>
            </Show>
            <Show when=move || wizard.with(|w| w.pending_removal.is_some())>
                <DeleteSocialModal
                    platform_name=pending_label
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

/// Field rows of one section. List sections render one card per entry.
#[component]
fn SectionBody(wizard: RwSignal<ApprovalWizard>, section: WizardSection) -> impl IntoView {
    if !section.is_list() {
        let keys = wizard.with_untracked(|w| w.data.section_keys(section));
        return keys
            .into_iter()
            .map(|key| view! { <ReviewFieldRow wizard=wizard field_key=key/> })
            .collect_view()
            .into_any();
    }

    let len = Memo::new(move |_| wizard.with(|w| w.data.list_len(section).unwrap_or(0)));
    view! {
        <Show
            when=move || { len.get() > 0 }
            fallback=|| view! { <p class="approval-card__empty">"No entries."</p> }
        >
            <For
                each=move || 0..len.get()
                key=|index| *index
                children=move |index| view! { <EntryCard wizard=wizard section=section index=index/> }
            />
        </Show>
    }
    .into_any()
}

#[component]
fn EntryCard(wizard: RwSignal<ApprovalWizard>, section: WizardSection, index: usize) -> impl IntoView {
    let title = match section {
        WizardSection::SocialMedia => "Social Profile",
        _ => "Competitor",
    };
    let removable = section == WizardSection::SocialMedia;

    view! {
        <div class="review-entry">
            <div class="review-entry__head">
                <h4>{format!("{title} {}", index + 1)}</h4>
                {removable
                    .then(|| {
                        view! {
                            <button
                                class="review-entry__delete"
                                title="Remove"
                                on:click=move |_| {
                                    run_wizard(wizard, |w| w.request_removal(section, index));
                                }
                            >
                                "✕"
                            </button>
                        }
                    })}
            </div>
            {FieldKey::entry_keys(section, index)
                .into_iter()
                .map(|key| view! { <ReviewFieldRow wizard=wizard field_key=key/> })
                .collect_view()}
        </div>
    }
}
