//! Narrow icon rail with a slide-out panel.

use leptos::prelude::*;

use crate::state::ui::{SidebarPanel, UiState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.get().sidebar_panel;

    view! {
        <nav class="sidebar">
            <button
                class="sidebar__icon"
                class:sidebar__icon--active=move || ui.get().is_panel_open(SidebarPanel::History)
                on:click=move |_| ui.update(|u| u.toggle_panel(SidebarPanel::History))
                title=SidebarPanel::History.title()
            >
                "⟲"
            </button>
        </nav>
        <aside class="sidebar-panel" class:sidebar-panel--open=move || open().is_some()>
            <div class="sidebar-panel__header">
                <h2>{move || open().map(SidebarPanel::title).unwrap_or_default()}</h2>
            </div>
        </aside>
    }
}
