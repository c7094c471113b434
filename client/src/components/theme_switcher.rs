//! Business/winter theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Stored preference wins over the SSR default once hydrated.
    Effect::new(move || {
        let stored = theme::read_preference();
        theme::apply(stored);
        ui.update(|u| u.theme = stored);
    });

    view! {
        <button
            class="btn btn--round theme-switcher"
            on:click=move |_| {
                let next = theme::toggle(ui.get_untracked().theme);
                ui.update(|u| u.theme = next);
            }
            title="Toggle theme"
        >
            {move || if ui.get().theme.is_dark() { "☾" } else { "☀" }}
        </button>
    }
}
