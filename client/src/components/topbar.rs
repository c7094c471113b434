//! Fixed top bar with the product logo and theme switch.

use leptos::prelude::*;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::config::asset_path;

#[component]
pub fn Topbar() -> impl IntoView {
    view! {
        <header class="topbar">
            <img class="topbar__logo" src=asset_path("/logo.svg") alt="Qusaiq" width="30" height="30"/>
            <span class="topbar__divider" aria-hidden="true"></span>
            <span class="topbar__brand">"Qusaiq"</span>
            <span class="topbar__spacer"></span>
            <ThemeSwitcher/>
        </header>
    }
}
