//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{sidebar::Sidebar, topbar::Topbar};
use crate::config;
use crate::pages::{approval::ApprovalPage, dashboard::DashboardPage, register::RegisterPage};
use crate::report::ReportCatalog;
use crate::state::{dashboard::DashboardState, register::RegisterFlow, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="business">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing. The
/// approval wizard state is page-scoped and created by `ApprovalPage` itself.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = ReportCatalog::new();
    let register = RwSignal::new(RegisterFlow::default());
    let dashboard = RwSignal::new(DashboardState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(catalog);
    provide_context(register);
    provide_context(dashboard);
    provide_context(ui);

    let stylesheet = config::asset_path("/pkg/qbv.css");

    view! {
        <Stylesheet id="leptos" href=stylesheet/>
        <Title text="Qusaiq"/>

        <Router base=config::base_path()>
            <Topbar/>
            <Sidebar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/register"/> }/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("approval") view=ApprovalPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
