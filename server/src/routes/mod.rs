//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the plain HTTP endpoints (health check, root
//! redirect, static assets) together with Leptos SSR rendering under a single
//! Axum router. Everything the browser loads lives under the configured base
//! path so the same build works at the domain root or behind a prefix.
//!
//! TRADE-OFFS
//! ==========
//! The Leptos route list already carries the router `base`, so SSR routes are
//! merged rather than nested. Only the static asset mounts are prefixed here.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Routes that do not depend on the Leptos build: health check and, for a
/// prefixed deployment, a redirect from `/` into the app.
///
/// With an empty base path the app's own `""` route owns `/`, so no redirect
/// is registered here.
pub fn base_routes(config: &ServerConfig) -> Router {
    let router = Router::new().route("/healthz", get(healthz));
    if config.base_path.is_empty() {
        return router;
    }

    let target = config.route("/register");
    router.route("/", get(move || async move { Redirect::temporary(&target) }))
}

/// Full application: base routes, Leptos SSR pages, and the compiled site
/// assets (`/pkg/*`, `/logo.svg`) under the base path.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section / `LEPTOS_*` env vars).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(qbv_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || qbv_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(&*leptos_options.site_root);
    let pkg_dir = site_root.join(&*leptos_options.site_pkg_dir);

    Ok(base_routes(config)
        .merge(leptos_router)
        .nest_service(&config.route("/pkg"), ServeDir::new(pkg_dir))
        .route_service(&config.route("/logo.svg"), ServeFile::new(site_root.join("logo.svg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
