//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: the backend paths the console calls
//! (forwarded to `API_BASE_URL`), the Leptos SSR pages, and the compiled
//! WASM/CSS bundle under `/pkg`. Keeping the backend behind the same origin
//! means the browser never needs CORS.

pub mod upstream;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, delete, get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Backend paths forwarded verbatim. Entity deletes and password reset live
/// outside `/api/` on the backend.
pub fn upstream_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/{*path}", any(upstream::forward))
        .route("/companies/{id}", delete(upstream::forward))
        .route("/user-group/{id}", delete(upstream::forward))
        .route("/reset-password/{token}", post(upstream::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Forwarded backend routes + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(console::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || console::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(upstream_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
