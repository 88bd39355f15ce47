//! SSR host for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the Leptos routes server-side and serves the compiled WASM/CSS
//! bundle from `/pkg`. All data comes from the remote REST API; this process
//! holds no state of its own.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use renta_dashboard::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Health check, Leptos SSR routes, and the static bundle under `/pkg`.
fn app(leptos_options: &LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let leptos_router = Router::new()
        .leptos_routes(leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "renta dashboard listening");
    axum::serve(listener, app(&leptos_options)).await?;
    Ok(())
}
