pub mod admin;
pub mod config;
mod error;
pub mod helpers;
mod routes;

pub use error::AppError;

use axum::{
    Router,
    http::{HeaderValue, StatusCode, header::ACCESS_CONTROL_ALLOW_ORIGIN},
    routing::get,
};
use roster_store::PlayerStore;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::admin::AdminPortal;
use crate::config::Config;

pub struct AppState {
    pub store: PlayerStore,
    pub admin: AdminPortal,
    /// Path segment every API route is nested under, e.g. `v1`.
    pub api_version: String,
}

/// Create the application router around the given store and configuration
pub fn create_app(store: PlayerStore, config: &Config) -> Router {
    let state = Arc::new(AppState {
        store,
        admin: AdminPortal::new(&config.admin_password),
        api_version: config.api_version.clone(),
    });

    // Every /players response, errors included, is readable cross-origin.
    // `get` would also answer HEAD, so HEAD is routed to 405 explicitly.
    let player_routes = Router::new()
        .route(
            "/players",
            get(routes::list_players)
                .post(routes::create_player)
                .head(routes::method_not_allowed)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/players/random",
            get(routes::random_player)
                .head(routes::method_not_allowed)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/players/{id}",
            get(routes::get_player)
                .head(routes::method_not_allowed)
                .fallback(routes::method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ));

    let api_routes = Router::new()
        .merge(player_routes)
        .route("/admin", get(routes::admin));

    Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .nest(&format!("/{}", config.api_version), api_routes)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(RequestBodyLimitLayer::new(config.request_body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
