use crate::AppState;
use crate::error::AppError;
use crate::helpers::player_location;

use axum::{
    Json,
    body::Body,
    extract::{Path, State, rejection::PathRejection},
    http::{
        HeaderMap, StatusCode,
        header::{CONTENT_TYPE, LOCATION},
    },
    response::{Html, IntoResponse, Response},
};
use axum_extra::TypedHeader;
use axum_extra::typed_header::TypedHeaderRejection;
use axum_macros::debug_handler;
use headers::Authorization;
use headers::authorization::Basic;
use roster_store::{NewPlayer, PlayerId};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub(crate) struct CreatedResponse {
    id: PlayerId,
}

/// Serialize `value` into a JSON response. Runs outside the store guard.
fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value).map_err(AppError::Serialization)?;
    Ok((status, [(CONTENT_TYPE, "application/json")], body).into_response())
}

#[debug_handler]
pub(crate) async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let players = state.store.list_all();
    json_response(StatusCode::OK, &players)
}

#[debug_handler]
pub(crate) async fn get_player(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id.map_err(AppError::MalformedPath)?;
    let player = state.store.get(&PlayerId::from(id))?;
    json_response(StatusCode::OK, &player)
}

/// Redirects (302) to a uniformly chosen player.
#[debug_handler]
pub(crate) async fn random_player(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.store.pick_random()?;
    Ok((
        StatusCode::FOUND,
        [(LOCATION, player_location(&state.api_version, &id))],
    ))
}

#[debug_handler]
pub(crate) async fn create_player(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Body,
) -> Result<impl IntoResponse, AppError> {
    // Checked before the body is touched
    let content_type = headers
        .get(CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();
    if content_type != "application/json" {
        return Err(AppError::UnsupportedMediaType(content_type));
    }

    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(AppError::BodyRead)?;
    let player: NewPlayer = serde_json::from_slice(&bytes).map_err(AppError::MalformedBody)?;

    let id = state.store.create(player);
    tracing::info!(%id, "Player created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, player_location(&state.api_version, &id))],
        Json(CreatedResponse { id }),
    ))
}

pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

#[debug_handler]
pub(crate) async fn admin(
    State(state): State<Arc<AppState>>,
    credentials: Result<TypedHeader<Authorization<Basic>>, TypedHeaderRejection>,
) -> Result<Html<&'static str>, AppError> {
    // Missing and unparseable credentials are both plain 401s
    let Ok(TypedHeader(auth)) = credentials else {
        return Err(AppError::Unauthorized);
    };
    if !state.admin.authorize(auth.username(), auth.password()) {
        return Err(AppError::Unauthorized);
    }
    Ok(Html(crate::admin::ADMIN_PAGE))
}
