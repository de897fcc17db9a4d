use axum::{
  extract::rejection::PathRejection,
  http::{StatusCode, header::WWW_AUTHENTICATE},
  response::{IntoResponse, Response},
};
use roster_store::StoreError;
use thiserror::Error;

/// Application error type
///
/// Display output doubles as the plain-text response body where one is sent.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("need content type application/json, got {0}")]
  UnsupportedMediaType(String),

  #[error("{0}")]
  MalformedBody(serde_json::Error),

  #[error("{0}")]
  BodyRead(axum::Error),

  #[error("{0}")]
  Serialization(serde_json::Error),

  #[error(transparent)]
  Store(#[from] StoreError),

  #[error("{0}")]
  MalformedPath(PathRejection),

  #[error("401 – Unauthorized")]
  Unauthorized,

  #[error("Error, method not allowed!")]
  MethodNotAllowed,
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let message = self.to_string();
    match self {
      AppError::UnsupportedMediaType(content_type) => {
        tracing::warn!(%content_type, "Rejected request body content type");
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, message).into_response()
      }
      AppError::MalformedBody(err) => {
        tracing::warn!(%err, "Malformed player body");
        (StatusCode::BAD_REQUEST, message).into_response()
      }
      AppError::BodyRead(err) => {
        tracing::error!(%err, "Failed to read request body");
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
      }
      AppError::Serialization(err) => {
        tracing::error!(%err, "Failed to serialize response");
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
      }
      // Absence is an expected outcome, not a fault: 404 with no body
      AppError::Store(err) => {
        tracing::debug!(%err, "Store lookup came up empty");
        StatusCode::NOT_FOUND.into_response()
      }
      // An undecodable id can't name a stored player either
      AppError::MalformedPath(err) => {
        tracing::debug!(%err, "Malformed player path");
        StatusCode::NOT_FOUND.into_response()
      }
      AppError::Unauthorized => {
        tracing::warn!("Admin authorization failed");
        (
          StatusCode::UNAUTHORIZED,
          [(WWW_AUTHENTICATE, r#"Basic realm="admin""#)],
          message,
        )
          .into_response()
      }
      AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, message).into_response(),
    }
  }
}
