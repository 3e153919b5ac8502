//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure body has the shape `{"detail": "<human-readable>"}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Malformed submission; nothing was persisted.
  #[error("invalid input: {0}")]
  Validation(#[from] buzon_core::Error),

  /// The collection is empty. Mapped to 404 rather than an empty payload.
  #[error("no contacts available")]
  NoContacts,

  /// The insert failed; no partial record is left behind.
  #[error("write failed: {0}")]
  WriteFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A store failure outside the write path.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, detail) = match &self {
      ApiError::Validation(e) => {
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
      }
      ApiError::NoContacts => {
        (StatusCode::NOT_FOUND, "No hay contactos disponibles".to_string())
      }
      ApiError::WriteFailed(_) => {
        (StatusCode::BAD_REQUEST, "Error al guardar el mensaje".to_string())
      }
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "detail": detail }))).into_response()
  }
}
