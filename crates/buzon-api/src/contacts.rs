//! Handlers for the contact-form endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contact`  | Body: `{"name","email","message"}` |
//! | `GET`  | `/contacts` | 404 when the collection is empty |

use std::sync::Arc;

use axum::{Json, extract::State};
use buzon_core::{
  contact::{ContactSubmission, StoredContact},
  store::SubmissionStore,
  validate::validate,
};
use serde::Serialize;

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
  pub message:    String,
  pub contact_id: String,
}

/// `POST /contact` — body: `{"name":…,"email":…,"message":…}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ContactSubmission>,
) -> Result<Json<CreatedResponse>, ApiError>
where
  S: SubmissionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = validate(body)?;
  let contact_id = store
    .create(record)
    .await
    .map_err(|e| ApiError::WriteFailed(Box::new(e)))?;
  Ok(Json(CreatedResponse {
    message: "Mensaje enviado correctamente".to_string(),
    contact_id,
  }))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<StoredContact>>, ApiError>
where
  S: SubmissionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contacts = store
    .list_all()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if contacts.is_empty() {
    return Err(ApiError::NoContacts);
  }
  Ok(Json(contacts))
}
