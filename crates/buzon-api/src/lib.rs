//! JSON REST API for Buzon, a contact-form backend.
//!
//! Exposes an axum [`Router`] backed by any
//! [`buzon_core::store::SubmissionStore`]. TLS, CORS, and other transport
//! concerns are layered on by the caller (see the `server` binary).

pub mod contacts;
pub mod error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use buzon_core::store::SubmissionStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: SubmissionStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/contact", post(contacts::create::<S>))
    .route("/contacts", get(contacts::list::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
