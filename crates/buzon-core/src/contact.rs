//! Contact record types.
//!
//! A [`ContactSubmission`] is raw inbound data. [`validate`] turns it into a
//! [`ContactRecord`]; the store assigns the identifier, producing a
//! [`StoredContact`].
//!
//! [`validate`]: crate::validate::validate

use serde::{Deserialize, Serialize};

/// Raw, unvalidated form input as received from the transport layer.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
  pub name:    String,
  pub email:   String,
  pub message: String,
}

/// A validated submission, not yet persisted.
///
/// Field contents are carried over from the submission verbatim — no
/// trimming, no normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
  pub name:    String,
  pub email:   String,
  pub message: String,
}

/// A persisted contact: a [`ContactRecord`] plus its store-assigned id.
///
/// The id is opaque, unique across the collection, and assigned exactly once
/// at creation; callers never supply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredContact {
  pub id:      String,
  pub name:    String,
  pub email:   String,
  pub message: String,
}
