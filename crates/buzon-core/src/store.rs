//! The `SubmissionStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `buzon-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::contact::{ContactRecord, StoredContact};

/// Abstraction over a contact submission store backend.
///
/// [`create`](Self::create) is the only write. Records are never updated or
/// deleted, so the collection grows monotonically.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `record` and return the store-assigned identifier.
  ///
  /// The insert is all-or-nothing: on failure no partial record is left
  /// behind, and on success the identifier is retrievable via
  /// [`list_all`](Self::list_all) thereafter.
  fn create(
    &self,
    record: ContactRecord,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  /// Return every persisted contact, in store-defined order (insertion
  /// order is incidental, not contractual).
  ///
  /// An empty collection yields an empty vector, not an error.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<StoredContact>, Self::Error>> + Send + '_;
}
