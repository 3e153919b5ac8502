//! [`SqliteStore`] — the SQLite implementation of [`SubmissionStore`].

use std::path::Path;

use uuid::Uuid;

use buzon_core::{
  contact::{ContactRecord, StoredContact},
  store::SubmissionStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SubmissionStore impl ────────────────────────────────────────────────────

impl SubmissionStore for SqliteStore {
  type Error = Error;

  async fn create(&self, record: ContactRecord) -> Result<String> {
    let contact_id = Uuid::new_v4().to_string();

    let id_str = contact_id.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (contact_id, name, email, message)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, record.name, record.email, record.message],
        )?;
        Ok(())
      })
      .await?;

    Ok(contact_id)
  }

  async fn list_all(&self) -> Result<Vec<StoredContact>> {
    let contacts = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT contact_id, name, email, message FROM contacts")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(StoredContact {
              id:      row.get(0)?,
              name:    row.get(1)?,
              email:   row.get(2)?,
              message: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(contacts)
  }
}
