//! Integration tests for `SqliteStore` against an in-memory database.

use buzon_core::{contact::ContactRecord, store::SubmissionStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn record(name: &str, email: &str, message: &str) -> ContactRecord {
  ContactRecord {
    name:    name.into(),
    email:   email.into(),
    message: message.into(),
  }
}

#[tokio::test]
async fn create_then_list_roundtrip() {
  let s = store().await;

  let id = s
    .create(record("Ana", "ana@example.com", "Hola"))
    .await
    .unwrap();
  assert!(!id.is_empty());

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, id);
  assert_eq!(all[0].name, "Ana");
  assert_eq!(all[0].email, "ana@example.com");
  assert_eq!(all[0].message, "Hola");
}

#[tokio::test]
async fn list_all_empty_returns_empty_vec() {
  let s = store().await;
  let all = s.list_all().await.unwrap();
  assert!(all.is_empty());
}

#[tokio::test]
async fn identical_submissions_get_distinct_ids() {
  let s = store().await;

  let first = s
    .create(record("Ana", "ana@example.com", "Hola"))
    .await
    .unwrap();
  let second = s
    .create(record("Ana", "ana@example.com", "Hola"))
    .await
    .unwrap();

  assert_ne!(first, second);

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_ne!(all[0].id, all[1].id);
}

#[tokio::test]
async fn fields_are_stored_verbatim() {
  let s = store().await;

  let id = s
    .create(record("  José  ", "jose@example.com", "¡Hola!\n\nSaludos, José"))
    .await
    .unwrap();

  let all = s.list_all().await.unwrap();
  let stored = all.iter().find(|c| c.id == id).unwrap();
  assert_eq!(stored.name, "  José  ");
  assert_eq!(stored.message, "¡Hola!\n\nSaludos, José");
}

#[tokio::test]
async fn ids_are_unique_across_many_creates() {
  let s = store().await;

  for i in 0..20 {
    s.create(record("Ana", "ana@example.com", &format!("mensaje {i}")))
      .await
      .unwrap();
  }

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 20);

  let mut ids: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
  ids.sort_unstable();
  ids.dedup();
  assert_eq!(ids.len(), 20);
}
