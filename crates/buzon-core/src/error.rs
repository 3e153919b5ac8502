//! Error types for `buzon-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("name must not be empty")]
  EmptyName,

  #[error("message must not be empty")]
  EmptyMessage,

  #[error("invalid email address: {0:?}")]
  InvalidEmail(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
