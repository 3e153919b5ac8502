//! Validation of raw contact submissions.
//!
//! Pure functions of their input — no side effects, no store access.

use crate::{
  contact::{ContactRecord, ContactSubmission},
  error::{Error, Result},
};

/// Validate a raw submission, producing a [`ContactRecord`].
///
/// Fails when `name` or `message` is empty, or when `email` is not of the
/// form `local@domain` with a dotted domain. Accepted field contents pass
/// through untouched.
pub fn validate(raw: ContactSubmission) -> Result<ContactRecord> {
  if raw.name.is_empty() {
    return Err(Error::EmptyName);
  }
  if raw.message.is_empty() {
    return Err(Error::EmptyMessage);
  }
  if !email_is_valid(&raw.email) {
    return Err(Error::InvalidEmail(raw.email));
  }
  Ok(ContactRecord {
    name:    raw.name,
    email:   raw.email,
    message: raw.message,
  })
}

/// Structural email check: exactly one `@`, a non-empty local part, no
/// whitespace, and a domain of two or more dot-separated labels made of
/// alphanumerics and interior hyphens. Deliverability is out of scope.
fn email_is_valid(email: &str) -> bool {
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  let labels: Vec<&str> = domain.split('.').collect();
  labels.len() >= 2
    && labels.iter().all(|label| {
      !label.is_empty()
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
    })
}
