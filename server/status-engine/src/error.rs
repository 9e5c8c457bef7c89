//! Structured error types for the status engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  /// A field the normalizer treats as mandatory is absent or null.
  #[error("missing field: {issue}: {field}")]
  MissingField { issue: String, field: String },

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl EngineError {
  pub fn missing_field(issue: &str, field: &str) -> Self {
    Self::MissingField {
      issue: issue.to_string(),
      field: field.to_string(),
    }
  }

  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  /// Dotted path of the offending field, when the error has one.
  pub fn field(&self) -> Option<&str> {
    match self {
      Self::MissingField { field, .. } | Self::Validation { field, .. } => Some(field),
      Self::Json(_) | Self::Io(_) => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_field_message_names_issue_and_path() {
    let err = EngineError::missing_field("ABC-1", "fields.status");
    assert_eq!(err.to_string(), "missing field: ABC-1: fields.status");
    assert_eq!(err.field(), Some("fields.status"));
  }

  #[test]
  fn json_error_has_no_field() {
    let err: EngineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(err.to_string().starts_with("json: "));
    assert!(err.field().is_none());
  }
}
