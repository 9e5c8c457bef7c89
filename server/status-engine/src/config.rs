//! Engine configuration with sane defaults.

use crate::error::EngineError;

/// Assignee label used when an issue has no assignee.
pub const UNASSIGNED: &str = "Unassigned";
/// Priority label used when an issue has no priority.
pub const NO_PRIORITY: &str = "None";
/// Status name / issue type used by the aggregators when absent.
pub const UNKNOWN: &str = "Unknown";
/// Status category key used when the tracker omits category metadata.
pub const UNKNOWN_CATEGORY: &str = "unknown";
/// Status category key (and, case-insensitively, status name) meaning "done".
pub const DONE: &str = "done";
/// `last_updated` of a normalized issue whose tracker timestamp is absent.
pub const NO_TIMESTAMP: &str = "";
/// Prompt placeholder when no completion snapshot is supplied.
pub const NOT_PROVIDED: &str = "Not provided";

/// Default size of the "top assignees" workload chart.
pub const DEFAULT_TOP_N_ASSIGNEES: usize = 10;

/// Environment variable overriding `top_n_assignees`.
pub const TOP_N_ENV: &str = "STATUS_ENGINE_TOP_N_ASSIGNEES";

/// Tunables and fallback labels shared by the normalizer and aggregators.
#[derive(Debug, Clone)]
pub struct Config {
  /// Max entries kept in `count_by_assignee_top`.
  pub top_n_assignees: usize,
  pub unassigned_label: String,
  pub no_priority_label: String,
  pub unknown_status_label: String,
  pub unknown_category_key: String,
  pub unknown_type_label: String,
  /// Category key / status name that marks an issue as done.
  pub done_key: String,
  pub no_timestamp_label: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      top_n_assignees: DEFAULT_TOP_N_ASSIGNEES,
      unassigned_label: UNASSIGNED.into(),
      no_priority_label: NO_PRIORITY.into(),
      unknown_status_label: UNKNOWN.into(),
      unknown_category_key: UNKNOWN_CATEGORY.into(),
      unknown_type_label: UNKNOWN.into(),
      done_key: DONE.into(),
      no_timestamp_label: NO_TIMESTAMP.into(),
    }
  }
}

impl Config {
  /// Defaults, overlaid with `STATUS_ENGINE_TOP_N_ASSIGNEES` when set.
  pub fn from_env() -> Result<Self, EngineError> {
    let mut config = Self::default();
    if let Ok(raw) = std::env::var(TOP_N_ENV) {
      config.top_n_assignees = parse_top_n(&raw)?;
    }
    Ok(config)
  }
}

/// Clamp a signed top-N request to `>= 0`.
pub fn clamp_top_n(requested: i64) -> usize {
  usize::try_from(requested.max(0)).unwrap_or(usize::MAX)
}

fn parse_top_n(raw: &str) -> Result<usize, EngineError> {
  raw
    .trim()
    .parse::<i64>()
    .map(clamp_top_n)
    .map_err(|_| EngineError::validation(TOP_N_ENV, "expected an integer"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_use_named_labels() {
    let config = Config::default();
    assert_eq!(config.top_n_assignees, 10);
    assert_eq!(config.unassigned_label, "Unassigned");
    assert_eq!(config.no_priority_label, "None");
    assert_eq!(config.unknown_status_label, "Unknown");
    assert_eq!(config.unknown_category_key, "unknown");
    assert_eq!(config.unknown_type_label, "Unknown");
    assert_eq!(config.done_key, "done");
    assert_eq!(config.no_timestamp_label, "");
    assert_eq!(NOT_PROVIDED, "Not provided");
  }

  #[test]
  fn parse_top_n_accepts_padded_integers() {
    assert_eq!(parse_top_n(" 5 ").unwrap(), 5);
    assert_eq!(parse_top_n("0").unwrap(), 0);
  }

  #[test]
  fn parse_top_n_clamps_negative_to_zero() {
    assert_eq!(parse_top_n("-3").unwrap(), 0);
    assert_eq!(clamp_top_n(-1), 0);
    assert_eq!(clamp_top_n(7), 7);
  }

  #[test]
  fn parse_top_n_rejects_garbage() {
    let err = parse_top_n("ten").unwrap_err();
    assert_eq!(err.field(), Some(TOP_N_ENV));
    assert!(parse_top_n("2.5").is_err());
  }
}
