//! Normalize raw tracker issues into flat, display-ready records.
//!
//! Stricter than the aggregators: `key`, `summary`, `status` and `issuetype`
//! are mandatory and a missing one fails the whole batch. The assignee and
//! priority objects and the `updated` timestamp may be absent.

use crate::config::Config;
use crate::error::EngineError;
use crate::types::{NormalizedIssue, RawIssue};

/// Normalize a batch, preserving input order. Fails on the first issue with
/// a missing mandatory field.
pub fn normalize(issues: &[RawIssue], config: &Config) -> Result<Vec<NormalizedIssue>, EngineError> {
  issues
    .iter()
    .enumerate()
    .map(|(index, issue)| normalize_issue(index, issue, config))
    .collect()
}

/// Normalize one issue. `index` identifies the issue in errors when it has no key.
pub fn normalize_issue(
  index: usize,
  issue: &RawIssue,
  config: &Config,
) -> Result<NormalizedIssue, EngineError> {
  let id = issue.key.clone().unwrap_or_else(|| format!("#{}", index));
  let missing = |field: &str| EngineError::missing_field(&id, field);

  let key = issue.key.clone().ok_or_else(|| missing("key"))?;
  let fields = issue.fields.as_ref().ok_or_else(|| missing("fields"))?;
  let summary = fields.summary.clone().ok_or_else(|| missing("fields.summary"))?;

  let status = fields.status.as_ref().ok_or_else(|| missing("fields.status"))?;
  let status_name = status.name.clone().ok_or_else(|| missing("fields.status.name"))?;

  let assignee_name = match &fields.assignee {
    Some(user) => user
      .display_name
      .clone()
      .ok_or_else(|| missing("fields.assignee.displayName"))?,
    None => config.unassigned_label.clone(),
  };

  let priority_name = match &fields.priority {
    Some(priority) => priority
      .name
      .clone()
      .ok_or_else(|| missing("fields.priority.name"))?,
    None => config.no_priority_label.clone(),
  };

  let type_name = fields
    .issuetype
    .as_ref()
    .and_then(|t| t.name.clone())
    .ok_or_else(|| missing("fields.issuetype.name"))?;

  let last_updated = fields
    .updated
    .clone()
    .unwrap_or_else(|| config.no_timestamp_label.clone());

  Ok(NormalizedIssue {
    key,
    summary,
    status_name,
    assignee_name,
    priority_name,
    type_name,
    last_updated,
  })
}
