//! What the fetch layer should ask the tracker for. No I/O happens here.

use crate::error::EngineError;
use crate::types::TrackerQuery;

/// Issue fields the engine reads; everything else can be left out of the request.
pub const ISSUE_FIELDS: [&str; 6] = ["summary", "status", "assignee", "priority", "updated", "issuetype"];

/// Batch size requested per report.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Validate a project key: non-blank, letters, digits, `_` or `-` only.
pub fn validate_project_key(project_key: &str) -> Result<&str, EngineError> {
  let key = project_key.trim();
  if key.is_empty() {
    return Err(EngineError::validation("project", "must not be empty"));
  }
  if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
    return Err(EngineError::validation(
      "project",
      "expected letters, digits, '_' or '-'",
    ));
  }
  Ok(key)
}

/// JQL selecting every issue of a project, most recently updated first.
///
/// Done issues are deliberately included so completion can be estimated
/// from the sample.
pub fn project_jql(project_key: &str) -> Result<String, EngineError> {
  let key = validate_project_key(project_key)?;
  Ok(format!("project = {} ORDER BY updated DESC", key))
}

/// Full request for a project: JQL, requested fields and batch size.
pub fn tracker_query(project_key: &str) -> Result<TrackerQuery, EngineError> {
  Ok(TrackerQuery {
    jql: project_jql(project_key)?,
    fields: ISSUE_FIELDS.iter().map(|f| f.to_string()).collect(),
    max_results: DEFAULT_MAX_RESULTS,
  })
}
