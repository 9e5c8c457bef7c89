//! Core types for the status engine (JSON contracts + derived stats).

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

use crate::counts::Counts;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the tracker returns)
// ---------------------------------------------------------------------------

/// One raw tracker issue. Unknown fields are silently ignored.
///
/// Every member is optional: a missing key, an explicit `null`, and a value
/// of the wrong JSON type all decode to `None`. Whether that absence is an
/// error is decided by the consumer (the normalizer is strict, the
/// aggregators default).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIssue {
  #[serde(default, deserialize_with = "lenient")]
  pub key: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub fields: Option<RawFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
  #[serde(default, deserialize_with = "lenient")]
  pub summary: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub status: Option<RawStatus>,
  #[serde(default, deserialize_with = "lenient")]
  pub assignee: Option<RawUser>,
  #[serde(default, deserialize_with = "lenient")]
  pub priority: Option<RawNamed>,
  #[serde(default, deserialize_with = "lenient")]
  pub issuetype: Option<RawNamed>,
  /// ISO-8601 timestamp, e.g. `2026-02-08T12:34:56.000+0000`. Kept unparsed.
  #[serde(default, deserialize_with = "lenient")]
  pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatus {
  #[serde(default, deserialize_with = "lenient")]
  pub name: Option<String>,
  #[serde(rename = "statusCategory", default, deserialize_with = "lenient")]
  pub status_category: Option<RawStatusCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatusCategory {
  #[serde(default, deserialize_with = "lenient")]
  pub key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
  #[serde(rename = "displayName", default, deserialize_with = "lenient")]
  pub display_name: Option<String>,
}

/// Any `{ "name": ... }` object (priority, issue type).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNamed {
  #[serde(default, deserialize_with = "lenient")]
  pub name: Option<String>,
}

/// Decode `T`, mapping null and type mismatches to `None` instead of failing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(serde_json::from_value(value).ok())
}

impl RawIssue {
  pub fn status(&self) -> Option<&RawStatus> {
    self.fields.as_ref()?.status.as_ref()
  }

  pub fn status_name(&self) -> Option<&str> {
    self.status()?.name.as_deref()
  }

  pub fn status_category_key(&self) -> Option<&str> {
    self.status()?.status_category.as_ref()?.key.as_deref()
  }

  pub fn assignee_name(&self) -> Option<&str> {
    self.fields.as_ref()?.assignee.as_ref()?.display_name.as_deref()
  }

  pub fn priority_name(&self) -> Option<&str> {
    self.fields.as_ref()?.priority.as_ref()?.name.as_deref()
  }

  pub fn type_name(&self) -> Option<&str> {
    self.fields.as_ref()?.issuetype.as_ref()?.name.as_deref()
  }

  pub fn updated(&self) -> Option<&str> {
    self.fields.as_ref()?.updated.as_deref()
  }
}

/// Non-empty `value`, else `fallback`.
pub(crate) fn or_label<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
  value.filter(|v| !v.is_empty()).unwrap_or(fallback)
}

/// Request body accepted by `run` and the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
  /// Project name (or key) used in the prompt.
  pub project: String,
  #[serde(default)]
  pub issues: Vec<RawIssue>,
  /// Per-request override of `Config::top_n_assignees`. Negative values clamp to 0.
  #[serde(default)]
  pub top_n_assignees: Option<i64>,
}

// ---------------------------------------------------------------------------
// Derived types (what the presentation layer and prompt consume)
// ---------------------------------------------------------------------------

/// Flat, display-ready projection of one issue. Every field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedIssue {
  pub key: String,
  pub summary: String,
  #[serde(rename = "status")]
  pub status_name: String,
  #[serde(rename = "assignee")]
  pub assignee_name: String,
  #[serde(rename = "priority")]
  pub priority_name: String,
  #[serde(rename = "type")]
  pub type_name: String,
  pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionStats {
  #[serde(rename = "total_issues_in_sample")]
  pub total_in_sample: u64,
  #[serde(rename = "done_issues")]
  pub done_count: u64,
  #[serde(rename = "not_done_issues")]
  pub not_done_count: u64,
  /// Percentage of done issues, one decimal place.
  pub done_percent: f64,
  pub count_by_status: Counts,
  pub count_by_status_category: Counts,
}

impl CompletionStats {
  /// `done_percent` as a progress-bar fraction in `[0, 1]`.
  pub fn progress_fraction(&self) -> f64 {
    (self.done_percent / 100.0).clamp(0.0, 1.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
  pub count_by_assignee_top: Counts,
  pub count_by_assignee_all: Counts,
  pub count_by_priority: Counts,
  pub count_by_type: Counts,
  /// "YYYY-MM-DD" -> issues updated that day, oldest first.
  pub updated_by_day: Counts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  System,
  User,
}

/// One message of the request sent to the text-generation client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
  pub role: Role,
  pub content: String,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// The request the fetch layer makes for a project's sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerQuery {
  pub jql: String,
  pub fields: Vec<String>,
  pub max_results: usize,
}

/// Everything produced for one batch.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
  pub project: String,
  pub query: TrackerQuery,
  /// `completion.done_percent` as a progress-bar fraction.
  pub progress: f64,
  pub completion: CompletionStats,
  pub dashboard: DashboardStats,
  pub issues: Vec<NormalizedIssue>,
  pub prompt: String,
  pub messages: Vec<ChatMessage>,
}

/// Structured error output for a failed run.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
