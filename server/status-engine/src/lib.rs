//! Issue Status Engine — deterministic aggregation of an issue-tracker sample.
//!
//! Normalizes raw tracker issues, computes completion and dashboard stats,
//! and assembles the prompt for the external summarizer.
//!
//! No network, no DB; pure computation over one in-memory batch.

pub mod completion;
pub mod config;
pub mod counts;
pub mod dashboard;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod query;
pub mod types;

pub use completion::compute_completion;
pub use config::Config;
pub use counts::Counts;
pub use dashboard::compute_dashboard;
pub use error::EngineError;
pub use normalize::normalize;
pub use prompt::build_prompt;
pub use types::{
  CompletionStats, DashboardStats, Input, NormalizedIssue, RawIssue, StatusReport, TrackerQuery,
};

use tracing::{debug, info, warn};

/// Run every stage on one batch and return the assembled report (no I/O).
///
/// Fails when the project key is invalid or an issue lacks a field the
/// normalizer requires. The aggregators themselves never fail.
pub fn run(input: &Input, config: &Config) -> Result<StatusReport, EngineError> {
  let project = query::validate_project_key(&input.project)?.to_string();
  let tracker_query = query::tracker_query(&project)?;
  let top_n = input
    .top_n_assignees
    .map(config::clamp_top_n)
    .unwrap_or(config.top_n_assignees);
  debug!(project = %project, issues = input.issues.len(), top_n, "running status report");

  let completion = compute_completion(&input.issues, config);
  let dashboard = compute_dashboard(&input.issues, top_n, config);
  let issues = normalize(&input.issues, config).map_err(|e| {
    warn!(project = %project, error = %e, "issue normalization failed");
    e
  })?;

  let prompt = prompt::assemble(&project, &issues, &completion)?;
  let messages = prompt::chat_messages(&prompt);
  debug!(
    total = completion.total_in_sample,
    done = completion.done_count,
    done_percent = completion.done_percent,
    assignees = dashboard.count_by_assignee_all.len(),
    "status report ready"
  );

  Ok(StatusReport {
    project,
    query: tracker_query,
    progress: completion.progress_fraction(),
    completion,
    dashboard,
    issues,
    prompt,
    messages,
  })
}

/// Decode a JSON request and run it with the environment's config.
///
/// This is the binary's whole pipeline minus stdin/stdout.
pub fn run_request(raw: &str) -> Result<StatusReport, EngineError> {
  let config = Config::from_env()?;
  let input: Input = serde_json::from_str(raw)?;
  info!(project = %input.project, issues = input.issues.len(), "request received");
  run(&input, &config)
}
