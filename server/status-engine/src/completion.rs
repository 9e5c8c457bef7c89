//! Completion stats: done vs remaining, grouped by status and status category.

use std::collections::HashMap;

use crate::config::Config;
use crate::counts::{bump, Counts};
use crate::types::{or_label, CompletionStats, RawIssue};

/// Compute completion stats for a batch in a single pass.
///
/// An issue is done when its status category key is the done key, or when
/// its trimmed, lowercased status name is. Trackers that omit category
/// metadata are still counted through the name.
pub fn compute_completion(issues: &[RawIssue], config: &Config) -> CompletionStats {
  let mut by_status: HashMap<String, u64> = HashMap::new();
  let mut by_category: HashMap<String, u64> = HashMap::new();
  let mut done_count = 0u64;

  for issue in issues {
    let status_name = or_label(issue.status_name(), &config.unknown_status_label);
    let category_key = or_label(issue.status_category_key(), &config.unknown_category_key);
    bump(&mut by_status, status_name);
    bump(&mut by_category, category_key);

    if is_done(status_name, category_key, config) {
      done_count += 1;
    }
  }

  let total = issues.len() as u64;
  CompletionStats {
    total_in_sample: total,
    done_count,
    not_done_count: total - done_count,
    done_percent: done_percent(done_count, total),
    count_by_status: Counts::ranked(by_status),
    count_by_status_category: Counts::ranked(by_category),
  }
}

fn is_done(status_name: &str, category_key: &str, config: &Config) -> bool {
  category_key == config.done_key || status_name.trim().to_lowercase() == config.done_key
}

/// `done / total * 100` to one decimal; 0.0 for an empty batch.
pub fn done_percent(done: u64, total: u64) -> f64 {
  if total == 0 {
    return 0.0;
  }
  round_to_tenth(done as f64 / total as f64 * 100.0)
}

/// Round to one decimal place, ties to even on the exact binary value.
fn round_to_tenth(value: f64) -> f64 {
  // `{:.1}` rounds the exact decimal expansion, unlike `(v * 10.0).round()`.
  format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn issue(status: serde_json::Value) -> RawIssue {
    serde_json::from_value(json!({"key": "X-1", "fields": {"status": status}})).unwrap()
  }

  fn with_category(name: &str, category: &str) -> RawIssue {
    issue(json!({"name": name, "statusCategory": {"key": category}}))
  }

  #[test]
  fn empty_batch_is_all_zero() {
    let stats = compute_completion(&[], &Config::default());
    assert_eq!(stats.total_in_sample, 0);
    assert_eq!(stats.done_count, 0);
    assert_eq!(stats.not_done_count, 0);
    assert_eq!(stats.done_percent, 0.0);
    assert!(stats.count_by_status.is_empty());
    assert!(stats.count_by_status_category.is_empty());
  }

  #[test]
  fn done_by_name_when_category_missing() {
    let stats = compute_completion(&[issue(json!({"name": "Done"}))], &Config::default());
    assert_eq!(stats.done_count, 1);
    assert_eq!(stats.count_by_status_category.get("unknown"), Some(1));
    assert_eq!(stats.count_by_status_category.len(), 1);
    assert_eq!(stats.done_percent, 100.0);
  }

  #[test]
  fn done_name_match_is_trimmed_and_case_insensitive() {
    let stats = compute_completion(&[issue(json!({"name": "  DONE "}))], &Config::default());
    assert_eq!(stats.done_count, 1);
    let stats = compute_completion(&[issue(json!({"name": "Done-ish"}))], &Config::default());
    assert_eq!(stats.done_count, 0);
  }

  #[test]
  fn done_by_category_whatever_the_name() {
    let stats = compute_completion(&[with_category("Closed", "done")], &Config::default());
    assert_eq!(stats.done_count, 1);
    assert_eq!(stats.count_by_status.get("Closed"), Some(1));
  }

  #[test]
  fn absent_or_empty_status_is_unknown() {
    let no_status: RawIssue = serde_json::from_value(json!({"key": "X-2", "fields": {}})).unwrap();
    let empty_name = issue(json!({"name": "", "statusCategory": {"key": ""}}));
    let stats = compute_completion(&[no_status, empty_name], &Config::default());
    assert_eq!(stats.count_by_status.get("Unknown"), Some(2));
    assert_eq!(stats.count_by_status_category.get("unknown"), Some(2));
    assert_eq!(stats.done_count, 0);
  }

  #[test]
  fn groups_are_ranked_and_sum_to_total() {
    let issues = vec![
      with_category("In Progress", "indeterminate"),
      with_category("To Do", "new"),
      with_category("Done", "done"),
      with_category("To Do", "new"),
      with_category("Done", "done"),
      with_category("Blocked", "indeterminate"),
    ];
    let stats = compute_completion(&issues, &Config::default());
    let statuses: Vec<&str> = stats.count_by_status.keys().collect();
    assert_eq!(statuses, vec!["Done", "To Do", "Blocked", "In Progress"]);
    let categories: Vec<&str> = stats.count_by_status_category.keys().collect();
    assert_eq!(categories, vec!["done", "indeterminate", "new"]);
    assert_eq!(stats.count_by_status.total(), 6);
    assert_eq!(stats.count_by_status_category.total(), 6);
    assert_eq!(stats.done_count + stats.not_done_count, stats.total_in_sample);
    assert_eq!(stats.done_percent, 33.3);
  }

  #[test]
  fn done_percent_rounds_to_one_decimal() {
    assert_eq!(done_percent(0, 0), 0.0);
    assert_eq!(done_percent(1, 3), 33.3);
    assert_eq!(done_percent(2, 3), 66.7);
    assert_eq!(done_percent(1, 8), 12.5);
    assert_eq!(done_percent(7, 7), 100.0);
  }

  #[test]
  fn serializes_with_display_keys() {
    let stats = compute_completion(&[with_category("Done", "done")], &Config::default());
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["total_issues_in_sample"], 1);
    assert_eq!(json["done_issues"], 1);
    assert_eq!(json["not_done_issues"], 0);
    assert_eq!(json["done_percent"], 100.0);
    assert_eq!(json["count_by_status"]["Done"], 1);
  }
}
