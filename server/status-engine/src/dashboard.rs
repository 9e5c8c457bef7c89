//! Dashboard stats: workload by assignee, priority and type, plus daily update activity.

use std::collections::{BTreeMap, HashMap};

use crate::config::Config;
use crate::counts::{bump, Counts};
use crate::types::{or_label, DashboardStats, RawIssue};

/// Length of the "YYYY-MM-DD" prefix of a tracker timestamp.
const DAY_LEN: usize = 10;

/// Compute dashboard stats in a single pass, keeping the `top_n_assignees`
/// busiest assignees in `count_by_assignee_top`.
pub fn compute_dashboard(issues: &[RawIssue], top_n_assignees: usize, config: &Config) -> DashboardStats {
  let mut by_assignee: HashMap<String, u64> = HashMap::new();
  let mut by_priority: HashMap<String, u64> = HashMap::new();
  let mut by_type: HashMap<String, u64> = HashMap::new();
  let mut by_day: BTreeMap<String, u64> = BTreeMap::new();

  for issue in issues {
    bump(&mut by_assignee, or_label(issue.assignee_name(), &config.unassigned_label));
    bump(&mut by_priority, or_label(issue.priority_name(), &config.no_priority_label));
    bump(&mut by_type, or_label(issue.type_name(), &config.unknown_type_label));

    if let Some(day) = issue.updated().and_then(day_bucket) {
      *by_day.entry(day).or_insert(0) += 1;
    }
  }

  let assignees = Counts::ranked(by_assignee);
  DashboardStats {
    count_by_assignee_top: assignees.truncated(top_n_assignees),
    count_by_assignee_all: assignees,
    count_by_priority: Counts::ranked(by_priority),
    count_by_type: Counts::ranked(by_type),
    updated_by_day: Counts::chronological(by_day),
  }
}

/// Day key of a timestamp: its first ten characters, or `None` when shorter.
///
/// The prefix is taken as-is, without date validation.
pub fn day_bucket(updated: &str) -> Option<String> {
  if updated.chars().count() < DAY_LEN {
    return None;
  }
  Some(updated.chars().take(DAY_LEN).collect())
}
