//! Ordered `key -> count` mappings shared by the aggregators.

use std::collections::{BTreeMap, HashMap};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered grouping of issue counts. Serializes as a JSON object whose key
/// order is the mapping order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts(Vec<(String, u64)>);

impl Counts {
  /// Descending count, then ascending key.
  pub fn ranked(tally: HashMap<String, u64>) -> Self {
    let mut entries: Vec<(String, u64)> = tally.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Self(entries)
  }

  /// Ascending key (time series keyed by "YYYY-MM-DD").
  pub fn chronological(tally: BTreeMap<String, u64>) -> Self {
    Self(tally.into_iter().collect())
  }

  /// First `n` entries in the current order.
  pub fn truncated(&self, n: usize) -> Self {
    Self(self.0.iter().take(n).cloned().collect())
  }

  pub fn get(&self, key: &str) -> Option<u64> {
    self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
  }

  /// Sum of all counts.
  pub fn total(&self) -> u64 {
    self.0.iter().map(|(_, v)| v).sum()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
    self.0.iter().map(|(k, v)| (k.as_str(), *v))
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.iter().map(|(k, _)| k.as_str())
  }

  /// True when `self` is a leading slice of `other`.
  pub fn is_prefix_of(&self, other: &Counts) -> bool {
    other.0.starts_with(&self.0)
  }
}

impl Serialize for Counts {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.0.len()))?;
    for (key, count) in &self.0 {
      map.serialize_entry(key, count)?;
    }
    map.end()
  }
}

/// Bump `key` in a running tally.
pub(crate) fn bump(tally: &mut HashMap<String, u64>, key: &str) {
  *tally.entry(key.to_string()).or_insert(0) += 1;
}
