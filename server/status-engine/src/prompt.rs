//! Prompt assembly for the external summarizer.

use crate::config::NOT_PROVIDED;
use crate::error::EngineError;
use crate::types::{ChatMessage, CompletionStats, NormalizedIssue, Role};

/// System message sent alongside every status prompt.
pub const SYSTEM_PROMPT: &str = "You generate accurate project summaries.";

/// Build the status-report prompt. Both serialized inputs are interpolated
/// verbatim; `completion` falls back to "Not provided".
pub fn build_prompt(project_name: &str, issues: &str, completion: Option<&str>) -> String {
  let completion = completion.unwrap_or(NOT_PROVIDED);
  format!(
    r#"
You are a senior project manager preparing a leadership update.

Rules:
- Use only provided data
- Do not assume timelines
- Be concise and structured
- Call out risks and blockers clearly

Project: {project_name}

Completion snapshot (based only on the provided issues sample):
{completion}

Issues:
{issues}

Provide:
1. Overall project health (Green / Yellow / Red)
2. Key progress highlights
3. Risks & blockers
4. Team workload observations
5. Completion status (what is done vs remaining, based on the provided data)
6. Recommended next actions
"#
  )
}

/// Serialize normalized issues and completion stats as indented JSON and
/// build the prompt from them.
pub fn assemble(
  project_name: &str,
  issues: &[NormalizedIssue],
  completion: &CompletionStats,
) -> Result<String, EngineError> {
  let issues_json = serde_json::to_string_pretty(issues)?;
  let completion_json = serde_json::to_string_pretty(completion)?;
  Ok(build_prompt(project_name, &issues_json, Some(&completion_json)))
}

/// The chat request handed to the text-generation client.
pub fn chat_messages(prompt: &str) -> Vec<ChatMessage> {
  vec![
    ChatMessage {
      role: Role::System,
      content: SYSTEM_PROMPT.to_string(),
    },
    ChatMessage {
      role: Role::User,
      content: prompt.to_string(),
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::counts::Counts;

  #[test]
  fn prompt_interpolates_inputs_verbatim() {
    let prompt = build_prompt("ABC", "[{\"key\": \"ABC-1\"}]", Some("{\"done_issues\": 3}"));
    assert!(prompt.contains("Project: ABC\n"));
    assert!(prompt.contains("[{\"key\": \"ABC-1\"}]"));
    assert!(prompt.contains("{\"done_issues\": 3}"));
    assert!(prompt.contains("Use only provided data"));
  }

  #[test]
  fn missing_completion_is_not_provided() {
    let prompt = build_prompt("ABC", "[]", None);
    assert!(prompt.contains("issues sample):\nNot provided\n"));
  }

  #[test]
  fn prompt_lists_required_sections_in_order() {
    let prompt = build_prompt("ABC", "[]", None);
    let sections = [
      "Overall project health (Green / Yellow / Red)",
      "Key progress highlights",
      "Risks & blockers",
      "Team workload observations",
      "Completion status",
      "Recommended next actions",
    ];
    let mut last = 0;
    for section in sections {
      let at = prompt.find(section).unwrap_or_else(|| panic!("missing section {}", section));
      assert!(at > last, "{} out of order", section);
      last = at;
    }
  }

  #[test]
  fn assemble_embeds_pretty_json() {
    let issues = vec![NormalizedIssue {
      key: "ABC-1".into(),
      summary: "Ship it".into(),
      status_name: "Done".into(),
      assignee_name: "Ana".into(),
      priority_name: "High".into(),
      type_name: "Task".into(),
      last_updated: "2026-02-08T12:34:56.000+0000".into(),
    }];
    let completion = CompletionStats {
      total_in_sample: 1,
      done_count: 1,
      not_done_count: 0,
      done_percent: 100.0,
      count_by_status: Counts::default(),
      count_by_status_category: Counts::default(),
    };
    let prompt = assemble("ABC", &issues, &completion).unwrap();
    assert!(prompt.contains("    \"key\": \"ABC-1\","));
    assert!(prompt.contains("  \"done_percent\": 100.0,"));
    assert!(!prompt.contains("Not provided"));
  }

  #[test]
  fn chat_messages_pair_system_and_user() {
    let messages = chat_messages("hello");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, SYSTEM_PROMPT);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "hello");
  }
}
