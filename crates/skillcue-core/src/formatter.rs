//! Activation message and result payload.

use serde::Serialize;

use crate::types::{Enforcement, RuleTable};

/// First line of every activation message.
pub const MESSAGE_HEADER: &str = "[Skill Activation Analysis]";

/// Appended when `showSkillSuggestions` is set.
pub const MANUAL_HINT: &str = "Use /skill-name to activate manually.";

/// The structured hook output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationResult {
    /// Ranked skill identifiers.
    pub suggestions: Vec<String>,

    /// Human-readable advisory text.
    pub message: String,

    /// Identifiers from `suggestions` whose enforcement is `auto`.
    pub auto_activate: Vec<String>,
}

/// Render the advisory message for a ranked skill list.
///
/// Manual skills get no line of their own; they are reachable through the
/// generic hint only.  Identifiers missing from the table are skipped.
pub fn activation_message(skills: &[String], table: &RuleTable) -> String {
    if skills.is_empty() {
        return String::new();
    }

    let mut lines = vec![MESSAGE_HEADER.to_string()];

    for name in skills {
        let Some(rule) = table.get(name) else {
            continue;
        };
        match rule.enforcement {
            Enforcement::Auto => {
                lines.push(format!("✓ Auto-activating: /{name} - {}", rule.description));
            }
            Enforcement::Suggest => {
                lines.push(format!("→ Suggested: /{name} - {}", rule.description));
            }
            Enforcement::Manual => {}
        }
    }

    if table.settings().show_skill_suggestions {
        lines.push(String::new());
        lines.push(MANUAL_HINT.to_string());
    }

    lines.join("\n")
}

/// Build the hook output.  `None` means nothing matched and nothing should be
/// written.
pub fn build_activation(skills: Vec<String>, table: &RuleTable) -> Option<ActivationResult> {
    if skills.is_empty() {
        return None;
    }

    let message = activation_message(&skills, table);
    let auto_activate = skills
        .iter()
        .filter(|name| {
            table
                .get(name)
                .is_some_and(|rule| rule.enforcement == Enforcement::Auto)
        })
        .cloned()
        .collect();

    Some(ActivationResult {
        suggestions: skills,
        message,
        auto_activate,
    })
}
