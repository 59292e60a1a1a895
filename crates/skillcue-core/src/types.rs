//! Rule table type definitions.
//!
//! A rule table maps skill identifiers to [`SkillRule`]s and carries the
//! [`GlobalSettings`] that shape every classification.  Tables are built by
//! the [`loader`](crate::loader) from a `skill-rules.json` (or `.toml`)
//! document and are immutable afterwards.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::matcher::{MatchSource, TriggerMatcher};

// ---------------------------------------------------------------------------
// Enforcement
// ---------------------------------------------------------------------------

/// How a matched skill is surfaced to the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enforcement {
    /// Activated without asking.
    Auto,
    /// Listed as a suggestion.
    Suggest,
    /// Only reachable through explicit `/skill-name` invocation.
    Manual,
}

impl Enforcement {
    /// Parse one of the three literal modes.  Anything else yields `None` so
    /// the caller can fall back to its default.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "auto" => Some(Self::Auto),
            "suggest" => Some(Self::Suggest),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }

    /// The literal mode string used in rule files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Suggest => "suggest",
            Self::Manual => "manual",
        }
    }
}

impl Default for Enforcement {
    fn default() -> Self {
        Self::Suggest
    }
}

impl fmt::Display for Enforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Trigger lists declared by a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleTriggers {
    /// Phrases tested case-insensitively against the prompt.
    #[serde(default)]
    pub prompt: Vec<String>,

    /// Path patterns using `*` and `**`.
    #[serde(default)]
    pub files: Vec<String>,
}

impl RuleTriggers {
    /// A rule with no triggers at all can never fire.
    pub fn is_empty(&self) -> bool {
        self.prompt.is_empty() && self.files.is_empty()
    }
}

/// A single skill rule with its compiled triggers.
#[derive(Debug, Clone)]
pub struct SkillRule {
    /// Unique skill identifier (the key in the `skills` map).
    pub name: String,

    /// Human-readable description shown in the activation message.
    pub description: String,

    /// Declared trigger lists, kept for diagnostics.
    pub triggers: RuleTriggers,

    /// Resolved enforcement mode.
    pub enforcement: Enforcement,

    /// Lower values rank first.
    pub priority: i64,

    matcher: TriggerMatcher,
}

impl SkillRule {
    pub(crate) fn new(
        name: String,
        description: String,
        triggers: RuleTriggers,
        enforcement: Enforcement,
        priority: i64,
        matcher: TriggerMatcher,
    ) -> Self {
        Self {
            name,
            description,
            triggers,
            enforcement,
            priority,
            matcher,
        }
    }

    /// Evaluate this rule against a lowercased prompt and the candidate paths.
    pub fn evaluate(&self, lowered_prompt: &str, files: &[&str]) -> Option<MatchSource> {
        self.matcher.evaluate(lowered_prompt, files)
    }
}

// ---------------------------------------------------------------------------
// Global settings
// ---------------------------------------------------------------------------

/// Settings applied to every classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettings {
    /// Upper bound on returned skills.  Zero or negative returns nothing.
    pub max_skills_per_prompt: i64,

    /// Enforcement used when a rule omits or misspells its own.
    pub default_enforcement: Enforcement,

    /// Append the manual-activation hint to the message.
    pub show_skill_suggestions: bool,

    /// Emit every activation on the `skillcue::activation` tracing target.
    pub log_activations: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            max_skills_per_prompt: 3,
            default_enforcement: Enforcement::Suggest,
            show_skill_suggestions: true,
            log_activations: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// The full rule table for one invocation.
///
/// Rules are kept in identifier order so iteration, and therefore ranking of
/// equal priorities, is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: BTreeMap<String, SkillRule>,
    settings: GlobalSettings,
}

impl RuleTable {
    pub(crate) fn new(rules: BTreeMap<String, SkillRule>, settings: GlobalSettings) -> Self {
        Self { rules, settings }
    }

    /// Look up a rule by identifier.
    pub fn get(&self, name: &str) -> Option<&SkillRule> {
        self.rules.get(name)
    }

    /// Iterate rules in identifier order.
    pub fn rules(&self) -> impl Iterator<Item = &SkillRule> {
        self.rules.values()
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

/// `skill-rules` document as written by rule authors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRuleTable {
    pub skills: BTreeMap<String, RawSkillRule>,

    #[serde(default)]
    pub global_settings: RawGlobalSettings,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSkillRule {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub triggers: RuleTriggers,

    /// Kept as a string so unknown modes fail closed instead of rejecting
    /// the whole table.
    #[serde(default)]
    pub enforcement: Option<String>,

    pub priority: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawGlobalSettings {
    pub max_skills_per_prompt: i64,
    pub default_enforcement: String,
    pub show_skill_suggestions: bool,
    pub log_activations: bool,
}

impl Default for RawGlobalSettings {
    fn default() -> Self {
        let defaults = GlobalSettings::default();
        Self {
            max_skills_per_prompt: defaults.max_skills_per_prompt,
            default_enforcement: defaults.default_enforcement.as_str().to_string(),
            show_skill_suggestions: defaults.show_skill_suggestions,
            log_activations: defaults.log_activations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforcement_parses_only_known_modes() {
        assert_eq!(Enforcement::parse("auto"), Some(Enforcement::Auto));
        assert_eq!(Enforcement::parse("suggest"), Some(Enforcement::Suggest));
        assert_eq!(Enforcement::parse("manual"), Some(Enforcement::Manual));
        assert_eq!(Enforcement::parse("Auto"), None);
        assert_eq!(Enforcement::parse("always"), None);
    }

    #[test]
    fn enforcement_display_round_trips_literal() {
        for mode in [Enforcement::Auto, Enforcement::Suggest, Enforcement::Manual] {
            assert_eq!(Enforcement::parse(&mode.to_string()), Some(mode));
        }
    }

    #[test]
    fn empty_triggers() {
        assert!(RuleTriggers::default().is_empty());
        let triggers = RuleTriggers {
            prompt: Vec::new(),
            files: vec!["*.rs".into()],
        };
        assert!(!triggers.is_empty());
    }

    #[test]
    fn raw_settings_default_mirrors_global_defaults() {
        let raw = RawGlobalSettings::default();
        assert_eq!(raw.max_skills_per_prompt, 3);
        assert_eq!(raw.default_enforcement, "suggest");
        assert!(raw.show_skill_suggestions);
        assert!(!raw.log_activations);
    }
}
