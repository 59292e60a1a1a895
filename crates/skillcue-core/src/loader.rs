//! Rule loader: reads and compiles the skill rule table.
//!
//! Rule tables live in `.claude/skills/skill-rules.json` by default.  Files
//! with a `.toml` extension are parsed as TOML with the same shape.  Loading
//! is all-or-nothing: any unreadable file, shape mismatch, or uncompilable
//! pattern fails the whole table.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ClassifierError, Result};
use crate::matcher::TriggerMatcher;
use crate::types::{Enforcement, GlobalSettings, RawRuleTable, RuleTable, SkillRule};

/// Rule file location relative to a project root.
pub const DEFAULT_RULES_FILE: &str = ".claude/skills/skill-rules.json";

/// Load and compile the rule table at `path`.
pub fn load_rules(path: &Path) -> Result<RuleTable> {
    let content =
        std::fs::read_to_string(path).map_err(|source| ClassifierError::ConfigUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let table = if is_toml {
        parse_rules_toml(&content, path)?
    } else {
        parse_rules_json(&content, path)?
    };

    tracing::debug!(
        path = %path.display(),
        rules = table.len(),
        max_skills = table.settings().max_skills_per_prompt,
        "skill rules loaded"
    );
    Ok(table)
}

/// Parse a JSON rule table.  `path` is only used for error reporting.
pub fn parse_rules_json(content: &str, path: &Path) -> Result<RuleTable> {
    let raw: RawRuleTable =
        serde_json::from_str(content).map_err(|e| ClassifierError::ConfigMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    build_table(raw, path)
}

/// Parse a TOML rule table.  `path` is only used for error reporting.
pub fn parse_rules_toml(content: &str, path: &Path) -> Result<RuleTable> {
    let raw: RawRuleTable =
        toml::from_str(content).map_err(|e| ClassifierError::ConfigMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    build_table(raw, path)
}

/// Resolve enforcement modes and compile triggers.
fn build_table(raw: RawRuleTable, path: &Path) -> Result<RuleTable> {
    let raw_settings = raw.global_settings;

    let default_enforcement = Enforcement::parse(&raw_settings.default_enforcement)
        .unwrap_or_else(|| {
            tracing::warn!(
                value = %raw_settings.default_enforcement,
                "unknown defaultEnforcement, using suggest"
            );
            Enforcement::Suggest
        });

    let settings = GlobalSettings {
        max_skills_per_prompt: raw_settings.max_skills_per_prompt,
        default_enforcement,
        show_skill_suggestions: raw_settings.show_skill_suggestions,
        log_activations: raw_settings.log_activations,
    };

    let mut rules = BTreeMap::new();

    for (name, raw_rule) in raw.skills {
        let enforcement = match raw_rule.enforcement.as_deref() {
            None => default_enforcement,
            Some(mode) => Enforcement::parse(mode).unwrap_or_else(|| {
                tracing::warn!(
                    skill = %name,
                    enforcement = %mode,
                    fallback = %default_enforcement,
                    "unknown enforcement mode"
                );
                default_enforcement
            }),
        };

        let matcher = TriggerMatcher::compile(&raw_rule.triggers).map_err(|e| {
            ClassifierError::ConfigMalformed {
                path: path.to_path_buf(),
                reason: format!("skill `{name}`: {e}"),
            }
        })?;

        if raw_rule.triggers.is_empty() {
            tracing::debug!(skill = %name, "rule has no triggers and can never fire");
        }

        let rule = SkillRule::new(
            name.clone(),
            raw_rule.description,
            raw_rule.triggers,
            enforcement,
            raw_rule.priority,
            matcher,
        );
        rules.insert(name, rule);
    }

    Ok(RuleTable::new(rules, settings))
}

/// Return the default rule table path.
///
/// Priority:
/// 1. `$SKILLCUE_RULES` environment variable
/// 2. `$CLAUDE_PROJECT_DIR/.claude/skills/skill-rules.json`
/// 3. `.claude/skills/skill-rules.json` relative to the working directory
pub fn default_rules_path() -> PathBuf {
    rules_path_from_env(|key| std::env::var(key).ok())
}

/// [`default_rules_path`] with the environment supplied by `lookup`.
pub fn rules_path_from_env<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("SKILLCUE_RULES") {
        return PathBuf::from(path);
    }
    if let Some(root) = lookup("CLAUDE_PROJECT_DIR") {
        return Path::new(&root).join(DEFAULT_RULES_FILE);
    }
    PathBuf::from(DEFAULT_RULES_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
