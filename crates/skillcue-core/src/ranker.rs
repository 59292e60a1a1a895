//! Skill ranking.
//!
//! Every rule whose triggers fire becomes a [`SkillMatch`].  Matches are
//! ordered by ascending priority, ties broken by identifier, then cut to
//! `maxSkillsPerPrompt`.

use tracing::debug;

use crate::input::HookInput;
use crate::matcher::MatchSource;
use crate::types::{Enforcement, RuleTable};

/// A rule that fired for the current prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub name: String,
    pub priority: i64,
    pub enforcement: Enforcement,
    pub source: MatchSource,
}

/// All firing rules in rank order, without truncation.
pub fn collect_matches(table: &RuleTable, input: &HookInput) -> Vec<SkillMatch> {
    let lowered = input.prompt.to_lowercase();
    let files = input.candidate_files();

    let mut matches: Vec<SkillMatch> = table
        .rules()
        .filter_map(|rule| {
            let source = rule.evaluate(&lowered, &files)?;
            debug!(
                skill = %rule.name,
                priority = rule.priority,
                source = %source,
                "skill triggered"
            );
            Some(SkillMatch {
                name: rule.name.clone(),
                priority: rule.priority,
                enforcement: rule.enforcement,
                source,
            })
        })
        .collect();

    matches.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));
    matches
}

/// Convert the configured maximum into a usable bound.
pub fn skill_limit(max_skills_per_prompt: i64) -> usize {
    usize::try_from(max_skills_per_prompt).unwrap_or(0)
}

/// Ranked skill identifiers, at most `maxSkillsPerPrompt` long.
pub fn rank_skills(table: &RuleTable, input: &HookInput) -> Vec<String> {
    let limit = skill_limit(table.settings().max_skills_per_prompt);
    let matches = collect_matches(table, input);
    let total = matches.len();

    let ranked: Vec<String> = matches.into_iter().take(limit).map(|m| m.name).collect();

    debug!(matched = total, returned = ranked.len(), limit, "skills ranked");
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
