//! Plain-text reports for the `check` and `explain` subcommands.

use std::fmt::Write as _;

use skillcue_core::{HookInput, RuleTable, collect_matches, ranker::skill_limit};

/// One line per rule, in identifier order, plus the global settings.
pub fn rules_summary(table: &RuleTable) -> String {
    let settings = table.settings();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} skill(s); maxSkillsPerPrompt={} defaultEnforcement={} showSkillSuggestions={} logActivations={}",
        table.len(),
        settings.max_skills_per_prompt,
        settings.default_enforcement,
        settings.show_skill_suggestions,
        settings.log_activations,
    );

    for rule in table.rules() {
        let _ = write!(
            out,
            "  {:<24} {:<8} priority={:<4} prompt={} files={}",
            rule.name,
            rule.enforcement,
            rule.priority,
            rule.triggers.prompt.len(),
            rule.triggers.files.len(),
        );
        if rule.triggers.is_empty() {
            out.push_str("  (never fires)");
        }
        out.push('\n');
    }

    out
}

/// Every firing rule in rank order, marking the ones past the limit.
pub fn explain(table: &RuleTable, input: &HookInput) -> String {
    let matches = collect_matches(table, input);
    if matches.is_empty() {
        return "no skills matched\n".to_string();
    }

    let limit = skill_limit(table.settings().max_skills_per_prompt);
    let mut out = String::new();

    for (rank, m) in matches.iter().enumerate() {
        let marker = if rank < limit { "" } else { "  [over limit]" };
        let _ = writeln!(
            out,
            "{:>2}. {:<24} priority={:<4} {:<8} via {}{}",
            rank + 1,
            m.name,
            m.priority,
            m.enforcement,
            m.source,
            marker,
        );
    }

    out
}
