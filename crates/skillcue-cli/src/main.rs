//! CLI entry point for skillcue.
//!
//! Without a subcommand the binary runs as a `UserPromptSubmit` hook: it
//! reads one JSON payload from stdin and, when skills match, writes one JSON
//! line to stdout.  `check` and `explain` help rule authors.

mod helpers;
mod hook;
mod report;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use skillcue_core::{HookInput, load_rules};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// skillcue: suggest and auto-activate skills for a prompt.
#[derive(Parser)]
#[command(
    name = "skillcue",
    version,
    about = "Skill activation hook for interactive coding assistants",
    long_about = "Reads a prompt submission from stdin, matches it against skill-rules.json, \
                  and prints which skills to suggest or auto-activate."
)]
struct Cli {
    /// Path to the rule table (JSON, or TOML with a .toml extension).
    /// Defaults to $SKILLCUE_RULES, then .claude/skills/skill-rules.json.
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Default tracing directive when RUST_LOG is unset.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the rule table and print a summary of every rule.
    Check,

    /// Show which rules fire for a prompt, in rank order.
    Explain {
        /// Prompt text to classify.
        #[arg(long)]
        prompt: String,

        /// Candidate file path (repeatable).
        #[arg(long = "file")]
        files: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let directive = cli
        .log_level
        .clone()
        .unwrap_or_else(helpers::default_log_directive);
    helpers::init_tracing(&directive);

    let rules_path = helpers::resolve_rules_path(cli.rules.as_deref());

    match cli.command {
        None => cmd_hook(&rules_path).await,
        Some(Commands::Check) => cmd_check(&rules_path),
        Some(Commands::Explain { prompt, files }) => cmd_explain(&rules_path, prompt, files),
    }
}

// ---------------------------------------------------------------------------
// Hook mode
// ---------------------------------------------------------------------------

async fn cmd_hook(rules_path: &Path) -> ExitCode {
    // Input failures never interrupt the user: log and exit cleanly.
    let raw = match hook::read_stdin().await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "skill activation hook error");
            return ExitCode::SUCCESS;
        }
    };

    let result = match hook::run_hook(&raw, rules_path) {
        Ok(Some(result)) => result,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) if e.is_fatal() => {
            error!(error = %e, "failed to load skill rules");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            warn!(error = %e, "skill activation hook error");
            return ExitCode::SUCCESS;
        }
    };

    // A closed stdout (reader gone) is logged, never a panic.
    let written = hook::render_output(&result)
        .and_then(|line| Ok(writeln!(std::io::stdout().lock(), "{line}")?));
    if let Err(e) = written {
        warn!(error = %format!("{e:#}"), "skill activation hook error");
    }
    ExitCode::SUCCESS
}

// ---------------------------------------------------------------------------
// Subcommand: check
// ---------------------------------------------------------------------------

fn cmd_check(rules_path: &Path) -> ExitCode {
    match load_rules(rules_path) {
        Ok(table) => {
            info!(path = %rules_path.display(), "rule table is valid");
            print!("{}", report::rules_summary(&table));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "rule table is invalid");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Subcommand: explain
// ---------------------------------------------------------------------------

fn cmd_explain(rules_path: &Path, prompt: String, files: Vec<String>) -> ExitCode {
    let table = match load_rules(rules_path) {
        Ok(table) => table,
        Err(e) => {
            error!(error = %e, "failed to load skill rules");
            return ExitCode::FAILURE;
        }
    };

    let input = HookInput::new(prompt).with_files(files);
    print!("{}", report::explain(&table, &input));
    ExitCode::SUCCESS
}
