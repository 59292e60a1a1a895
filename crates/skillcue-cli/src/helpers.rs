//! Shared helpers for the skillcue binary.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use skillcue_core::ACTIVATION_TARGET;

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Default filter: stay quiet except for failures and activation records.
pub fn default_log_directive() -> String {
    format!("warn,{ACTIVATION_TARGET}=info")
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr; stdout carries the hook payload and nothing else.
/// `RUST_LOG` takes precedence over `default_directive`.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

// ---------------------------------------------------------------------------
// Rule file resolution
// ---------------------------------------------------------------------------

/// The rule file to load: an explicit `--rules` path wins, otherwise the
/// environment-derived default.
pub fn resolve_rules_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => skillcue_core::default_rules_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_rules_path_wins() {
        let path = resolve_rules_path(Some(Path::new("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn default_directive_enables_activation_target() {
        let directive = default_log_directive();
        assert!(directive.starts_with("warn"));
        assert!(directive.contains("skillcue::activation=info"));
    }
}
