//! The `UserPromptSubmit` hook path: stdin payload in, activation JSON out.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use skillcue_core::{ActivationResult, ClassifierError, HookInput, classify, load_rules};

/// Read stdin until end-of-stream.
pub async fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("failed to read hook input from stdin")?;
    Ok(raw)
}

/// Classify one buffered payload against the rule file at `rules_path`.
///
/// The payload is parsed before the rules are loaded so a malformed payload
/// is always reported as the recoverable [`ClassifierError::InputMalformed`].
pub fn run_hook(
    raw_input: &str,
    rules_path: &Path,
) -> Result<Option<ActivationResult>, ClassifierError> {
    let input = HookInput::parse(raw_input)?;
    let table = load_rules(rules_path)?;

    tracing::debug!(
        rules = table.len(),
        files = input.candidate_files().len(),
        "classifying prompt"
    );

    Ok(classify(&table, &input))
}

/// Serialize the result as the single stdout line.
pub fn render_output(result: &ActivationResult) -> Result<String> {
    serde_json::to_string(result).context("failed to serialize activation result")
}
