//! End-to-end classification of one prompt submission.

use crate::error::Result;
use crate::formatter::{ActivationResult, build_activation};
use crate::input::HookInput;
use crate::ranker::rank_skills;
use crate::types::RuleTable;

/// Target used for activation records when `logActivations` is enabled.
pub const ACTIVATION_TARGET: &str = "skillcue::activation";

/// Rank and format skills for `input`.  Returns `None` when nothing fires.
pub fn classify(table: &RuleTable, input: &HookInput) -> Option<ActivationResult> {
    let ranked = rank_skills(table, input);
    let result = build_activation(ranked, table)?;

    if table.settings().log_activations {
        tracing::info!(
            target: ACTIVATION_TARGET,
            suggestions = ?result.suggestions,
            auto_activate = ?result.auto_activate,
            "skills activated"
        );
    }

    Some(result)
}

/// Parse a raw hook payload and classify it.
pub fn classify_payload(table: &RuleTable, raw: &str) -> Result<Option<ActivationResult>> {
    let input = HookInput::parse(raw)?;
    if let Some(dir) = input
        .context
        .as_ref()
        .and_then(|c| c.current_directory.as_deref())
    {
        tracing::debug!(cwd = %dir, "hook input context");
    }
    Ok(classify(table, &input))
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::error::ClassifierError;
    use crate::loader::parse_rules_json;

    fn table(log: bool) -> RuleTable {
        let json = format!(
            r#"{{
                "skills": {{
                    "testing": {{ "description": "Write tests", "triggers": {{"prompt": ["test"]}}, "enforcement": "auto", "priority": 1 }}
                }},
                "globalSettings": {{ "maxSkillsPerPrompt": 3, "logActivations": {log} }}
            }}"#
        );
        parse_rules_json(&json, Path::new("rules.json")).unwrap()
    }

    #[test]
    fn classify_match_and_no_match() {
        let t = table(false);
        assert!(classify(&t, &HookInput::new("please add a test")).is_some());
        assert!(classify(&t, &HookInput::new("refactor this function")).is_none());
    }

    /// In-memory log sink shared with the subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` under an INFO subscriber and return everything it logged.
    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let sink = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, sink.contents())
    }

    #[test]
    fn activation_event_emitted_when_enabled() {
        let (result, logs) = capture(|| classify(&table(true), &HookInput::new("test it")));

        assert_eq!(result.unwrap().auto_activate, vec!["testing".to_string()]);
        assert!(logs.contains(ACTIVATION_TARGET), "{logs}");
        assert!(logs.contains("skills activated"), "{logs}");
        assert!(logs.contains("testing"), "{logs}");
    }

    #[test]
    fn activation_event_silent_when_disabled() {
        let (result, logs) = capture(|| classify(&table(false), &HookInput::new("test it")));

        assert!(result.is_some());
        assert!(!logs.contains(ACTIVATION_TARGET), "{logs}");
        assert!(!logs.contains("skills activated"), "{logs}");
    }

    #[test]
    fn no_activation_event_without_match() {
        let (result, logs) = capture(|| classify(&table(true), &HookInput::new("refactor")));

        assert!(result.is_none());
        assert!(!logs.contains(ACTIVATION_TARGET), "{logs}");
    }

    #[test]
    fn payload_errors_are_recoverable() {
        let err = classify_payload(&table(false), "{\"files\": []}").unwrap_err();
        assert!(matches!(err, ClassifierError::InputMalformed { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn payload_round_trip() {
        let result = classify_payload(
            &table(false),
            r#"{"prompt": "TEST please", "context": {"currentDirectory": "/w"}}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(result.suggestions, vec!["testing".to_string()]);
    }
}
