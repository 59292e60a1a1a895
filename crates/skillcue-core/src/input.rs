//! Hook input payload.
//!
//! The assistant delivers one JSON document per prompt submission:
//!
//! ```json
//! {
//!   "prompt": "please add a test",
//!   "files": ["src/lib.rs"],
//!   "context": { "recentFiles": ["src/main.rs"], "currentDirectory": "/work" }
//! }
//! ```
//!
//! Only `prompt` is required.  Unknown fields are ignored.

use serde::Deserialize;

use crate::error::{ClassifierError, Result};

/// A parsed prompt submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookInput {
    /// The user's prompt text.
    pub prompt: String,

    /// Files explicitly attached to the prompt.
    #[serde(default)]
    pub files: Option<Vec<String>>,

    /// Surrounding session context.
    #[serde(default)]
    pub context: Option<HookContext>,
}

/// Session context accompanying a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookContext {
    #[serde(default)]
    pub recent_files: Option<Vec<String>>,

    #[serde(default)]
    pub current_directory: Option<String>,
}

impl HookInput {
    /// Create an input with only a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            files: None,
            context: None,
        }
    }

    /// Attach explicit files.
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// Attach recently touched files.
    pub fn with_recent_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context.get_or_insert_with(HookContext::default).recent_files =
            Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a fully buffered payload.
    ///
    /// Invalid JSON and a missing or non-string `prompt` both yield
    /// [`ClassifierError::InputMalformed`].
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(ClassifierError::InputMalformed {
                reason: "empty input".into(),
            });
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Explicit files followed by recent files.  Duplicates are kept; matching
    /// only cares whether some path matches.
    pub fn candidate_files(&self) -> Vec<&str> {
        let explicit = self.files.iter().flatten();
        let recent = self
            .context
            .iter()
            .filter_map(|c| c.recent_files.as_ref())
            .flatten();
        explicit.chain(recent).map(String::as_str).collect()
    }
}
