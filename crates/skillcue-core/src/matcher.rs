//! Trigger matching.
//!
//! A rule fires when either of its trigger kinds fires:
//!
//! | Trigger | Technique |
//! |---------|-----------|
//! | Prompt phrase | Case-insensitive containment via [`aho_corasick`] |
//! | File pattern | `*` / `**` patterns compiled to a [`regex::RegexSet`] |
//!
//! File patterns are a deliberately small language.  Only `*` (any run of
//! characters except `/`) and `**` (any run of characters) are special;
//! everything else is matched literally.  There are no character classes,
//! braces, or negation, and patterns are not anchored, so `src/*.rs` matches
//! anywhere inside a candidate path.
//!
//! # Example
//!
//! ```rust
//! use skillcue_core::matcher::{MatchSource, TriggerMatcher};
//! use skillcue_core::RuleTriggers;
//!
//! let triggers = RuleTriggers {
//!     prompt: vec!["debug".into()],
//!     files: vec!["src/**/*.ts".into()],
//! };
//! let matcher = TriggerMatcher::compile(&triggers).unwrap();
//!
//! assert_eq!(matcher.evaluate("please debug this", &[]), Some(MatchSource::Prompt));
//! assert_eq!(matcher.evaluate("hello", &["src/a/b.ts"]), Some(MatchSource::File));
//! assert_eq!(matcher.evaluate("hello", &["src/a/b.js"]), None);
//! ```

use aho_corasick::AhoCorasick;
use regex::RegexSet;

use crate::types::RuleTriggers;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Which trigger kind caused a rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Prompt,
    File,
    Both,
}

impl std::fmt::Display for MatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt => write!(f, "prompt"),
            Self::File => write!(f, "file"),
            Self::Both => write!(f, "prompt+file"),
        }
    }
}

/// A trigger list that failed to compile.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid prompt triggers: {0}")]
    Prompt(#[from] aho_corasick::BuildError),

    #[error("invalid file pattern: {0}")]
    File(#[from] regex::Error),
}

// ---------------------------------------------------------------------------
// TriggerMatcher
// ---------------------------------------------------------------------------

/// Compiled form of a rule's [`RuleTriggers`].
#[derive(Debug, Clone)]
pub struct TriggerMatcher {
    /// Lowercased prompt phrases; `None` when the rule has none.
    prompt: Option<AhoCorasick>,

    /// Compiled file patterns; empty when the rule has none.
    files: RegexSet,
}

impl TriggerMatcher {
    /// Compile both trigger lists.
    pub fn compile(triggers: &RuleTriggers) -> Result<Self, PatternError> {
        let prompt = if triggers.prompt.is_empty() {
            None
        } else {
            let phrases: Vec<String> = triggers.prompt.iter().map(|p| p.to_lowercase()).collect();
            Some(AhoCorasick::new(&phrases)?)
        };

        let files = RegexSet::new(triggers.files.iter().map(|p| compile_file_pattern(p)))?;

        tracing::trace!(
            phrases = triggers.prompt.len(),
            patterns = triggers.files.len(),
            "trigger matcher compiled"
        );

        Ok(Self { prompt, files })
    }

    /// Test a prompt that has already been lowercased.
    pub fn matches_prompt(&self, lowered_prompt: &str) -> bool {
        self.prompt
            .as_ref()
            .is_some_and(|ac| ac.is_match(lowered_prompt))
    }

    /// Test whether any candidate path matches any file pattern.
    pub fn matches_files(&self, files: &[&str]) -> bool {
        !self.files.is_empty() && files.iter().any(|f| self.files.is_match(f))
    }

    /// Evaluate both trigger kinds.  `lowered_prompt` must already be
    /// lowercased; callers lowercase once per invocation, not once per rule.
    pub fn evaluate(&self, lowered_prompt: &str, files: &[&str]) -> Option<MatchSource> {
        let by_prompt = self.matches_prompt(lowered_prompt);
        let by_file = self.matches_files(files);

        match (by_prompt, by_file) {
            (true, true) => Some(MatchSource::Both),
            (true, false) => Some(MatchSource::Prompt),
            (false, true) => Some(MatchSource::File),
            (false, false) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Pattern compilation
// ---------------------------------------------------------------------------

/// Translate a `*` / `**` pattern into regex source.
///
/// `**` becomes `.*`, a lone `*` becomes `[^/]*`, and every other run of
/// characters is escaped.  The result is unanchored.
pub fn compile_file_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '*' {
            literal.push(c);
            continue;
        }

        if !literal.is_empty() {
            out.push_str(&regex::escape(&literal));
            literal.clear();
        }

        if chars.peek() == Some(&'*') {
            chars.next();
            out.push_str(".*");
        } else {
            out.push_str("[^/]*");
        }
    }

    if !literal.is_empty() {
        out.push_str(&regex::escape(&literal));
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
