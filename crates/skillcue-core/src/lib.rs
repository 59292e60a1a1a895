//! Skill activation classifier for skillcue.
//!
//! This crate provides:
//!
//! - **Rule loader**: reads `skill-rules.json` (or `.toml`) into a compiled
//!   [`RuleTable`].  Loading is all-or-nothing.
//!
//! - **Trigger matcher**: case-insensitive prompt phrases and `*` / `**`
//!   file patterns, see [`matcher`].
//!
//! - **Skill ranker**: orders firing rules by priority and cuts them to the
//!   configured maximum.
//!
//! - **Activation formatter**: renders the advisory message and the
//!   [`ActivationResult`] payload written back to the assistant.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use skillcue_core::{HookInput, classify, parse_rules_json};
//!
//! let rules = r#"{
//!     "skills": {
//!         "testing": {
//!             "description": "Write and run tests",
//!             "triggers": { "prompt": ["test"], "files": [] },
//!             "enforcement": "auto",
//!             "priority": 1
//!         }
//!     },
//!     "globalSettings": {
//!         "maxSkillsPerPrompt": 3,
//!         "defaultEnforcement": "suggest",
//!         "showSkillSuggestions": true,
//!         "logActivations": false
//!     }
//! }"#;
//! let table = parse_rules_json(rules, Path::new("skill-rules.json")).unwrap();
//!
//! let result = classify(&table, &HookInput::new("please add a test")).unwrap();
//! assert_eq!(result.auto_activate, vec!["testing".to_string()]);
//! ```

pub mod classifier;
pub mod error;
pub mod formatter;
pub mod input;
pub mod loader;
pub mod matcher;
pub mod ranker;
pub mod types;

pub use classifier::{ACTIVATION_TARGET, classify, classify_payload};
pub use error::{ClassifierError, Result};
pub use formatter::{ActivationResult, activation_message, build_activation};
pub use input::{HookContext, HookInput};
pub use loader::{
    DEFAULT_RULES_FILE, default_rules_path, load_rules, parse_rules_json, parse_rules_toml,
    rules_path_from_env,
};
pub use matcher::{MatchSource, TriggerMatcher};
pub use ranker::{SkillMatch, collect_matches, rank_skills};
pub use types::{Enforcement, GlobalSettings, RuleTable, RuleTriggers, SkillRule};
