//! Classifier error types.
//!
//! Every fallible operation in this crate surfaces a [`ClassifierError`].
//! The variants fall into two classes, see [`ClassifierError::is_fatal`]:
//! configuration failures abort the invocation, input failures are recovered
//! by the caller without producing output.

use std::path::PathBuf;

/// Unified error type for the skill classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    // -- Rule table errors --------------------------------------------------
    /// The rule table source could not be read.
    #[error("skill rules unavailable at `{path}`: {source}")]
    ConfigUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule table could not be parsed into the expected shape, or one of
    /// its trigger patterns failed to compile.
    #[error("malformed skill rules in `{path}`: {reason}")]
    ConfigMalformed { path: PathBuf, reason: String },

    // -- Invocation input errors --------------------------------------------
    /// The hook payload is not valid JSON or lacks the `prompt` field.
    #[error("malformed hook input: {reason}")]
    InputMalformed { reason: String },
}

impl ClassifierError {
    /// Whether the invocation must abort with a non-zero exit status.
    ///
    /// Only rule table failures are fatal: without a complete rule table no
    /// classification can be trusted.  Input failures must never block the
    /// user's request.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigUnavailable { .. } | Self::ConfigMalformed { .. }
        )
    }
}

impl From<serde_json::Error> for ClassifierError {
    fn from(err: serde_json::Error) -> Self {
        Self::InputMalformed {
            reason: err.to_string(),
        }
    }
}

/// Convenience alias used throughout the classifier crate.
pub type Result<T> = std::result::Result<T, ClassifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_fatal() {
        let unavailable = ClassifierError::ConfigUnavailable {
            path: PathBuf::from("skill-rules.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let malformed = ClassifierError::ConfigMalformed {
            path: PathBuf::from("skill-rules.json"),
            reason: "expected object".into(),
        };
        assert!(unavailable.is_fatal());
        assert!(malformed.is_fatal());
    }

    #[test]
    fn json_errors_become_recoverable_input_errors() {
        let err: ClassifierError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ClassifierError::InputMalformed { .. }));
        assert!(!err.is_fatal());
    }
}
