//! Selector errors.
//!
//! Every variant describes a bug in static card data or in the calling
//! effect, never a transient condition. Nothing retries; the fix is to
//! correct the selector text or the call site.

use thiserror::Error;

/// Errors raised while compiling or evaluating a selector.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An argument violated the evaluator's input contract.
    #[error("invalid input {value:?} ({context})")]
    InputType {
        /// The offending value, rendered for display.
        value: String,
        /// Where the value was passed.
        context: String,
    },

    /// The selector text is malformed.
    #[error("syntax error in selector {selector:?} at {token:?}: {reason}")]
    Syntax {
        /// Full selector text.
        selector: String,
        /// Offending token.
        token: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The selector is well formed but cannot be applied meaningfully.
    #[error("semantic error in selector {selector:?}: {reason}")]
    Semantic {
        /// Full selector text.
        selector: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl SelectorError {
    pub(crate) fn input(value: impl Into<String>, context: impl Into<String>) -> Self {
        Self::InputType {
            value: value.into(),
            context: context.into(),
        }
    }

    pub(crate) fn syntax(selector: &str, token: &str, reason: impl Into<String>) -> Self {
        Self::Syntax {
            selector: selector.to_string(),
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn semantic(selector: &str, reason: impl Into<String>) -> Self {
        Self::Semantic {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this is a syntax error.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Whether this is a semantic error.
    #[must_use]
    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic { .. })
    }

    /// Whether this is an input contract violation.
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(self, Self::InputType { .. })
    }
}

/// Result alias for selector operations.
pub type Result<T> = std::result::Result<T, SelectorError>;
