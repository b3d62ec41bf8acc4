//! Engine error types.
//!
//! The engine has one error kind: a create/solve request carrying a
//! configuration it cannot honour. Rejected gestures are not errors; see
//! [`IllegalMove`](super::IllegalMove).

use derive_more::{Display, Error};

/// Errors reported by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HanoiError {
    /// Non-positive or malformed disk count, or an unusable peg assignment.
    ///
    /// The request is rejected and the previous state is kept.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the rejected value.
        reason: String,
    },
}

impl HanoiError {
    /// Build an `InvalidConfiguration` error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type HanoiResult<T> = Result<T, HanoiError>;
