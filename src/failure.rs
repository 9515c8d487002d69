//! Shared failure classification for all store policies.
//!
//! Failures never cross a store boundary as errors: a handler turns them
//! into the feature's `Error` state, carrying the display message.

use thiserror::Error;

/// Classified failure produced by a policy or a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Detected locally, before any collaborator call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Collaborator unreachable or timed out.
    #[error("network unavailable: {0}")]
    Network(String),

    /// Collaborator reachable, returned an application-level error.
    #[error("server error: {0}")]
    Server(String),

    /// Credentials rejected, or the server response was malformed (for
    /// example a login reported success without a user payload).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Anything a policy could not classify; the original message is kept
    /// for diagnostics.
    #[error("{0}")]
    Unexpected(String),
}

/// Coarse failure kind, for matching without the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Network,
    Server,
    Auth,
    Unexpected,
}

impl Failure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::Validation(_) => FailureKind::Validation,
            Failure::Network(_) => FailureKind::Network,
            Failure::Server(_) => FailureKind::Server,
            Failure::Auth(_) => FailureKind::Auth,
            Failure::Unexpected(_) => FailureKind::Unexpected,
        }
    }

    /// Wrap an unclassified error, preserving its message.
    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        Failure::Unexpected(err.to_string())
    }
}
