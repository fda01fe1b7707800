//! Moderation error types.

use crate::{StorageError, StorageErrorKind};

/// Kinds of moderation errors.
///
/// Role, action and state payloads are carried as display strings so this
/// foundation crate stays free of domain-type dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModerationErrorKind {
    /// The caller's role does not permit the requested action
    #[display("Role {} may not perform action {}", role, action)]
    Forbidden {
        /// Role of the caller
        role: String,
        /// Action that was requested
        action: String,
    },
    /// Comment id is absent or already deleted
    #[display("Comment {} not found", _0)]
    NotFound(i64),
    /// Comment exists but the action is illegal from its current state
    #[display("Action {} is not legal from state {}", action, state)]
    InvalidTransition {
        /// Current state of the comment
        state: String,
        /// Action that was requested
        action: String,
    },
    /// Concurrent write conflict persisted past the single retry
    #[display("Write conflict on comment {}", _0)]
    WriteConflict(i64),
    /// Storage backend failure unrelated to the transition itself
    #[display("Storage failure: {}", _0)]
    Storage(String),
}

/// Moderation error with location tracking.
///
/// # Examples
///
/// ```
/// use gavel_error::{ModerationError, ModerationErrorKind};
///
/// let err = ModerationError::new(ModerationErrorKind::NotFound(42));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Moderation Error: {} at line {} in {}", kind, line, file)]
pub struct ModerationError {
    /// The kind of error that occurred
    pub kind: ModerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModerationError {
    /// Create a new moderation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<StorageError> for ModerationError {
    #[track_caller]
    fn from(err: StorageError) -> Self {
        let kind = match err.kind {
            StorageErrorKind::WriteConflict(id) => ModerationErrorKind::WriteConflict(id),
            StorageErrorKind::Unavailable(msg) => ModerationErrorKind::Storage(msg),
        };
        ModerationError::new(kind)
    }
}

/// Result alias for moderation operations.
pub type ModerationResult<T> = Result<T, ModerationError>;
