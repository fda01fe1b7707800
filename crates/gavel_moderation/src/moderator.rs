//! The comment moderator.

use gavel_core::{Action, Comment, CommentState};
use gavel_error::{ModerationError, ModerationErrorKind, ModerationResult};
use gavel_storage::CommentRepository;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Applies moderation actions to comments through a repository.
///
/// Each operation is one logical read-modify-write on a single record.
/// The write is a compare-and-swap conditioned on the state read during
/// validation; on conflict the whole sequence is retried exactly once
/// against freshly-read state, which absorbs benign races (a double
/// delete resolves to `NotFound` on the re-read) without ever letting a
/// stale `Hidden` write overwrite `Deleted`.
#[derive(Clone)]
pub struct CommentModerator {
    repository: Arc<dyn CommentRepository>,
}

impl CommentModerator {
    /// Create a moderator over the given repository.
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    /// Hide a comment, returning the updated record.
    ///
    /// Hiding an already-hidden comment is an idempotent no-op that
    /// returns the unchanged record.
    #[instrument(skip(self))]
    pub async fn hide(&self, id: i64) -> ModerationResult<Comment> {
        self.apply(id, Action::Hide).await
    }

    /// Soft-delete a comment. Terminal: afterwards the record is
    /// invisible to every further moderation action.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ModerationResult<()> {
        self.apply(id, Action::Delete).await.map(|_| ())
    }

    /// Run the read-validate-write sequence, retrying once on a write
    /// conflict. Infinite retry is deliberately not allowed; a conflict
    /// that survives the re-read is surfaced to the caller.
    async fn apply(&self, id: i64, action: Action) -> ModerationResult<Comment> {
        match self.try_apply(id, action).await {
            Err(err) if matches!(err.kind, ModerationErrorKind::WriteConflict(_)) => {
                debug!(id, %action, "Write conflict, retrying against fresh state");
                self.try_apply(id, action).await
            }
            outcome => outcome,
        }
    }

    async fn try_apply(&self, id: i64, action: Action) -> ModerationResult<Comment> {
        let Some(comment) = self.repository.get(id).await? else {
            debug!(id, "Comment not found");
            return Err(ModerationError::new(ModerationErrorKind::NotFound(id)));
        };

        let current = *comment.state();
        // Deleted records persist but are invisible to action requesters.
        if current.is_terminal() {
            debug!(id, "Comment already deleted, treating as not found");
            return Err(ModerationError::new(ModerationErrorKind::NotFound(id)));
        }

        if action == Action::Hide && current == CommentState::Hidden {
            debug!(id, "Comment already hidden, no-op");
            return Ok(comment);
        }

        let Some(next) = current.transition(action) else {
            warn!(id, state = %current, %action, "Illegal transition requested");
            return Err(ModerationError::new(
                ModerationErrorKind::InvalidTransition {
                    state: current.to_string(),
                    action: action.to_string(),
                },
            ));
        };

        let mut updated = comment;
        updated.set_state(next);
        self.repository.put(&updated, current).await?;

        info!(id, from = %current, to = %next, %action, "Transition applied");
        Ok(updated)
    }
}
