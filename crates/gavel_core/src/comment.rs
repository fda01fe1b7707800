//! The comment entity.

use crate::CommentState;
use serde::{Deserialize, Serialize};

/// A comment record as seen by the moderation core.
///
/// Comments are created externally; the core only ever mutates `state`,
/// and never removes a record (deletion is a state transition, not a row
/// removal).
///
/// # Examples
///
/// ```
/// use gavel_core::{Comment, CommentState};
///
/// let comment = Comment::new(1, "Nice post!".to_string(), 17, CommentState::Active);
/// assert_eq!(*comment.id(), 1);
/// assert_eq!(*comment.state(), CommentState::Active);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct Comment {
    /// Unique, immutable identifier
    id: i64,
    /// Comment body
    text: String,
    /// Author of the comment
    author_id: i64,
    /// Visibility/lifecycle status
    state: CommentState,
}

impl Comment {
    /// Replace the comment's lifecycle state. The only mutation the
    /// moderation core performs.
    pub fn set_state(&mut self, state: CommentState) {
        self.state = state;
    }
}
