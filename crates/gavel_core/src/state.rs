//! Comment lifecycle states and the transition table.

use crate::Action;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Visibility/lifecycle status of a comment.
///
/// Comments start `Active`. `Hidden` is reachable from `Active` only.
/// `Deleted` is terminal: no action transitions out of it, and deleted
/// records are invisible to action requesters even though they persist.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommentState {
    /// Publicly visible
    Active,
    /// Removed from public view, recoverable by a future workflow
    Hidden,
    /// Soft-deleted; terminal
    Deleted,
}

impl CommentState {
    /// The authoritative transition table: the state an action leads to
    /// from `self`, or `None` when the transition is not defined.
    ///
    /// # Examples
    ///
    /// ```
    /// use gavel_core::{Action, CommentState};
    ///
    /// assert_eq!(
    ///     CommentState::Active.transition(Action::Hide),
    ///     Some(CommentState::Hidden)
    /// );
    /// assert_eq!(CommentState::Deleted.transition(Action::Hide), None);
    /// ```
    pub fn transition(self, action: Action) -> Option<CommentState> {
        match (self, action) {
            (CommentState::Active, Action::Hide) => Some(CommentState::Hidden),
            (CommentState::Active, Action::Delete) => Some(CommentState::Deleted),
            (CommentState::Hidden, Action::Delete) => Some(CommentState::Deleted),
            _ => None,
        }
    }

    /// Whether this state admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, CommentState::Deleted)
    }
}
