//! Core data types for the Gavel comment moderation service.
//!
//! This crate provides the domain types shared across the workspace: caller
//! roles, moderation actions, comment lifecycle states and the comment
//! entity itself. The state transition table lives here so it can be
//! exercised without a repository or a running server.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod comment;
mod role;
mod state;

pub use action::Action;
pub use comment::Comment;
pub use role::Role;
pub use state::CommentState;
