//! Comment state-transition engine.
//!
//! [`CommentModerator`] validates and applies moderation actions against a
//! [`CommentRepository`], in two stages: read-and-validate, then a
//! conditional write keyed on the state observed during validation. The
//! decision logic itself never touches I/O ordering, so the transition
//! rules are testable against an in-memory fixture without a real store.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod moderator;

pub use moderator::CommentModerator;
