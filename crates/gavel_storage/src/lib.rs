//! Comment repository abstraction for the Gavel moderation service.
//!
//! The [`CommentRepository`] trait is the only seam between the
//! transition engine and persistence. Writes are compare-and-swap,
//! conditioned on the state observed during validation, so the engine's
//! read-validate-write sequence stays correct under concurrent requests
//! without holding any lock across the sequence itself.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod in_memory;
mod repository;

pub use in_memory::InMemoryCommentRepository;
pub use repository::CommentRepository;
