//! The comment repository trait.

use async_trait::async_trait;
use gavel_core::{Comment, CommentState};
use gavel_error::StorageResult;

/// Persistence contract for comment records.
///
/// Any key-value or relational backing is acceptable as long as `get`
/// reflects the most recent committed write. Records are never removed
/// through this trait; deletion is a state written by `put` like any
/// other.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Look up a comment by id. `Ok(None)` when no record exists.
    async fn get(&self, id: i64) -> StorageResult<Option<Comment>>;

    /// Conditionally persist `comment`: commits only if the stored record
    /// still has state `expected` (the state the caller observed before
    /// validating). Fails with `WriteConflict` when the record moved on
    /// under a concurrent writer, or when the id is absent (the read the
    /// write was conditioned on is stale by definition).
    async fn put(&self, comment: &Comment, expected: CommentState) -> StorageResult<()>;
}
