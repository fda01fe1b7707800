//! In-memory implementation of CommentRepository.
//!
//! This module provides a simple HashMap-based repository that stores
//! comments in memory. Used by tests and as the default server wiring in
//! the absence of a real database.

use crate::CommentRepository;
use async_trait::async_trait;
use gavel_core::{Comment, CommentState};
use gavel_error::{StorageError, StorageErrorKind, StorageResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory repository for comment records.
///
/// Stores comments in a HashMap protected by an RwLock for thread-safe
/// access. The write lock scopes each compare-and-swap, so writers to the
/// same id serialize and a record that moved past its expected state is
/// never overwritten. All data is lost when the repository is dropped.
///
/// # Example
/// ```
/// use gavel_core::{Comment, CommentState};
/// use gavel_storage::{CommentRepository, InMemoryCommentRepository};
///
/// #[tokio::main]
/// async fn main() {
///     let repo = InMemoryCommentRepository::new();
///     repo.insert(Comment::new(1, "Nice post!".into(), 17, CommentState::Active)).await;
///     assert!(repo.get(1).await.unwrap().is_some());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    /// Storage for comments, keyed by id
    comments: Arc<RwLock<HashMap<i64, Comment>>>,
}

impl InMemoryCommentRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            comments: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace a record unconditionally. Seeding only; comment
    /// creation is outside the moderation core.
    pub async fn insert(&self, comment: Comment) {
        self.comments.write().await.insert(*comment.id(), comment);
    }

    /// Get the number of stored comments (for testing).
    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    /// Check if the repository is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn get(&self, id: i64) -> StorageResult<Option<Comment>> {
        Ok(self.comments.read().await.get(&id).cloned())
    }

    async fn put(&self, comment: &Comment, expected: CommentState) -> StorageResult<()> {
        let mut comments = self.comments.write().await;
        let current = comments.get(comment.id()).map(|stored| *stored.state());
        match current {
            Some(state) if state == expected => {
                comments.insert(*comment.id(), comment.clone());
                Ok(())
            }
            found => {
                tracing::debug!(
                    id = comment.id(),
                    expected = %expected,
                    ?found,
                    "Conditional write lost"
                );
                Err(StorageError::new(StorageErrorKind::WriteConflict(
                    *comment.id(),
                )))
            }
        }
    }
}
