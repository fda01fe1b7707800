//! End-to-end tests for the moderation API router.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use gavel_core::{Comment, CommentState};
use gavel_error::{StorageError, StorageErrorKind, StorageResult};
use gavel_moderation::CommentModerator;
use gavel_policy::AccessPolicy;
use gavel_server::{AppState, create_router};
use gavel_storage::{CommentRepository, InMemoryCommentRepository};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn test_app(comments: &[(i64, CommentState)]) -> (Router, Arc<InMemoryCommentRepository>) {
    let repo = Arc::new(InMemoryCommentRepository::new());
    for (id, state) in comments {
        repo.insert(Comment::new(*id, format!("comment {id}"), 17, *state))
            .await;
    }
    let state = AppState::new(CommentModerator::new(repo.clone()), AccessPolicy::new());
    (create_router(state), repo)
}

fn hide_request(id: i64, role: &str) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(format!("/comments/{id}/hide"))
        .header("x-role", role)
        .body(Body::empty())
        .unwrap()
}

fn delete_request(id: i64, role: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/comments/{id}"))
        .header("x-role", role)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = test_app(&[]).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_moderator_hides_comment() {
    let (app, repo) = test_app(&[(1, CommentState::Active)]).await;
    let response = app.oneshot(hide_request(1, "moderator")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["state"], "hidden");
    let stored = repo.get(1).await.unwrap().unwrap();
    assert_eq!(*stored.state(), CommentState::Hidden);
}

#[tokio::test]
async fn test_admin_delete_then_hide_is_not_found() {
    let (app, repo) = test_app(&[(1, CommentState::Active)]).await;

    let response = app
        .clone()
        .oneshot(delete_request(1, "admin"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "deleted");
    assert_eq!(
        *repo.get(1).await.unwrap().unwrap().state(),
        CommentState::Deleted
    );

    let response = app.oneshot(hide_request(1, "admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_hide_is_forbidden_without_touching_state() {
    let (app, repo) = test_app(&[(2, CommentState::Active)]).await;
    let response = app.oneshot(hide_request(2, "user")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let stored = repo.get(2).await.unwrap().unwrap();
    assert_eq!(*stored.state(), CommentState::Active);
}

#[tokio::test]
async fn test_moderator_delete_is_forbidden_without_touching_state() {
    let (app, repo) = test_app(&[(3, CommentState::Hidden)]).await;
    let response = app.oneshot(delete_request(3, "moderator")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let stored = repo.get(3).await.unwrap().unwrap();
    assert_eq!(*stored.state(), CommentState::Hidden);
}

#[tokio::test]
async fn test_missing_role_header_is_forbidden() {
    let (app, _) = test_app(&[(1, CommentState::Active)]).await;
    let request = Request::builder()
        .method("PATCH")
        .uri("/comments/1/hide")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_comment_is_not_found() {
    let (app, _) = test_app(&[]).await;
    let response = app.oneshot(delete_request(42, "admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

/// Repository double whose conditional writes always lose, as if a
/// concurrent writer keeps winning the race.
struct AlwaysConflictingRepository {
    inner: InMemoryCommentRepository,
}

#[async_trait]
impl CommentRepository for AlwaysConflictingRepository {
    async fn get(&self, id: i64) -> StorageResult<Option<Comment>> {
        self.inner.get(id).await
    }

    async fn put(&self, comment: &Comment, _expected: CommentState) -> StorageResult<()> {
        Err(StorageError::new(StorageErrorKind::WriteConflict(
            *comment.id(),
        )))
    }
}

/// Repository double standing in for an unreachable backend.
struct UnavailableRepository;

#[async_trait]
impl CommentRepository for UnavailableRepository {
    async fn get(&self, _id: i64) -> StorageResult<Option<Comment>> {
        Err(StorageError::new(StorageErrorKind::Unavailable(
            "backend down".to_string(),
        )))
    }

    async fn put(&self, _comment: &Comment, _expected: CommentState) -> StorageResult<()> {
        Err(StorageError::new(StorageErrorKind::Unavailable(
            "backend down".to_string(),
        )))
    }
}

fn app_over(repo: Arc<dyn CommentRepository>) -> Router {
    let state = AppState::new(CommentModerator::new(repo), AccessPolicy::new());
    create_router(state)
}

#[tokio::test]
async fn test_persistent_write_conflict_is_a_conflict_response() {
    let inner = InMemoryCommentRepository::new();
    inner
        .insert(Comment::new(1, "racy".into(), 17, CommentState::Active))
        .await;
    let app = app_over(Arc::new(AlwaysConflictingRepository { inner }));

    let response = app.oneshot(hide_request(1, "admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("conflict"));
}

#[tokio::test]
async fn test_unavailable_storage_is_service_unavailable() {
    let app = app_over(Arc::new(UnavailableRepository));
    let response = app.oneshot(delete_request(1, "admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_rehide_is_idempotent_over_http() {
    let (app, _) = test_app(&[(4, CommentState::Hidden)]).await;
    let response = app.oneshot(hide_request(4, "admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["state"], "hidden");
}
