//! HTTP API for comment moderation.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, patch},
};
use gavel_core::{Action, Role};
use gavel_error::{ModerationError, ModerationErrorKind, ModerationResult};
use gavel_moderation::CommentModerator;
use gavel_policy::AccessPolicy;
use serde_json::json;
use tracing::{info, instrument};

/// Header carrying the caller's role, supplied by the upstream auth
/// layer. The core trusts this value as already authenticated.
pub(crate) const ROLE_HEADER: &str = "x-role";

/// API server state.
#[derive(Clone)]
pub struct AppState {
    /// Transition engine over the configured repository.
    pub moderator: CommentModerator,
    /// Role/action decision table.
    pub policy: AccessPolicy,
}

impl AppState {
    /// Creates a new API state.
    pub fn new(moderator: CommentModerator, policy: AccessPolicy) -> Self {
        Self { moderator, policy }
    }
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/comments/:id/hide", patch(hide_comment))
        .route("/comments/:id", delete(delete_comment))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Hide a comment. Returns the updated representation.
#[instrument(skip(state, headers))]
async fn hide_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let role = match authenticated_role(&headers, Action::Hide) {
        Ok(role) => role,
        Err(err) => return error_response(err),
    };
    if let Err(err) = state.policy.check(role, Action::Hide) {
        return error_response(err);
    }
    match state.moderator.hide(id).await {
        Ok(comment) => {
            info!(id, %role, action = %Action::Hide, "Moderation action applied");
            (StatusCode::OK, Json(comment)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Soft-delete a comment. Returns an empty confirmation.
#[instrument(skip(state, headers))]
async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let role = match authenticated_role(&headers, Action::Delete) {
        Ok(role) => role,
        Err(err) => return error_response(err),
    };
    if let Err(err) = state.policy.check(role, Action::Delete) {
        return error_response(err);
    }
    match state.moderator.delete(id).await {
        Ok(()) => {
            info!(id, %role, action = %Action::Delete, "Moderation action applied");
            (StatusCode::OK, Json(json!({ "status": "deleted" }))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Extract the caller's role from the trusted auth header.
///
/// A missing or unparseable role is surfaced uniformly as `Forbidden`,
/// never as a bad request, so probing cannot distinguish a malformed
/// header from an insufficient role.
fn authenticated_role(headers: &HeaderMap, action: Action) -> ModerationResult<Role> {
    headers
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Role>().ok())
        .ok_or_else(|| {
            ModerationError::new(ModerationErrorKind::Forbidden {
                role: "anonymous".to_string(),
                action: action.to_string(),
            })
        })
}

/// Map the error taxonomy onto status codes, keeping the three-way
/// distinction (forbidden / not found / state conflict) observable.
fn error_response(err: ModerationError) -> Response {
    let status = match &err.kind {
        ModerationErrorKind::Forbidden { .. } => StatusCode::FORBIDDEN,
        ModerationErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
        ModerationErrorKind::InvalidTransition { .. } => StatusCode::CONFLICT,
        ModerationErrorKind::WriteConflict(_) => StatusCode::CONFLICT,
        ModerationErrorKind::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(json!({ "error": err.kind.to_string() }))).into_response()
}
