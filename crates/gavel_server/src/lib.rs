//! HTTP boundary for the Gavel comment moderation service.
//!
//! Thin plumbing around the moderation core: an axum router that maps
//! `PATCH`/`DELETE` semantics onto the moderator's `hide`/`delete`
//! operations, extracts the caller's role from the (already
//! authenticated) request context, and translates the typed error
//! taxonomy into status codes. The three-way distinction between
//! forbidden, not-found and invalid-transition stays observably distinct
//! to callers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;

pub use api::{AppState, create_router};
pub use config::{SeedComment, ServerConfig, ServerConfigBuilder};
