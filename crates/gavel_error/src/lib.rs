//! Error types for the Gavel comment moderation service.
//!
//! Each domain of the workspace gets its own error struct carrying a kind
//! enum plus the source location where the error was created. Errors are
//! per-request and recoverable; nothing in this workspace turns a request
//! failure into a process failure.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod moderation;
mod storage;

pub use config::ConfigError;
pub use moderation::{ModerationError, ModerationErrorKind, ModerationResult};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
