//! Configuration for the moderation server.

use derive_getters::Getters;
use gavel_core::{Comment, CommentState};
use gavel_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the moderation server.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "127.0.0.1:3000")
    #[serde(default = "default_bind_addr")]
    #[builder(default = "default_bind_addr()")]
    bind_addr: String,

    /// Comments to seed the in-memory repository with at startup
    #[serde(default)]
    #[builder(default)]
    seed_comments: Vec<SeedComment>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Cannot read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::new(format!("Invalid TOML: {}", e)))
    }

    /// Create config from environment variables.
    ///
    /// Reads `GAVEL_BIND_ADDR` (default: "127.0.0.1:3000"). Seed comments
    /// are file-only.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            std::env::var("GAVEL_BIND_ADDR").unwrap_or_else(|_| default_bind_addr());
        ServerConfigBuilder::default()
            .bind_addr(bind_addr)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid server config: {}", e)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_comments: Vec::new(),
        }
    }
}

/// A comment record declared in configuration for seeding the in-memory
/// repository. Comment creation is otherwise outside the moderation core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct SeedComment {
    /// Unique comment id
    id: i64,
    /// Comment body
    text: String,
    /// Author of the comment
    author_id: i64,
    /// Initial state; new comments start active
    #[serde(default = "default_seed_state")]
    state: CommentState,
}

fn default_seed_state() -> CommentState {
    CommentState::Active
}

impl From<SeedComment> for Comment {
    fn from(seed: SeedComment) -> Self {
        Comment::new(seed.id, seed.text, seed.author_id, seed.state)
    }
}
