//! Moderation action types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A requested moderation operation on a comment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Action {
    /// Remove the comment from public view, keeping it recoverable
    Hide,
    /// Soft-delete the comment; terminal
    Delete,
}
