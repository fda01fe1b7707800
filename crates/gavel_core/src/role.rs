//! Role types for moderation callers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Permission class of an authenticated caller, fixed for the duration of
/// a request. The upstream auth collaborator supplies this value; the
/// core trusts it as already verified.
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
pub enum Role {
    /// Full moderation rights
    Admin,
    /// May hide but not delete
    Moderator,
    /// No moderation rights
    User,
}
