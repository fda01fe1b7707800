//! Role-based access policy for moderation actions.
//!
//! The policy is a pure decision table from (role, action) to allow/deny
//! with no knowledge of comment data. Any pair absent from the allow
//! table is denied, so adding a new [`Action`] grants nothing until it is
//! explicitly whitelisted here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use gavel_core::{Action, Role};
use gavel_error::{ModerationError, ModerationErrorKind, ModerationResult};
use tracing::{debug, instrument, warn};

/// Access policy for validating moderation requests.
///
/// Deterministic and side-effect free; callable without any repository in
/// scope, which decouples "can this role ever do X" from "does this
/// comment exist".
#[derive(Debug, Clone, Copy, Default, derive_new::new)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Whether `role` is permitted to perform `action`.
    ///
    /// Allow table: `Hide` for admins and moderators, `Delete` for
    /// admins only. Everything else is deny-by-default.
    ///
    /// # Examples
    ///
    /// ```
    /// use gavel_core::{Action, Role};
    /// use gavel_policy::AccessPolicy;
    ///
    /// let policy = AccessPolicy::new();
    /// assert!(policy.is_allowed(Role::Moderator, Action::Hide));
    /// assert!(!policy.is_allowed(Role::Moderator, Action::Delete));
    /// ```
    pub fn is_allowed(&self, role: Role, action: Action) -> bool {
        matches!(
            (role, action),
            (Role::Admin, Action::Hide)
                | (Role::Admin, Action::Delete)
                | (Role::Moderator, Action::Hide)
        )
    }

    /// Check a request against the policy, producing a `Forbidden` error
    /// for the boundary layer to surface on denial.
    #[instrument(skip(self))]
    pub fn check(&self, role: Role, action: Action) -> ModerationResult<()> {
        if self.is_allowed(role, action) {
            debug!("Action permitted");
            Ok(())
        } else {
            warn!("Action denied by policy");
            Err(ModerationError::new(ModerationErrorKind::Forbidden {
                role: role.to_string(),
                action: action.to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_allow_table() {
        let policy = AccessPolicy::new();
        assert!(policy.is_allowed(Role::Admin, Action::Hide));
        assert!(policy.is_allowed(Role::Admin, Action::Delete));
        assert!(policy.is_allowed(Role::Moderator, Action::Hide));
        assert!(!policy.is_allowed(Role::Moderator, Action::Delete));
        assert!(!policy.is_allowed(Role::User, Action::Hide));
        assert!(!policy.is_allowed(Role::User, Action::Delete));
    }

    #[test]
    fn test_deny_by_default_over_full_product() {
        let policy = AccessPolicy::new();
        let allowed = [
            (Role::Admin, Action::Hide),
            (Role::Admin, Action::Delete),
            (Role::Moderator, Action::Hide),
        ];
        for role in Role::iter() {
            for action in Action::iter() {
                let expected = allowed.contains(&(role, action));
                assert_eq!(
                    policy.is_allowed(role, action),
                    expected,
                    "policy disagrees for ({role}, {action})"
                );
            }
        }
    }

    #[test]
    fn test_check_produces_forbidden() {
        let policy = AccessPolicy::new();
        assert!(policy.check(Role::Admin, Action::Delete).is_ok());
        let err = policy.check(Role::User, Action::Hide).unwrap_err();
        assert!(matches!(err.kind, ModerationErrorKind::Forbidden { .. }));
    }
}
