//! Driving port that resolves the caller's authorisation context.
//!
//! How administrators are recognised is deliberately left to the adapter;
//! handlers only see the resulting [`AccessContext`].

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{AccessContext, Error, UserId};

/// Authorisation-context lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessPolicy: Send + Sync {
    /// Resolve the access context for an authenticated user.
    async fn resolve(&self, user_id: &UserId) -> Result<AccessContext, Error>;
}

/// Policy granting administrator access to a configured set of user ids.
///
/// # Examples
/// ```
/// use coursehub::domain::UserId;
/// use coursehub::domain::ports::ConfiguredAccessPolicy;
///
/// let admin = UserId::new("123e4567-e89b-12d3-a456-426614174000").expect("valid id");
/// let policy = ConfiguredAccessPolicy::new([admin.clone()]);
/// assert!(policy.is_admin(&admin));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfiguredAccessPolicy {
    administrators: HashSet<UserId>,
}

impl ConfiguredAccessPolicy {
    /// Build a policy from administrator ids.
    pub fn new(administrators: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            administrators: administrators.into_iter().collect(),
        }
    }

    /// Whether `user_id` is a configured administrator.
    pub fn is_admin(&self, user_id: &UserId) -> bool {
        self.administrators.contains(user_id)
    }
}

#[async_trait]
impl AccessPolicy for ConfiguredAccessPolicy {
    async fn resolve(&self, user_id: &UserId) -> Result<AccessContext, Error> {
        let context = if self.is_admin(user_id) {
            AccessContext::administrator(user_id.clone())
        } else {
            AccessContext::member(user_id.clone())
        };
        Ok(context)
    }
}
