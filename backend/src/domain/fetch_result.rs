//! Outcome envelope returned by the page data collaborators.
//!
//! Collaborators never raise errors to the page; they report a `success`
//! flag alongside an optional payload. The page decides what a failure means
//! (not-found for the course page, an empty list for the dashboard).

use serde::{Deserialize, Serialize};

/// Tagged fetch outcome.
///
/// ## Invariants
/// - When `success` is false the payload is absent as far as callers can
///   observe, whatever was stored at construction. [`FetchResult::payload`]
///   and [`FetchResult::into_payload`] enforce this.
/// - `is_admin` is optional; absent means "not an administrator".
///
/// # Examples
/// ```
/// use coursehub::domain::FetchResult;
///
/// let found = FetchResult::found("intro-to-go");
/// assert_eq!(found.payload(), Some(&"intro-to-go"));
///
/// let failed: FetchResult<&str> = FetchResult::failed();
/// assert!(failed.payload().is_none());
/// assert!(!failed.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult<T> {
    success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_admin: Option<bool>,
}

impl<T> FetchResult<T> {
    /// Successful fetch carrying `data`.
    pub fn found(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            is_admin: None,
        }
    }

    /// Successful fetch whose payload field was absent.
    pub fn empty() -> Self {
        Self {
            success: true,
            data: None,
            is_admin: None,
        }
    }

    /// Failed fetch.
    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
            is_admin: None,
        }
    }

    /// Build a result from raw parts as reported by a collaborator.
    pub fn from_parts(success: bool, data: Option<T>, is_admin: Option<bool>) -> Self {
        Self {
            success,
            data,
            is_admin,
        }
    }

    /// Record the caller's administrator flag.
    #[must_use]
    pub fn with_admin_flag(mut self, is_admin: bool) -> Self {
        self.is_admin = Some(is_admin);
        self
    }

    /// Whether the collaborator reported success.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Borrow the payload, hidden when the fetch failed.
    pub fn payload(&self) -> Option<&T> {
        if self.success {
            self.data.as_ref()
        } else {
            None
        }
    }

    /// Consume the result, yielding the payload only on success.
    pub fn into_payload(self) -> Option<T> {
        if self.success { self.data } else { None }
    }

    /// Administrator flag, defaulting to false when absent.
    ///
    /// A failed fetch never grants administrator framing.
    pub fn is_admin(&self) -> bool {
        self.success && self.is_admin.unwrap_or(false)
    }
}
