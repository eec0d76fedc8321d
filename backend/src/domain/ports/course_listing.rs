//! Driving port used by the courses dashboard to fetch the caller's courses.

use async_trait::async_trait;

use crate::domain::{AccessContext, CourseSummary, FetchResult};

/// Listing collaborator.
///
/// Implementations return the whole catalogue for administrators and the
/// caller's own courses otherwise, echoing the administrator flag in the
/// result. Failures are reported through [`FetchResult::failed`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseListing: Send + Sync {
    /// List the courses visible to `access`.
    async fn list_courses(&self, access: &AccessContext) -> FetchResult<Vec<CourseSummary>>;
}

/// Listing that always succeeds with no courses.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseListing;

#[async_trait]
impl CourseListing for FixtureCourseListing {
    async fn list_courses(&self, access: &AccessContext) -> FetchResult<Vec<CourseSummary>> {
        FetchResult::found(Vec::new()).with_admin_flag(access.is_admin())
    }
}
