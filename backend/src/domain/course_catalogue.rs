//! Course catalogue service backing both page collaborators.
//!
//! Repository failures never reach the pages as errors. They are logged here
//! and reported as unsuccessful [`FetchResult`]s, which the page resolvers
//! turn into a not-found outcome or an empty list.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{CourseListing, CourseLookup, CourseRepository};
use crate::domain::{AccessContext, Course, CourseSlug, CourseSummary, FetchResult};

/// Domain service implementing [`CourseLookup`] and [`CourseListing`].
#[derive(Clone)]
pub struct CourseCatalogueService<R> {
    repository: Arc<R>,
}

impl<R> CourseCatalogueService<R> {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CourseLookup for CourseCatalogueService<R>
where
    R: CourseRepository,
{
    async fn find_by_slug(&self, slug: &str) -> FetchResult<Course> {
        let slug = match CourseSlug::new(slug) {
            Ok(slug) => slug,
            Err(error) => {
                debug!(%error, "rejecting malformed course slug");
                return FetchResult::failed();
            }
        };

        match self.repository.find_by_slug(&slug).await {
            Ok(Some(course)) => FetchResult::found(course),
            Ok(None) => {
                debug!(slug = %slug, "course not found");
                FetchResult::failed()
            }
            Err(error) => {
                warn!(slug = %slug, %error, "course lookup failed");
                FetchResult::failed()
            }
        }
    }
}

#[async_trait]
impl<R> CourseListing for CourseCatalogueService<R>
where
    R: CourseRepository,
{
    async fn list_courses(&self, access: &AccessContext) -> FetchResult<Vec<CourseSummary>> {
        let courses = if access.is_admin() {
            self.repository.list_all().await
        } else {
            self.repository.list_owned_by(access.user_id()).await
        };

        match courses {
            Ok(courses) => {
                let mut summaries: Vec<CourseSummary> =
                    courses.iter().map(Course::summary).collect();
                summaries.sort_by(|a, b| a.slug.cmp(&b.slug));
                FetchResult::found(summaries).with_admin_flag(access.is_admin())
            }
            Err(error) => {
                warn!(
                    user_id = %access.user_id(),
                    is_admin = access.is_admin(),
                    %error,
                    "course listing failed"
                );
                FetchResult::failed()
            }
        }
    }
}
