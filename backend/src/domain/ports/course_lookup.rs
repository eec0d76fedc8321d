//! Driving port used by the public course page to fetch one course.
//!
//! The port never fails with an error: every failure collapses into an
//! unsuccessful [`FetchResult`], which the page turns into a not-found
//! outcome.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{Course, CourseSlug, CourseTitle, FetchResult, UserId};

/// Course-lookup collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseLookup: Send + Sync {
    /// Fetch the course addressed by the raw route parameter `slug`.
    async fn find_by_slug(&self, slug: &str) -> FetchResult<Course>;
}

/// Slug served by [`FixtureCourseLookup`].
pub const FIXTURE_COURSE_SLUG: &str = "intro-to-go";

/// Deterministic lookup that knows exactly one course.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseLookup;

impl FixtureCourseLookup {
    fn fixture_course() -> Option<Course> {
        let slug = CourseSlug::new(FIXTURE_COURSE_SLUG).ok()?;
        let title = CourseTitle::new("Intro").ok()?;
        let owner = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").ok()?;
        let updated_at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).single()?;
        Some(Course::new(slug, title, owner, updated_at))
    }
}

#[async_trait]
impl CourseLookup for FixtureCourseLookup {
    async fn find_by_slug(&self, slug: &str) -> FetchResult<Course> {
        match Self::fixture_course() {
            Some(course) if course.slug().as_str() == slug => FetchResult::found(course),
            _ => FetchResult::failed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_finds_its_course() {
        let result = FixtureCourseLookup.find_by_slug(FIXTURE_COURSE_SLUG).await;
        let course = result.payload().expect("fixture course");
        assert_eq!(course.title().as_str(), "Intro");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_fails_for_other_slugs() {
        let result = FixtureCourseLookup.find_by_slug("missing").await;
        assert!(!result.is_success());
    }
}
