//! In-memory course catalogue.
//!
//! The catalogue is loaded once at startup and never mutated afterwards, so
//! workers share it behind an `Arc` without locking.

mod seed;

pub use seed::{CatalogueSeedError, load_catalogue_seed, parse_catalogue_seed};

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseSlug, UserId};

/// Read-only [`CourseRepository`] backed by a map keyed by slug.
///
/// # Examples
/// ```
/// use coursehub::outbound::catalogue::InMemoryCourseRepository;
///
/// let repository = InMemoryCourseRepository::default();
/// assert!(repository.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseRepository {
    courses: BTreeMap<CourseSlug, Course>,
}

impl InMemoryCourseRepository {
    /// Build a repository from `courses`; later duplicates replace earlier ones.
    pub fn new(courses: impl IntoIterator<Item = Course>) -> Self {
        Self {
            courses: courses
                .into_iter()
                .map(|course| (course.slug().clone(), course))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_slug(
        &self,
        slug: &CourseSlug,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.courses.get(slug).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self.courses.values().cloned().collect())
    }

    async fn list_owned_by(&self, owner: &UserId) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self
            .courses
            .values()
            .filter(|course| course.is_owned_by(owner))
            .cloned()
            .collect())
    }
}
