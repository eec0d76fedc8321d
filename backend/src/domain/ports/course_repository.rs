//! Driven port for reading stored courses.

use async_trait::async_trait;

use crate::domain::{Course, CourseSlug, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading courses from storage.
    pub enum CourseRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "course store connection failed: {message}",
        /// A query failed during execution or row conversion.
        Query { message: String } =>
            "course query failed: {message}",
    }
}

/// Port for course storage reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Return the course stored under `slug`, or `None` when absent.
    async fn find_by_slug(&self, slug: &CourseSlug)
    -> Result<Option<Course>, CourseRepositoryError>;

    /// Return every stored course.
    async fn list_all(&self) -> Result<Vec<Course>, CourseRepositoryError>;

    /// Return courses owned by `owner`.
    async fn list_owned_by(&self, owner: &UserId) -> Result<Vec<Course>, CourseRepositoryError>;
}

/// Empty repository for tests that never read courses.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseRepository;

#[async_trait]
impl CourseRepository for FixtureCourseRepository {
    async fn find_by_slug(
        &self,
        _slug: &CourseSlug,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_owned_by(&self, _owner: &UserId) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(Vec::new())
    }
}
