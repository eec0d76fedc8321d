//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`CourseLookup`, `CourseListing`, `AccessPolicy`,
//! `LoginService`) are called by inbound adapters. The driven
//! `CourseRepository` port is implemented by outbound storage adapters and
//! reports failures through a typed error enum.

mod macros;
pub(crate) use macros::define_port_error;

mod access_policy;
mod course_listing;
mod course_lookup;
mod course_repository;
mod login_service;

#[cfg(test)]
pub use access_policy::MockAccessPolicy;
pub use access_policy::{AccessPolicy, ConfiguredAccessPolicy};
#[cfg(test)]
pub use course_listing::MockCourseListing;
pub use course_listing::{CourseListing, FixtureCourseListing};
#[cfg(test)]
pub use course_lookup::MockCourseLookup;
pub use course_lookup::{CourseLookup, FIXTURE_COURSE_SLUG, FixtureCourseLookup};
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError, FixtureCourseRepository};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FIXTURE_ADMIN_ID, FIXTURE_AUTHOR_ID, FixtureLoginService, LoginService};
