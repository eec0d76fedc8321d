//! Domain primitives, page resolvers and services.
//!
//! Purpose: Define transport-agnostic types for the course pages. Keep types
//! immutable and document invariants and serialisation contracts (serde) in
//! each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Course / CourseSummary: course record and its list projection.
//! - FetchResult: success-flagged outcome returned by collaborators.
//! - AccessContext / UserId: caller identity and administrator flag.
//! - pages: resolvers for the public course page and the dashboard.
//! - TraceId: per-request correlation identifier.

pub mod course;
pub mod course_catalogue;
pub mod error;
pub mod fetch_result;
pub mod identity;
pub mod local_drafts;
pub mod pages;
pub mod ports;
pub mod trace_id;

pub use self::course::{Course, CourseSlug, CourseSummary, CourseTitle, CourseValidationError};
pub use self::course_catalogue::CourseCatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fetch_result::FetchResult;
pub use self::identity::{AccessContext, IdentityValidationError, LoginCredentials, UserId};
pub use self::local_drafts::{LocalDraft, LocalDraftError, LocalDrafts};
pub use self::pages::{
    CoursePage, CourseViewer, CoursesDashboard, CoursesList, LocalDraftsSection,
    resolve_course_page, resolve_dashboard,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use coursehub::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
