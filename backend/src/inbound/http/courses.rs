//! Course page endpoints.
//!
//! ```text
//! GET /api/v1/courses/{slug}
//! GET /api/v1/dashboard/courses
//! ```

use actix_web::middleware::DefaultHeaders;
use actix_web::{get, web};
use serde::Serialize;
use serde_json::json;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{
    Course, CoursePage, CourseSummary, CoursesDashboard, Error, resolve_course_page,
    resolve_dashboard,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Course as handed to the viewer.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseBody {
    #[schema(example = "intro-to-go")]
    pub slug: String,
    #[schema(example = "Intro")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub owner_id: String,
    /// RFC 3339 timestamp of the last edit.
    #[schema(example = "2026-01-15T12:00:00Z")]
    pub updated_at: String,
}

impl From<Course> for CourseBody {
    fn from(course: Course) -> Self {
        Self {
            slug: course.slug().to_string(),
            title: course.title().as_str().to_owned(),
            description: course.description().map(str::to_owned),
            owner_id: course.owner_id().to_string(),
            updated_at: course.updated_at().to_rfc3339(),
        }
    }
}

/// Response payload for the public course page.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoursePageResponse {
    pub course: CourseBody,
}

/// One entry in the dashboard course list.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummaryBody {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub updated_at: String,
}

impl From<CourseSummary> for CourseSummaryBody {
    fn from(summary: CourseSummary) -> Self {
        Self {
            slug: summary.slug.into(),
            title: summary.title.into(),
            description: summary.description,
            updated_at: summary.updated_at.to_rfc3339(),
        }
    }
}

/// Props for the course list display.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoursesListBody {
    pub courses: Vec<CourseSummaryBody>,
    pub is_admin: bool,
}

/// Present only when the client should render its local drafts.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalDraftsBody {
    #[schema(example = "coursehub.localDrafts")]
    pub storage_key: String,
}

/// Response payload for the courses dashboard.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[schema(example = "My Courses")]
    pub heading: String,
    pub list: CoursesListBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_drafts: Option<LocalDraftsBody>,
}

impl From<CoursesDashboard> for DashboardResponse {
    fn from(dashboard: CoursesDashboard) -> Self {
        let CoursesDashboard {
            heading,
            list,
            local_drafts,
        } = dashboard;
        Self {
            heading: heading.to_owned(),
            list: CoursesListBody {
                courses: list.courses.into_iter().map(Into::into).collect(),
                is_admin: list.is_admin,
            },
            local_drafts: local_drafts.map(|section| LocalDraftsBody {
                storage_key: section.storage_key.to_owned(),
            }),
        }
    }
}

/// Fetch one course by slug for the public course page.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{slug}",
    params(("slug" = String, Path, description = "Course slug")),
    responses(
        (status = 200, description = "Course found", body = CoursePageResponse),
        (status = 404, description = "Course not found", body = Error)
    ),
    tags = ["courses"],
    operation_id = "getCourse",
    security([])
)]
#[get("/courses/{slug}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
) -> ApiResult<web::Json<CoursePageResponse>> {
    let slug = slug.into_inner();
    match resolve_course_page(state.lookup.as_ref(), &slug).await {
        CoursePage::Viewer(viewer) => Ok(web::Json(CoursePageResponse {
            course: viewer.course.into(),
        })),
        CoursePage::NotFound => {
            Err(Error::not_found("course not found").with_details(json!({ "slug": slug })))
        }
    }
}

/// Fetch the caller's courses for the dashboard.
///
/// Listing failures degrade to an empty list; only a missing session is an
/// error. Every response, errors included, carries `Cache-Control: no-store`.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/courses",
    responses(
        (
            status = 200,
            description = "Dashboard view model",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = DashboardResponse
        ),
        (status = 401, description = "Login required", body = Error)
    ),
    tags = ["courses"],
    operation_id = "getCoursesDashboard",
    security(("SessionCookie" = []))
)]
#[get("/dashboard/courses", wrap = "DefaultHeaders::new().add(no_store_header())")]
pub async fn get_dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DashboardResponse>> {
    let user_id = session.require_user_id()?;
    let access = state
        .access
        .resolve(&user_id)
        .await
        .inspect_err(|error| warn!(user_id = %user_id, %error, "access resolution failed"))
        .ok();
    let dashboard = resolve_dashboard(state.listing.as_ref(), access.as_ref()).await;
    Ok(web::Json(dashboard.into()))
}
