//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint and the session cookie security
//! scheme. Swagger UI serves it in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::courses::{
    CourseBody, CoursePageResponse, CourseSummaryBody, CoursesListBody, DashboardResponse,
    LocalDraftsBody,
};
use crate::inbound::http::users::LoginRequest;

/// Add the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "coursehub API",
        description = "Public course page, courses dashboard, login and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::get_dashboard,
        crate::inbound::http::users::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        LoginRequest,
        CourseBody,
        CoursePageResponse,
        CourseSummaryBody,
        CoursesListBody,
        LocalDraftsBody,
        DashboardResponse,
    )),
    tags(
        (name = "courses", description = "Course page and dashboard"),
        (name = "users", description = "Session login"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
