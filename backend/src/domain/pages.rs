//! Page resolvers turning fetch results into render decisions.
//!
//! Both resolvers follow the same flow: call the collaborator, check the
//! success flag, branch on payload presence, then hand a view model to the
//! rendering layer. They never surface collaborator failures as errors.

use serde::Serialize;

use crate::domain::ports::{CourseListing, CourseLookup};
use crate::domain::{AccessContext, Course, CourseSummary, FetchResult};

/// Heading shown to administrators on the courses dashboard.
pub const ADMIN_HEADING: &str = "All Courses";
/// Heading shown to everyone else on the courses dashboard.
pub const PERSONAL_HEADING: &str = "My Courses";
/// Client storage key under which local drafts live.
pub const LOCAL_DRAFTS_STORAGE_KEY: &str = "coursehub.localDrafts";

/// View model handed to the course viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseViewer {
    pub course: Course,
}

/// Outcome of the public course page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoursePage {
    /// Terminal not-found signal; nothing else is rendered.
    NotFound,
    Viewer(CourseViewer),
}

impl CoursePage {
    /// The course handed to the viewer, if any.
    pub fn course(&self) -> Option<&Course> {
        match self {
            Self::NotFound => None,
            Self::Viewer(viewer) => Some(&viewer.course),
        }
    }
}

/// Resolve the public course page for the route parameter `slug`.
///
/// A failed fetch and a successful fetch without a course both resolve to
/// [`CoursePage::NotFound`].
///
/// # Examples
/// ```
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use coursehub::domain::pages::{CoursePage, resolve_course_page};
/// use coursehub::domain::ports::FixtureCourseLookup;
///
/// let page = resolve_course_page(&FixtureCourseLookup, "missing").await;
/// assert_eq!(page, CoursePage::NotFound);
/// # });
/// ```
pub async fn resolve_course_page(lookup: &dyn CourseLookup, slug: &str) -> CoursePage {
    let result = lookup.find_by_slug(slug).await;
    match result.into_payload() {
        Some(course) => CoursePage::Viewer(CourseViewer { course }),
        None => CoursePage::NotFound,
    }
}

/// View model handed to the course list display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesList {
    pub courses: Vec<CourseSummary>,
    pub is_admin: bool,
}

/// Marker telling the client to render its local drafts section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDraftsSection {
    pub storage_key: &'static str,
}

impl Default for LocalDraftsSection {
    fn default() -> Self {
        Self {
            storage_key: LOCAL_DRAFTS_STORAGE_KEY,
        }
    }
}

/// Courses dashboard view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesDashboard {
    pub heading: &'static str,
    pub list: CoursesList,
    pub local_drafts: Option<LocalDraftsSection>,
}

impl CoursesDashboard {
    /// Build the dashboard from a listing result.
    ///
    /// Failed or empty results become an empty list, a missing admin flag
    /// becomes `false`, and only non-administrators get the drafts section.
    pub fn from_result(result: FetchResult<Vec<CourseSummary>>) -> Self {
        let is_admin = result.is_admin();
        let courses = result.into_payload().unwrap_or_default();
        let heading = if is_admin {
            ADMIN_HEADING
        } else {
            PERSONAL_HEADING
        };
        Self {
            heading,
            list: CoursesList { courses, is_admin },
            local_drafts: (!is_admin).then(LocalDraftsSection::default),
        }
    }
}

/// Resolve the courses dashboard for the caller.
///
/// `access` is `None` when the caller's access context could not be
/// resolved; the listing is then skipped and treated as a failed fetch.
pub async fn resolve_dashboard(
    listing: &dyn CourseListing,
    access: Option<&AccessContext>,
) -> CoursesDashboard {
    let result = match access {
        Some(access) => listing.list_courses(access).await,
        None => FetchResult::failed(),
    };
    CoursesDashboard::from_result(result)
}
