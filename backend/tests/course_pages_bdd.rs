//! Behaviour tests for the course page and courses dashboard endpoints.
//!
//! The app is assembled in-process from the library's adapters over the
//! seeded catalogue in `fixtures/courses.json`, so these exercise the same
//! wiring the server binary uses without binding a socket. Each request runs
//! on a current-thread runtime inside a `LocalSet` because Actix services
//! spawn local tasks.

use std::cell::RefCell;
use std::sync::Arc;

use actix_http::Request;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use coursehub::Trace;
use coursehub::domain::ports::{ConfiguredAccessPolicy, FIXTURE_ADMIN_ID, FixtureLoginService};
use coursehub::domain::{CourseCatalogueService, TRACE_ID_HEADER, UserId};
use coursehub::inbound::http::courses::{get_course, get_dashboard};
use coursehub::inbound::http::health::{HealthState, live, ready};
use coursehub::inbound::http::state::HttpState;
use coursehub::inbound::http::users::login;
use coursehub::outbound::catalogue::{InMemoryCourseRepository, parse_catalogue_seed};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

const SEED: &str = include_str!("../fixtures/courses.json");
const SESSION_COOKIE: &str = "session";
const DASHBOARD_PATH: &str = "/api/v1/dashboard/courses";

/// What a scenario observed from its last request.
struct Reply {
    status: StatusCode,
    cache_control: Option<String>,
    trace_id: Option<String>,
    session: Option<Cookie<'static>>,
    body: Value,
}

impl Reply {
    async fn capture<B: MessageBody>(res: ServiceResponse<B>) -> Self {
        let status = res.status();
        let header_value = |name: &str| {
            res.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        let cache_control = header_value(header::CACHE_CONTROL.as_str());
        let trace_id = header_value(TRACE_ID_HEADER);
        let session = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(Cookie::into_owned);
        let bytes = test::read_body(res).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Self {
            status,
            cache_control,
            trace_id,
            session,
            body,
        }
    }
}

fn seeded_state() -> HttpState {
    let courses = parse_catalogue_seed(SEED).expect("seed fixture parses");
    let repository = Arc::new(InMemoryCourseRepository::new(courses));
    let catalogue = Arc::new(CourseCatalogueService::new(repository));
    let admin = UserId::new(FIXTURE_ADMIN_ID).expect("admin id");
    HttpState::new(
        Arc::new(FixtureLoginService),
        catalogue.clone(),
        catalogue,
        Arc::new(ConfiguredAccessPolicy::new([admin])),
    )
}

fn course_app(
    state: HttpState,
    key: Key,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build();
    let api = web::scope("/api/v1")
        .wrap(session)
        .service(login)
        .service(get_course)
        .service(get_dashboard);
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(HealthState::new()))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
}

/// Shared scenario state: the app's dependencies, the session cookie from the
/// last sign-in and the last reply.
///
/// The app is rebuilt per request from the same state and session key, so
/// cookies issued by one request are accepted by the next.
struct CoursePagesWorld {
    runtime: Runtime,
    local: LocalSet,
    state: RefCell<Option<HttpState>>,
    key: Key,
    session: RefCell<Option<Cookie<'static>>>,
    reply: RefCell<Option<Reply>>,
}

impl CoursePagesWorld {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        Self {
            runtime,
            local: LocalSet::new(),
            state: RefCell::new(None),
            key: Key::generate(),
            session: RefCell::new(None),
            reply: RefCell::new(None),
        }
    }

    fn start(&self, state: HttpState) {
        *self.state.borrow_mut() = Some(state);
    }

    fn request(&self, builder: test::TestRequest) -> Request {
        match self.session.borrow().clone() {
            Some(cookie) => builder.cookie(cookie).to_request(),
            None => builder.to_request(),
        }
    }

    fn send(&self, request: Request) {
        let state = self
            .state
            .borrow()
            .clone()
            .expect("app started before requests");
        let key = self.key.clone();
        let reply = self.local.block_on(&self.runtime, async move {
            let app = test::init_service(course_app(state, key)).await;
            Reply::capture(test::call_service(&app, request).await).await
        });
        if let Some(cookie) = reply.session.clone() {
            *self.session.borrow_mut() = Some(cookie);
        }
        *self.reply.borrow_mut() = Some(reply);
    }

    fn sign_in(&self, username: &str) {
        let request = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": "password" }))
            .to_request();
        self.send(request);
        self.with_reply(|reply| {
            assert_eq!(reply.status, StatusCode::OK, "login failed: {}", reply.body);
            assert!(reply.session.is_some(), "login set a session cookie");
        });
    }

    fn with_reply<F>(&self, f: F)
    where
        F: FnOnce(&Reply),
    {
        let reply = self.reply.borrow();
        f(reply.as_ref().expect("a request was sent"));
    }
}

#[fixture]
fn world() -> CoursePagesWorld {
    CoursePagesWorld::new()
}

#[given("a running app over the seeded catalogue")]
fn a_running_app_over_the_seeded_catalogue(world: &CoursePagesWorld) {
    world.start(seeded_state());
}

#[given("the course author has signed in")]
fn the_course_author_has_signed_in(world: &CoursePagesWorld) {
    world.sign_in("author");
}

#[given("the administrator has signed in")]
fn the_administrator_has_signed_in(world: &CoursePagesWorld) {
    world.sign_in("admin");
}

#[when("a visitor opens the intro course page")]
fn a_visitor_opens_the_intro_course_page(world: &CoursePagesWorld) {
    world.send(test::TestRequest::get().uri("/api/v1/courses/intro-to-go").to_request());
}

#[when("a visitor opens a course page that does not exist")]
fn a_visitor_opens_a_missing_course_page(world: &CoursePagesWorld) {
    world.send(test::TestRequest::get().uri("/api/v1/courses/no-such-course").to_request());
}

#[when("a visitor opens the dashboard without a session")]
fn a_visitor_opens_the_dashboard_without_a_session(world: &CoursePagesWorld) {
    world.send(test::TestRequest::get().uri(DASHBOARD_PATH).to_request());
}

#[when("the signed-in user opens the dashboard")]
fn the_signed_in_user_opens_the_dashboard(world: &CoursePagesWorld) {
    let request = world.request(test::TestRequest::get().uri(DASHBOARD_PATH));
    world.send(request);
}

#[when("the liveness probe is requested")]
fn the_liveness_probe_is_requested(world: &CoursePagesWorld) {
    world.send(test::TestRequest::get().uri("/health/live").to_request());
}

#[then("the response is ok")]
fn the_response_is_ok(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        assert_eq!(reply.status, StatusCode::OK, "body: {}", reply.body);
    });
}

#[then("the page shows the intro course exactly as stored")]
fn the_page_shows_the_intro_course(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        assert_eq!(
            reply.body,
            json!({
                "course": {
                    "slug": "intro-to-go",
                    "title": "Intro",
                    "description": "Types, goroutines, and the standard library in an afternoon.",
                    "ownerId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                    "updatedAt": "2026-09-01T09:30:00+00:00"
                }
            })
        );
    });
}

#[then("the response is a not found error envelope")]
fn the_response_is_a_not_found_envelope(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.body["code"], "not_found");
        assert_eq!(reply.body["details"]["slug"], "no-such-course");
    });
}

#[then("the envelope carries the request trace id")]
fn the_envelope_carries_the_trace_id(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        let header = reply.trace_id.as_deref().expect("trace id header");
        assert_eq!(reply.body["traceId"], header);
    });
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &CoursePagesWorld) {
    world.with_reply(|reply| assert!(reply.trace_id.is_some()));
}

#[then("the response is unauthorised")]
fn the_response_is_unauthorised(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
        assert_eq!(reply.body["code"], "unauthorized");
    });
}

#[then("the response must not be cached")]
fn the_response_must_not_be_cached(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        assert_eq!(reply.cache_control.as_deref(), Some("no-store"));
    });
}

#[then("the dashboard shows the author's own courses")]
fn the_dashboard_shows_own_courses(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        assert_eq!(reply.body["heading"], "My Courses");
        assert_eq!(reply.body["list"]["isAdmin"], false);
        let slugs: Vec<&str> = reply.body["list"]["courses"]
            .as_array()
            .expect("course array")
            .iter()
            .filter_map(|course| course["slug"].as_str())
            .collect();
        assert_eq!(slugs, ["async-rust", "intro-to-go"]);
    });
}

#[then("the local drafts section is offered")]
fn the_local_drafts_section_is_offered(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        assert_eq!(
            reply.body["localDrafts"],
            json!({ "storageKey": "coursehub.localDrafts" })
        );
    });
}

#[then("the dashboard shows every course")]
fn the_dashboard_shows_every_course(world: &CoursePagesWorld) {
    world.with_reply(|reply| {
        assert_eq!(reply.body["heading"], "All Courses");
        assert_eq!(reply.body["list"]["isAdmin"], true);
        let courses = reply.body["list"]["courses"]
            .as_array()
            .expect("course array");
        assert_eq!(courses.len(), 3);
    });
}

#[then("the local drafts section is hidden")]
fn the_local_drafts_section_is_hidden(world: &CoursePagesWorld) {
    world.with_reply(|reply| assert!(reply.body.get("localDrafts").is_none()));
}

#[scenario(
    path = "tests/features/course_pages.feature",
    name = "Visitor views a known course"
)]
#[::core::prelude::v1::test]
fn visitor_views_a_known_course(world: CoursePagesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/course_pages.feature",
    name = "Visitor opens a course that does not exist"
)]
#[::core::prelude::v1::test]
fn visitor_opens_a_missing_course(world: CoursePagesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/course_pages.feature",
    name = "Dashboard without a session is rejected"
)]
#[::core::prelude::v1::test]
fn dashboard_without_a_session_is_rejected(world: CoursePagesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/course_pages.feature",
    name = "Course author sees their own courses"
)]
#[::core::prelude::v1::test]
fn course_author_sees_their_own_courses(world: CoursePagesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/course_pages.feature",
    name = "Administrator sees every course"
)]
#[::core::prelude::v1::test]
fn administrator_sees_every_course(world: CoursePagesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/course_pages.feature",
    name = "Probes answer outside the API scope"
)]
#[::core::prelude::v1::test]
fn probes_answer_outside_the_api_scope(world: CoursePagesWorld) {
    drop(world);
}
