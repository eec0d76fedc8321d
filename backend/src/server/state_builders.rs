//! Wiring from configuration to HTTP handler state.

use std::sync::Arc;

use actix_web::web;

use coursehub::domain::CourseCatalogueService;
use coursehub::domain::ports::{ConfiguredAccessPolicy, FixtureLoginService};
use coursehub::inbound::http::state::HttpState;
use coursehub::outbound::catalogue::InMemoryCourseRepository;
use tracing::info;

use super::ServerConfig;

/// Build handler state over the configured catalogue and administrators.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = Arc::new(InMemoryCourseRepository::new(config.courses.clone()));
    info!(
        course_count = repository.len(),
        administrator_count = config.administrators.len(),
        "course catalogue ready"
    );
    let catalogue = Arc::new(CourseCatalogueService::new(repository));
    let access = ConfiguredAccessPolicy::new(config.administrators.iter().cloned());
    web::Data::new(HttpState::new(
        Arc::new(FixtureLoginService),
        catalogue.clone(),
        catalogue,
        Arc::new(access),
    ))
}
