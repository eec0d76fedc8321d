//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they only depend on domain
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccessPolicy, ConfiguredAccessPolicy, CourseListing, CourseLookup, FixtureCourseListing,
    FixtureCourseLookup, FixtureLoginService, LoginService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub lookup: Arc<dyn CourseLookup>,
    pub listing: Arc<dyn CourseListing>,
    pub access: Arc<dyn AccessPolicy>,
}

impl HttpState {
    /// Bundle the port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use coursehub::domain::ports::{
    ///     ConfiguredAccessPolicy, FixtureCourseListing, FixtureCourseLookup, FixtureLoginService,
    /// };
    /// use coursehub::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureLoginService),
    ///     Arc::new(FixtureCourseLookup),
    ///     Arc::new(FixtureCourseListing),
    ///     Arc::new(ConfiguredAccessPolicy::default()),
    /// );
    /// let _lookup = state.lookup.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        lookup: Arc<dyn CourseLookup>,
        listing: Arc<dyn CourseListing>,
        access: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self {
            login,
            lookup,
            listing,
            access,
        }
    }

    /// State wired entirely to fixture adapters with no administrators.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureLoginService),
            Arc::new(FixtureCourseLookup),
            Arc::new(FixtureCourseListing),
            Arc::new(ConfiguredAccessPolicy::default()),
        )
    }

    /// Replace the access policy.
    #[must_use]
    pub fn with_access(mut self, access: Arc<dyn AccessPolicy>) -> Self {
        self.access = access;
        self
    }

    /// Replace both course ports.
    #[must_use]
    pub fn with_courses(
        mut self,
        lookup: Arc<dyn CourseLookup>,
        listing: Arc<dyn CourseListing>,
    ) -> Self {
        self.lookup = lookup;
        self.listing = listing;
        self
    }
}
