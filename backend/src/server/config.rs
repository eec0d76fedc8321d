//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use coursehub::domain::{Course, UserId};

/// Everything `create_server` needs, assembled by `main`.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) courses: Vec<Course>,
    pub(crate) administrators: Vec<UserId>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            courses: Vec::new(),
            administrators: Vec::new(),
        }
    }

    /// Serve `courses` from the in-memory catalogue.
    #[must_use]
    pub fn with_catalogue(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }

    /// Grant administrator access to `administrators`.
    #[must_use]
    pub fn with_administrators(mut self, administrators: Vec<UserId>) -> Self {
        self.administrators = administrators;
        self
    }
}
