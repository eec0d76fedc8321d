//! Driving port for authenticating credentials.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Authentication use-case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// User id returned for the fixture administrator account.
pub const FIXTURE_ADMIN_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
/// User id returned for the fixture course author account.
pub const FIXTURE_AUTHOR_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

const FIXTURE_PASSWORD: &str = "password";

/// In-memory authenticator with two development accounts.
///
/// `admin` / `password` and `author` / `password` succeed; anything else is
/// rejected as unauthorised.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let id = match (credentials.username(), credentials.password()) {
            ("admin", FIXTURE_PASSWORD) => FIXTURE_ADMIN_ID,
            ("author", FIXTURE_PASSWORD) => FIXTURE_AUTHOR_ID,
            _ => return Err(Error::unauthorized("invalid credentials")),
        };
        UserId::new(id).map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
    }
}
