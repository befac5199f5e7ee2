//! Driving port for the external authentication collaborator.
//!
//! Identity management (account creation, password storage, token issuance)
//! lives outside this service; handlers only need credentials exchanged for
//! a user id to persist in the session.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::user::{LoginCredentials, UserId};

/// Domain use-case port for authenticating a login attempt.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Exchange credentials for the authenticated user's id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Fixture login accepting a single development credential pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.username() == "admin" && credentials.password() == "password" {
            UserId::new("123e4567-e89b-12d3-a456-426614174000")
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
