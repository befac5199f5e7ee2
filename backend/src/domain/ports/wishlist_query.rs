//! Driving port for wishlist reads.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::user::UserId;
use crate::domain::wishlist::WishlistEntry;

/// Domain use-case port for projecting a user's wishlist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistQuery: Send + Sync {
    /// The user's wishlist entries in stored order.
    async fn wishlist(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, Error>;
}

/// Fixture implementation used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWishlistQuery;

#[async_trait]
impl WishlistQuery for FixtureWishlistQuery {
    async fn wishlist(&self, _user_id: &UserId) -> Result<Vec<WishlistEntry>, Error> {
        Ok(Vec::new())
    }
}
