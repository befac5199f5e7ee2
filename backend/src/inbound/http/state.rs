//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueImportCommand, CatalogueQuery, FixtureCatalogueImportCommand, FixtureCatalogueQuery,
    FixtureLoginService, FixtureReactionCommand, FixtureWishlistQuery, LoginService,
    ReactionCommand, WishlistQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub catalogue_import: Arc<dyn CatalogueImportCommand>,
    pub reactions: Arc<dyn ReactionCommand>,
    pub wishlist: Arc<dyn WishlistQuery>,
}

impl HttpState {
    /// State backed entirely by fixture ports.
    ///
    /// Used by the server when no database is configured and by tests that
    /// only exercise request plumbing.
    pub fn fixture() -> Self {
        Self {
            login: Arc::new(FixtureLoginService),
            catalogue: Arc::new(FixtureCatalogueQuery),
            catalogue_import: Arc::new(FixtureCatalogueImportCommand),
            reactions: Arc::new(FixtureReactionCommand),
            wishlist: Arc::new(FixtureWishlistQuery),
        }
    }
}
