//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`CatalogueImportCommand`], [`CatalogueQuery`],
//! [`ReactionCommand`], [`WishlistQuery`], [`LoginService`]) are what inbound
//! adapters call; driven ports ([`CourseImportRepository`],
//! [`ReactionRepository`], [`InterestsRepository`]) are what the persistence
//! layer implements. Every port ships a `Fixture*` implementation so the
//! server can run without a database and tests can wire deterministic state.

mod catalogue_import_command;
mod catalogue_query;
mod course_import_repository;
mod interests_repository;
mod login_service;
mod reaction_command;
mod reaction_repository;
mod wishlist_query;

#[cfg(test)]
pub use catalogue_import_command::MockCatalogueImportCommand;
pub use catalogue_import_command::{
    CatalogueImportCommand, CatalogueImportOutcome, FixtureCatalogueImportCommand,
};
#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::{CatalogueQuery, FixtureCatalogueQuery};
#[cfg(test)]
pub use course_import_repository::MockCourseImportRepository;
pub use course_import_repository::{
    CourseImportRepository, CourseImportRepositoryError, FixtureCourseImportRepository,
};
#[cfg(test)]
pub use interests_repository::MockInterestsRepository;
pub use interests_repository::{
    CourseInterest, FixtureInterestsRepository, InterestsRepository, InterestsRepositoryError,
};
pub use login_service::{FixtureLoginService, LoginService};
#[cfg(test)]
pub use reaction_command::MockReactionCommand;
pub use reaction_command::{FixtureReactionCommand, ReactionCommand};
#[cfg(test)]
pub use reaction_repository::MockReactionRepository;
pub use reaction_repository::{
    FixtureReactionRepository, ReactionRepository, ReactionRepositoryError,
};
#[cfg(test)]
pub use wishlist_query::MockWishlistQuery;
pub use wishlist_query::{FixtureWishlistQuery, WishlistQuery};
