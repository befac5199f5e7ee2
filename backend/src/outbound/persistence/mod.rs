//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! Principles:
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leak to the domain layer.
//! - **Strongly typed errors**: database failures map onto the per-port
//!   error enums before leaving this module.

mod diesel_catalogue_query;
mod diesel_course_import_repository;
mod diesel_interests_repository;
mod diesel_reaction_repository;
mod models;
mod pool;
mod schema;

pub use diesel_catalogue_query::DieselCatalogueQuery;
pub use diesel_course_import_repository::DieselCourseImportRepository;
pub use diesel_interests_repository::DieselInterestsRepository;
pub use diesel_reaction_repository::DieselReactionRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
