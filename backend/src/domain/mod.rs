//! Domain entities, services, and ports.
//!
//! Purpose: hold the transport-agnostic core of the catalogue — course and
//! tag aggregates, the CSV import pipeline, the reaction ledger, and the
//! wishlist projection. Inbound adapters translate HTTP requests into calls
//! on the driving ports defined under [`ports`]; outbound adapters implement
//! the driven repository ports against PostgreSQL.

pub mod course;
pub mod error;
pub mod ingestion;
pub mod ports;
pub mod reactions;
pub mod tag;
pub mod user;
pub mod wishlist;

pub use self::course::{Course, CourseId, CourseIdError, CourseRecord};
pub use self::error::{Error, ErrorCode};
pub use self::ingestion::CatalogueImportService;
pub use self::reactions::{Reaction, ReactionService};
pub use self::tag::{TagName, TagNameError, normalize_tag_list};
pub use self::user::{LoginCredentials, UserId, UserValidationError};
pub use self::wishlist::{WishlistEntry, WishlistService};
