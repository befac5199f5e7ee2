//! Actix middleware shared across all routes.

pub mod trace;
