//! Driving port for spreadsheet catalogue imports.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::Error;
use crate::domain::ingestion::decode_catalogue_csv;

/// Result summary of a committed catalogue import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueImportOutcome {
    /// Courses written (created or refreshed).
    pub courses: u64,
    /// Ingestion date stamped onto every imported course.
    pub upload_date: NaiveDate,
}

/// Domain use-case port for importing an uploaded spreadsheet.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueImportCommand: Send + Sync {
    /// Decode, validate, and commit the uploaded CSV bytes.
    ///
    /// Either every data row commits or none do.
    async fn import_csv(&self, csv_bytes: &[u8]) -> Result<CatalogueImportOutcome, Error>;
}

/// Fixture implementation used until persistence is wired.
///
/// Decodes and validates the upload with a fixed ingestion date but persists
/// nothing, so fixture-backed servers still reject malformed files.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueImportCommand;

#[async_trait]
impl CatalogueImportCommand for FixtureCatalogueImportCommand {
    async fn import_csv(&self, csv_bytes: &[u8]) -> Result<CatalogueImportOutcome, Error> {
        let upload_date = NaiveDate::from_ymd_opt(2026, 1, 1)
            .ok_or_else(|| Error::internal("invalid fixture upload date"))?;
        let records = decode_catalogue_csv(csv_bytes, upload_date)?;
        Ok(CatalogueImportOutcome {
            courses: records.len() as u64,
            upload_date,
        })
    }
}
