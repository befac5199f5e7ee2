//! Spreadsheet catalogue ingestion.
//!
//! Decoding is deliberately two-phased: the whole upload is parsed and
//! coerced into [`CourseRecord`]s before the repository sees any of it, so a
//! structural defect in row 900 leaves the catalogue untouched. Price and
//! rating are the only fields with a tolerant fallback; everything else that
//! fails to coerce aborts the upload with a row-addressed error.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::warn;

use crate::domain::Error;
use crate::domain::course::{
    CourseRecord, PRICE_DECIMAL_PLACES, RATING_DECIMAL_PLACES,
};
use crate::domain::ports::{
    CatalogueImportCommand, CatalogueImportOutcome, CourseImportRepository,
    CourseImportRepositoryError,
};
use crate::domain::tag::normalize_tag_list;

/// Minimum number of positional fields per data row.
pub const CATALOGUE_CSV_FIELDS: usize = 12;

const FIELD_SITE: usize = 0;
const FIELD_TITLE: usize = 1;
const FIELD_INSTRUCTOR: usize = 2;
const FIELD_DESCRIPTION: usize = 3;
const FIELD_URL: usize = 4;
const FIELD_PRICE: usize = 5;
const FIELD_TAGS: usize = 6;
const FIELD_RATING: usize = 7;
const FIELD_THUMBNAIL_URL: usize = 8;
const FIELD_IS_PACKAGE: usize = 9;
const FIELD_IS_FREE: usize = 10;
const FIELD_ENROLLMENT_COUNT: usize = 11;

fn structural_error(row: usize, field: &str, value: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "row": row,
        "field": field,
        "value": value,
    }))
}

/// Coerce a raw price field, substituting 0.00 when unparsable.
pub fn parse_price(raw: &str) -> Decimal {
    match raw.trim().parse::<Decimal>() {
        Ok(value) => {
            let mut rounded = value.round_dp(PRICE_DECIMAL_PLACES);
            rounded.rescale(PRICE_DECIMAL_PLACES);
            rounded
        }
        Err(_) => {
            warn!(value = raw, "unparsable price, substituting 0.00");
            Decimal::new(0, PRICE_DECIMAL_PLACES)
        }
    }
}

/// Coerce a raw rating field, substituting 0.000 when unparsable.
pub fn parse_rating(raw: &str) -> Decimal {
    match raw.trim().parse::<Decimal>() {
        Ok(value) => {
            let mut rounded = value.round_dp(RATING_DECIMAL_PLACES);
            rounded.rescale(RATING_DECIMAL_PLACES);
            rounded
        }
        Err(_) => {
            warn!(value = raw, "unparsable rating, substituting 0.000");
            Decimal::new(0, RATING_DECIMAL_PLACES)
        }
    }
}

/// Coerce a boolean flag field.
///
/// Only an explicit enumeration is accepted (case-insensitive):
/// true/1/yes and false/0/no/empty. Anything else aborts the upload rather
/// than being guessed at.
pub fn parse_flag(row: usize, field: &'static str, raw: &str) -> Result<bool, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(structural_error(
            row,
            field,
            raw,
            format!("{field} must be one of true/1/yes or false/0/no"),
        )),
    }
}

/// Coerce the enrollment-count field.
///
/// Empty and the literal "0.0" map to zero; other values parse as floating
/// point and truncate. Negative or non-numeric values abort the upload.
pub fn parse_enrollment_count(row: usize, raw: &str) -> Result<u64, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "0.0" {
        return Ok(0);
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        structural_error(row, "enrollment_count", raw, "enrollment_count must be numeric")
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(structural_error(
            row,
            "enrollment_count",
            raw,
            "enrollment_count must be a non-negative number",
        ));
    }
    Ok(value as u64)
}

fn field<'a>(
    row_number: usize,
    row: &'a csv::StringRecord,
    index: usize,
    name: &'static str,
) -> Result<&'a str, Error> {
    row.get(index).ok_or_else(|| {
        Error::invalid_request(format!(
            "row {row_number} has {got} fields, expected at least {CATALOGUE_CSV_FIELDS}",
            got = row.len(),
        ))
        .with_details(json!({ "row": row_number, "field": name }))
    })
}

fn decode_row(
    row_number: usize,
    row: &csv::StringRecord,
    upload_date: chrono::NaiveDate,
) -> Result<CourseRecord, Error> {
    Ok(CourseRecord {
        site: field(row_number, row, FIELD_SITE, "site")?.to_owned(),
        title: field(row_number, row, FIELD_TITLE, "title")?.to_owned(),
        instructor: field(row_number, row, FIELD_INSTRUCTOR, "instructor")?.to_owned(),
        description: field(row_number, row, FIELD_DESCRIPTION, "description")?.to_owned(),
        url: field(row_number, row, FIELD_URL, "url")?.to_owned(),
        price: parse_price(field(row_number, row, FIELD_PRICE, "price")?),
        tags: normalize_tag_list(field(row_number, row, FIELD_TAGS, "tags")?),
        rating: parse_rating(field(row_number, row, FIELD_RATING, "rating")?),
        thumbnail_url: field(row_number, row, FIELD_THUMBNAIL_URL, "thumbnail_url")?.to_owned(),
        is_package: parse_flag(
            row_number,
            "is_package",
            field(row_number, row, FIELD_IS_PACKAGE, "is_package")?,
        )?,
        is_free: parse_flag(
            row_number,
            "is_free",
            field(row_number, row, FIELD_IS_FREE, "is_free")?,
        )?,
        enrollment_count: parse_enrollment_count(
            row_number,
            field(row_number, row, FIELD_ENROLLMENT_COUNT, "enrollment_count")?,
        )?,
        upload_date,
    })
}

/// Decode an uploaded catalogue spreadsheet into validated records.
///
/// The header row is skipped; row numbers in errors are 1-based over the
/// data rows. Returns every record or the first structural error.
pub fn decode_catalogue_csv(
    bytes: &[u8],
    upload_date: chrono::NaiveDate,
) -> Result<Vec<CourseRecord>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row_number = index + 1;
        let row = row.map_err(|err| {
            Error::invalid_request(format!("row {row_number} is unreadable: {err}"))
        })?;
        records.push(decode_row(row_number, &row, upload_date)?);
    }
    Ok(records)
}

/// Domain service implementing the catalogue import command.
///
/// Stamps the ingestion date from the injected clock, decodes the whole
/// upload, and hands the validated batch to the import repository in one
/// call so the repository can commit it atomically.
#[derive(Clone)]
pub struct CatalogueImportService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CatalogueImportService<R> {
    /// Create a new import service.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn map_import_error(error: CourseImportRepositoryError) -> Error {
    match error {
        CourseImportRepositoryError::Connection { message } => Error::service_unavailable(message),
        CourseImportRepositoryError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl<R> CatalogueImportCommand for CatalogueImportService<R>
where
    R: CourseImportRepository,
{
    async fn import_csv(&self, csv_bytes: &[u8]) -> Result<CatalogueImportOutcome, Error> {
        let upload_date = self.clock.utc().date_naive();
        let records = decode_catalogue_csv(csv_bytes, upload_date)?;
        let courses = if records.is_empty() {
            0
        } else {
            self.repository
                .import_courses(&records)
                .await
                .map_err(map_import_error)?
        };
        Ok(CatalogueImportOutcome {
            courses,
            upload_date,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Mutex;

    use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    const SAMPLE_HEADER: &str =
        "site,title,instructor,description,url,price,tags,rating,thumbnail_url,is_package,is_free,enrollment_count";

    fn sample_csv(data_row: &str) -> Vec<u8> {
        format!("{SAMPLE_HEADER}\n{data_row}\n").into_bytes()
    }

    fn fixture_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid fixture date")
    }

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    fn fixture_clock() -> Arc<dyn Clock> {
        Arc::new(FixtureClock {
            utc_now: Utc
                .with_ymd_and_hms(2026, 8, 7, 10, 30, 0)
                .single()
                .expect("valid fixture timestamp"),
        })
    }

    #[rstest]
    #[case("19.99", Decimal::new(1999, 2))]
    #[case(" 20 ", Decimal::new(2000, 2))]
    #[case("19.999", Decimal::new(2000, 2))]
    #[case("abc", Decimal::new(0, 2))]
    #[case("", Decimal::new(0, 2))]
    fn price_coercion(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_price(raw), expected);
    }

    #[rstest]
    #[case("4.5", Decimal::new(4500, 3))]
    #[case("4.56789", Decimal::new(4568, 3))]
    #[case("n/a", Decimal::new(0, 3))]
    #[case("", Decimal::new(0, 3))]
    fn rating_coercion(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_rating(raw), expected);
    }

    #[rstest]
    #[case("true", true)]
    #[case("tRue", true)]
    #[case("1", true)]
    #[case("YES", true)]
    #[case("false", false)]
    #[case("False", false)]
    #[case("0", false)]
    #[case("no", false)]
    #[case("", false)]
    fn flag_coercion_accepts_the_enumeration(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(
            parse_flag(1, "is_free", raw).expect("flag parses"),
            expected,
        );
    }

    #[test]
    fn flag_coercion_rejects_unknown_values() {
        let err = parse_flag(3, "is_package", "maybe").expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[case("", 0)]
    #[case("0.0", 0)]
    #[case("7", 7)]
    #[case("7.9", 7)]
    #[case(" 120 ", 120)]
    fn enrollment_coercion(#[case] raw: &str, #[case] expected: u64) {
        assert_eq!(
            parse_enrollment_count(1, raw).expect("count parses"),
            expected,
        );
    }

    #[rstest]
    #[case("-3")]
    #[case("lots")]
    fn enrollment_coercion_rejects_bad_values(#[case] raw: &str) {
        let err = parse_enrollment_count(1, raw).expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn decode_substitutes_price_fallback_without_aborting() {
        let csv = sample_csv(
            "udemy,Intro,Ada,Learn things,https://u.example/1,abc,\"python, web , python\",4.5,https://t.example/1.png,0,1,",
        );
        let records = decode_catalogue_csv(&csv, fixture_date()).expect("decodes");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.price, Decimal::new(0, 2));
        assert_eq!(record.rating, Decimal::new(4500, 3));
        assert_eq!(record.enrollment_count, 0);
        assert!(!record.is_package);
        assert!(record.is_free);
        assert_eq!(record.upload_date, fixture_date());
        let tags: Vec<&str> = record.tags.iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, ["python", "web"]);
    }

    #[test]
    fn decode_handles_quoted_fields_with_delimiters() {
        let csv = sample_csv(
            "udemy,\"Rust, fast\",Ada,\"Commas, quotes\",https://u.example/2,10,systems,4.9,https://t.example/2.png,no,no,15",
        );
        let records = decode_catalogue_csv(&csv, fixture_date()).expect("decodes");
        assert_eq!(records[0].title, "Rust, fast");
        assert_eq!(records[0].enrollment_count, 15);
    }

    #[test]
    fn decode_aborts_on_short_rows() {
        let csv = sample_csv("udemy,Intro,Ada");
        let err = decode_catalogue_csv(&csv, fixture_date()).expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert!(err.message().contains("row 1"));
    }

    #[test]
    fn decode_aborts_on_unrecognised_flags() {
        let csv = sample_csv(
            "udemy,Intro,Ada,desc,https://u.example/3,5,web,4.0,https://t.example/3.png,maybe,0,1",
        );
        let err = decode_catalogue_csv(&csv, fixture_date()).expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn decode_of_header_only_upload_is_empty() {
        let records =
            decode_catalogue_csv(SAMPLE_HEADER.as_bytes(), fixture_date()).expect("decodes");
        assert!(records.is_empty());
    }

    #[derive(Default)]
    struct RecordingImportRepository {
        imported: Mutex<Vec<CourseRecord>>,
        failure: Mutex<Option<CourseImportRepositoryError>>,
    }

    impl RecordingImportRepository {
        fn set_failure(&self, failure: CourseImportRepositoryError) {
            *self.failure.lock().expect("failure lock") = Some(failure);
        }

        fn imported(&self) -> Vec<CourseRecord> {
            self.imported.lock().expect("imported lock").clone()
        }
    }

    #[async_trait]
    impl CourseImportRepository for RecordingImportRepository {
        async fn import_courses(
            &self,
            records: &[CourseRecord],
        ) -> Result<u64, CourseImportRepositoryError> {
            if let Some(failure) = self.failure.lock().expect("failure lock").clone() {
                return Err(failure);
            }
            let mut imported = self.imported.lock().expect("imported lock");
            imported.extend_from_slice(records);
            Ok(records.len() as u64)
        }
    }

    #[tokio::test]
    async fn service_stamps_clock_date_and_reports_count() {
        let repository = Arc::new(RecordingImportRepository::default());
        let service = CatalogueImportService::new(repository.clone(), fixture_clock());

        let csv = sample_csv(
            "udemy,Intro,Ada,desc,https://u.example/1,9.99,web,4.2,https://t.example/1.png,0,1,33",
        );
        let outcome = service.import_csv(&csv).await.expect("import succeeds");

        assert_eq!(outcome.courses, 1);
        assert_eq!(outcome.upload_date, fixture_date());
        let imported = repository.imported();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].upload_date, fixture_date());
    }

    #[tokio::test]
    async fn service_skips_repository_for_empty_uploads() {
        let repository = Arc::new(RecordingImportRepository::default());
        let service = CatalogueImportService::new(repository.clone(), fixture_clock());

        let outcome = service
            .import_csv(SAMPLE_HEADER.as_bytes())
            .await
            .expect("import succeeds");

        assert_eq!(outcome.courses, 0);
        assert!(repository.imported().is_empty());
    }

    #[tokio::test]
    async fn service_aborts_before_persisting_on_structural_errors() {
        let repository = Arc::new(RecordingImportRepository::default());
        let service = CatalogueImportService::new(repository.clone(), fixture_clock());

        let csv = sample_csv("udemy,Short row");
        let err = service.import_csv(&csv).await.expect_err("must fail");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert!(repository.imported().is_empty());
    }

    #[rstest]
    #[case(
        CourseImportRepositoryError::connection("database unavailable"),
        ErrorCode::ServiceUnavailable
    )]
    #[case(
        CourseImportRepositoryError::query("constraint violated"),
        ErrorCode::InternalError
    )]
    #[tokio::test]
    async fn service_maps_repository_failures(
        #[case] failure: CourseImportRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let repository = Arc::new(RecordingImportRepository::default());
        repository.set_failure(failure);
        let service = CatalogueImportService::new(repository, fixture_clock());

        let csv = sample_csv(
            "udemy,Intro,Ada,desc,https://u.example/1,9.99,web,4.2,https://t.example/1.png,0,1,33",
        );
        let err = service.import_csv(&csv).await.expect_err("must fail");
        assert_eq!(err.code(), expected);
    }
}
