//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use serde_json::json;

    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn missing_field_reports_the_field_name() {
        let err = missing_field_error(FieldName::new("user_id"));
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "user_id", "code": "missing_field" })),
        );
    }

    #[test]
    fn parse_uuid_accepts_canonical_form() {
        let id = parse_uuid("3fa85f64-5717-4562-b3fc-2c963f66afa6", FieldName::new("user_id"))
            .expect("valid uuid");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[test]
    fn parse_uuid_rejects_garbage_with_context() {
        let err = parse_uuid("42", FieldName::new("user_id")).expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "user_id", "value": "42", "code": "invalid_uuid" })),
        );
    }
}
