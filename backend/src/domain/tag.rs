//! Tag names and tag-list normalization.
//!
//! Tags arrive as free-text delimiter-separated lists inside catalogue
//! spreadsheets. Normalization is forgiving: tokens are trimmed, empty
//! tokens are dropped, and repeated tokens collapse to one entry. Malformed
//! input never raises; the worst case is a tag with an unexpected name.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Delimiter separating tag tokens inside a spreadsheet field.
pub const TAG_DELIMITER: char = ',';

/// Validation errors returned by [`TagName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagNameError {
    Empty,
}

impl fmt::Display for TagNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "tag name must not be empty once trimmed"),
        }
    }
}

impl std::error::Error for TagNameError {}

/// Canonical tag name: surrounding whitespace trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Trim and validate a raw token.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TagNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TagNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Canonical name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

impl TryFrom<String> for TagName {
    type Error = TagNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Split a raw delimiter-separated tag list into canonical names.
///
/// Tokens that trim to the same string resolve to one entry; first-seen
/// order is preserved so repeated normalization is stable.
///
/// # Examples
/// ```
/// use backend::domain::normalize_tag_list;
///
/// let tags = normalize_tag_list("python, web , python");
/// let names: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
/// assert_eq!(names, ["python", "web"]);
/// ```
pub fn normalize_tag_list(raw: &str) -> Vec<TagName> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for token in raw.split(TAG_DELIMITER) {
        if let Ok(tag) = TagName::new(token) {
            if seen.insert(tag.clone()) {
                tags.push(tag);
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    fn names(raw: &str) -> Vec<String> {
        normalize_tag_list(raw)
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[rstest]
    #[case("python, web , python", &["python", "web"])]
    #[case("a,,b", &["a", "b"])]
    #[case(" , ,", &[])]
    #[case("", &[])]
    #[case("rust", &["rust"])]
    #[case("Rust, rust", &["Rust", "rust"])]
    fn normalization_cases(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(names(raw), expected);
    }

    #[test]
    fn normalization_is_idempotent_over_repeated_input() {
        let first = names("data, ml, data, ml");
        let second = names("data, ml, data, ml");
        assert_eq!(first, second);
        assert_eq!(first, ["data", "ml"]);
    }

    #[test]
    fn tag_name_trims_surrounding_whitespace() {
        let tag = TagName::new("  web dev  ").expect("valid tag");
        assert_eq!(tag.as_str(), "web dev");
    }

    #[test]
    fn tag_name_rejects_blank_tokens() {
        assert_eq!(TagName::new("   ").expect_err("must fail"), TagNameError::Empty);
    }
}
