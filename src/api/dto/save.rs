//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for caller-supplied aliases. Empty means "generate".
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request to map a long URL to an alias.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SaveRequest {
    /// The original URL (must be an absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias; generated when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    #[validate(regex(path = "*ALIAS_REGEX", message = "Invalid alias characters"))]
    pub alias: Option<String>,
}

/// Response for a created mapping.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, alias: Option<&str>) -> SaveRequest {
        SaveRequest {
            url: url.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("https://example.com", Some("custom")).validate().is_ok());
        assert!(request("https://example.com", None).validate().is_ok());
        assert!(request("https://example.com", Some("")).validate().is_ok());
    }

    #[test]
    fn test_invalid_url() {
        assert!(request("not-a-url", None).validate().is_err());
    }

    #[test]
    fn test_invalid_alias() {
        assert!(request("https://example.com", Some("a/b")).validate().is_err());
        assert!(
            request("https://example.com", Some(&"a".repeat(101)))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_alias_is_optional_in_json() {
        let req: SaveRequest = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert!(req.alias.is_none());
    }
}
