use crate::utils::error::{PestoError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> PestoError {
    PestoError::InvalidConfigValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Requires an absolute `http` or `https` URL.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        let reason = format!("Unsupported URL scheme: {}", url.scheme());
        return Err(invalid(field_name, url_str, reason));
    }
    Ok(())
}

/// Accepts values that can sit between two `/` of a URL path. Empty is allowed.
/// `%` is refused as well.
pub fn validate_path_segment(field_name: &str, value: &str) -> Result<()> {
    match value
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '?' | '#' | '%'))
    {
        Some(bad) => Err(invalid(
            field_name,
            value,
            format!("Character {:?} is not allowed here", bad),
        )),
        None => Ok(()),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://api.pestoai.fun").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
        assert!(validate_url("base_url", "${PESTO_BASE_URL}").is_err());
    }

    #[test]
    fn test_validate_url_reports_the_scheme() {
        match validate_url("base_url", "ftp://example.com") {
            Err(PestoError::InvalidConfigValue { field, reason, .. }) => {
                assert_eq!(field, "base_url");
                assert_eq!(reason, "Unsupported URL scheme: ftp");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_path_segment() {
        assert!(validate_path_segment("api_version", "v2").is_ok());
        assert!(validate_path_segment("api_version", "").is_ok());
        assert!(validate_path_segment("api_version", "api/v3").is_ok());
        assert!(validate_path_segment("api_version", "v 2").is_err());
        assert!(validate_path_segment("api_version", "v2?x=1").is_err());
        assert!(validate_path_segment("api_version", "v2#top").is_err());
        assert!(validate_path_segment("api_version", "v%2F2").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("agent", "pestoai/0.1").is_ok());
        assert!(validate_non_empty_string("agent", "   ").is_err());
    }
}
