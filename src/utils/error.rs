use thiserror::Error;

#[derive(Error, Debug)]
pub enum PestoError {
    #[error("Connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response is missing the `{field}` field")]
    MissingField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid path `{path}`: `.` and `..` segments are not allowed")]
    InvalidPath { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl PestoError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            PestoError::Http { status, .. } => Some(*status),
            PestoError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, PestoError::Connection(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(
            self,
            PestoError::ConfigParse { .. }
                | PestoError::InvalidConfigValue { .. }
                | PestoError::InvalidUrl(_)
                | PestoError::Io(_)
        )
    }

    /// Process exit status used by the CLI.
    pub fn exit_code(&self) -> i32 {
        if self.is_connection() {
            3
        } else if self.is_config() {
            2
        } else {
            1
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PestoError::Connection(_) => {
                "Check your network connection and the configured base URL".to_string()
            }
            PestoError::Http { status: 404, .. } => {
                "The endpoint or identifier does not exist; check the path and ids".to_string()
            }
            PestoError::Http { status: 429, .. } => {
                "The API is rate limiting requests; wait before trying again".to_string()
            }
            PestoError::Http { status, .. } if *status >= 500 => {
                "The API is having trouble; try again later".to_string()
            }
            PestoError::Http { .. } => "Check the request parameters".to_string(),
            PestoError::Request(_) => "Retry the request".to_string(),
            PestoError::Json(_) | PestoError::MissingField { .. } => {
                "The API returned an unexpected response; check the API version".to_string()
            }
            PestoError::InvalidUrl(_) => "Check the base URL and API version".to_string(),
            PestoError::InvalidPath { .. } => "Check the ids passed in the path".to_string(),
            PestoError::Io(_) => "Check that the config file exists and is readable".to_string(),
            PestoError::ConfigParse { .. } => "Fix the TOML syntax in the config file".to_string(),
            PestoError::InvalidConfigValue { field, .. } => {
                format!("Fix the `{}` setting", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PestoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_status() {
        let err = PestoError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.exit_code(), 1);
        assert!(!err.is_connection());
        assert_eq!(err.to_string(), "HTTP error 404: not found");
    }

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = PestoError::InvalidConfigValue {
            field: "base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.status(), None);
        assert!(err.recovery_suggestion().contains("base_url"));
    }

    #[test]
    fn test_server_error_suggestion() {
        let err = PestoError::Http {
            status: 503,
            body: String::new(),
        };
        assert!(err.recovery_suggestion().contains("try again later"));
    }

    #[test]
    fn test_invalid_path_is_a_request_error() {
        let err = PestoError::InvalidPath {
            path: "/coins/../".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(!err.is_config());
        assert!(err.to_string().contains("/coins/../"));
    }
}
