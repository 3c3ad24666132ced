use crate::domain::model::{Arg, Params};
use crate::utils::error::{PestoError, Result};
use url::form_urlencoded;
use url::Url;

/// One GET call: path under the versioned base URL plus query pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    path: String,
    query: Params,
}

impl Request {
    /// `path` must start with `/`; it is used as given.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Params::new(),
        }
    }

    /// Adds a required query parameter.
    pub fn param(mut self, key: &str, value: impl Into<Arg>) -> Self {
        self.query.set(key, value);
        self
    }

    /// Appends caller-supplied optional parameters after the required ones.
    pub fn extend(mut self, extra: Params) -> Self {
        self.query.merge(extra);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &Params {
        &self.query
    }

    /// `key=value` pairs joined with `&`, values normalized and encoded.
    pub fn query_string(&self) -> String {
        self.query
            .to_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full URL: `<base_url>/<api_version><path>?<query>`.
    ///
    /// URL parsing resolves dot segments, so a path containing `.` or `..`
    /// (plain or percent-encoded) would reach a different endpoint and is
    /// rejected instead.
    pub fn url(&self, base_url: &str, api_version: &str) -> Result<Url> {
        if self.path.split('/').any(is_dot_segment) {
            return Err(PestoError::InvalidPath {
                path: self.path.clone(),
            });
        }

        let base = base_url.trim_end_matches('/');
        let version = api_version.trim_matches('/');
        let raw = if version.is_empty() {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}{}", base, version, self.path)
        };

        let mut url = Url::parse(&raw)?;
        if !self.query.is_empty() {
            url.set_query(Some(&self.query_string()));
        }
        Ok(url)
    }
}

/// Percent-encodes a path segment or query component. Commas are list
/// separators upstream and stay literal.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%2C", ",")
}

/// Normalizes a path parameter and encodes it for interpolation.
pub fn path_param(value: impl Into<Arg>) -> String {
    encode_component(&value.into().normalize())
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
    )
}
