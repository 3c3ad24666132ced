#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path_segment, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.pestoai.fun";
pub const DEFAULT_API_VERSION: &str = "v2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_version: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: format!("pestoai/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Default settings pointed at another host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Overrides every field the provider sets.
    pub fn layered<P: ConfigProvider + ?Sized>(mut self, provider: &P) -> Self {
        if let Some(base_url) = provider.base_url() {
            self.base_url = base_url.to_string();
        }
        if let Some(api_version) = provider.api_version() {
            self.api_version = api_version.to_string();
        }
        if let Some(user_agent) = provider.user_agent() {
            self.user_agent = user_agent.to_string();
        }
        self
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path_segment("api_version", &self.api_version)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}
