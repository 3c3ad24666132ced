use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PestoError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `pestoai=debug`.
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| PestoError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR.replace_all(content, resolve_env_var).into_owned()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

fn resolve_env_var(caps: &Captures) -> String {
    match std::env::var(&caps[1]) {
        Ok(value) => value,
        Err(_) => caps[0].to_string(),
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> Option<&str> {
        self.api.base_url.as_deref()
    }

    fn api_version(&self) -> Option<&str> {
        self.api.api_version.as_deref()
    }

    fn user_agent(&self) -> Option<&str> {
        self.api.user_agent.as_deref()
    }
}
