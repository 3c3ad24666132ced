use crate::config::ClientConfig;
use crate::domain::model::Params;
use crate::domain::request::Request;
use crate::utils::error::{PestoError, Result};
use crate::utils::validation::Validate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Client for the market-data API. Cheap to clone; clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct PestoClient {
    client: Client,
    config: ClientConfig,
}

impl PestoClient {
    /// Client for the public API with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Validates `config` and builds the HTTP client.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client, config })
    }

    /// Default settings with another API host.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::with_base_url(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET an arbitrary endpoint path with optional parameters.
    pub async fn get(&self, path: &str, params: Params) -> Result<Value> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        self.send(&Request::new(path).extend(params)).await
    }

    /// Issues the request and decodes the JSON body as `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let url = request.url(&self.config.base_url, &self.config.api_version)?;
        tracing::debug!("Making API request to: {}", url);

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                tracing::warn!("Could not connect to {}: {}", url, e);
                return Err(PestoError::Connection(e));
            }
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Could not read error body from {}: {}", request.path(), e);
                    format!("<body unavailable: {}>", e)
                }
            };
            tracing::warn!("{} returned {}", request.path(), status);
            return Err(PestoError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Like [`PestoClient::send`] but returns the `data` member of the body.
    pub(crate) async fn send_enveloped(&self, request: &Request) -> Result<Value> {
        let body: Value = self.send(request).await?;
        unwrap_data(body)
    }
}

fn unwrap_data(body: Value) -> Result<Value> {
    match body {
        Value::Object(mut map) => map.remove("data").ok_or_else(|| PestoError::MissingField {
            field: "data".to_string(),
        }),
        _ => Err(PestoError::MissingField {
            field: "data".to_string(),
        }),
    }
}
