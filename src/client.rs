//! HTTP transport for worldstate documents.

use crate::config::WorldstateConfig;
use crate::error::{Result, WorldstateError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde_json::Value;
use tracing::debug;

/// Thin GET-only client for the worldstate endpoints. The upstream exposes a
/// single large JSON document per platform with no parameters and no
/// authentication, so the whole transport surface is two fetch operations.
#[derive(Clone)]
pub struct WorldstateClient {
    http: HttpClient,
    config: WorldstateConfig,
}

impl WorldstateClient {
    pub fn new(config: WorldstateConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &WorldstateConfig {
        &self.config
    }

    /// Fetches the raw worldstate document from the primary endpoint.
    pub async fn fetch_document(&self) -> Result<Value> {
        let url = self.config.endpoint();
        debug!(%url, "fetching worldstate document");
        let response = self.http.get(&url).send().await?;
        Self::parse_json(response).await
    }

    /// Fetches the raw document from the fallback endpoint, used to fill in
    /// categories the primary source does not carry.
    pub async fn fetch_fallback_document(&self) -> Result<Value> {
        let url = self
            .config
            .fallback_endpoint()
            .ok_or_else(|| WorldstateError::Other("no fallback endpoint configured".into()))?;
        debug!(%url, "fetching fallback worldstate document");
        let response = self.http.get(&url).send().await?;
        Self::parse_json(response).await
    }

    async fn parse_json(response: Response) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            response.json::<Value>().await.map_err(WorldstateError::from)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(build_http_error(status, &body))
        }
    }
}

fn build_http_client(config: &WorldstateConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| WorldstateError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| WorldstateError::Other(err.to_string()))
}

fn build_http_error(status: StatusCode, body: &str) -> WorldstateError {
    WorldstateError::http(status, body.to_string())
}
