// src/source/http.rs

//! HTTP category source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{CategoryResponse, SourceConfig};
use crate::source::CategorySource;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &SourceConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Category source calling the storefront API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source for an explicit endpoint.
    pub fn new(url: &str, config: &SourceConfig) -> Result<Self> {
        let url = Url::parse(url)?;
        Ok(Self {
            client: create_client(config)?,
            url: url.to_string(),
        })
    }

    /// Create a source for the endpoint configured in `source.url`.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| AppError::config("source.url is not set"))?;
        Self::new(url, config)
    }
}

#[async_trait]
impl CategorySource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<CategoryResponse> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(&self.url, format!("HTTP status {status}")));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
