// src/core/service_client.rs
//! Shared JSON-over-HTTP client used by every outbound adapter

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::utils::normalize_base_url;

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client whose requests all carry `headers`
    pub fn new(base_url: &str, timeout_seconds: u64, headers: &[(&str, &str)]) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name: {}", name))?;
            let mut value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", name))?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            default_headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .default_headers(default_headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Same as `new` with an `Authorization: Bearer` header
    pub fn with_bearer(
        base_url: &str,
        timeout_seconds: u64,
        token: &str,
        extra_headers: &[(&str, &str)],
    ) -> Result<Self> {
        let bearer = format!("Bearer {}", token);
        let mut headers = vec![("Authorization", bearer.as_str())];
        headers.extend_from_slice(extra_headers);
        Self::new(base_url, timeout_seconds, &headers)
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Endpoint path built from segments, each percent-encoded so ids
    /// returned by a remote service cannot alter the path or query
    pub fn endpoint(segments: &[&str]) -> Result<String> {
        let mut url = Url::parse("http://localhost/").context("Failed to build endpoint")?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Failed to build endpoint"))?
            .extend(segments);
        Ok(url.path().to_string())
    }

    /// POST a JSON body and decode the JSON reply
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::read_json(response, &url).await
    }

    /// PATCH a JSON body and decode the JSON reply
    pub async fn patch_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("PATCH {}", url);

        let response = self
            .client
            .patch(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to PATCH {}", url))?;

        Self::read_json(response, &url).await
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        Self::read_json(response, &url).await
    }

    async fn read_json<R: DeserializeOwned>(response: Response, url: &str) -> Result<R> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .with_context(|| format!("Failed to parse JSON response from {}", url))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("{} returned {}: {}", url, status, error_text);
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}
