//! HTTP resource client
//!
//! One outbound call per invocation, no retries, no local recovery:
//! transport faults and non-2xx statuses surface as [`ClientError`]
//! values for the caller to act on.

use std::time::Duration;

use reqwest::{StatusCode, header};

use fhir_model::{Resource, ResourceCodec, ResourceRef};

use crate::config::Config;
use crate::error::ClientError;

/// Content type for FHIR reads
const FHIR_JSON: &str = "application/fhir+json; charset=UTF-8";

/// Content type for resource writes
const JSON: &str = "application/json";

/// Client for a FHIR server's resource endpoints
#[derive(Debug, Clone)]
pub struct FhirClient {
    http: reqwest::Client,
    base_url: String,
}

impl FhirClient {
    /// Build a client from configuration, with a per-request timeout
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{base}/fhir/{Type}/{id}`
    fn url_for(&self, target: &ResourceRef) -> String {
        format!("{}/fhir/{}", self.base_url, target.relative_path())
    }

    /// GET a resource and return the raw response body
    pub async fn fetch(&self, target: &ResourceRef) -> Result<Vec<u8>, ClientError> {
        let url = self.url_for(target);
        tracing::debug!(url = %url, "Fetching resource");

        let response = self
            .http
            .get(&url)
            .header(header::CONTENT_TYPE, FHIR_JSON)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::Body)?;

        if status.is_success() {
            Ok(body.to_vec())
        } else {
            Err(ClientError::from_status(status, &body))
        }
    }

    /// PUT raw resource bytes and return the response status
    pub async fn write(
        &self,
        target: &ResourceRef,
        body: Vec<u8>,
    ) -> Result<StatusCode, ClientError> {
        let url = self.url_for(target);
        tracing::debug!(url = %url, bytes = body.len(), "Writing resource");

        let response = self
            .http
            .put(&url)
            .header(header::CONTENT_TYPE, JSON)
            .body(body)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();
        if status.is_success() {
            Ok(status)
        } else {
            let body = response.bytes().await.unwrap_or_default();
            Err(ClientError::from_status(status, &body))
        }
    }

    /// Fetch a resource and decode it through the given codec
    pub async fn read(
        &self,
        codec: &impl ResourceCodec,
        target: &ResourceRef,
    ) -> Result<Resource, ClientError> {
        let body = self.fetch(target).await?;
        Ok(codec.decode(&body)?)
    }

    /// Encode a resource through the given codec and PUT it at its own
    /// reference; the resource must carry an id
    pub async fn update(
        &self,
        codec: &impl ResourceCodec,
        resource: &Resource,
    ) -> Result<StatusCode, ClientError> {
        let target = resource.reference()?;
        let body = codec.encode(resource)?;
        self.write(&target, body).await
    }
}
