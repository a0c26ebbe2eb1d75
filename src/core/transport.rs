//! HTTP transport used to reach the feature service

use crate::config::ClientOptions;
use crate::core::errors::{FeatureServiceError, TransportError};
use crate::utils::truncate_string;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// A POST with form-encoded parameters
#[derive(Debug, Clone, PartialEq)]
pub struct FormRequest {
    pub url: Url,
    pub form: Vec<(String, String)>,
}

impl FormRequest {
    /// Value of a form parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Sends a request and yields the decoded JSON body.
///
/// Implementations report non-2xx statuses, undecodable bodies and service
/// error envelopes as [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn post_form(&self, request: FormRequest) -> Result<Value, TransportError>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(options: &ClientOptions) -> crate::core::errors::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent.clone());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let http_client = builder.build().map_err(|e| {
            FeatureServiceError::Config(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { http_client })
    }

    /// Wrap an existing client
    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_form(&self, request: FormRequest) -> Result<Value, TransportError> {
        debug!("POST {}", request.url);

        let response = self
            .http_client
            .post(request.url)
            .form(&request.form)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            error!(
                "Feature service error: {} - {}",
                status,
                truncate_string(&body, 512)
            );
            return Err(TransportError::Http {
                status: status.as_u16(),
                body,
            });
        }

        decode_body(&body)
    }
}

#[derive(Deserialize)]
struct ServiceErrorEnvelope {
    error: ServiceErrorBody,
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Vec<String>,
}

/// Decode a 2xx body, surfacing the service's error envelope as a failure
pub fn decode_body(body: &str) -> Result<Value, TransportError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TransportError::InvalidResponse(format!("body is not JSON: {}", e)))?;

    if value.get("error").is_some() {
        let envelope: ServiceErrorEnvelope = serde_json::from_value(value).map_err(|e| {
            TransportError::InvalidResponse(format!("malformed error envelope: {}", e))
        })?;
        return Err(TransportError::Service {
            code: envelope.error.code,
            message: envelope.error.message,
            details: envelope.error.details,
        });
    }

    Ok(value)
}
