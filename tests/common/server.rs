//! Mock feature service
//!
//! Wraps a `wiremock` server that answers `applyEdits` requests.

use feature_service::{ClientOptions, FeatureServiceClient};
use serde_json::Value;
use std::collections::HashMap;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the service on the mock server
pub const SERVICE_PATH: &str = "/arcgis/rest/services/Parcels/FeatureServer";

pub struct MockFeatureService {
    pub server: MockServer,
}

impl MockFeatureService {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Service URL as a client would be configured with it
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), SERVICE_PATH)
    }

    pub fn client(&self) -> FeatureServiceClient {
        self.client_with(ClientOptions::default())
    }

    pub fn client_with(&self, options: ClientOptions) -> FeatureServiceClient {
        FeatureServiceClient::new(self.url(), options).expect("client should build")
    }

    /// Answer exactly one `applyEdits` POST with `response`
    pub async fn expect_apply_edits(&self, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(format!("{}/applyEdits", SERVICE_PATH)))
            .and(query_param("f", "json"))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn respond_json(&self, body: Value) {
        self.expect_apply_edits(ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    /// Form parameters of every request received so far
    pub async fn received_forms(&self) -> Vec<HashMap<String, String>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                url::form_urlencoded::parse(&request.body)
                    .into_owned()
                    .collect()
            })
            .collect()
    }
}
