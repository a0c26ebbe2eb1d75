//! Transport failure handling over HTTP
//!
//! Transport errors reach the caller as reported, never as a batch result.

#[cfg(test)]
mod tests {
    use crate::assert_err;
    use crate::common::{EditFactory, MockFeatureService};
    use feature_service::{
        ClientOptions, EditEvent, FeatureServiceClient, FeatureServiceError, TransportError,
    };
    use serde_json::json;
    use wiremock::ResponseTemplate;

    /// HTTP 500 is passed through with its status and body
    #[tokio::test]
    async fn test_server_error_passes_through() {
        let service = MockFeatureService::start().await;
        service
            .expect_apply_edits(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .await;

        let err = assert_err!(service.client().apply_edits(&EditFactory::two_layers()).await);

        assert!(err.is_transport_failure());
        match err {
            FeatureServiceError::Transport(TransportError::Http { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal Server Error");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    /// A 200 carrying the service error envelope is a transport failure
    #[tokio::test]
    async fn test_service_error_envelope() {
        let service = MockFeatureService::start().await;
        service
            .respond_json(json!({
                "error": {
                    "code": 500,
                    "message": "Unable to complete operation.",
                    "details": ["Parser error: Some parameters could not be recognized."]
                }
            }))
            .await;

        let err = assert_err!(service.client().apply_edits(&EditFactory::two_layers()).await);

        match err {
            FeatureServiceError::Transport(TransportError::Service {
                code,
                message,
                details,
            }) => {
                assert_eq!(code, 500);
                assert_eq!(message, "Unable to complete operation.");
                assert_eq!(details.len(), 1);
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    /// A body that is not JSON cannot be normalized
    #[tokio::test]
    async fn test_non_json_body() {
        let service = MockFeatureService::start().await;
        service
            .expect_apply_edits(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .await;

        let err = assert_err!(service.client().apply_edits(&EditFactory::two_layers()).await);
        assert!(matches!(
            err,
            FeatureServiceError::Transport(TransportError::InvalidResponse(_))
        ));
    }

    /// Nothing listening on the port
    #[tokio::test]
    async fn test_connection_refused() {
        let client = FeatureServiceClient::new(
            "http://127.0.0.1:1/arcgis/rest/services/Parcels/FeatureServer",
            ClientOptions {
                timeout: Some(5),
                ..Default::default()
            },
        )
        .unwrap();
        let mut events = client.subscribe();

        let err = assert_err!(client.apply_edits(&EditFactory::two_layers()).await);
        assert!(matches!(
            err,
            FeatureServiceError::Transport(TransportError::Network(_))
        ));

        assert_eq!(
            events.recv().await.unwrap(),
            EditEvent::Submitted { layers: 2, rows: 4 }
        );
        assert!(matches!(
            events.recv().await.unwrap(),
            EditEvent::TransportFailed { .. }
        ));
    }

    /// A trailing slash on the configured URL does not change the endpoint
    #[tokio::test]
    async fn test_trailing_slash_url() {
        let service = MockFeatureService::start().await;
        service.respond_json(json!([])).await;

        let client =
            FeatureServiceClient::new(format!("{}/", service.url()), ClientOptions::default())
                .unwrap();
        assert_eq!(client.url(), service.url());

        let edits: Vec<feature_service::EditSet> = Vec::new();
        assert!(client.apply_edits(&edits).await.is_ok());
    }
}
