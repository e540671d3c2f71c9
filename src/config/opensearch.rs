use crate::core::DocumentIndexer;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{validate_url, Validate};
use async_trait::async_trait;
use reqwest::Client;
use std::env;

#[derive(Debug, Clone)]
pub struct OpenSearchConfig {
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl OpenSearchConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            endpoint: env::var("OPENSEARCH_ENDPOINT").map_err(|_| {
                RelayError::MissingConfigError {
                    field: "OPENSEARCH_ENDPOINT".to_string(),
                }
            })?,
            username: env::var("OPENSEARCH_USERNAME").ok(),
            password: env::var("OPENSEARCH_PASSWORD").ok(),
        })
    }
}

impl Validate for OpenSearchConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        Ok(())
    }
}

/// HTTP indexer against an OpenSearch-compatible `POST /{collection}/_doc`
/// endpoint. Credentials are optional; when set, requests use basic auth.
#[derive(Debug, Clone)]
pub struct OpenSearchIndexer {
    client: Client,
    endpoint: String,
    username: Option<String>,
    password: Option<String>,
}

impl OpenSearchIndexer {
    pub fn new(config: OpenSearchConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            username: config.username,
            password: config.password,
        }
    }
}

#[async_trait]
impl DocumentIndexer for OpenSearchIndexer {
    async fn index(&self, collection: &str, document: &[u8]) -> Result<()> {
        let url = format!("{}/{}/_doc", self.endpoint, collection);

        let mut request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(document.to_vec());

        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::IndexError {
                message: format!("{} returned {}: {}", url, status, body),
            });
        }

        tracing::debug!("Document indexed into {} ({})", collection, status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn indexer_for(server: &MockServer) -> OpenSearchIndexer {
        OpenSearchIndexer::new(OpenSearchConfig {
            endpoint: server.url(""),
            username: None,
            password: None,
        })
    }

    #[tokio::test]
    async fn test_index_posts_document_to_collection() {
        let server = MockServer::start();
        let doc_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/purchase_info/_doc")
                .header("Content-Type", "application/json")
                .body(r#"{"item":"book"}"#);
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"result": "created"}));
        });

        let indexer = indexer_for(&server);
        let result = indexer
            .index("purchase_info", br#"{"item":"book"}"#)
            .await;

        doc_mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_index_sends_basic_auth_when_configured() {
        let server = MockServer::start();
        let doc_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/logs/_doc")
                // base64("admin:secret")
                .header("Authorization", "Basic YWRtaW46c2VjcmV0");
            then.status(201);
        });

        let indexer = OpenSearchIndexer::new(OpenSearchConfig {
            endpoint: server.url(""),
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
        });

        let result = indexer.index("logs", b"{}").await;

        doc_mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_error_status_is_index_error() {
        let server = MockServer::start();
        let doc_mock = server.mock(|when, then| {
            when.method(POST).path("/purchase_info/_doc");
            then.status(503).body("cluster unavailable");
        });

        let indexer = indexer_for(&server);
        let result = indexer.index("purchase_info", b"{}").await;

        doc_mock.assert();
        match result {
            Err(RelayError::IndexError { message }) => {
                assert!(message.contains("503"));
                assert!(message.contains("cluster unavailable"));
            }
            other => panic!("expected IndexError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_validation_rejects_bad_endpoint() {
        let config = OpenSearchConfig {
            endpoint: "not a url".to_string(),
            username: None,
            password: None,
        };
        assert!(config.validate().is_err());

        let config = OpenSearchConfig {
            endpoint: "https://search.example.com:9200".to_string(),
            username: None,
            password: None,
        };
        assert!(config.validate().is_ok());
    }
}
