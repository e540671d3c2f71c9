#[cfg(feature = "lambda")]
use crate::core::{ConfigProvider, StreamPublisher};
#[cfg(feature = "lambda")]
use crate::utils::error::{RelayError, Result};
#[cfg(feature = "lambda")]
use aws_sdk_kinesis::primitives::Blob;
#[cfg(feature = "lambda")]
use aws_sdk_kinesis::Client as KinesisClient;
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub stream_name: String,
    pub partition_key: String,
    pub index_name: String,
    pub aws_region: String,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            stream_name: env::var("STREAM_NAME").map_err(|_| RelayError::MissingConfigError {
                field: "STREAM_NAME".to_string(),
            })?,
            partition_key: env::var("PARTITION_KEY").unwrap_or_else(|_| "1".to_string()),
            index_name: env::var("INDEX_NAME").unwrap_or_else(|_| "purchase_info".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        })
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
    fn stream_name(&self) -> &str {
        &self.stream_name
    }

    fn partition_key(&self) -> &str {
        &self.partition_key
    }

    fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[cfg(feature = "lambda")]
impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_stream_name("stream_name", &self.stream_name)?;
        validate_non_empty_string("partition_key", &self.partition_key)?;
        validate_index_name("index_name", &self.index_name)?;
        validate_non_empty_string("aws_region", &self.aws_region)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct KinesisStreamPublisher {
    client: KinesisClient,
}

#[cfg(feature = "lambda")]
impl KinesisStreamPublisher {
    pub fn new(client: KinesisClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "lambda")]
impl StreamPublisher for KinesisStreamPublisher {
    async fn publish(&self, stream: &str, payload: &[u8], partition_key: &str) -> Result<()> {
        self.client
            .put_record()
            .stream_name(stream)
            .data(Blob::new(payload))
            .partition_key(partition_key)
            .send()
            .await
            .map_err(|e| RelayError::PublishError {
                message: format!("Failed to put record onto {}: {}", stream, e),
            })?;

        Ok(())
    }
}
