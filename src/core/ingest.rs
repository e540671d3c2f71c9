use crate::core::{ConfigProvider, StreamPublisher};
use crate::utils::error::Result;

/// Front door of the pipeline: validates an incoming request body and puts
/// it onto the configured stream partition.
pub struct StreamIngestor<P: StreamPublisher, C: ConfigProvider> {
    publisher: P,
    config: C,
}

impl<P: StreamPublisher, C: ConfigProvider> StreamIngestor<P, C> {
    pub fn new(publisher: P, config: C) -> Self {
        Self { publisher, config }
    }

    /// Parses `body` as JSON and publishes the re-serialized document.
    /// A malformed body is an error to the caller; nothing is published.
    pub async fn ingest(&self, body: &str) -> Result<()> {
        let document: serde_json::Value = serde_json::from_str(body)?;
        let payload = serde_json::to_vec(&document)?;

        tracing::debug!(
            "Publishing {} bytes to stream {} (partition key {})",
            payload.len(),
            self.config.stream_name(),
            self.config.partition_key()
        );

        self.publisher
            .publish(
                self.config.stream_name(),
                &payload,
                self.config.partition_key(),
            )
            .await?;

        tracing::info!("Published document to stream {}", self.config.stream_name());
        Ok(())
    }
}
