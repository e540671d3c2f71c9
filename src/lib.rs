pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

#[cfg(feature = "lambda")]
pub use crate::config::lambda::{KinesisStreamPublisher, LambdaConfig};

pub use crate::config::opensearch::{OpenSearchConfig, OpenSearchIndexer};
pub use crate::core::{
    indexer::BatchIndexer, ingest::StreamIngestor, processor::RecordProcessor,
};
pub use crate::utils::error::{RelayError, Result};
