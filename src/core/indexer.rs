use crate::core::{ConfigProvider, DocumentIndexer, RawRecord};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub indexed: usize,
    pub failed: usize,
}

/// Tail of the pipeline: decodes stream records and writes each document to
/// the search store. One document's failure never aborts its siblings.
pub struct BatchIndexer<I: DocumentIndexer, C: ConfigProvider> {
    indexer: I,
    config: C,
}

impl<I: DocumentIndexer, C: ConfigProvider> BatchIndexer<I, C> {
    pub fn new(indexer: I, config: C) -> Self {
        Self { indexer, config }
    }

    pub async fn index_batch(&self, records: &[RawRecord]) -> IndexSummary {
        let collection = self.config.index_name();
        tracing::info!(
            "Indexing batch of {} records into {}",
            records.len(),
            collection
        );

        let mut summary = IndexSummary::default();
        for record in records {
            let document = match decode_document(&record.data) {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!(
                        "Failed to decode record {} for indexing: {}",
                        record.record_id,
                        e
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            match self.indexer.index(collection, document.as_bytes()).await {
                Ok(()) => {
                    tracing::debug!("Indexed record {}", record.record_id);
                    summary.indexed += 1;
                }
                Err(e) => {
                    tracing::error!("Error indexing record {}: {}", record.record_id, e);
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            "Indexing completed: {} indexed, {} failed",
            summary.indexed,
            summary.failed
        );
        summary
    }
}

fn decode_document(data: &str) -> crate::utils::error::Result<String> {
    let bytes = BASE64_STANDARD.decode(data)?;
    Ok(String::from_utf8(bytes)?)
}
