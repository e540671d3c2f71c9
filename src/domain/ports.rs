use crate::utils::error::Result;
use async_trait::async_trait;

/// Ordered, partitioned stream sink. At-least-once; ordering only holds
/// within a partition key.
pub trait StreamPublisher: Send + Sync {
    fn publish(
        &self,
        stream: &str,
        payload: &[u8],
        partition_key: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Single-document write into a search store. Failures are per call and
/// must not corrupt sibling documents in a calling loop.
#[async_trait]
pub trait DocumentIndexer: Send + Sync {
    async fn index(&self, collection: &str, document: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn stream_name(&self) -> &str;
    fn partition_key(&self) -> &str;
    fn index_name(&self) -> &str;
}
