pub mod indexer;
pub mod ingest;
pub mod processor;

pub use crate::domain::model::{
    Disposition, OutputRecord, RawRecord, TransformationEvent, TransformationResult,
};
pub use crate::domain::ports::{ConfigProvider, DocumentIndexer, StreamPublisher};
pub use crate::utils::error::Result;
