#[cfg(feature = "lambda")]
use aws_config::BehaviorVersion;
#[cfg(feature = "lambda")]
use aws_sdk_kinesis::config::Region;
#[cfg(feature = "lambda")]
use aws_sdk_kinesis::Client as KinesisClient;
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use log_relay::core::{TransformationEvent, TransformationResult};
#[cfg(feature = "lambda")]
use log_relay::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use log_relay::{
    BatchIndexer, KinesisStreamPublisher, LambdaConfig, OpenSearchConfig, OpenSearchIndexer,
    RecordProcessor, StreamIngestor,
};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct IngestRequest {
    pub body: String,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct IngestResponse {
    pub message: String,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub indexed: usize,
    pub failed: usize,
}

#[cfg(feature = "lambda")]
async fn transform_handler(
    event: LambdaEvent<TransformationEvent>,
    processor: &RecordProcessor,
) -> Result<TransformationResult, Error> {
    Ok(TransformationResult {
        records: processor.process(&event.payload.records),
    })
}

#[cfg(feature = "lambda")]
async fn ingest_handler(
    event: LambdaEvent<IngestRequest>,
    ingestor: &StreamIngestor<KinesisStreamPublisher, LambdaConfig>,
) -> Result<IngestResponse, Error> {
    ingestor.ingest(&event.payload.body).await?;

    Ok(IngestResponse {
        message: "Data sent to stream".to_string(),
    })
}

#[cfg(feature = "lambda")]
async fn index_handler(
    event: LambdaEvent<TransformationEvent>,
    indexer: &BatchIndexer<OpenSearchIndexer, LambdaConfig>,
) -> Result<IndexResponse, Error> {
    let summary = indexer.index_batch(&event.payload.records).await;

    Ok(IndexResponse {
        message: "Data processed from stream".to_string(),
        indexed: summary.indexed,
        failed: summary.failed,
    })
}

#[cfg(feature = "lambda")]
async fn kinesis_client(lambda_config: &LambdaConfig) -> KinesisClient {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let config = aws_sdk_kinesis::config::Builder::from(&config)
        .region(Region::new(lambda_config.aws_region.clone()))
        .build();
    KinesisClient::from_conf(config)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // One deployable binary, three handlers; HANDLER selects which one
    // this function instance serves.
    let handler = std::env::var("HANDLER").unwrap_or_else(|_| "transform".to_string());
    tracing::info!("Starting log-relay lambda ({} handler)", handler);

    match handler.as_str() {
        "ingest" => {
            let lambda_config = LambdaConfig::from_env()?;
            lambda_config.validate()?;

            let client = kinesis_client(&lambda_config).await;
            let publisher = KinesisStreamPublisher::new(client);
            let ingestor = StreamIngestor::new(publisher, lambda_config);
            let ingestor = &ingestor;

            run(service_fn(move |event| ingest_handler(event, ingestor))).await
        }
        "index" => {
            let lambda_config = LambdaConfig::from_env()?;
            lambda_config.validate()?;

            let opensearch_config = OpenSearchConfig::from_env()?;
            opensearch_config.validate()?;

            let indexer =
                BatchIndexer::new(OpenSearchIndexer::new(opensearch_config), lambda_config);
            let indexer = &indexer;

            run(service_fn(move |event| index_handler(event, indexer))).await
        }
        _ => {
            let processor = RecordProcessor::new();
            let processor = &processor;

            run(service_fn(move |event| transform_handler(event, processor))).await
        }
    }
}
