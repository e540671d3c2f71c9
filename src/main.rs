use clap::Parser;
use log_relay::core::{TransformationEvent, TransformationResult};
use log_relay::utils::{logger, validation::Validate};
use log_relay::{CliConfig, RecordProcessor};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting log-relay CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(&config).await {
        Ok(result) => {
            tracing::info!(
                "✅ Batch processed successfully ({} records)",
                result.records.len()
            );
        }
        Err(e) => {
            tracing::error!("❌ Batch processing failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

// Batch-level failures (unreadable input, malformed envelope) are fatal here;
// per-record failures come back as ProcessingFailed dispositions instead.
async fn run(config: &CliConfig) -> log_relay::Result<TransformationResult> {
    let input = read_input(&config.input).await?;
    let event: TransformationEvent = serde_json::from_str(&input)?;

    let processor = RecordProcessor::new();
    let result = TransformationResult {
        records: processor.process(&event.records),
    };

    let rendered = serde_json::to_string_pretty(&result)?;
    write_output(&config.output, &rendered).await?;

    Ok(result)
}

async fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        Ok(buffer)
    } else {
        tokio::fs::read_to_string(path).await
    }
}

async fn write_output(path: &str, rendered: &str) -> std::io::Result<()> {
    if path == "-" {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await
    } else {
        tokio::fs::write(path, rendered).await
    }
}
