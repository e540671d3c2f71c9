use crate::core::{Disposition, OutputRecord, RawRecord};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde_json::{Map, Value};

const PROCESSED_ONCE_KEY: &str = "processedOnce";
const PROCESSED_TIMESTAMP_KEY: &str = "processedTimestamp";

/// Per-batch record transformer: decode → parse → filter → transform →
/// re-encode. A bad record becomes a `ProcessingFailed` outcome; it never
/// aborts the batch.
pub struct RecordProcessor;

impl RecordProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Processes a whole batch, returning exactly one outcome per input
    /// record, in input order.
    pub fn process(&self, records: &[RawRecord]) -> Vec<OutputRecord> {
        tracing::info!("Processing batch of {} records", records.len());

        let output: Vec<OutputRecord> = records
            .iter()
            .map(|record| self.process_record(record))
            .collect();

        let ok = output
            .iter()
            .filter(|r| r.result == Disposition::Ok)
            .count();
        let dropped = output
            .iter()
            .filter(|r| r.result == Disposition::Dropped)
            .count();
        let failed = output
            .iter()
            .filter(|r| r.result == Disposition::ProcessingFailed)
            .count();
        tracing::info!(
            "Processing completed: {} ok, {} dropped, {} failed",
            ok,
            dropped,
            failed
        );

        output
    }

    fn process_record(&self, record: &RawRecord) -> OutputRecord {
        let payload = match decode_payload(&record.data) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to decode record {}: {}", record.record_id, e);
                return OutputRecord::failed(record.record_id.clone());
            }
        };

        let parsed: Value = match serde_json::from_str(&payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Failed to parse record {}: {}", record.record_id, e);
                return OutputRecord::failed(record.record_id.clone());
            }
        };

        // The filter and transform are defined over log objects only.
        let entry = match parsed {
            Value::Object(entry) => entry,
            other => {
                tracing::warn!(
                    "Record {} is valid JSON but not an object ({})",
                    record.record_id,
                    json_type_name(&other)
                );
                return OutputRecord::failed(record.record_id.clone());
            }
        };

        if should_filter_out_log(&entry) {
            tracing::debug!("Filtered out record {}", record.record_id);
            return OutputRecord::dropped(record.record_id.clone());
        }

        let transformed = transform_log_data(entry);
        let encoded = match serde_json::to_string(&Value::Object(transformed)) {
            Ok(json) => BASE64_STANDARD.encode(json),
            Err(e) => {
                tracing::error!(
                    "Failed to re-encode record {}: {}",
                    record.record_id,
                    e
                );
                return OutputRecord::failed(record.record_id.clone());
            }
        };

        tracing::debug!("Transformed record {}", record.record_id);
        OutputRecord::ok(record.record_id.clone(), encoded)
    }
}

impl Default for RecordProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_payload(data: &str) -> crate::utils::error::Result<String> {
    let bytes = BASE64_STANDARD.decode(data)?;
    Ok(String::from_utf8(bytes)?)
}

/// Idempotence filter: a record already marked by a prior pass through this
/// pipeline is dropped instead of reprocessed.
fn should_filter_out_log(entry: &Map<String, Value>) -> bool {
    matches!(entry.get(PROCESSED_ONCE_KEY), Some(Value::Bool(true)))
}

/// Stamps the entry with the processing timestamp (epoch millis) and the
/// idempotence marker. Existing fields with those names are overwritten.
fn transform_log_data(mut entry: Map<String, Value>) -> Map<String, Value> {
    let now_millis = chrono::Utc::now().timestamp_millis();
    entry.insert(PROCESSED_TIMESTAMP_KEY.to_string(), Value::from(now_millis));
    entry.insert(PROCESSED_ONCE_KEY.to_string(), Value::Bool(true));
    entry
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
