use serde::{Deserialize, Serialize};

/// A single base64-encoded log record as it arrives off the stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "recordId")]
    pub record_id: String,
    pub data: String,
}

/// Per-record outcome tag. Serialized exactly as "Ok", "Dropped",
/// "ProcessingFailed" on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    Ok,
    Dropped,
    ProcessingFailed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "recordId")]
    pub record_id: String,
    pub result: Disposition,
    // Present iff result == Ok; omitted from JSON otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl OutputRecord {
    pub fn ok(record_id: String, data: String) -> Self {
        Self {
            record_id,
            result: Disposition::Ok,
            data: Some(data),
        }
    }

    pub fn dropped(record_id: String) -> Self {
        Self {
            record_id,
            result: Disposition::Dropped,
            data: None,
        }
    }

    pub fn failed(record_id: String) -> Self {
        Self {
            record_id,
            result: Disposition::ProcessingFailed,
            data: None,
        }
    }
}

/// Batch envelope in: `{ "records": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationEvent {
    pub records: Vec<RawRecord>,
}

/// Batch envelope out, index-aligned with the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationResult {
    pub records: Vec<OutputRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_uses_camel_case_wire_names() {
        let record: RawRecord =
            serde_json::from_str(r#"{"recordId":"abc","data":"eyJ4IjoxfQ=="}"#).unwrap();
        assert_eq!(record.record_id, "abc");
        assert_eq!(record.data, "eyJ4IjoxfQ==");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"recordId\":\"abc\""));
    }

    #[test]
    fn test_disposition_serializes_to_exact_strings() {
        assert_eq!(
            serde_json::to_string(&Disposition::Ok).unwrap(),
            "\"Ok\""
        );
        assert_eq!(
            serde_json::to_string(&Disposition::Dropped).unwrap(),
            "\"Dropped\""
        );
        assert_eq!(
            serde_json::to_string(&Disposition::ProcessingFailed).unwrap(),
            "\"ProcessingFailed\""
        );
    }

    #[test]
    fn test_output_record_omits_data_when_absent() {
        let dropped = OutputRecord::dropped("1".to_string());
        let json = serde_json::to_string(&dropped).unwrap();
        assert_eq!(json, r#"{"recordId":"1","result":"Dropped"}"#);

        let failed = OutputRecord::failed("2".to_string());
        let json = serde_json::to_string(&failed).unwrap();
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_output_record_includes_data_for_ok() {
        let ok = OutputRecord::ok("1".to_string(), "cGF5bG9hZA==".to_string());
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(
            json,
            r#"{"recordId":"1","result":"Ok","data":"cGF5bG9hZA=="}"#
        );
    }

    #[test]
    fn test_transformation_event_roundtrip() {
        let event: TransformationEvent = serde_json::from_str(
            r#"{"records":[{"recordId":"1","data":"e30="},{"recordId":"2","data":"e30="}]}"#,
        )
        .unwrap();
        assert_eq!(event.records.len(), 2);
        assert_eq!(event.records[1].record_id, "2");
    }
}
