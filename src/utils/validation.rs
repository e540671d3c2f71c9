use crate::utils::error::{RelayError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RelayError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

// Kinesis naming rules: 1-128 characters of [a-zA-Z0-9_.-]
pub fn validate_stream_name(field_name: &str, stream_name: &str) -> Result<()> {
    if stream_name.is_empty() || stream_name.len() > 128 {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: stream_name.to_string(),
            reason: "Stream name must be between 1 and 128 characters".to_string(),
        });
    }

    if !stream_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
    {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: stream_name.to_string(),
            reason: "Stream name can only contain letters, numbers, underscores, dots, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

// OpenSearch index naming rules: lowercase, no leading -/_/+, max 255 bytes
pub fn validate_index_name(field_name: &str, index_name: &str) -> Result<()> {
    if index_name.is_empty() || index_name.len() > 255 {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: index_name.to_string(),
            reason: "Index name must be between 1 and 255 characters".to_string(),
        });
    }

    if index_name.starts_with('-') || index_name.starts_with('_') || index_name.starts_with('+') {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: index_name.to_string(),
            reason: "Index name cannot start with '-', '_', or '+'".to_string(),
        });
    }

    if !index_name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.' || c == '-')
    {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: index_name.to_string(),
            reason: "Index name can only contain lowercase letters, numbers, underscores, dots, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com").is_ok());
        assert!(validate_url("endpoint", "http://localhost:9200").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_stream_name() {
        assert!(validate_stream_name("stream_name", "kinesis-demo-stream-dev").is_ok());
        assert!(validate_stream_name("stream_name", "logs_v2.raw").is_ok());
        assert!(validate_stream_name("stream_name", "").is_err());
        assert!(validate_stream_name("stream_name", "has spaces").is_err());
        assert!(validate_stream_name("stream_name", &"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_index_name() {
        assert!(validate_index_name("index_name", "purchase_info").is_ok());
        assert!(validate_index_name("index_name", "logs-2026.08").is_ok());
        assert!(validate_index_name("index_name", "").is_err());
        assert!(validate_index_name("index_name", "Uppercase").is_err());
        assert!(validate_index_name("index_name", "_hidden").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("partition_key", "1").is_ok());
        assert!(validate_non_empty_string("partition_key", "   ").is_err());
    }
}
