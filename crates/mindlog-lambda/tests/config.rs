use std::collections::HashMap;
use std::time::Duration;

use mindlog_lambda::config::{DEFAULT_MAX_TEXT_LENGTH, ServerConfig};

fn from(vars: &[(&str, &str)]) -> eyre::Result<ServerConfig> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_apply() {
    let config = from(&[("MINDLOG_JWT_SECRET", "s3cret")]).unwrap();
    assert_eq!(config.bucket, None);
    assert_eq!(config.jwt_secret, "s3cret");
    assert!(!config.dev_secret);
    assert_eq!(config.jwt_ttl, Duration::from_secs(24 * 3600));
    assert_eq!(config.max_text_length, DEFAULT_MAX_TEXT_LENGTH);
    assert_eq!(config.classifier_url, None);
    assert_eq!(config.analysis_config_path, None);
}

#[test]
fn values_are_read() {
    let config = from(&[
        ("MINDLOG_JWT_SECRET", "s3cret"),
        ("MINDLOG_BUCKET", "journal-bucket"),
        ("MINDLOG_JWT_TTL_HOURS", "2"),
        ("MINDLOG_MAX_TEXT_LENGTH", "1000"),
        ("MINDLOG_CLASSIFIER_URL", "http://localhost:8080/classify"),
        ("MINDLOG_ANALYSIS_CONFIG", "/etc/mindlog/analysis.json"),
    ])
    .unwrap();
    assert_eq!(config.bucket.as_deref(), Some("journal-bucket"));
    assert_eq!(config.jwt_ttl, Duration::from_secs(7200));
    assert_eq!(config.max_text_length, 1000);
    assert_eq!(
        config.classifier_url.as_deref(),
        Some("http://localhost:8080/classify")
    );
    assert!(config.analysis_config_path.is_some());
}

#[test]
fn blank_values_count_as_unset() {
    let config = from(&[("MINDLOG_JWT_SECRET", "s3cret"), ("MINDLOG_BUCKET", "  ")]).unwrap();
    assert_eq!(config.bucket, None);
}

#[test]
fn malformed_numbers_are_rejected() {
    assert!(from(&[("MINDLOG_JWT_SECRET", "s"), ("MINDLOG_JWT_TTL_HOURS", "soon")]).is_err());
    assert!(from(&[("MINDLOG_JWT_SECRET", "s"), ("MINDLOG_MAX_TEXT_LENGTH", "0")]).is_err());
}

#[test]
fn missing_secret_depends_on_build() {
    let result = from(&[]);
    if cfg!(debug_assertions) {
        let config = result.unwrap();
        assert!(config.dev_secret);
        assert!(!config.jwt_secret.is_empty());
    } else {
        assert!(result.is_err());
    }
}
