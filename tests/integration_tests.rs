//! Integration tests across modules
//!
//! Exercises the public API the way a connector uses it: defining options on
//! top of the common ones, loading since overrides from disk, validating
//! credential files and retrying under a timer.

use connect_commons::config::{
    CommonConfig, CommonConfigDef, CommonConfigSetter, ConfigType, DeprecatedInfo,
    DeprecationReporter, ExtendedConfigKey, KeyBuilder, ScaleValidator, SinceInfo,
    SinceInfoMapBuilder, UrlValidator, MAX_TASKS,
};
use connect_commons::google::validate_credential_json;
use connect_commons::scale::Scale;
use connect_commons::strings::Version;
use connect_commons::system::{properties, CheckType, SystemCheck};
use connect_commons::timing::{Backoff, Timer};
use connect_commons::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

fn since(group: &str, artifact: &str, version: &str) -> SinceInfo {
    SinceInfo::builder()
        .group_id(group)
        .artifact_id(artifact)
        .version(version)
        .build()
        .unwrap()
}

fn connector_def() -> CommonConfigDef {
    CommonConfigDef::new()
        .unwrap()
        .define(
            ExtendedConfigKey::builder("file.max.bytes")
                .config_type(ConfigType::Long)
                .default_value(Scale::MiB.bytes())
                .validator(ScaleValidator::between(
                    Scale::KiB.bytes(),
                    Scale::GiB.bytes(),
                    &Scale::IEC,
                ))
                .documentation("Largest file to write")
                .since(since("io.example", "sink", "1.2.0")),
        )
        .unwrap()
        .define(
            ExtendedConfigKey::builder("endpoint.url")
                .config_type(ConfigType::String)
                .default_value("https://localhost")
                .validator(UrlValidator::builder().schemes(["https"]).build())
                .documentation("Service endpoint")
                .deprecated_info(
                    DeprecatedInfo::builder()
                        .description("Use service.url")
                        .for_removal(true)
                        .since(since("io.example", "sink", "1.4.0")),
                )
                .since(since("io.example", "sink", "1.0.0")),
        )
        .unwrap()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_connector_config_end_to_end() {
    let def = connector_def();
    let mut props = CommonConfigSetter::default()
        .max_tasks(8)
        .task_id(3)
        .build();
    props.insert("file.max.bytes".to_string(), "2048".to_string());

    let config = CommonConfig::new(&def, props).unwrap();
    assert_eq!(config.max_tasks(), 8);
    assert_eq!(config.task_id(), 3);
    assert_eq!(
        config.get("file.max.bytes").and_then(|v| v.as_i64()),
        Some(2048)
    );
    assert_eq!(
        config.get("endpoint.url").and_then(|v| v.as_str()),
        Some("https://localhost")
    );
}

#[test]
fn test_connector_config_reports_every_error() {
    let def = connector_def();
    let props = HashMap::from([
        (MAX_TASKS.to_string(), "0".to_string()),
        ("file.max.bytes".to_string(), "10".to_string()),
        ("endpoint.url".to_string(), "http://example.com".to_string()),
    ]);

    let message = match CommonConfig::new(&def, props) {
        Err(Error::Config { message }) => message,
        other => panic!("expected a configuration error, got {other:?}"),
    };
    let lines: Vec<&str> = message.lines().collect();
    assert_eq!(lines[0], "There are errors in the configuration:");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains(MAX_TASKS));
    assert!(lines[2].contains("file.max.bytes"));
    assert!(lines[3].contains("endpoint.url"));
}

#[test]
fn test_deprecated_option_in_use() {
    let def = connector_def();
    let originals = HashMap::from([
        ("endpoint.url".to_string(), "https://example.com".to_string()),
        ("file.max.bytes".to_string(), "4096".to_string()),
    ]);

    let report = DeprecationReporter::report(&def, &originals);
    assert_eq!(
        report,
        vec![
            "Option endpoint.url is deprecated for removal since io.example:sink:1.4.0: Use service.url"
                .to_string()
        ]
    );

    let at_default = HashMap::from([(
        "endpoint.url".to_string(),
        "https://localhost".to_string(),
    )]);
    assert!(DeprecationReporter::report(&def, &at_default).is_empty());
}

#[test]
fn test_since_map_file_applied_to_definition() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# release renames").unwrap();
    writeln!(file, "io.example:sink:[1.0,1.3):Sink 1.x").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "io.example:sink:[1.3,2.0):io.example:connector:2.0").unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    let mut map = SinceInfoMapBuilder::new();
    map.parse(contents.as_bytes()).unwrap();
    assert_eq!(map.entries().len(), 2);

    let mut def = connector_def();
    map.apply_to(&mut def);

    assert_eq!(def.get("file.max.bytes").unwrap().since(), "Sink 1.x");
    assert_eq!(def.get("endpoint.url").unwrap().since(), "Sink 1.x");
    assert_eq!(
        def.get("endpoint.url").unwrap().deprecation_message(),
        "Deprecated for removal since io.example:connector:2.0: Use service.url"
    );
    // keys from other artifacts keep their own since text
    assert_eq!(def.get(MAX_TASKS).unwrap().since(), "Kafka 0.9.0.0");
}

#[test]
fn test_since_map_reports_bad_line() {
    let input = "a:b:[1.0]:c\nnot-enough:parts\n";
    let err = SinceInfoMapBuilder::new().parse(input.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}

// ============================================================================
// Credentials
// ============================================================================

#[test]
fn test_credential_file_requires_allowed_source() {
    let source = NamedTempFile::new().unwrap();
    let source_path = source.path().display().to_string();
    let credentials = json!({
        "type": "external_account",
        "token_url": "https://sts.googleapis.com/v1/token",
        "credential_source": { "file": source_path },
    });
    let bytes = serde_json::to_vec(&credentials).unwrap();

    let key = SystemCheck::system_property(CheckType::File);
    properties::remove(key);
    let err = validate_credential_json(&bytes).unwrap_err();
    assert!(err.to_string().contains(key));

    properties::set(key, format!("/not/this/one, {source_path}"));
    validate_credential_json(&bytes).unwrap();
    properties::remove(key);
}

// ============================================================================
// Timing
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_retry_loop_with_timer_and_backoff() {
    let timer = Arc::new(Timer::new(Duration::from_secs(30)));
    let mut backoff = Backoff::new(timer.clone());
    timer.start().unwrap();

    let mut attempts = 0;
    while !timer.is_expired() {
        attempts += 1;
        if attempts == 5 {
            break;
        }
        backoff.delay().await.unwrap();
    }

    assert_eq!(attempts, 5);
    assert!(!timer.is_expired());
    assert_eq!(backoff.wait_count(), 4);
    assert!(timer.elapsed() < timer.duration());
}

// ============================================================================
// Version lookup
// ============================================================================

#[test]
fn test_version_from_properties_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# generated").unwrap();
    writeln!(file, "project-version=2.1.0").unwrap();

    let version = Version::load(file.path());
    assert!(version.is_loaded());
    assert_eq!(version.of("project-version"), "2.1.0");
    assert_eq!(version.of("missing"), "unknown");
}
