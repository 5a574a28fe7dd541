//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, ScaleFamily};
use crate::config::{CommonConfigDef, ConfigDef, DeprecationReporter, SinceInfoMapBuilder};
use crate::error::{Error, Result, ResultExt};
use crate::google;
use crate::scale::{Scale, TimeScale};
use crate::strings::{CasedString, StringCase};
use crate::system::{properties, AllowList, CheckType, EnvCheck, SystemCheck};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        for definition in &self.cli.defines {
            properties::define(definition)?;
        }

        let msg = match &self.cli.command {
            Commands::Scale {
                value,
                time,
                family,
                at,
            } => Self::scale(*value, *time, *family, *at),
            Commands::Case { text, from, to } => Self::case(text, *from, *to),
            Commands::GcpValidate { file } => self.gcp_validate(file).await?,
            Commands::Allowed { check, value, env } => Self::allowed(*check, value, *env),
            Commands::SinceMap { file } => self.since_map(file).await?,
            Commands::Report { set, since_map } => {
                self.report(set, since_map.as_deref()).await?
            }
        };
        self.output_message(&msg);
        Ok(())
    }

    // ========================================================================
    // Commands
    // ========================================================================

    fn scale(value: i64, time: bool, family: ScaleFamily, at: Option<Scale>) -> Value {
        if time {
            let scale = TimeScale::scale_of(value);
            return json!({
                "value": value,
                "scale": scale.label(),
                "formatted": scale.format(value),
                "display": scale.display_value(value),
            });
        }
        let scale = at.unwrap_or_else(|| Scale::scale_of(value, family.scales()));
        json!({
            "value": value,
            "scale": scale.name(),
            "formatted": scale.format(value),
            "display": scale.display_value(value),
        })
    }

    fn case(text: &str, from: StringCase, to: Option<StringCase>) -> Value {
        let cased = CasedString::new(from, text);
        let targets: Vec<StringCase> = match to {
            Some(case) => vec![case],
            None => StringCase::ALL.to_vec(),
        };
        let converted: Vec<Value> = targets
            .into_iter()
            .map(|case| json!({ "case": case.name(), "text": cased.to_case(case) }))
            .collect();
        json!({
            "input": text,
            "segments": cased.segments(),
            "converted": converted,
        })
    }

    async fn gcp_validate(&self, file: &Path) -> Result<Value> {
        let contents = tokio::fs::read(file)
            .await
            .with_context(|| format!("Failed to read credentials {}", file.display()))?;
        google::validate_credential_json(&contents)?;
        info!(file = %file.display(), "Credentials accepted");
        Ok(json!({ "file": file.display().to_string(), "valid": true }))
    }

    fn allowed(check: CheckType, value: &str, env: bool) -> Value {
        let allow: &dyn AllowList = if env { &EnvCheck } else { &SystemCheck };
        let allowed = allow.allowed(check, value);
        let mut msg = json!({
            "check": check.name(),
            "key": allow.key(check),
            "value": value,
            "allowed": allowed,
        });
        if !allowed {
            msg["message"] = Value::String(allow.format_error(check, value));
        }
        msg
    }

    async fn since_map(&self, file: &Path) -> Result<Value> {
        let map = Self::load_since_map(file).await?;
        let mut def = CommonConfigDef::new()?;
        map.apply_to(&mut def);

        let entries: Vec<String> = map
            .entries()
            .iter()
            .map(|(range, data)| format!("{range}:{data}"))
            .collect();
        Ok(json!({
            "entries": entries,
            "keys": Self::describe_since(&def),
        }))
    }

    async fn report(&self, set: &[String], since_map: Option<&Path>) -> Result<Value> {
        let originals = parse_assignments(set)?;
        let mut def = CommonConfigDef::new()?;
        if let Some(file) = since_map {
            Self::load_since_map(file).await?.apply_to(&mut def);
        }

        let validation = def.validate(&originals);
        let valid = validation.iter().all(|v| v.is_valid());
        let deprecations = DeprecationReporter::warn(&def, &originals);
        debug!(valid, deprecations = deprecations.len(), "Report complete");

        let keys: Vec<Value> = def
            .keys()
            .iter()
            .map(|key| {
                json!({
                    "name": key.name,
                    "type": key.config_type,
                    "default": key.default_value.value(),
                    "importance": key.importance,
                    "group": key.group,
                    "internal": key.internal,
                    "since": key.since(),
                    "deprecated": key.deprecation_message(),
                    "documentation": key.key.documentation,
                })
            })
            .collect();
        Ok(json!({
            "valid": valid,
            "keys": keys,
            "validation": validation,
            "deprecations": deprecations,
        }))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn load_since_map(file: &Path) -> Result<SinceInfoMapBuilder> {
        let contents = tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read since map {}", file.display()))?;
        let mut map = SinceInfoMapBuilder::new();
        map.parse(contents.as_bytes())?;
        Ok(map)
    }

    fn describe_since(def: &ConfigDef) -> Vec<Value> {
        def.keys()
            .iter()
            .map(|key| json!({ "name": key.name, "since": key.since() }))
            .collect()
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Parse `key=value` arguments into a property map. Later keys win.
fn parse_assignments(assignments: &[String]) -> Result<HashMap<String, String>> {
    assignments
        .iter()
        .map(|assignment| {
            let (key, value) = assignment.split_once('=').ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Option '{assignment}' must have the form key=value"
                ))
            })?;
            Ok((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_assignments() {
        let props =
            parse_assignments(&["tasks.max=3".to_string(), " task.id = 2 ".to_string()]).unwrap();
        assert_eq!(props["tasks.max"], "3");
        assert_eq!(props["task.id"], "2");
    }

    #[test]
    fn test_parse_assignments_rejects_missing_equals() {
        let err = parse_assignments(&["tasks.max".to_string()]).unwrap_err();
        assert!(err.to_string().contains("key=value"));
    }

    #[test]
    fn test_scale_message() {
        let msg = Runner::scale(1536, false, ScaleFamily::Iec, None);
        assert_eq!(msg["scale"], "KiB");
        assert_eq!(msg["formatted"], "1.5 KiB");
        assert_eq!(msg["display"], "1.5 KiB (1536 bytes)");
    }

    #[test]
    fn test_scale_message_time() {
        let msg = Runner::scale(90_000, true, ScaleFamily::Iec, None);
        assert_eq!(msg["scale"], "min");
        assert_eq!(msg["formatted"], "1.5 min");
    }

    #[test]
    fn test_case_message() {
        let msg = Runner::case("hello_world", StringCase::Snake, Some(StringCase::Kebab));
        assert_eq!(msg["converted"][0]["text"], "hello-world");
        assert_eq!(msg["segments"], json!(["hello", "world"]));
    }

    #[test]
    fn test_allowed_message_reports_key() {
        let msg = Runner::allowed(CheckType::Cmd, "/usr/bin/never-allowed", true);
        assert_eq!(msg["allowed"], false);
        assert_eq!(msg["key"], EnvCheck::env_var(CheckType::Cmd));
        assert!(msg["message"].is_string());
    }

    #[tokio::test]
    async fn test_report_flags_invalid_values() {
        let cli = Cli::parse_from(["connect-commons", "report", "--set", "tasks.max=0"]);
        let runner = Runner::new(cli);
        let msg = runner
            .report(&["tasks.max=0".to_string()], None)
            .await
            .unwrap();
        assert_eq!(msg["valid"], false);
        assert_eq!(msg["keys"][0]["since"], "Kafka 0.9.0.0");
    }

    #[test]
    fn test_cli_parses_defines() {
        let cli = Cli::parse_from([
            "connect-commons",
            "-D",
            "a=b",
            "allowed",
            "file",
            "/tmp/x",
        ]);
        assert_eq!(cli.defines, vec!["a=b".to_string()]);
        assert!(matches!(
            cli.command,
            Commands::Allowed {
                check: CheckType::File,
                ..
            }
        ));
    }
}
