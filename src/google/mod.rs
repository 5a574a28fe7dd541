//! Validation of Google Cloud credential files
//!
//! External account credentials can make the client read local files, call
//! URLs or run commands. [`validate_credential_json`] rejects credentials
//! that point anywhere other than the fixed Google and AWS endpoints or
//! values an operator has explicitly allowed through [`SystemCheck`].

use crate::error::{Error, Result};
use crate::system::{AllowList, CheckType, SystemCheck};
use serde_json::{Map, Value};
use tracing::debug;

const TOKEN_URL: &str = "https://sts.googleapis.com/v1/token";
const IMPERSONATION_PREFIX: &str =
    "https://iamcredentials.googleapis.com/v1/projects/-/serviceAccounts/";
const IMPERSONATION_SUFFIX: &str = ":generateAccessToken";

const AWS_URLS: [&str; 2] = [
    "https://169.254.169.254/latest/meta-data/iam/security-credentials",
    "https://[fd00:ec2::254]/latest/meta-data/iam/security-credentials",
];
const AWS_REGION_URLS: [&str; 2] = [
    "http://169.254.169.254/latest/meta-data/placement/availability-zone",
    "http://[fd00:ec2::254]/latest/meta-data/placement/availability-zone",
];
const AWS_TOKEN_URLS: [&str; 2] = [
    "http://169.254.169.254/latest/api/token",
    "http://[fd00:ec2::254]/latest/api/token",
];

/// Validate a credential JSON document against the [`SystemCheck`] allow lists
pub fn validate_credential_json(credentials: &[u8]) -> Result<()> {
    validate_credential_json_with(credentials, &SystemCheck)
}

/// Validate a credential JSON document against the given allow lists
pub fn validate_credential_json_with(credentials: &[u8], allow: &dyn AllowList) -> Result<()> {
    let contents: Map<String, Value> = serde_json::from_slice(credentials)?;

    if contents.get("type").and_then(Value::as_str) == Some("service_account") {
        debug!("Service account credentials accepted");
        return Ok(());
    }

    if let Some(url) = contents.get("token_url") {
        if text(url) != TOKEN_URL {
            return Err(Error::credential(format!(
                "token_url must have the value: '{TOKEN_URL}'"
            )));
        }
    }

    if let Some(url) = contents.get("service_account_impersonation_url") {
        let url = text(url);
        if !(url.starts_with(IMPERSONATION_PREFIX) && url.ends_with(IMPERSONATION_SUFFIX)) {
            return Err(Error::credential(format!(
                "'{url}' is not an allowed value for service_account_impersonation_url"
            )));
        }
    }

    if let Some(source) = contents.get("credential_source") {
        validate_credential_source(source, allow)?;
    }
    Ok(())
}

fn validate_credential_source(source: &Value, allow: &dyn AllowList) -> Result<()> {
    if let Some(file) = source.get("file") {
        allow.ensure_allowed(CheckType::File, &text(file))?;
    }
    if let Some(url) = source.get("url") {
        allow.ensure_allowed(CheckType::Uri, &text(url))?;
    }
    if let Some(command) = source.get("executable").and_then(|e| e.get("command")) {
        allow.ensure_allowed(CheckType::Cmd, &text(command))?;
    }
    if let Some(aws) = source.get("aws") {
        one_of(aws, "url", &AWS_URLS)?;
        one_of(aws, "region_url", &AWS_REGION_URLS)?;
        one_of(aws, "imdsv2_session_token_url", &AWS_TOKEN_URLS)?;
    }
    Ok(())
}

fn one_of(aws: &Value, field: &str, valid: &[&str]) -> Result<()> {
    match aws.get(field) {
        Some(value) if !valid.contains(&text(value).as_str()) => Err(Error::credential(format!(
            "credential_source.aws.{field} must be one of '{}'",
            valid.join("', '")
        ))),
        _ => Ok(()),
    }
}

/// The string form of a JSON value; strings are not quoted
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
