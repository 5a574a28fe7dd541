//! Value validators for configuration keys
//!
//! Every validator describes itself through `Display`; the description is
//! shown in generated documentation.

use super::types::ConfigValue;
use crate::error::{Error, Result};
use crate::scale::{Scale, TimeScale};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Checks a configuration value
pub trait Validator: fmt::Display + fmt::Debug + Send + Sync {
    /// Fail when `value` is not acceptable for the configuration `name`.
    /// `None` is an unset value.
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()>;
}

fn shown(value: Option<&ConfigValue>) -> String {
    value.map(ToString::to_string).unwrap_or_else(|| "null".to_string())
}

fn number(name: &str, value: Option<&ConfigValue>) -> Result<(i64, f64)> {
    let value = value.ok_or_else(|| Error::invalid_value(name, "null", "Value must be non-null"))?;
    match (value.as_i64(), value.as_f64()) {
        (Some(int), Some(float)) => Ok((int, float)),
        (None, Some(float)) => Ok((float as i64, float)),
        _ => Err(Error::invalid_value(name, value, "Value must be a number")),
    }
}

// ============================================================================
// Non-empty values
// ============================================================================

/// Requires a list to have at least one entry; unset is allowed
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyList;

impl Validator for NonEmptyList {
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()> {
        match value.and_then(ConfigValue::as_list) {
            Some(list) if list.is_empty() => {
                Err(Error::invalid_value(name, shown(value), "A non-empty list"))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for NonEmptyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("A non-empty list")
    }
}

/// Requires a password to be non-blank; unset is allowed
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyPassword;

impl Validator for NonEmptyPassword {
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };
        let blank = match value {
            ConfigValue::Password(password) => password.value().trim().is_empty(),
            other => other.to_string().trim().is_empty(),
        };
        if blank {
            return Err(Error::invalid_value(name, value, "Password must be non-empty"));
        }
        Ok(())
    }
}

impl fmt::Display for NonEmptyPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("A password string.  May be null.  May not be an empty string.")
    }
}

// ============================================================================
// Predicate gate
// ============================================================================

type Predicate = dyn Fn(Option<&ConfigValue>) -> bool + Send + Sync;

/// Runs the inner validator only when the predicate accepts the value
#[derive(Clone)]
pub struct PredicateGated {
    predicate: Arc<Predicate>,
    validator: Arc<dyn Validator>,
}

impl PredicateGated {
    /// Gate `validator` behind `predicate`
    pub fn new<P, V>(predicate: P, validator: V) -> Self
    where
        P: Fn(Option<&ConfigValue>) -> bool + Send + Sync + 'static,
        V: Validator + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            validator: Arc::new(validator),
        }
    }
}

impl Validator for PredicateGated {
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()> {
        if (self.predicate)(value) {
            self.validator.ensure_valid(name, value)?;
        }
        Ok(())
    }
}

impl fmt::Display for PredicateGated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.validator, f)
    }
}

impl fmt::Debug for PredicateGated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateGated")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Numeric ranges
// ============================================================================

fn check_bounds(
    name: &str,
    value: Option<&ConfigValue>,
    min: Option<i64>,
    max: Option<i64>,
    display: impl Fn(i64) -> String,
) -> Result<()> {
    let (int, float) = number(name, value)?;
    if let Some(min) = min {
        if int < min {
            return Err(Error::invalid_value(
                name,
                shown(value),
                format!("Value must be at least {}", display(min)),
            ));
        }
    }
    if let Some(max) = max {
        if float > max as f64 {
            return Err(Error::invalid_value(
                name,
                shown(value),
                format!("Value must be no more than {}", display(max)),
            ));
        }
    }
    Ok(())
}

fn write_bounds(
    f: &mut fmt::Formatter<'_>,
    min: Option<String>,
    max: Option<String>,
) -> fmt::Result {
    match (min, max) {
        (Some(min), Some(max)) => write!(f, "[{min},...,{max}]"),
        (Some(min), None) => write!(f, "[{min},...]"),
        (None, Some(max)) => write!(f, "[...,{max}]"),
        (None, None) => f.write_str("[...]"),
    }
}

/// A numeric range, inclusive at both ends
#[derive(Debug, Clone, Copy)]
pub struct Range {
    min: Option<i64>,
    max: Option<i64>,
}

impl Range {
    /// At least `min`
    pub fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Between `min` and `max`
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl Validator for Range {
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()> {
        check_bounds(name, value, self.min, self.max, |v| v.to_string())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bounds(
            f,
            self.min.map(|v| v.to_string()),
            self.max.map(|v| v.to_string()),
        )
    }
}

/// A byte count range, described in the most readable of the given scales
#[derive(Debug, Clone)]
pub struct ScaleValidator {
    min: Option<i64>,
    min_scale: Scale,
    max: Option<i64>,
    max_scale: Scale,
}

impl ScaleValidator {
    fn new(min: Option<i64>, max: Option<i64>, possible_scales: &[Scale]) -> Self {
        let scale = |bytes: Option<i64>| {
            bytes.map_or(Scale::B, |b| Scale::scale_of(b, possible_scales))
        };
        Self {
            min,
            min_scale: scale(min),
            max,
            max_scale: scale(max),
        }
    }

    /// At least `min` bytes
    pub fn at_least(min: i64, possible_scales: &[Scale]) -> Self {
        Self::new(Some(min), None, possible_scales)
    }

    /// Between `min` and `max` bytes
    pub fn between(min: i64, max: i64, possible_scales: &[Scale]) -> Self {
        Self::new(Some(min), Some(max), possible_scales)
    }
}

impl Validator for ScaleValidator {
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()> {
        check_bounds(name, value, self.min, self.max, |bytes| {
            let scale = if Some(bytes) == self.min {
                self.min_scale
            } else {
                self.max_scale
            };
            scale.display_value(bytes)
        })
    }
}

impl fmt::Display for ScaleValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bounds(
            f,
            self.min.map(|b| self.min_scale.format(b)),
            self.max.map(|b| self.max_scale.format(b)),
        )
    }
}

/// A millisecond range, described in the most readable time unit
#[derive(Debug, Clone)]
pub struct TimeScaleValidator {
    min: Option<i64>,
    max: Option<i64>,
}

impl TimeScaleValidator {
    /// At least `min` milliseconds
    pub fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Between `min` and `max` milliseconds
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl Validator for TimeScaleValidator {
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()> {
        check_bounds(name, value, self.min, self.max, |millis| {
            TimeScale::scale_of(millis).display_value(millis)
        })
    }
}

impl fmt::Display for TimeScaleValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = |millis: i64| TimeScale::scale_of(millis).format(millis);
        write_bounds(f, self.min.map(format), self.max.map(format))
    }
}

// ============================================================================
// URL
// ============================================================================

/// Builder for [`UrlValidator`]
#[derive(Debug, Clone, Default)]
pub struct UrlValidatorBuilder {
    schemes: BTreeSet<String>,
    hosts: BTreeSet<String>,
}

impl UrlValidatorBuilder {
    /// Allow these schemes. No schemes allows all.
    pub fn schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes.extend(schemes.into_iter().map(Into::into));
        self
    }

    /// Allow these hosts. No hosts allows all.
    pub fn hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hosts.extend(hosts.into_iter().map(Into::into));
        self
    }

    /// Build the validator
    pub fn build(&self) -> UrlValidator {
        UrlValidator {
            schemes: self.schemes.iter().cloned().collect(),
            hosts: self.hosts.iter().cloned().collect(),
        }
    }
}

/// Requires a parseable URL, optionally restricted to schemes and hosts
#[derive(Debug, Clone)]
pub struct UrlValidator {
    schemes: Vec<String>,
    hosts: Vec<String>,
}

impl UrlValidator {
    /// Start building
    pub fn builder() -> UrlValidatorBuilder {
        UrlValidatorBuilder::default()
    }

    fn format_output(part: &str, valid: &[String]) -> String {
        match valid {
            [single] => format!("URL {part} must be: '{single}'."),
            _ => format!("URL {part} must be one of: '{}'.", valid.join("', '")),
        }
    }
}

impl Validator for UrlValidator {
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };
        let text = value.to_string();
        if text.trim().is_empty() {
            return Err(Error::invalid_value(name, &text, "must be non-empty"));
        }
        let url = Url::parse(&text)
            .map_err(|_| Error::invalid_value(name, &text, "should be valid URL"))?;
        if !self.schemes.is_empty() && !self.schemes.iter().any(|s| s == url.scheme()) {
            return Err(Error::invalid_value(
                name,
                &text,
                Self::format_output("scheme", &self.schemes),
            ));
        }
        if !self.hosts.is_empty()
            && !url
                .host_str()
                .is_some_and(|host| self.hosts.iter().any(|h| h == host))
        {
            return Err(Error::invalid_value(
                name,
                &text,
                Self::format_output("host", &self.hosts),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for UrlValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("A valid URL.")?;
        if !self.schemes.is_empty() {
            write!(f, " {}", Self::format_output("scheme", &self.schemes))?;
        }
        if !self.hosts.is_empty() {
            write!(f, " {}", Self::format_output("host", &self.hosts))?;
        }
        Ok(())
    }
}

// ============================================================================
// Enum
// ============================================================================

/// Requires one of a fixed set of names, ignoring case
#[derive(Debug, Clone)]
pub struct EnumValidator {
    values: Vec<String>,
}

impl EnumValidator {
    /// Accept any of `values`
    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for EnumValidator {
    fn ensure_valid(&self, name: &str, value: Option<&ConfigValue>) -> Result<()> {
        let text = shown(value);
        if self.values.iter().any(|v| v.eq_ignore_ascii_case(&text)) {
            return Ok(());
        }
        Err(Error::invalid_value(
            name,
            &text,
            format!(
                "String must be one of (case insensitive): {}",
                self.values.join(", ")
            ),
        ))
    }
}

impl fmt::Display for EnumValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(case insensitive) [{}]", self.values.join(", "))
    }
}
