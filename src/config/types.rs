//! Configuration value types
//!
//! The value model follows Kafka's `ConfigDef`: every key has a
//! [`ConfigType`] that controls how the raw string is parsed into a
//! [`ConfigValue`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Config Type
// ============================================================================

/// The type of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfigType {
    /// `true` or `false`, case-insensitive
    Boolean,
    /// A trimmed string
    #[default]
    String,
    /// A 32-bit integer
    Int,
    /// A 16-bit integer
    Short,
    /// A 64-bit integer
    Long,
    /// A 64-bit float
    Double,
    /// A comma separated list of trimmed strings
    List,
    /// A class (type) name
    Class,
    /// A secret string, hidden when displayed
    Password,
}

impl ConfigType {
    /// Upper-case name of the type
    pub const fn name(self) -> &'static str {
        match self {
            ConfigType::Boolean => "BOOLEAN",
            ConfigType::String => "STRING",
            ConfigType::Int => "INT",
            ConfigType::Short => "SHORT",
            ConfigType::Long => "LONG",
            ConfigType::Double => "DOUBLE",
            ConfigType::List => "LIST",
            ConfigType::Class => "CLASS",
            ConfigType::Password => "PASSWORD",
        }
    }

    /// Parse a raw string for the configuration `name`
    pub fn parse(self, name: &str, raw: &str) -> Result<ConfigValue> {
        let trimmed = raw.trim();
        let invalid = |expected: &str| {
            let shown = if self == ConfigType::Password {
                Password::HIDDEN
            } else {
                raw
            };
            Error::invalid_value(name, shown, format!("Expected value to be {expected}"))
        };

        Ok(match self {
            ConfigType::Boolean => {
                if trimmed.eq_ignore_ascii_case("true") {
                    ConfigValue::Boolean(true)
                } else if trimmed.eq_ignore_ascii_case("false") {
                    ConfigValue::Boolean(false)
                } else {
                    return Err(invalid("either true or false"));
                }
            }
            ConfigType::String => ConfigValue::String(trimmed.to_string()),
            ConfigType::Int => {
                ConfigValue::Int(trimmed.parse().map_err(|_| invalid("a 32-bit integer"))?)
            }
            ConfigType::Short => {
                ConfigValue::Short(trimmed.parse().map_err(|_| invalid("a 16-bit integer"))?)
            }
            ConfigType::Long => {
                ConfigValue::Long(trimmed.parse().map_err(|_| invalid("a 64-bit integer"))?)
            }
            ConfigType::Double => {
                ConfigValue::Double(trimmed.parse().map_err(|_| invalid("a number"))?)
            }
            ConfigType::List => {
                if trimmed.is_empty() {
                    ConfigValue::List(Vec::new())
                } else {
                    ConfigValue::List(trimmed.split(',').map(|s| s.trim().to_string()).collect())
                }
            }
            ConfigType::Class => {
                if trimmed.is_empty() {
                    return Err(invalid("a class name"));
                }
                ConfigValue::Class(trimmed.to_string())
            }
            ConfigType::Password => ConfigValue::Password(Password::new(raw)),
        })
    }

    /// Check whether `value` is of this type
    pub fn matches(self, value: &ConfigValue) -> bool {
        value.config_type() == self
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How important a configuration is to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Importance {
    /// Must be reviewed by every user
    High,
    /// Usually worth reviewing
    #[default]
    Medium,
    /// Rarely changed
    Low,
}

/// Display width hint for user interfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Width {
    /// No hint
    #[default]
    None,
    /// Short values such as numbers
    Short,
    /// Medium length values
    Medium,
    /// Long values such as lists or URLs
    Long,
}

// ============================================================================
// Password
// ============================================================================

/// A secret string that never shows its value through `Display` or `Debug`
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Password(String);

impl Password {
    /// Text shown in place of the secret
    pub const HIDDEN: &'static str = "[hidden]";

    /// Wrap a secret
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The secret itself
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::HIDDEN)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::HIDDEN)
    }
}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(Self::HIDDEN)
    }
}

// ============================================================================
// Config Value
// ============================================================================

/// A parsed configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[allow(missing_docs)]
pub enum ConfigValue {
    Boolean(bool),
    String(String),
    Int(i32),
    Short(i16),
    Long(i64),
    Double(f64),
    List(Vec<String>),
    Class(String),
    Password(Password),
}

impl ConfigValue {
    /// The type of this value
    pub fn config_type(&self) -> ConfigType {
        match self {
            ConfigValue::Boolean(_) => ConfigType::Boolean,
            ConfigValue::String(_) => ConfigType::String,
            ConfigValue::Int(_) => ConfigType::Int,
            ConfigValue::Short(_) => ConfigType::Short,
            ConfigValue::Long(_) => ConfigType::Long,
            ConfigValue::Double(_) => ConfigType::Double,
            ConfigValue::List(_) => ConfigType::List,
            ConfigValue::Class(_) => ConfigType::Class,
            ConfigValue::Password(_) => ConfigType::Password,
        }
    }

    /// Convert to `config_type`. Strings are parsed; integers widen or narrow
    /// when the value fits.
    pub fn coerce(self, name: &str, config_type: ConfigType) -> Result<ConfigValue> {
        if self.config_type() == config_type {
            return Ok(self);
        }
        let mismatch = |value: &ConfigValue| {
            Error::invalid_value(
                name,
                value,
                format!("Expected a value of type {config_type}"),
            )
        };
        match (&self, config_type) {
            (ConfigValue::String(raw), _) => config_type.parse(name, raw),
            (_, ConfigType::Int) => self
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(ConfigValue::Int)
                .ok_or_else(|| mismatch(&self)),
            (_, ConfigType::Short) => self
                .as_i64()
                .and_then(|v| i16::try_from(v).ok())
                .map(ConfigValue::Short)
                .ok_or_else(|| mismatch(&self)),
            (_, ConfigType::Long) => self
                .as_i64()
                .map(ConfigValue::Long)
                .ok_or_else(|| mismatch(&self)),
            (_, ConfigType::Double) => self
                .as_f64()
                .map(ConfigValue::Double)
                .ok_or_else(|| mismatch(&self)),
            _ => Err(mismatch(&self)),
        }
    }

    /// Integer value, if this is an integer type
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(v) => Some(i64::from(*v)),
            ConfigValue::Short(v) => Some(i64::from(*v)),
            ConfigValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Double(v) => Some(*v),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    /// `i32` value, if this is an `Int`
    pub fn as_int(&self) -> Option<i32> {
        match self {
            ConfigValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// String value of a `String` or `Class`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(v) | ConfigValue::Class(v) => Some(v),
            _ => None,
        }
    }

    /// List value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Password value
    pub fn as_password(&self) -> Option<&Password> {
        match self {
            ConfigValue::Password(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Boolean(v) => write!(f, "{v}"),
            ConfigValue::String(v) | ConfigValue::Class(v) => f.write_str(v),
            ConfigValue::Int(v) => write!(f, "{v}"),
            ConfigValue::Short(v) => write!(f, "{v}"),
            ConfigValue::Long(v) => write!(f, "{v}"),
            ConfigValue::Double(v) => write!(f, "{v}"),
            ConfigValue::List(v) => f.write_str(&v.join(",")),
            ConfigValue::Password(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i16> for ConfigValue {
    fn from(value: i16) -> Self {
        ConfigValue::Short(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Long(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Double(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        ConfigValue::List(value)
    }
}

impl From<Password> for ConfigValue {
    fn from(value: Password) -> Self {
        ConfigValue::Password(value)
    }
}

// ============================================================================
// Default Value
// ============================================================================

/// The default of a configuration key
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DefaultValue {
    /// No default: the key must be set
    #[default]
    Required,
    /// The key is optional and defaults to no value
    Null,
    /// The key defaults to this value
    Value(ConfigValue),
}

impl DefaultValue {
    /// Check whether the key may be omitted
    pub fn has_default(&self) -> bool {
        !matches!(self, DefaultValue::Required)
    }

    /// The default value, if there is one
    pub fn value(&self) -> Option<&ConfigValue> {
        match self {
            DefaultValue::Value(value) => Some(value),
            _ => None,
        }
    }
}
