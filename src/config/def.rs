//! Ordered collections of configuration keys

use super::extended::ExtendedConfigKey;
use super::types::{ConfigValue, DefaultValue};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// The outcome of validating a single key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedValue {
    /// Key name
    pub name: String,
    /// Parsed value, if parsing succeeded and a value or default exists
    pub value: Option<ConfigValue>,
    /// Problems found, empty when valid
    pub error_messages: Vec<String>,
}

impl ValidatedValue {
    /// Check whether the value has no errors
    pub fn is_valid(&self) -> bool {
        self.error_messages.is_empty()
    }
}

/// A set of configuration keys in definition order
#[derive(Debug, Clone, Default)]
pub struct ConfigDef {
    keys: Vec<ExtendedConfigKey>,
    index: HashMap<String, usize>,
}

impl ConfigDef {
    /// Create an empty definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key, consuming and returning the definition
    pub fn define(mut self, key: impl Into<ExtendedConfigKey>) -> Result<Self> {
        self.define_key(key)?;
        Ok(self)
    }

    /// Add a key.
    ///
    /// The default value is converted to the key type and checked by the
    /// validator. Names must be unique.
    pub fn define_key(&mut self, key: impl Into<ExtendedConfigKey>) -> Result<()> {
        let mut key = key.into();
        if self.index.contains_key(&key.name) {
            return Err(Error::DuplicateConfig {
                name: key.name.clone(),
            });
        }

        let name = key.name.clone();
        if let DefaultValue::Value(value) = &key.key.default_value {
            let value = value.clone().coerce(&name, key.config_type)?;
            key.key.default_value = DefaultValue::Value(value);
        }
        if let Some(validator) = &key.validator {
            match &key.default_value {
                DefaultValue::Value(value) => validator.ensure_valid(&name, Some(value))?,
                DefaultValue::Null => validator.ensure_valid(&name, None)?,
                DefaultValue::Required => {}
            }
        }

        debug!(name = %name, config_type = %key.config_type, "Defined configuration key");
        self.index.insert(name, self.keys.len());
        self.keys.push(key);
        Ok(())
    }

    /// Look up a key by name
    pub fn get(&self, name: &str) -> Option<&ExtendedConfigKey> {
        self.index.get(name).map(|&i| &self.keys[i])
    }

    /// Look up a key by name for modification
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ExtendedConfigKey> {
        let i = *self.index.get(name)?;
        self.keys.get_mut(i)
    }

    /// All keys in definition order
    pub fn keys(&self) -> &[ExtendedConfigKey] {
        &self.keys
    }

    /// All keys in definition order, for modification
    pub fn keys_mut(&mut self) -> impl Iterator<Item = &mut ExtendedConfigKey> {
        self.keys.iter_mut()
    }

    /// Key names in definition order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.name.as_str())
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check whether no keys are defined
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The default of every key that has a non-null default
    pub fn default_values(&self) -> HashMap<String, ConfigValue> {
        self.keys
            .iter()
            .filter_map(|k| k.default_value.value().map(|v| (k.name.clone(), v.clone())))
            .collect()
    }

    fn parse_key(
        key: &ExtendedConfigKey,
        props: &HashMap<String, String>,
    ) -> Result<Option<ConfigValue>> {
        let value = match props.get(&key.name) {
            Some(raw) => Some(key.config_type.parse(&key.name, raw)?),
            None => match &key.default_value {
                DefaultValue::Required => return Err(Error::missing_config(&key.name)),
                DefaultValue::Null => None,
                DefaultValue::Value(value) => Some(value.clone()),
            },
        };
        if let Some(validator) = &key.validator {
            validator.ensure_valid(&key.name, value.as_ref())?;
        }
        Ok(value)
    }

    /// Parse and validate `props`, failing on the first problem.
    ///
    /// Keys that are not set take their default; keys without a default must be set.
    pub fn parse(&self, props: &HashMap<String, String>) -> Result<HashMap<String, Option<ConfigValue>>> {
        self.keys
            .iter()
            .map(|key| Ok((key.name.clone(), Self::parse_key(key, props)?)))
            .collect()
    }

    /// Validate every key in `props`, collecting all problems
    pub fn validate(&self, props: &HashMap<String, String>) -> Vec<ValidatedValue> {
        self.keys
            .iter()
            .map(|key| {
                let (value, error_messages) = match Self::parse_key(key, props) {
                    Ok(value) => (value, Vec::new()),
                    Err(err) => {
                        let value = props
                            .get(&key.name)
                            .and_then(|raw| key.config_type.parse(&key.name, raw).ok());
                        (value, vec![err.to_string()])
                    }
                };
                ValidatedValue {
                    name: key.name.clone(),
                    value,
                    error_messages,
                }
            })
            .collect()
    }
}
