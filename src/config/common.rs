//! Options shared by every connector

use super::def::{ConfigDef, ValidatedValue};
use super::extended::ExtendedConfigKey;
use super::key::KeyBuilder;
use super::since::SinceInfo;
use super::types::{ConfigType, ConfigValue, Importance, Width};
use super::validators::Range;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

/// Maximum number of tasks
pub const MAX_TASKS: &str = "tasks.max";
/// Task identifier
pub const TASK_ID: &str = "task.id";

const GROUP: &str = "common";
const DEFAULT_MAX_TASKS: i32 = 1;
const DEFAULT_TASK_ID: i32 = 1;

/// A [`ConfigDef`] holding the common options. Connectors define their own
/// keys on top.
#[derive(Debug, Clone)]
pub struct CommonConfigDef {
    def: ConfigDef,
}

impl CommonConfigDef {
    /// Define the common options
    pub fn new() -> Result<Self> {
        let mut tasks_since = SinceInfo::builder()
            .group_id("org.apache.kafka")
            .artifact_id("kafka")
            .version("0.9.0.0")
            .build()?;
        tasks_since.set_override(&SinceInfo::builder().version("Kafka 0.9.0.0"))?;

        let task_id_since = SinceInfo::builder()
            .group_id("io.aiven.commons")
            .artifact_id("kafka-config")
            .version("1.0.0")
            .build()?;

        let def = ConfigDef::new()
            .define(
                ExtendedConfigKey::builder(MAX_TASKS)
                    .config_type(ConfigType::Int)
                    .default_value(DEFAULT_MAX_TASKS)
                    .validator(Range::at_least(1))
                    .importance(Importance::High)
                    .group(GROUP)
                    .order_in_group(1)
                    .width(Width::Short)
                    .documentation("Maximum number of tasks to use for this connector.")
                    .since(tasks_since),
            )?
            .define(
                ExtendedConfigKey::builder(TASK_ID)
                    .config_type(ConfigType::Int)
                    .default_value(DEFAULT_TASK_ID)
                    .validator(Range::at_least(0))
                    .importance(Importance::High)
                    .group(GROUP)
                    .order_in_group(2)
                    .width(Width::Short)
                    .internal(true)
                    .documentation("The task ID that this connector is working with.")
                    .since(task_id_since),
            )?;
        Ok(Self { def })
    }

    /// Add a connector specific key
    pub fn define(mut self, key: impl Into<ExtendedConfigKey>) -> Result<Self> {
        self.def.define_key(key)?;
        Ok(self)
    }

    /// The underlying definition
    pub fn into_inner(self) -> ConfigDef {
        self.def
    }
}

impl Deref for CommonConfigDef {
    type Target = ConfigDef;

    fn deref(&self) -> &ConfigDef {
        &self.def
    }
}

impl DerefMut for CommonConfigDef {
    fn deref_mut(&mut self) -> &mut ConfigDef {
        &mut self.def
    }
}

/// A validated configuration built on [`CommonConfigDef`]
///
/// Only the task options are carried. The Kafka retry backoff options
/// (`BackoffPolicyFragment`) are not part of this definition; connectors
/// that need them define their own keys.
#[derive(Debug, Clone)]
pub struct CommonConfig {
    originals: HashMap<String, String>,
    values: HashMap<String, Option<ConfigValue>>,
}

impl CommonConfig {
    /// Validate `originals` against `def`, reporting every problem at once
    pub fn new(def: &CommonConfigDef, originals: HashMap<String, String>) -> Result<Self> {
        let errors: Vec<String> = def
            .validate(&originals)
            .into_iter()
            .filter(|v| !v.is_valid())
            .flat_map(|v: ValidatedValue| v.error_messages)
            .collect();
        if !errors.is_empty() {
            return Err(Error::config(format!(
                "There are errors in the configuration:\n{}",
                errors.join("\n")
            )));
        }
        let values = def.parse(&originals)?;
        Ok(Self { originals, values })
    }

    /// The properties the configuration was created from
    pub fn originals(&self) -> &HashMap<String, String> {
        &self.originals
    }

    /// A parsed value, `None` when unknown or unset
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name).and_then(Option::as_ref)
    }

    /// Maximum number of tasks
    pub fn max_tasks(&self) -> i32 {
        self.get(MAX_TASKS)
            .and_then(ConfigValue::as_int)
            .unwrap_or(DEFAULT_MAX_TASKS)
    }

    /// Identifier of this task
    pub fn task_id(&self) -> i32 {
        self.get(TASK_ID)
            .and_then(ConfigValue::as_int)
            .unwrap_or(DEFAULT_TASK_ID)
    }
}

/// Writes the common options into a property map
#[derive(Debug, Clone, Default)]
pub struct CommonConfigSetter {
    props: HashMap<String, String>,
}

impl CommonConfigSetter {
    /// Start from existing properties
    pub fn new(props: HashMap<String, String>) -> Self {
        Self { props }
    }

    /// Set the maximum number of tasks
    pub fn max_tasks(mut self, max_tasks: i32) -> Self {
        self.props.insert(MAX_TASKS.to_string(), max_tasks.to_string());
        self
    }

    /// Set the task identifier
    pub fn task_id(mut self, task_id: i32) -> Self {
        self.props.insert(TASK_ID.to_string(), task_id.to_string());
        self
    }

    /// The resulting properties
    pub fn build(self) -> HashMap<String, String> {
        self.props
    }
}
