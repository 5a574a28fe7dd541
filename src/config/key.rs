//! Configuration keys and their builders

use super::types::{ConfigType, ConfigValue, DefaultValue, Importance, Width};
use super::validators::Validator;
use std::sync::Arc;

/// The definition of a single configuration option
#[derive(Debug, Clone)]
pub struct ConfigKey {
    /// Property name
    pub name: String,
    /// Value type
    pub config_type: ConfigType,
    /// Default, or [`DefaultValue::Required`]
    pub default_value: DefaultValue,
    /// Checks applied to the parsed value
    pub validator: Option<Arc<dyn Validator>>,
    /// Importance to users
    pub importance: Importance,
    /// Documentation text
    pub documentation: String,
    /// Documentation group
    pub group: Option<String>,
    /// Position within the group, `-1` when unordered
    pub order_in_group: i32,
    /// UI width hint
    pub width: Width,
    /// Human readable name
    pub display_name: String,
    /// Names of the options whose meaning depends on this one
    pub dependents: Vec<String>,
    /// Hidden from generated documentation
    pub internal: bool,
}

impl ConfigKey {
    /// Start building a key named `name`
    pub fn builder(name: impl Into<String>) -> ConfigKeyBuilder {
        ConfigKeyBuilder::new(name)
    }

    /// A builder holding a copy of this key
    pub fn to_builder(&self) -> ConfigKeyBuilder {
        ConfigKeyBuilder { key: self.clone() }
    }

    fn named(name: String) -> Self {
        Self {
            display_name: name.clone(),
            name,
            config_type: ConfigType::String,
            default_value: DefaultValue::Required,
            validator: None,
            importance: Importance::Medium,
            documentation: String::new(),
            group: None,
            order_in_group: -1,
            width: Width::None,
            dependents: Vec::new(),
            internal: false,
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Setters shared by every key builder
pub trait KeyBuilder: Sized {
    /// The key under construction
    fn base_mut(&mut self) -> &mut ConfigKey;

    /// Set the value type
    fn config_type(mut self, config_type: ConfigType) -> Self {
        self.base_mut().config_type = config_type;
        self
    }

    /// Set the default value
    fn default_value(mut self, value: impl Into<ConfigValue>) -> Self {
        self.base_mut().default_value = DefaultValue::Value(value.into());
        self
    }

    /// Make the key optional with no value
    fn null_default(mut self) -> Self {
        self.base_mut().default_value = DefaultValue::Null;
        self
    }

    /// Set the validator
    fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.base_mut().validator = Some(Arc::new(validator));
        self
    }

    /// Set the importance
    fn importance(mut self, importance: Importance) -> Self {
        self.base_mut().importance = importance;
        self
    }

    /// Set the documentation
    fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.base_mut().documentation = documentation.into();
        self
    }

    /// Set the group
    fn group(mut self, group: impl Into<String>) -> Self {
        self.base_mut().group = Some(group.into());
        self
    }

    /// Set the order within the group
    fn order_in_group(mut self, order: i32) -> Self {
        self.base_mut().order_in_group = order;
        self
    }

    /// Set the width hint
    fn width(mut self, width: Width) -> Self {
        self.base_mut().width = width;
        self
    }

    /// Set the display name
    fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.base_mut().display_name = display_name.into();
        self
    }

    /// Add dependents, skipping names already present
    fn dependents<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dependents = &mut self.base_mut().dependents;
        for name in names {
            let name = name.into();
            if !dependents.contains(&name) {
                dependents.push(name);
            }
        }
        self
    }

    /// Add a single dependent
    fn dependent(self, name: impl Into<String>) -> Self {
        self.dependents([name.into()])
    }

    /// Hide the key from documentation
    fn internal(mut self, internal: bool) -> Self {
        self.base_mut().internal = internal;
        self
    }
}

/// Builder for a plain [`ConfigKey`]
#[derive(Debug, Clone)]
pub struct ConfigKeyBuilder {
    key: ConfigKey,
}

impl ConfigKeyBuilder {
    /// Start building a key named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: ConfigKey::named(name.into()),
        }
    }

    /// Build the key
    pub fn build(self) -> ConfigKey {
        self.key
    }
}

impl KeyBuilder for ConfigKeyBuilder {
    fn base_mut(&mut self) -> &mut ConfigKey {
        &mut self.key
    }
}

impl From<ConfigKeyBuilder> for ConfigKey {
    fn from(builder: ConfigKeyBuilder) -> Self {
        builder.build()
    }
}
