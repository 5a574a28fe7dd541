//! Configuration keys carrying deprecation and since information

use super::deprecated::DeprecatedInfo;
use super::key::{ConfigKey, ConfigKeyBuilder, KeyBuilder};
use super::since::{OverrideRange, SinceData, SinceInfo, SinceInfoBuilder};
use crate::error::Result;
use std::ops::Deref;

/// A [`ConfigKey`] with optional deprecation and since details.
///
/// When deprecated, the key documentation starts with the formatted
/// deprecation notice.
#[derive(Debug, Clone)]
pub struct ExtendedConfigKey {
    /// The plain key, with generated documentation
    pub key: ConfigKey,
    /// Deprecation details
    pub deprecated: Option<DeprecatedInfo>,
    /// Version the key was introduced in
    pub since: Option<SinceInfo>,
    documentation: String,
}

impl ExtendedConfigKey {
    /// Start building a key named `name`
    pub fn builder(name: impl Into<String>) -> ExtendedConfigKeyBuilder {
        ExtendedConfigKeyBuilder {
            key: ConfigKey::builder(name).build(),
            deprecated: None,
            since: None,
        }
    }

    /// A builder holding a copy of this key
    pub fn to_builder(&self) -> ExtendedConfigKeyBuilder {
        let mut key = self.key.clone();
        key.documentation = self.documentation.clone();
        ExtendedConfigKeyBuilder {
            key,
            deprecated: self.deprecated.clone(),
            since: self.since.clone(),
        }
    }

    /// The deprecation notice, empty when not deprecated
    pub fn deprecation_message(&self) -> String {
        self.deprecated
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// The since text, empty when unset
    pub fn since(&self) -> String {
        self.since.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Whether the key is deprecated
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }

    /// Override the displayed since and deprecation versions
    pub fn override_since(&mut self, builder: &SinceInfoBuilder) -> Result<()> {
        if let Some(since) = self.since.as_mut() {
            since.set_override(builder)?;
        }
        if let Some(deprecated) = self.deprecated.as_mut() {
            deprecated.override_since(builder)?;
        }
        Ok(())
    }

    /// Apply an override map to the since and deprecation versions
    pub fn override_since_map(&mut self, overrides: &[(OverrideRange, SinceData)]) {
        if let Some(since) = self.since.as_mut() {
            since.apply_overrides(overrides);
        }
        if let Some(deprecated) = self.deprecated.as_mut() {
            deprecated.override_since_map(overrides);
        }
    }
}

impl Deref for ExtendedConfigKey {
    type Target = ConfigKey;

    fn deref(&self) -> &ConfigKey {
        &self.key
    }
}

impl From<ConfigKey> for ExtendedConfigKey {
    fn from(key: ConfigKey) -> Self {
        let documentation = key.documentation.clone();
        Self {
            key,
            deprecated: None,
            since: None,
            documentation,
        }
    }
}

impl From<ConfigKeyBuilder> for ExtendedConfigKey {
    fn from(builder: ConfigKeyBuilder) -> Self {
        builder.build().into()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ExtendedConfigKey`]
#[derive(Debug, Clone)]
pub struct ExtendedConfigKeyBuilder {
    key: ConfigKey,
    deprecated: Option<DeprecatedInfo>,
    since: Option<SinceInfo>,
}

impl ExtendedConfigKeyBuilder {
    /// Mark the key deprecated
    pub fn deprecated_info(mut self, deprecated: impl Into<DeprecatedInfo>) -> Self {
        self.deprecated = Some(deprecated.into());
        self
    }

    /// Set the version the key was introduced in
    pub fn since(mut self, since: impl Into<SinceInfo>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Build the key
    pub fn build(self) -> ExtendedConfigKey {
        let documentation = self.key.documentation.clone();
        let mut key = self.key;
        if let Some(deprecated) = &self.deprecated {
            key.documentation = format!(
                "{}. {documentation}",
                deprecated.formatted(&key.display_name)
            );
        }
        ExtendedConfigKey {
            key,
            deprecated: self.deprecated,
            since: self.since,
            documentation,
        }
    }
}

impl KeyBuilder for ExtendedConfigKeyBuilder {
    fn base_mut(&mut self) -> &mut ConfigKey {
        &mut self.key
    }
}

impl From<ExtendedConfigKeyBuilder> for ExtendedConfigKey {
    fn from(builder: ExtendedConfigKeyBuilder) -> Self {
        builder.build()
    }
}
