//! Deprecation details for configuration options

use super::since::{OverrideRange, SinceData, SinceInfo, SinceInfoBuilder};
use crate::error::Result;
use std::fmt;

/// Builder for [`DeprecatedInfo`]
#[derive(Debug, Clone, Default)]
pub struct DeprecatedInfoBuilder {
    description: Option<String>,
    for_removal: bool,
    since: Option<SinceInfo>,
}

impl DeprecatedInfoBuilder {
    /// Explain the deprecation
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the option for removal
    pub fn for_removal(mut self, for_removal: bool) -> Self {
        self.for_removal = for_removal;
        self
    }

    /// Set the version the option was deprecated in. Accepts a [`SinceInfo`]
    /// or a plain version label.
    pub fn since(mut self, since: impl Into<SinceInfo>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Set the deprecation version from a since builder
    pub fn since_builder(mut self, builder: &SinceInfoBuilder) -> Result<Self> {
        self.since = Some(builder.build()?);
        Ok(self)
    }

    /// Build the info
    pub fn build(self) -> DeprecatedInfo {
        DeprecatedInfo {
            description: self.description.unwrap_or_default(),
            for_removal: self.for_removal,
            since: self.since,
        }
    }
}

/// Why and since when an option is deprecated
#[derive(Debug, Clone, Default)]
pub struct DeprecatedInfo {
    description: String,
    for_removal: bool,
    since: Option<SinceInfo>,
}

impl DeprecatedInfo {
    /// Start building
    pub fn builder() -> DeprecatedInfoBuilder {
        DeprecatedInfoBuilder::default()
    }

    /// The description, empty when none was given
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the option will be removed
    pub fn is_for_removal(&self) -> bool {
        self.for_removal
    }

    /// The deprecation version
    pub fn since(&self) -> Option<&SinceInfo> {
        self.since.as_ref()
    }

    /// Override the displayed deprecation version, if there is one
    pub fn override_since(&mut self, builder: &SinceInfoBuilder) -> Result<()> {
        match self.since.as_mut() {
            Some(since) => since.set_override(builder),
            None => Ok(()),
        }
    }

    /// Apply an override map to the deprecation version, if there is one
    pub fn override_since_map(&mut self, overrides: &[(OverrideRange, SinceData)]) {
        if let Some(since) = self.since.as_mut() {
            since.apply_overrides(overrides);
        }
    }

    /// Describe the deprecation of the option `name`.
    ///
    /// ```
    /// use connect_commons::config::DeprecatedInfo;
    ///
    /// let info = DeprecatedInfo::builder()
    ///     .for_removal(true)
    ///     .since("1960")
    ///     .description("because we say Hi")
    ///     .build();
    /// assert_eq!(
    ///     info.formatted("greeting"),
    ///     "greeting is deprecated for removal since 1960: because we say Hi"
    /// );
    /// ```
    pub fn formatted(&self, name: &str) -> String {
        let mut text = if name.is_empty() {
            String::from("Deprecated")
        } else {
            format!("{name} is deprecated")
        };
        if self.for_removal {
            text.push_str(" for removal");
        }
        if let Some(since) = &self.since {
            text.push_str(&format!(" since {since}"));
        }
        if !self.description.is_empty() {
            text.push_str(": ");
            text.push_str(&self.description);
        }
        text
    }
}

impl fmt::Display for DeprecatedInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted(""))
    }
}

impl From<DeprecatedInfoBuilder> for DeprecatedInfo {
    fn from(builder: DeprecatedInfoBuilder) -> Self {
        builder.build()
    }
}
