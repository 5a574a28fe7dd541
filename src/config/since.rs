//! Tracking of the artifact version that introduced a configuration option

use super::version_range::{ArtifactVersion, VersionRange};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Since Data
// ============================================================================

/// Artifact coordinates and version.
///
/// Missing group or artifact ids compare equal to empty ones.
#[derive(Debug, Clone, Default)]
pub struct SinceData {
    /// Maven group id
    pub group_id: Option<String>,
    /// Maven artifact id
    pub artifact_id: Option<String>,
    /// Version, or any free text label
    pub version: String,
}

impl SinceData {
    /// Create from coordinates
    pub fn new(
        group_id: Option<String>,
        artifact_id: Option<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id,
            artifact_id,
            version: version.into(),
        }
    }

    /// Data with only a version label
    pub fn version_only(version: impl Into<String>) -> Self {
        Self::new(None, None, version)
    }

    fn key(&self) -> (&str, &str, &str) {
        (
            self.group_id.as_deref().unwrap_or_default(),
            self.artifact_id.as_deref().unwrap_or_default(),
            &self.version,
        )
    }
}

impl PartialEq for SinceData {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SinceData {}

impl Hash for SinceData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for SinceData {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for SinceData {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SinceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (group, artifact, version) = self.key();
        if !group.is_empty() {
            write!(f, "{group}:")?;
        }
        if !artifact.is_empty() {
            write!(f, "{artifact}:")?;
        }
        f.write_str(version)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`SinceInfo`] and [`OverrideRange`]. All values are trimmed.
#[derive(Debug, Clone, Default)]
pub struct SinceInfoBuilder {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

impl SinceInfoBuilder {
    /// Set the group id
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into().trim().to_string());
        self
    }

    /// Set the artifact id
    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into().trim().to_string());
        self
    }

    /// Set the version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into().trim().to_string());
        self
    }

    /// The builder contents without any checks
    pub fn data(&self) -> SinceData {
        SinceData::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.version.clone().unwrap_or_default(),
        )
    }

    fn require_version(&self) -> Result<&str> {
        match self.version.as_deref() {
            Some(version) if !version.is_empty() => Ok(version),
            _ => Err(Error::invalid_argument("version may not be null or empty")),
        }
    }

    /// Build the since info. Group, artifact and version are required.
    pub fn build(&self) -> Result<SinceInfo> {
        if self.group_id.is_none() {
            return Err(Error::invalid_argument("groupId may not be null"));
        }
        if self.artifact_id.is_none() {
            return Err(Error::invalid_argument("artifactId may not be null"));
        }
        self.require_version()?;
        Ok(SinceInfo::from_data(self.data()))
    }
}

// ============================================================================
// Since Info
// ============================================================================

/// The version in which an option was introduced, with an optional display
/// override.
#[derive(Debug, Clone)]
pub struct SinceInfo {
    base: SinceData,
    overridden: Option<SinceData>,
    artifact_version: ArtifactVersion,
}

impl SinceInfo {
    /// Start building
    pub fn builder() -> SinceInfoBuilder {
        SinceInfoBuilder::default()
    }

    /// A since info that is only a version label, e.g. `"Kafka 0.9"`
    pub fn label(version: impl Into<String>) -> Self {
        Self::from_data(SinceData::version_only(version.into().trim()))
    }

    fn from_data(base: SinceData) -> Self {
        let artifact_version = ArtifactVersion::parse(&base.version);
        Self {
            base,
            overridden: None,
            artifact_version,
        }
    }

    /// The coordinates this info was built from
    pub fn data(&self) -> &SinceData {
        &self.base
    }

    /// The override, if one is set
    pub fn overridden(&self) -> Option<&SinceData> {
        self.overridden.as_ref()
    }

    /// Replace the displayed value. The builder must have a version.
    pub fn set_override(&mut self, builder: &SinceInfoBuilder) -> Result<()> {
        builder.require_version()?;
        self.overridden = Some(builder.data());
        Ok(())
    }

    /// Apply every matching entry in order, so the last match wins
    pub fn apply_overrides(&mut self, overrides: &[(OverrideRange, SinceData)]) {
        for (range, data) in overrides {
            if range.matches(self) {
                self.overridden = Some(data.clone());
            }
        }
    }

    /// Display only the version, without group and artifact
    pub fn set_version_only(&mut self) -> &mut Self {
        self.overridden = Some(SinceData::version_only(self.base.version.clone()));
        self
    }

    /// The parsed version
    pub fn artifact_version(&self) -> &ArtifactVersion {
        &self.artifact_version
    }
}

impl fmt::Display for SinceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.overridden {
            Some(data) => fmt::Display::fmt(data, f),
            None => fmt::Display::fmt(&self.base, f),
        }
    }
}

impl From<&str> for SinceInfo {
    fn from(version: &str) -> Self {
        Self::label(version)
    }
}

impl From<String> for SinceInfo {
    fn from(version: String) -> Self {
        Self::label(version)
    }
}

// ============================================================================
// Override Range
// ============================================================================

/// Group, artifact and version range selecting the since infos to override
#[derive(Debug, Clone)]
pub struct OverrideRange {
    data: SinceData,
    range: VersionRange,
}

impl OverrideRange {
    /// Create from a builder whose version is a range specification
    pub fn new(builder: &SinceInfoBuilder) -> Result<Self> {
        let data = builder.data();
        let range = VersionRange::parse(&data.version)?;
        Ok(Self { data, range })
    }

    /// Create from coordinates and a range specification
    pub fn from_parts(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        range: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            &SinceInfo::builder()
                .group_id(group_id)
                .artifact_id(artifact_id)
                .version(range),
        )
    }

    /// The coordinates and range text
    pub fn data(&self) -> &SinceData {
        &self.data
    }

    /// Check whether `since` has the same group and artifact and a version in range
    pub fn matches(&self, since: &SinceInfo) -> bool {
        let (group, artifact, _) = self.data.key();
        let (since_group, since_artifact, _) = since.base.key();
        group == since_group
            && artifact == since_artifact
            && self.range.contains(since.artifact_version())
    }
}

impl PartialEq for OverrideRange {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for OverrideRange {}

impl Hash for OverrideRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl fmt::Display for OverrideRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}
