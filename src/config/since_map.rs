//! Override maps for since information
//!
//! An override map rewrites the since text of every key whose artifact
//! version falls in a range. Maps are stored one entry per line:
//!
//! ```text
//! # group:artifact:range:[[group:]artifact:]version
//! org.apache.kafka:kafka:[0.9,1.0):Kafka 0.9
//! ```

use super::def::ConfigDef;
use super::since::{OverrideRange, SinceData, SinceInfo};
use crate::error::{Error, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

const COMMENT: &str = "#";

/// Builds an insertion-ordered map from [`OverrideRange`] to [`SinceData`].
///
/// Putting a range that is already present replaces its data in place.
#[derive(Debug, Clone, Default)]
pub struct SinceInfoMapBuilder {
    entries: Vec<(OverrideRange, SinceData)>,
}

fn split_pattern(pattern: &str) -> Result<[&str; 3]> {
    let parts: Vec<&str> = pattern.split(':').collect();
    match parts[..] {
        [group, artifact, range] => Ok([group, artifact, range]),
        _ => Err(Error::invalid_argument(
            "pattern must have 3 parts separated by ':'",
        )),
    }
}

impl SinceInfoMapBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `range` to `data`
    pub fn put(&mut self, range: OverrideRange, data: SinceData) -> &mut Self {
        match self.entries.iter_mut().find(|(r, _)| *r == range) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((range, data)),
        }
        self
    }

    /// Map the range given by coordinates to `data`
    pub fn put_coordinates(
        &mut self,
        group_id: &str,
        artifact_id: &str,
        range: &str,
        data: SinceData,
    ) -> Result<&mut Self> {
        let range = OverrideRange::from_parts(group_id, artifact_id, range)?;
        Ok(self.put(range, data))
    }

    /// Map a `group:artifact:range` pattern to `data`
    pub fn put_pattern(&mut self, pattern: &str, data: SinceData) -> Result<&mut Self> {
        let [group, artifact, range] = split_pattern(pattern)?;
        self.put_coordinates(group, artifact, range, data)
    }

    /// Map `range` to a plain version label
    pub fn put_final(&mut self, range: OverrideRange, final_version: &str) -> &mut Self {
        self.put(range, SinceData::version_only(final_version))
    }

    /// Map the range given by coordinates to a plain version label
    pub fn put_coordinates_final(
        &mut self,
        group_id: &str,
        artifact_id: &str,
        range: &str,
        final_version: &str,
    ) -> Result<&mut Self> {
        self.put_coordinates(
            group_id,
            artifact_id,
            range,
            SinceData::version_only(final_version),
        )
    }

    /// Map a `group:artifact:range` pattern to a plain version label
    pub fn put_pattern_final(&mut self, pattern: &str, final_version: &str) -> Result<&mut Self> {
        let final_version = final_version.trim();
        if final_version.is_empty() {
            return Err(Error::invalid_argument(
                "finalVersion may not be null or empty",
            ));
        }
        self.put_pattern(pattern, SinceData::version_only(final_version))
    }

    /// The entries in insertion order
    pub fn entries(&self) -> &[(OverrideRange, SinceData)] {
        &self.entries
    }

    /// A copy of the map
    pub fn build(&self) -> Vec<(OverrideRange, SinceData)> {
        self.entries.clone()
    }

    /// Write one `range:data` line per entry
    pub fn serialize(&self, writer: &mut impl Write) -> io::Result<()> {
        for (range, data) in &self.entries {
            writeln!(writer, "{range}:{data}")?;
        }
        Ok(())
    }

    /// Read entries written by [`serialize`](Self::serialize).
    ///
    /// Blank lines and lines starting with `#` are skipped. Every other
    /// line has 4 to 6 parts: the range coordinates followed by the
    /// version, the artifact and version, or group, artifact and version.
    pub fn parse(&mut self, reader: impl BufRead) -> Result<&mut Self> {
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT) {
                continue;
            }
            let number = number + 1;
            let parts: Vec<&str> = line.split(':').map(str::trim).collect();
            let (coordinates, data) = match parts.as_slice() {
                [g, a, r, version] => ([*g, *a, *r], SinceData::version_only(*version)),
                [g, a, r, artifact, version] => (
                    [*g, *a, *r],
                    SinceData::new(None, Some(artifact.to_string()), *version),
                ),
                [g, a, r, group, artifact, version] => (
                    [*g, *a, *r],
                    SinceData::new(
                        Some(group.to_string()),
                        Some(artifact.to_string()),
                        *version,
                    ),
                ),
                _ => {
                    return Err(Error::parse(
                        number,
                        format!("Invalid structure: {line} must have 4 to 6 parts separated by ':'"),
                    ))
                }
            };
            if data.version.is_empty() {
                return Err(Error::parse(number, "final argument may not be zero length"));
            }

            let [group, artifact, range] = coordinates;
            let range = OverrideRange::from_parts(group, artifact, range)
                .map_err(|e| Error::parse(number, e.to_string()))?;
            self.put(range, data);
        }
        debug!(entries = self.entries.len(), "Parsed since override map");
        Ok(self)
    }

    /// Override the since information of every key in `def`
    pub fn apply_to(&self, def: &mut ConfigDef) {
        for key in def.keys_mut() {
            key.override_since_map(&self.entries);
        }
    }

    /// Override a single since info
    pub fn apply_to_since(&self, since: &mut SinceInfo) {
        since.apply_overrides(&self.entries);
    }
}
