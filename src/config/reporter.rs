//! Reporting of deprecated options in use

use super::def::ConfigDef;
use super::extended::ExtendedConfigKey;
use std::collections::HashMap;
use tracing::warn;

/// Lists deprecated options a configuration sets to a non-default value
#[derive(Debug, Clone, Copy, Default)]
pub struct DeprecationReporter;

impl DeprecationReporter {
    /// One `"Option …"` line per deprecated key set in `originals` to
    /// something other than its default, in definition order
    pub fn report(def: &ConfigDef, originals: &HashMap<String, String>) -> Vec<String> {
        def.keys()
            .iter()
            .filter_map(|key| {
                let deprecated = key.deprecated.as_ref()?;
                let raw = originals.get(&key.name)?;
                if is_default(key, raw) {
                    return None;
                }
                Some(format!("Option {}", deprecated.formatted(&key.name)))
            })
            .collect()
    }

    /// Log every report line as a warning and return the lines
    pub fn warn(def: &ConfigDef, originals: &HashMap<String, String>) -> Vec<String> {
        let lines = Self::report(def, originals);
        for line in &lines {
            warn!("{line}");
        }
        lines
    }
}

fn is_default(key: &ExtendedConfigKey, raw: &str) -> bool {
    match key.default_value.value() {
        Some(default) => key
            .config_type
            .parse(&key.name, raw)
            .is_ok_and(|value| &value == default),
        None => false,
    }
}
