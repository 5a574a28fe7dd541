//! Version lookup from a `.properties` file
//!
//! Build tooling commonly writes project versions into a properties file
//! (`project-version=1.3.4`). [`Version`] reads such a file once and serves
//! lookups from it. A file that could not be read is not an error: every
//! lookup returns the load failure message instead.

use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// The default properties file name
pub const PROPERTIES_FILENAME: &str = "app.properties";

/// The recommended property name for the project version
pub const RECOMMENDED_PROPERTY: &str = "project-version";

const UNKNOWN: &str = "unknown";

const KEY_WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// Versions read from a properties file
#[derive(Debug, Clone)]
pub struct Version {
    properties: HashMap<String, String>,
    error: Option<String>,
}

impl Version {
    /// Read properties from the given file
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                let message = format!("Error while loading {}: {e}", path.display());
                warn!("{message}");
                Self {
                    properties: HashMap::new(),
                    error: Some(message),
                }
            }
        }
    }

    /// Read properties from `app.properties` in the working directory
    pub fn load_default() -> Self {
        Self::load(PROPERTIES_FILENAME)
    }

    /// Parse properties from a string
    pub fn parse(contents: &str) -> Self {
        Self {
            properties: parse_properties(contents),
            error: None,
        }
    }

    /// The value of `property`, `"unknown"` if it is not set, or the load error
    /// message if the file could not be read.
    pub fn of(&self, property: &str) -> String {
        if let Some(error) = &self.error {
            return error.clone();
        }
        self.properties
            .get(property)
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Check whether the properties were read successfully
    pub fn is_loaded(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse `key=value`, `key: value` and `key value` lines.
/// Lines starting with `#` or `!` are comments. Only space, tab and form feed
/// separate a key from its value; other whitespace is part of the key.
fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let split = line
            .find(['=', ':'])
            .or_else(|| line.find(KEY_WHITESPACE));
        let (key, value) = match split {
            Some(idx) => (&line[..idx], &line[idx + 1..]),
            None => (line, ""),
        };
        properties.insert(key.trim().to_string(), value.trim().to_string());
    }
    properties
}
