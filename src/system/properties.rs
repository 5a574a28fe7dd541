//! Process-wide system properties
//!
//! A string map shared by the whole process, set at startup (for example
//! from `-D key=value` command line flags) and read by [`SystemCheck`](super::SystemCheck).

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};
use tracing::debug;

static PROPERTIES: LazyLock<RwLock<HashMap<String, String>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Get a property
pub fn get(key: &str) -> Option<String> {
    PROPERTIES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
        .cloned()
}

/// Set a property, returning the previous value
pub fn set(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    let key = key.into();
    debug!(key = %key, "Setting system property");
    PROPERTIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, value.into())
}

/// Remove a property, returning its value
pub fn remove(key: &str) -> Option<String> {
    PROPERTIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(key)
}

/// Copy each named environment variable that is set into the properties.
/// Returns the number of properties set.
pub fn seed_from_env<'a>(keys: impl IntoIterator<Item = &'a str>) -> usize {
    keys.into_iter()
        .filter_map(|key| std::env::var(key).ok().map(|value| (key, value)))
        .map(|(key, value)| set(key, value))
        .count()
}

/// Parse a `key=value` definition and set it
pub fn define(definition: &str) -> crate::Result<()> {
    let (key, value) = definition.split_once('=').ok_or_else(|| {
        crate::Error::invalid_argument(format!(
            "Property definition '{definition}' must have the form key=value"
        ))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(crate::Error::invalid_argument(format!(
            "Property definition '{definition}' has an empty key"
        )));
    }
    set(key, value.trim());
    Ok(())
}
