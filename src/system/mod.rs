//! Allow-list checks for values taken from untrusted input
//!
//! Credential files may point at local files, URLs or commands. Before such
//! a value is used it must be listed in an operator-controlled allow list:
//! either an environment variable ([`EnvCheck`]) or a process-wide system
//! property ([`SystemCheck`]). Allow lists are comma separated; entries are
//! trimmed and must match exactly.

pub mod properties;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of value being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    /// A local file path
    File,
    /// A URL
    Uri,
    /// A command line
    Cmd,
}

impl CheckType {
    /// Every check type
    pub const ALL: [CheckType; 3] = [CheckType::File, CheckType::Uri, CheckType::Cmd];

    /// The upper-case name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            CheckType::File => "FILE",
            CheckType::Uri => "URI",
            CheckType::Cmd => "CMD",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CheckType::ALL
            .into_iter()
            .find(|check| check.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_argument(format!("Unknown check type: {s}")))
    }
}

// ============================================================================
// AllowList trait
// ============================================================================

/// A source of comma separated allow lists, one per [`CheckType`]
pub trait AllowList {
    /// The name of the setting that holds the allow list for `check`
    fn key(&self, check: CheckType) -> &'static str;

    /// The raw allow list for `check`, if set
    fn lookup(&self, check: CheckType) -> Option<String>;

    /// Check whether `value` is in the allow list. An unset list allows nothing.
    fn allowed(&self, check: CheckType, value: &str) -> bool {
        self.lookup(check)
            .is_some_and(|list| list.split(',').any(|entry| entry.trim() == value))
    }

    /// The error message reported for a value that is not allowed
    fn format_error(&self, check: CheckType, value: &str) -> String {
        format!(
            "{value} is not an allowed {check} value. Update system property '{}' to allow {value}",
            self.key(check)
        )
    }

    /// Fail with [`Error::NotAllowed`] unless `value` is in the allow list
    fn ensure_allowed(&self, check: CheckType, value: &str) -> Result<()> {
        if self.allowed(check, value) {
            Ok(())
        } else {
            Err(Error::not_allowed(self.format_error(check, value)))
        }
    }
}

// ============================================================================
// Implementations
// ============================================================================

/// Allow lists read from environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCheck;

impl EnvCheck {
    /// The environment variable holding the allow list for `check`
    pub const fn env_var(check: CheckType) -> &'static str {
        match check {
            CheckType::File => "io.aiven.commons.envcheck.files",
            CheckType::Uri => "io.aiven.commons.envcheck.uri",
            CheckType::Cmd => "io.aiven.commons.envcheck.cmd",
        }
    }
}

impl AllowList for EnvCheck {
    fn key(&self, check: CheckType) -> &'static str {
        Self::env_var(check)
    }

    fn lookup(&self, check: CheckType) -> Option<String> {
        std::env::var(Self::env_var(check)).ok()
    }
}

/// Allow lists read from the process-wide [`properties`] registry
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCheck;

impl SystemCheck {
    /// The system property holding the allow list for `check`
    pub const fn system_property(check: CheckType) -> &'static str {
        match check {
            CheckType::File => "io.aiven.commons.auth.files",
            CheckType::Uri => "io.aiven.commons.auth.uri",
            CheckType::Cmd => "io.aiven.commons.auth.cmd",
        }
    }
}

impl AllowList for SystemCheck {
    fn key(&self, check: CheckType) -> &'static str {
        Self::system_property(check)
    }

    fn lookup(&self, check: CheckType) -> Option<String> {
        properties::get(Self::system_property(check))
    }
}

#[cfg(test)]
mod tests;
