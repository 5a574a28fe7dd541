//! String utilities
//!
//! - [`CasedString`]: convert identifiers between camel, pascal, snake, kebab,
//!   phrase, dot and slash case
//! - [`Version`]: look up version strings from a properties file

mod cased;
mod version;

pub use cased::{CasedString, StringCase};
pub use version::{Version, PROPERTIES_FILENAME, RECOMMENDED_PROPERTY};

#[cfg(test)]
mod tests;
