// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Connect Commons
//!
//! Shared building blocks for source and sink connectors.
//!
//! ## Features
//!
//! - **Configuration**: typed keys with defaults, validators, deprecation and
//!   "since" information, collected in a [`config::ConfigDef`]
//! - **Retry timing**: countdown timers and jittered exponential backoff
//! - **Scales**: human readable byte and duration values
//! - **Credential checks**: allow-list validation of Google Cloud credential files
//! - **Strings**: identifier case conversion and version lookup
//! - **Compression**: gzip, snappy and zstd readers and writers by name
//!
//! ## Quick Start
//!
//! ```rust
//! use connect_commons::config::{CommonConfig, CommonConfigDef, CommonConfigSetter};
//!
//! # fn main() -> connect_commons::Result<()> {
//! let def = CommonConfigDef::new()?;
//! let props = CommonConfigSetter::default().max_tasks(4).build();
//! let config = CommonConfig::new(&def, props)?;
//! assert_eq!(config.max_tasks(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Layout
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                           config                              │
//! │  ConfigDef · ExtendedConfigKey · validators · since overrides │
//! └───────────────────────────────────────────────────────────────┘
//!          │                │                │
//! ┌────────┴──┬─────────────┴──┬─────────────┴──┬────────────────┐
//! │  scale    │  timing        │  system        │  strings       │
//! ├───────────┼────────────────┼────────────────┼────────────────┤
//! │ Scale     │ Timer          │ AllowList      │ CasedString    │
//! │ TimeScale │ Backoff        │ properties     │ Version        │
//! │           │                │ google         │ collections    │
//! └───────────┴────────────────┴────────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Byte and time scales
pub mod scale;

/// Bounded collections
pub mod collections;

/// Compression codecs for files and streams
pub mod io;

/// String case conversion and version lookup
pub mod strings;

/// Timers and backoff
pub mod timing;

/// Allow lists and process properties
pub mod system;

/// Google Cloud credential validation
pub mod google;

/// Configuration definitions and validators
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
