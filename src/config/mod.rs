//! Configuration definitions for connectors
//!
//! Keys are declared with builders, collected in a [`ConfigDef`] and used to
//! parse and validate string properties:
//!
//! ```
//! use connect_commons::config::{ConfigDef, ConfigType, ExtendedConfigKey, KeyBuilder, Range};
//! use std::collections::HashMap;
//!
//! let def = ConfigDef::new()
//!     .define(
//!         ExtendedConfigKey::builder("poll.interval.ms")
//!             .config_type(ConfigType::Long)
//!             .default_value(5000_i64)
//!             .validator(Range::at_least(100)),
//!     )
//!     .unwrap();
//!
//! let props = HashMap::from([("poll.interval.ms".to_string(), "250".to_string())]);
//! let values = def.parse(&props).unwrap();
//! assert_eq!(values["poll.interval.ms"].as_ref().and_then(|v| v.as_i64()), Some(250));
//! ```
//!
//! Keys may also carry [`SinceInfo`] (the release that introduced them) and
//! [`DeprecatedInfo`]. A [`SinceInfoMapBuilder`] rewrites since text for
//! whole version ranges, and [`DeprecationReporter`] lists deprecated options
//! that are in use.

mod common;
mod def;
mod deprecated;
mod extended;
mod key;
mod reporter;
mod since;
mod since_map;
mod types;
mod validators;
mod version_range;

pub use common::{CommonConfig, CommonConfigDef, CommonConfigSetter, MAX_TASKS, TASK_ID};
pub use def::{ConfigDef, ValidatedValue};
pub use deprecated::{DeprecatedInfo, DeprecatedInfoBuilder};
pub use extended::{ExtendedConfigKey, ExtendedConfigKeyBuilder};
pub use key::{ConfigKey, ConfigKeyBuilder, KeyBuilder};
pub use reporter::DeprecationReporter;
pub use since::{OverrideRange, SinceData, SinceInfo, SinceInfoBuilder};
pub use since_map::SinceInfoMapBuilder;
pub use types::{ConfigType, ConfigValue, DefaultValue, Importance, Password, Width};
pub use validators::{
    EnumValidator, NonEmptyList, NonEmptyPassword, PredicateGated, Range, ScaleValidator,
    TimeScaleValidator, UrlValidator, UrlValidatorBuilder, Validator,
};
pub use version_range::{ArtifactVersion, VersionRange};
