//! Byte and time scales
//!
//! Converts raw byte counts and millisecond durations into human readable
//! values at the most appropriate unit.
//!
//! # Scales
//!
//! - [`Scale`]: bytes, SI prefixes (powers of 1000) and IEC prefixes (powers of 1024)
//! - [`TimeScale`]: milliseconds through days

mod bytes;
mod time;

pub use bytes::Scale;
pub use time::TimeScale;
