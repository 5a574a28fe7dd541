//! Time scales for millisecond durations

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A unit of time with its length in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeScale {
    /// Milliseconds
    Milliseconds,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
}

impl TimeScale {
    /// Every time scale, smallest first
    pub const ALL: [TimeScale; 5] = [
        TimeScale::Milliseconds,
        TimeScale::Seconds,
        TimeScale::Minutes,
        TimeScale::Hours,
        TimeScale::Days,
    ];

    /// The number of milliseconds in one unit
    pub const fn milliseconds(self) -> i64 {
        match self {
            TimeScale::Milliseconds => 1,
            TimeScale::Seconds => 1000,
            TimeScale::Minutes => 60 * 1000,
            TimeScale::Hours => 60 * 60 * 1000,
            TimeScale::Days => 24 * 60 * 60 * 1000,
        }
    }

    /// The unit label
    pub const fn label(self) -> &'static str {
        match self {
            TimeScale::Milliseconds => "ms",
            TimeScale::Seconds => "s",
            TimeScale::Minutes => "min",
            TimeScale::Hours => "h",
            TimeScale::Days => "d",
        }
    }

    /// Format `millis` at this scale, e.g. `"1.5 s"`
    pub fn format(self, millis: i64) -> String {
        format!(
            "{:.1} {}",
            millis as f64 / self.milliseconds() as f64,
            self.label()
        )
    }

    /// Format a number of units of this scale
    pub fn units(self, unit_count: i64) -> String {
        format!("{:.1} {}", unit_count as f64, self.label())
    }

    /// The number of milliseconds in `unit_count` units of this scale
    pub fn as_millis(self, unit_count: f64) -> i64 {
        (unit_count.trunc() as i64).saturating_mul(self.milliseconds())
    }

    /// Format `millis` at this scale followed by the exact millisecond count
    pub fn display_value(self, millis: i64) -> String {
        match self {
            TimeScale::Milliseconds => self.format(millis),
            _ => format!("{} ({millis} ms)", self.format(millis)),
        }
    }

    /// The largest scale whose unit is strictly smaller than `millis`.
    /// Returns [`TimeScale::Milliseconds`] for anything up to one second.
    pub fn scale_of(millis: i64) -> TimeScale {
        TimeScale::ALL
            .into_iter()
            .rev()
            .find(|scale| scale.milliseconds() < millis)
            .unwrap_or(TimeScale::Milliseconds)
    }

    /// Format a duration at the scale that best represents it
    pub fn size(duration: Duration) -> String {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        Self::scale_of(millis).format(millis)
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ms" | "milliseconds" => Ok(TimeScale::Milliseconds),
            "s" | "seconds" => Ok(TimeScale::Seconds),
            "min" | "minutes" => Ok(TimeScale::Minutes),
            "h" | "hours" => Ok(TimeScale::Hours),
            "d" | "days" => Ok(TimeScale::Days),
            other => Err(Error::invalid_argument(format!(
                "Unknown time scale: {other}"
            ))),
        }
    }
}
