//! Byte scales with conversions and formatting

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const KILO: i64 = 1000;
const KIBI: i64 = 1024;

/// A byte prefix with its size in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// A single byte
    B,
    /// SI kilobytes (10^3)
    KB,
    /// SI megabytes (10^6)
    MB,
    /// SI gigabytes (10^9)
    GB,
    /// SI terabytes (10^12)
    TB,
    /// SI petabytes (10^15)
    PB,
    /// IEC kibibytes (2^10)
    KiB,
    /// IEC mebibytes (2^20)
    MiB,
    /// IEC gibibytes (2^30)
    GiB,
    /// IEC tebibytes (2^40)
    TiB,
    /// IEC pebibytes (2^50)
    PiB,
}

impl Scale {
    /// The International Electrotechnical Commission (IEC) binary prefixes.
    /// These are based on powers of 2.
    pub const IEC: [Scale; 5] = [Scale::KiB, Scale::MiB, Scale::GiB, Scale::TiB, Scale::PiB];

    /// The SI metric prefixes. These are based on powers of 10.
    pub const SI: [Scale; 5] = [Scale::KB, Scale::MB, Scale::GB, Scale::TB, Scale::PB];

    /// Every scale, including plain bytes
    pub const ALL: [Scale; 11] = [
        Scale::B,
        Scale::KB,
        Scale::MB,
        Scale::GB,
        Scale::TB,
        Scale::PB,
        Scale::KiB,
        Scale::MiB,
        Scale::GiB,
        Scale::TiB,
        Scale::PiB,
    ];

    /// The number of bytes in a single unit of this scale
    pub const fn bytes(self) -> i64 {
        match self {
            Scale::B => 1,
            Scale::KB => KILO,
            Scale::MB => KILO * KILO,
            Scale::GB => KILO * KILO * KILO,
            Scale::TB => KILO * KILO * KILO * KILO,
            Scale::PB => KILO * KILO * KILO * KILO * KILO,
            Scale::KiB => KIBI,
            Scale::MiB => KIBI * KIBI,
            Scale::GiB => KIBI * KIBI * KIBI,
            Scale::TiB => KIBI * KIBI * KIBI * KIBI,
            Scale::PiB => KIBI * KIBI * KIBI * KIBI * KIBI,
        }
    }

    /// The unit label
    pub const fn name(self) -> &'static str {
        match self {
            Scale::B => "B",
            Scale::KB => "KB",
            Scale::MB => "MB",
            Scale::GB => "GB",
            Scale::TB => "TB",
            Scale::PB => "PB",
            Scale::KiB => "KiB",
            Scale::MiB => "MiB",
            Scale::GiB => "GiB",
            Scale::TiB => "TiB",
            Scale::PiB => "PiB",
        }
    }

    /// Format `byte_count` at this scale, e.g. `"1.5 KiB"`
    pub fn format(self, byte_count: i64) -> String {
        format!("{:.1} {}", byte_count as f64 / self.bytes() as f64, self.name())
    }

    /// Format a number of units of this scale, e.g. `"3.0 MB"`
    pub fn units(self, unit_count: i64) -> String {
        format!("{:.1} {}", unit_count as f64, self.name())
    }

    /// The number of bytes in `unit_count` units of this scale.
    ///
    /// Fractional unit counts are truncated before scaling.
    pub fn as_bytes(self, unit_count: f64) -> i64 {
        (unit_count.trunc() as i64).saturating_mul(self.bytes())
    }

    /// Format `byte_count` at this scale followed by the exact byte count
    pub fn display_value(self, byte_count: i64) -> String {
        match self {
            Scale::B => self.format(byte_count),
            _ => format!("{} ({byte_count} bytes)", self.format(byte_count)),
        }
    }

    /// Determine the scale of a number of bytes.
    ///
    /// Returns the largest scale in `possible_scales` whose unit is strictly
    /// smaller than `byte_count`, or [`Scale::B`] when none match. Exactly one
    /// unit stays at the smaller scale: 1024 bytes over [`Scale::IEC`] is `B`.
    pub fn scale_of(byte_count: i64, possible_scales: &[Scale]) -> Scale {
        let mut ordered = possible_scales.to_vec();
        ordered.sort_by(|a, b| b.bytes().cmp(&a.bytes()));
        ordered
            .into_iter()
            .find(|scale| scale.bytes() < byte_count)
            .unwrap_or(Scale::B)
    }

    /// Format `byte_count` at the scale that best represents it
    pub fn size(byte_count: i64, possible_scales: &[Scale]) -> String {
        Self::scale_of(byte_count, possible_scales).format(byte_count)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Scale::ALL
            .into_iter()
            .find(|scale| scale.name() == s)
            .or_else(|| {
                Scale::ALL
                    .into_iter()
                    .find(|scale| scale.name().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| Error::invalid_argument(format!("Unknown byte scale: {s}")))
    }
}
