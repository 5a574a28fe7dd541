//! Maven-style artifact versions and version ranges

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Artifact Version
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Number(u64),
    Qualifier(String),
}

/// A version string ordered the way Maven orders artifact versions.
///
/// The version is split on `.` and `-` (and on transitions between digits and
/// letters). Numeric items compare numerically, trailing zero items are
/// insignificant (`1.0 == 1`), and qualifiers such as `alpha` or `SNAPSHOT`
/// sort before the release.
#[derive(Debug, Clone)]
pub struct ArtifactVersion {
    text: String,
    items: Vec<Item>,
}

impl ArtifactVersion {
    /// Parse a version string. Never fails; unknown text becomes a qualifier.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let mut items = Vec::new();
        for part in text.split(['.', '-']) {
            split_alphanumeric(part, &mut items);
        }
        while matches!(items.last(), Some(item) if is_null(item)) {
            items.pop();
        }
        Self {
            text: text.to_string(),
            items,
        }
    }

    /// The original text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn split_alphanumeric(part: &str, items: &mut Vec<Item>) {
    let mut current = String::new();
    let mut digits = None;
    for c in part.chars() {
        let is_digit = c.is_ascii_digit();
        if digits.is_some_and(|d| d != is_digit) {
            items.push(to_item(&std::mem::take(&mut current)));
        }
        digits = Some(is_digit);
        current.push(c);
    }
    items.push(to_item(&current));
}

fn to_item(text: &str) -> Item {
    match text.parse::<u64>() {
        Ok(n) => Item::Number(n),
        Err(_) => Item::Qualifier(text.to_lowercase()),
    }
}

fn is_null(item: &Item) -> bool {
    match item {
        Item::Number(n) => *n == 0,
        Item::Qualifier(q) => qualifier_rank(q) == RELEASE_RANK,
    }
}

const RELEASE_RANK: u8 = 5;

fn qualifier_rank(qualifier: &str) -> u8 {
    match qualifier {
        "alpha" | "a" => 0,
        "beta" | "b" => 1,
        "milestone" | "m" => 2,
        "rc" | "cr" => 3,
        "snapshot" => 4,
        "" | "ga" | "final" | "release" => RELEASE_RANK,
        "sp" => 6,
        _ => 7,
    }
}

fn compare_qualifiers(a: &str, b: &str) -> Ordering {
    qualifier_rank(a)
        .cmp(&qualifier_rank(b))
        .then_with(|| if qualifier_rank(a) == 7 { a.cmp(b) } else { Ordering::Equal })
}

fn compare_items(a: Option<&Item>, b: Option<&Item>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(Item::Number(x)), Some(Item::Number(y))) => x.cmp(y),
        (Some(Item::Number(x)), None) => x.cmp(&0),
        (None, Some(Item::Number(y))) => 0.cmp(y),
        (Some(Item::Number(_)), Some(Item::Qualifier(_))) => Ordering::Greater,
        (Some(Item::Qualifier(_)), Some(Item::Number(_))) => Ordering::Less,
        (Some(Item::Qualifier(x)), Some(Item::Qualifier(y))) => compare_qualifiers(x, y),
        (Some(Item::Qualifier(x)), None) => compare_qualifiers(x, ""),
        (None, Some(Item::Qualifier(y))) => compare_qualifiers("", y),
    }
}

impl Ord for ArtifactVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.items.len().max(other.items.len());
        (0..len)
            .map(|i| compare_items(self.items.get(i), other.items.get(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for ArtifactVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ArtifactVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ArtifactVersion {}

impl fmt::Display for ArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Version Range
// ============================================================================

#[derive(Debug, Clone)]
struct Restriction {
    lower: Option<ArtifactVersion>,
    lower_inclusive: bool,
    upper: Option<ArtifactVersion>,
    upper_inclusive: bool,
}

impl Restriction {
    fn contains(&self, version: &ArtifactVersion) -> bool {
        let above_lower = match &self.lower {
            Some(lower) if self.lower_inclusive => version >= lower,
            Some(lower) => version > lower,
            None => true,
        };
        let below_upper = match &self.upper {
            Some(upper) if self.upper_inclusive => version <= upper,
            Some(upper) => version < upper,
            None => true,
        };
        above_lower && below_upper
    }
}

/// A Maven version range specification.
///
/// | spec            | matches                        |
/// |-----------------|--------------------------------|
/// | `1.0`           | anything (recommended version) |
/// | `[1.0]`         | exactly 1.0                    |
/// | `[1.0,2.0)`     | 1.0 <= x < 2.0                 |
/// | `[1.5,)`        | x >= 1.5                       |
/// | `(,1.0],[1.2,)` | x <= 1.0 or x >= 1.2           |
#[derive(Debug, Clone)]
pub struct VersionRange {
    spec: String,
    recommended: Option<ArtifactVersion>,
    restrictions: Vec<Restriction>,
}

impl VersionRange {
    /// Parse a range specification
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(Error::version_spec("version range may not be empty"));
        }
        if !spec.starts_with(['[', '(']) {
            return Ok(Self {
                spec: spec.to_string(),
                recommended: Some(ArtifactVersion::parse(spec)),
                restrictions: Vec::new(),
            });
        }

        let mut restrictions = Vec::new();
        let mut rest = spec;
        while !rest.is_empty() {
            let close = rest.find([']', ')']).ok_or_else(|| {
                Error::version_spec(format!("Unbounded range: {spec}"))
            })?;
            restrictions.push(parse_restriction(&rest[..=close], spec)?);
            rest = rest[close + 1..].trim_start();
            if let Some(next) = rest.strip_prefix(',') {
                rest = next.trim_start();
                if rest.is_empty() {
                    return Err(Error::version_spec(format!(
                        "Trailing separator in range: {spec}"
                    )));
                }
            }
            if !rest.is_empty() && !rest.starts_with(['[', '(']) {
                return Err(Error::version_spec(format!(
                    "Only fully-qualified sets allowed in multiple set scenario: {spec}"
                )));
            }
        }

        Ok(Self {
            spec: spec.to_string(),
            recommended: None,
            restrictions,
        })
    }

    /// Check whether `version` is within the range
    pub fn contains(&self, version: &ArtifactVersion) -> bool {
        if self.recommended.is_some() {
            return true;
        }
        self.restrictions.iter().any(|r| r.contains(version))
    }

    /// The recommended version of a soft range
    pub fn recommended(&self) -> Option<&ArtifactVersion> {
        self.recommended.as_ref()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

fn parse_restriction(text: &str, spec: &str) -> Result<Restriction> {
    let lower_inclusive = text.starts_with('[');
    let upper_inclusive = text.ends_with(']');
    let inner = text[1..text.len() - 1].trim();

    match inner.split_once(',') {
        None => {
            if !(lower_inclusive && upper_inclusive) {
                return Err(Error::version_spec(format!(
                    "Single version must be surrounded by []: {spec}"
                )));
            }
            let version = ArtifactVersion::parse(inner);
            Ok(Restriction {
                lower: Some(version.clone()),
                lower_inclusive: true,
                upper: Some(version),
                upper_inclusive: true,
            })
        }
        Some((lower, upper)) => {
            if upper.contains(',') {
                return Err(Error::version_spec(format!(
                    "Invalid range, too many bounds: {spec}"
                )));
            }
            let lower = Some(lower.trim())
                .filter(|s| !s.is_empty())
                .map(ArtifactVersion::parse);
            let upper = Some(upper.trim())
                .filter(|s| !s.is_empty())
                .map(ArtifactVersion::parse);
            if let (Some(l), Some(u)) = (&lower, &upper) {
                if u < l {
                    return Err(Error::version_spec(format!(
                        "Range defies version ordering: {spec}"
                    )));
                }
            }
            Ok(Restriction {
                lower,
                lower_inclusive,
                upper,
                upper_inclusive,
            })
        }
    }
}
