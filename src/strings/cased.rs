//! Conversion between string cases (camelCase, snake_case, kebab-case, ...)

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A string case: how words are separated and how they are joined back together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringCase {
    /// `camelCase`. Words start at an upper-case character; the result starts lower-case.
    Camel,
    /// `PascalCase`. Words start at an upper-case character; the result starts upper-case.
    Pascal,
    /// `snake_case`
    Snake,
    /// `kebab-case`
    Kebab,
    /// `phrase case`, words separated by whitespace
    Phrase,
    /// `dot.case`
    Dot,
    /// `slash/case`
    Slash,
}

impl StringCase {
    /// Every supported case
    pub const ALL: [StringCase; 7] = [
        StringCase::Camel,
        StringCase::Pascal,
        StringCase::Snake,
        StringCase::Kebab,
        StringCase::Phrase,
        StringCase::Dot,
        StringCase::Slash,
    ];

    /// The name of the case
    pub const fn name(self) -> &'static str {
        match self {
            StringCase::Camel => "CAMEL",
            StringCase::Pascal => "PASCAL",
            StringCase::Snake => "SNAKE",
            StringCase::Kebab => "KEBAB",
            StringCase::Phrase => "PHRASE",
            StringCase::Dot => "DOT",
            StringCase::Slash => "SLASH",
        }
    }

    /// The delimiter for delimiter-joined cases
    const fn delimiter(self) -> Option<char> {
        match self {
            StringCase::Camel | StringCase::Pascal => None,
            StringCase::Snake => Some('_'),
            StringCase::Kebab => Some('-'),
            StringCase::Phrase => Some(' '),
            StringCase::Dot => Some('.'),
            StringCase::Slash => Some('/'),
        }
    }

    fn is_split(self, c: char) -> bool {
        match self {
            StringCase::Camel | StringCase::Pascal => c.is_uppercase(),
            StringCase::Phrase => c.is_whitespace(),
            other => other.delimiter() == Some(c),
        }
    }

    /// The character that starts a new word is kept as part of that word
    const fn preserves_split(self) -> bool {
        matches!(self, StringCase::Camel | StringCase::Pascal)
    }

    /// Split a string in this case into its segments.
    ///
    /// Delimiter cases keep empty segments (`"a__b"` gives `["a", "", "b"]`);
    /// camel and pascal cases drop them. An empty string has one empty segment.
    pub fn segments(self, s: &str) -> Vec<String> {
        if s.is_empty() {
            return vec![String::new()];
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        for c in s.chars() {
            if self.is_split(c) {
                segments.push(std::mem::take(&mut current));
                if self.preserves_split() {
                    current.push(c);
                }
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        if self.preserves_split() {
            segments.retain(|segment| !segment.is_empty());
        }
        segments
    }

    /// Join segments into a string of this case. `None` segments are discarded.
    ///
    /// Empty segments produce extra delimiters in delimiter cases and vanish in
    /// camel and pascal cases.
    pub fn assemble<I, S>(self, segments: I) -> String
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let present = segments.into_iter().flatten();
        match self.delimiter() {
            Some(delimiter) => present
                .map(|s| s.as_ref().to_string())
                .collect::<Vec<_>>()
                .join(delimiter.to_string().as_str()),
            None => {
                let pascal: String = present
                    .map(|s| capitalize(&s.as_ref().to_lowercase()))
                    .collect();
                if self == StringCase::Camel {
                    uncapitalize(&pascal)
                } else {
                    pascal
                }
            }
        }
    }
}

impl fmt::Display for StringCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StringCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StringCase::ALL
            .into_iter()
            .find(|case| case.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_argument(format!("Unknown string case: {s}")))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A string together with the case it is written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasedString {
    parts: Vec<String>,
    case: StringCase,
}

impl CasedString {
    /// Parse `s` (trimmed) as a string written in `case`
    pub fn new(case: StringCase, s: &str) -> Self {
        Self {
            parts: case.segments(s.trim()),
            case,
        }
    }

    /// Build a cased string directly from its segments
    pub fn from_segments(case: StringCase, parts: Vec<String>) -> Self {
        Self { parts, case }
    }

    /// The same segments tagged with a different case
    pub fn as_case(&self, case: StringCase) -> CasedString {
        Self {
            parts: self.parts.clone(),
            case,
        }
    }

    /// The case this string is written in
    pub fn case(&self) -> StringCase {
        self.case
    }

    /// The segments of the string
    pub fn segments(&self) -> &[String] {
        &self.parts
    }

    /// Render the segments in another case. Character case inside segments is
    /// only changed by the camel and pascal joiners.
    pub fn to_case(&self, case: StringCase) -> String {
        case.assemble(self.parts.iter().map(|part| Some(part.as_str())))
    }
}

impl fmt::Display for CasedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_case(self.case))
    }
}
