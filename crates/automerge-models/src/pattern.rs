//! Label and branch patterns.

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::ConfigurationError;

/// Compiled regular expression.
///
/// Compilation happens while decoding the configuration, so a value of this
/// type always holds a valid expression.
#[derive(Debug, Clone)]
pub struct RegexPattern(Regex);

impl RegexPattern {
    /// Compiles a regular expression.
    pub fn new(pattern: &str) -> Result<Self, ConfigurationError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|e| ConfigurationError::InvalidPattern {
                pattern: pattern.into(),
                source: e,
            })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl std::fmt::Display for RegexPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl<'de> Deserialize<'de> for RegexPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pattern = String::deserialize(deserializer)?;
        Self::new(&pattern).map_err(serde::de::Error::custom)
    }
}

/// Either an exact value or a regular expression.
///
/// Decoded from a plain string (exact) or from `{ "regex": "..." }`.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Exact(String),
    Regex(RegexPattern),
}

impl Pattern {
    pub fn regex(pattern: &str) -> Result<Self, ConfigurationError> {
        RegexPattern::new(pattern).map(Self::Regex)
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Exact(exact) => exact == value,
            Self::Regex(regex) => regex.is_match(value),
        }
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self::Exact(value.into())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(exact) => f.write_str(exact),
            Self::Regex(regex) => regex.fmt(f),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPattern {
    Exact(String),
    Regex { regex: String },
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawPattern::deserialize(deserializer)? {
            RawPattern::Exact(exact) => Ok(Self::Exact(exact)),
            RawPattern::Regex { regex } => Self::regex(&regex).map_err(serde::de::Error::custom),
        }
    }
}
