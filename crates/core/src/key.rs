//! Stable asset identifiers.
//!
//! Asset keys name a source asset the way the host's asset provider does
//! (e.g. `models/XL_Tower_A`). The same key always resolves to geometry with
//! the same intrinsic bounds, so keys are ordered and compared verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an invalid [`AssetKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssetKeyError {
    message: String,
}

impl AssetKeyError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Identifier of a source asset, e.g. `models/XXL_Tower_A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetKey(String);

impl AssetKey {
    /// Parse an asset key, trimming surrounding whitespace.
    ///
    /// Keys are path-like: non-empty segments separated by `/`, made of ASCII
    /// alphanumerics plus `_`, `-` and `.`.
    pub fn parse(input: &str) -> Result<Self, AssetKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AssetKeyError::new("AssetKey cannot be empty"));
        }

        for segment in input.split('/') {
            if segment.is_empty() {
                return Err(AssetKeyError::new(format!(
                    "AssetKey '{input}' contains an empty path segment"
                )));
            }
            if let Some(ch) = segment
                .chars()
                .find(|ch| !(ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.')))
            {
                return Err(AssetKeyError::new(format!(
                    "AssetKey '{input}' contains invalid character '{ch}'"
                )));
            }
        }

        Ok(Self(input.to_string()))
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as a short display name.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AssetKey {
    type Err = AssetKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AssetKey {
    type Error = AssetKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AssetKey> for String {
    fn from(key: AssetKey) -> Self {
        key.0
    }
}
