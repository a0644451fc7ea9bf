//! Encoded repository identifier
//!
//! A changelog is addressed by the standard base64 encoding of the repository's
//! full name. The same value is sent to the backend as the storage key and used
//! as the viewer route parameter, so the encoding must stay deterministic.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Errors from decoding a [`RepoHash`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("identifier does not decode to UTF-8")]
    InvalidUtf8,
}

/// Encoded form of a repository full name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoHash(String);

impl RepoHash {
    /// Encode a repository full name (`owner/name`)
    pub fn encode(full_name: &str) -> Self {
        Self(STANDARD.encode(full_name.as_bytes()))
    }

    /// Wrap an already-encoded value (e.g. a route parameter)
    ///
    /// The value is not validated here; [`RepoHash::decode`] reports problems.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Recover the repository full name
    pub fn decode(&self) -> Result<String, HashError> {
        if self.0.is_empty() {
            return Err(HashError::Empty);
        }
        let bytes = STANDARD
            .decode(self.0.as_bytes())
            .map_err(|e| HashError::InvalidBase64(e.to_string()))?;
        String::from_utf8(bytes).map_err(|_| HashError::InvalidUtf8)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
