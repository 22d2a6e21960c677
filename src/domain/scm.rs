//! Source-control URL tokens

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque URL of a version-control origin.
///
/// Equality is byte-exact: `https://github.com/a/b` and
/// `https://github.com/a/b.git` are two different URLs as far as this
/// crate is concerned. The URL doubles as the identity-cache key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceControlUrl(String);

impl SourceControlUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceControlUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceControlUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}
