//! Package identity tokens
//!
//! An identity is the canonical, origin-independent name of a logical
//! package. Two identities compare equal exactly when they denote the
//! same package, regardless of how a manifest spelled them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identity of a logical package.
///
/// The canonical form is lowercase; construction normalizes the input so
/// that `PackageIdentity::new("Swift-NIO")` and
/// `PackageIdentity::new("swift-nio")` compare equal. Ordering is
/// lexicographic over the canonical string, which makes identity
/// selection from a sorted set deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageIdentity(String);

impl PackageIdentity {
    /// Creates an identity from any spelling, normalizing to canonical form
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_lowercase())
    }

    /// Returns the canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PackageIdentity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PackageIdentity {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
