//! Version requirements for source-control and registry dependencies
//!
//! Source-control dependencies may pin a branch or a revision; registry
//! dependencies cannot, so the registry requirement type simply has no
//! such cases and conversion between the two is partial.

use crate::error::LoadError;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requirement attached to a source-control dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceControlRequirement {
    /// A single pinned version
    Exact(Version),
    /// A half-open version interval `[lower, upper)`
    Range { lower: Version, upper: Version },
    /// A VCS branch; not representable in a registry dependency
    Branch(String),
    /// A VCS revision id; not representable in a registry dependency
    Revision(String),
}

impl SourceControlRequirement {
    /// Returns true if the requirement survives conversion to a registry
    /// requirement
    pub fn is_registry_representable(&self) -> bool {
        matches!(
            self,
            SourceControlRequirement::Exact(_) | SourceControlRequirement::Range { .. }
        )
    }
}

impl fmt::Display for SourceControlRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceControlRequirement::Exact(version) => write!(f, "{}", version),
            SourceControlRequirement::Range { lower, upper } => {
                write!(f, "{}..<{}", lower, upper)
            }
            SourceControlRequirement::Branch(name) => write!(f, "branch {}", name),
            SourceControlRequirement::Revision(id) => write!(f, "revision {}", id),
        }
    }
}

/// Requirement attached to a registry dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryRequirement {
    /// A single pinned version
    Exact(Version),
    /// A half-open version interval `[lower, upper)`
    Range { lower: Version, upper: Version },
}

impl TryFrom<&SourceControlRequirement> for RegistryRequirement {
    type Error = LoadError;

    /// Conversion is defined for `Exact` and `Range` only; callers guard
    /// the branch and revision cases, so reaching them here is a code bug.
    fn try_from(requirement: &SourceControlRequirement) -> Result<Self, Self::Error> {
        match requirement {
            SourceControlRequirement::Exact(version) => {
                Ok(RegistryRequirement::Exact(version.clone()))
            }
            SourceControlRequirement::Range { lower, upper } => Ok(RegistryRequirement::Range {
                lower: lower.clone(),
                upper: upper.clone(),
            }),
            SourceControlRequirement::Branch(_) | SourceControlRequirement::Revision(_) => {
                Err(LoadError::internal(format!(
                    "requirement '{}' cannot be converted to a registry requirement",
                    requirement
                )))
            }
        }
    }
}

impl fmt::Display for RegistryRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryRequirement::Exact(version) => write!(f, "{}", version),
            RegistryRequirement::Range { lower, upper } => write!(f, "{}..<{}", lower, upper),
        }
    }
}
