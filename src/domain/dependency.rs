//! Package dependency declarations
//!
//! A manifest declares dependencies of three kinds:
//! - Source-control: cloned from a VCS location at some requirement
//! - Registry: fetched from a registry by identity and version
//! - File-system: a plain local directory
//!
//! Only source-control dependencies with a remote location participate in
//! registry identity transformation; everything else passes through.

use super::{PackageIdentity, RegistryRequirement, SourceControlRequirement, SourceControlUrl};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// Where a source-control dependency lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceControlLocation {
    /// A checkout on the local file system
    Local(PathBuf),
    /// A remote VCS origin
    Remote(SourceControlUrl),
}

impl fmt::Display for SourceControlLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceControlLocation::Local(path) => write!(f, "{}", path.display()),
            SourceControlLocation::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Which of a dependency's products the depending package uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFilter {
    /// Every product the dependency offers
    #[default]
    Everything,
    /// A named subset
    Specific(BTreeSet<String>),
}

/// A dependency resolved by cloning a VCS location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceControlDependency {
    /// Identity the manifest currently assigns to this dependency
    pub identity: PackageIdentity,
    /// Name targets use to refer to this dependency's products
    pub declared_name: String,
    pub location: SourceControlLocation,
    pub requirement: SourceControlRequirement,
    pub products: ProductFilter,
    /// Trait names the depending package enables on this dependency
    pub traits: BTreeSet<String>,
}

/// A dependency resolved from a package registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDependency {
    pub identity: PackageIdentity,
    pub requirement: RegistryRequirement,
    pub products: ProductFilter,
    pub traits: BTreeSet<String>,
}

/// A dependency that is just a local directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystemDependency {
    pub identity: PackageIdentity,
    pub path: PathBuf,
    pub products: ProductFilter,
    pub traits: BTreeSet<String>,
}

/// A declared package dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dependency {
    SourceControl(SourceControlDependency),
    Registry(RegistryDependency),
    FileSystem(FileSystemDependency),
}

impl Dependency {
    /// Creates a remote source-control dependency with the default product
    /// filter and no traits
    pub fn remote_source_control(
        identity: impl Into<PackageIdentity>,
        declared_name: impl Into<String>,
        url: impl Into<SourceControlUrl>,
        requirement: SourceControlRequirement,
    ) -> Self {
        Dependency::SourceControl(SourceControlDependency {
            identity: identity.into(),
            declared_name: declared_name.into(),
            location: SourceControlLocation::Remote(url.into()),
            requirement,
            products: ProductFilter::Everything,
            traits: BTreeSet::new(),
        })
    }

    /// Creates a file-system dependency
    pub fn file_system(identity: impl Into<PackageIdentity>, path: impl Into<PathBuf>) -> Self {
        Dependency::FileSystem(FileSystemDependency {
            identity: identity.into(),
            path: path.into(),
            products: ProductFilter::Everything,
            traits: BTreeSet::new(),
        })
    }

    /// The identity this dependency currently declares
    pub fn identity(&self) -> &PackageIdentity {
        match self {
            Dependency::SourceControl(dependency) => &dependency.identity,
            Dependency::Registry(dependency) => &dependency.identity,
            Dependency::FileSystem(dependency) => &dependency.identity,
        }
    }

    /// The remote URL, when this is a remote source-control dependency
    pub fn remote_url(&self) -> Option<&SourceControlUrl> {
        match self {
            Dependency::SourceControl(SourceControlDependency {
                location: SourceControlLocation::Remote(url),
                ..
            }) => Some(url),
            _ => None,
        }
    }
}
