//! The parsed package manifest
//!
//! The manifest is a wide record; the transformation core only ever
//! rewrites `dependencies` and `targets` and treats every other field as
//! opaque carry-through. `Manifest::replacing` is the single
//! reconstruction point so new fields cannot silently drop out of a
//! rewrite.

use super::{Dependency, PackageIdentity, Product, Target};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// How the package entered the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
    /// The workspace root package
    Root,
    /// A plain directory dependency
    FileSystem,
    /// A checkout of a local repository
    LocalSourceControl,
    /// A clone of a remote repository
    RemoteSourceControl,
    /// A registry download
    Registry,
}

/// Minimum platform version the package supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRequirement {
    pub name: String,
    pub min_version: String,
}

/// A fully parsed package manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Name the package displays, not necessarily its identity
    pub display_name: String,
    pub identity: PackageIdentity,
    /// Path of the manifest file itself
    pub path: PathBuf,
    pub kind: PackageKind,
    /// Location string the package was loaded from (path or URL)
    pub location: String,
    pub description: Option<String>,
    pub license: Option<String>,
    pub authors: Vec<String>,
    pub keywords: Vec<String>,
    pub readme: Option<String>,
    pub default_localization: Option<String>,
    pub platforms: Vec<PlatformRequirement>,
    /// Version, when the package came from a tagged source
    pub version: Option<Version>,
    /// VCS revision, when the package came from source control
    pub revision: Option<String>,
    /// Minimum tooling version the manifest requires
    pub tools_version: Version,
    pub dependencies: Vec<Dependency>,
    pub products: Vec<Product>,
    pub targets: Vec<Target>,
    /// Trait names this package defines
    pub traits: BTreeSet<String>,
}

impl Manifest {
    /// Returns a copy with the dependency and target lists replaced and
    /// every other field carried through by value.
    pub fn replacing(&self, dependencies: Vec<Dependency>, targets: Vec<Target>) -> Manifest {
        Manifest {
            dependencies,
            targets,
            ..self.clone()
        }
    }
}
