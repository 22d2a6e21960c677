//! Target descriptions and their dependency cross-references
//!
//! Target dependencies are the one place a manifest refers back to its
//! own dependency list by name. `Product` entries carry an optional
//! declaring-package name and `ByName` entries an ambiguous bare name;
//! both must stay consistent when the dependency list is rewritten.
//! `Target` entries name a sibling target and never change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Condition limiting a target dependency to certain build environments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCondition {
    /// Platform names the dependency applies to, empty meaning all
    pub platforms: Vec<String>,
    /// Build configuration the dependency applies to, if restricted
    pub configuration: Option<String>,
}

/// One entry in a target's dependency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetDependency {
    /// A product of a declared package dependency
    Product {
        name: String,
        /// Declared name of the package offering the product; `None`
        /// means "same package"
        package: Option<String>,
        /// Module renames applied when importing the product
        module_aliases: BTreeMap<String, String>,
        condition: Option<PlatformCondition>,
    },
    /// Either a sibling target or a product, disambiguated later by name
    ByName {
        name: String,
        condition: Option<PlatformCondition>,
    },
    /// A sibling target in the same package
    Target {
        name: String,
        condition: Option<PlatformCondition>,
    },
}

impl TargetDependency {
    pub fn product(name: impl Into<String>, package: Option<String>) -> Self {
        TargetDependency::Product {
            name: name.into(),
            package,
            module_aliases: BTreeMap::new(),
            condition: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        TargetDependency::ByName {
            name: name.into(),
            condition: None,
        }
    }

    pub fn target(name: impl Into<String>) -> Self {
        TargetDependency::Target {
            name: name.into(),
            condition: None,
        }
    }
}

/// What role a target plays in the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Regular,
    Executable,
    Test,
}

/// A buildable module of the package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub kind: TargetKind,
    pub dependencies: Vec<TargetDependency>,
    /// Custom source root, when not derived from the name
    pub path: Option<PathBuf>,
    /// Paths excluded from the source root
    pub exclude: Vec<String>,
    /// Explicit source list, when not the whole root
    pub sources: Option<Vec<String>>,
}

impl Target {
    /// Creates a regular target with the given dependencies
    pub fn regular(name: impl Into<String>, dependencies: Vec<TargetDependency>) -> Self {
        Self {
            name: name.into(),
            kind: TargetKind::Regular,
            dependencies,
            path: None,
            exclude: Vec::new(),
            sources: None,
        }
    }
}
