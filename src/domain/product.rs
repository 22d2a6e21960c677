//! Product descriptions

use serde::{Deserialize, Serialize};

/// What kind of artifact a product builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Library,
    Executable,
}

/// A product the package offers to its dependents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub kind: ProductKind,
    /// Names of the targets composed into this product
    pub targets: Vec<String>,
}

impl Product {
    pub fn library(name: impl Into<String>, targets: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: ProductKind::Library,
            targets,
        }
    }

    pub fn executable(name: impl Into<String>, targets: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: ProductKind::Executable,
            targets,
        }
    }
}
