//! Core domain model for regalign
//!
//! This module contains the manifest vocabulary the transformation core
//! operates on:
//! - Package identities and source-control URL tokens
//! - Version requirements for source-control and registry origins
//! - Dependency, product and target descriptions
//! - The manifest record itself

mod dependency;
mod identity;
mod manifest;
mod product;
mod requirement;
mod scm;
mod target;

pub use dependency::{
    Dependency, FileSystemDependency, ProductFilter, RegistryDependency, SourceControlDependency,
    SourceControlLocation,
};
pub use identity::PackageIdentity;
pub use manifest::{Manifest, PackageKind, PlatformRequirement};
pub use product::{Product, ProductKind};
pub use requirement::{RegistryRequirement, SourceControlRequirement};
pub use scm::SourceControlUrl;
pub use target::{PlatformCondition, Target, TargetDependency, TargetKind};
