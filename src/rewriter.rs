//! Manifest rewriting
//!
//! Applies the transformation mode to a manifest given the dispatcher's
//! identity assignments. Two rewrites exist:
//! - Identity: keep the dependency as-is, swap only its identity
//! - Swizzle: replace the source-control dependency with a registry
//!   dependency, where the requirement is expressible there
//!
//! A swizzle changes the name targets refer to the package by, so the
//! rewriter also walks every target-dependency cross-reference and keeps
//! it pointing at the declaring package. Everything else in the manifest
//! is carried through untouched.

use crate::config::TransformMode;
use crate::domain::{
    Dependency, Manifest, PackageIdentity, RegistryDependency, RegistryRequirement,
    SourceControlDependency, SourceControlLocation, Target, TargetDependency,
};
use crate::error::LoadError;
use crate::observability::{Diagnostic, ObservabilityScope};
use std::collections::BTreeMap;

/// Cross-reference table built during dependency rewriting: lowercased
/// declared name of a swizzled dependency to its canonical identity.
type CrossReferences = BTreeMap<String, String>;

/// Produces a new manifest with `assignments` applied under `mode`.
///
/// Dependencies are processed in declaration order, and the per-rewrite
/// info diagnostics follow that order. The input manifest is never
/// mutated. An assignment pointing at anything but a remote
/// source-control dependency is a dispatcher bug and comes back as
/// `LoadError::Internal`.
pub fn apply(
    manifest: &Manifest,
    assignments: &BTreeMap<usize, PackageIdentity>,
    mode: TransformMode,
    scope: &dyn ObservabilityScope,
) -> Result<Manifest, LoadError> {
    let mut dependencies = Vec::with_capacity(manifest.dependencies.len());
    let mut cross_references = CrossReferences::new();

    for (position, dependency) in manifest.dependencies.iter().enumerate() {
        match assignments.get(&position) {
            None => dependencies.push(dependency.clone()),
            Some(identity) => {
                let rewritten =
                    rewrite_dependency(dependency, identity, mode, &mut cross_references, scope)?;
                dependencies.push(rewritten);
            }
        }
    }

    let targets = if cross_references.is_empty() {
        manifest.targets.clone()
    } else {
        manifest
            .targets
            .iter()
            .map(|target| rewrite_target(target, &cross_references))
            .collect()
    };

    Ok(manifest.replacing(dependencies, targets))
}

fn rewrite_dependency(
    dependency: &Dependency,
    identity: &PackageIdentity,
    mode: TransformMode,
    cross_references: &mut CrossReferences,
    scope: &dyn ObservabilityScope,
) -> Result<Dependency, LoadError> {
    let Dependency::SourceControl(source_control) = dependency else {
        return Err(LoadError::internal(format!(
            "registry identity '{}' assigned to non-source-control dependency '{}'",
            identity,
            dependency.identity()
        )));
    };
    let SourceControlLocation::Remote(url) = &source_control.location else {
        return Err(LoadError::internal(format!(
            "registry identity '{}' assigned to local source-control dependency '{}'",
            identity, source_control.identity
        )));
    };

    let swizzle =
        mode == TransformMode::Swizzle && source_control.requirement.is_registry_representable();
    if !swizzle {
        // Identity mode, or a branch/revision requirement the registry
        // cannot express: keep the kind, align only the identity.
        scope.emit(Diagnostic::info(format!(
            "adjusting '{}' identity to registry identity of '{}'.",
            url, identity
        )));
        return Ok(Dependency::SourceControl(SourceControlDependency {
            identity: identity.clone(),
            ..source_control.clone()
        }));
    }

    let requirement = RegistryRequirement::try_from(&source_control.requirement)?;
    scope.emit(Diagnostic::info(format!(
        "swizzling '{}' with registry dependency '{}'.",
        url, identity
    )));
    cross_references.insert(
        source_control.declared_name.to_lowercase(),
        identity.as_str().to_string(),
    );
    Ok(Dependency::Registry(RegistryDependency {
        identity: identity.clone(),
        requirement,
        products: source_control.products.clone(),
        traits: source_control.traits.clone(),
    }))
}

fn rewrite_target(target: &Target, cross_references: &CrossReferences) -> Target {
    let dependencies = target
        .dependencies
        .iter()
        .map(|dependency| rewrite_target_dependency(dependency, cross_references))
        .collect();
    Target {
        dependencies,
        ..target.clone()
    }
}

fn rewrite_target_dependency(
    dependency: &TargetDependency,
    cross_references: &CrossReferences,
) -> TargetDependency {
    match dependency {
        TargetDependency::Product {
            name,
            package: Some(package),
            module_aliases,
            condition,
        } => match cross_references.get(&package.to_lowercase()) {
            Some(identity) => TargetDependency::Product {
                name: name.clone(),
                package: Some(identity.clone()),
                module_aliases: module_aliases.clone(),
                condition: condition.clone(),
            },
            None => dependency.clone(),
        },
        TargetDependency::ByName { name, condition } => {
            match cross_references.get(&name.to_lowercase()) {
                // The bare name now refers to a registry package; pin it
                // down as an explicit product reference.
                Some(identity) => TargetDependency::Product {
                    name: name.clone(),
                    package: Some(identity.clone()),
                    module_aliases: BTreeMap::new(),
                    condition: condition.clone(),
                },
                None => dependency.clone(),
            }
        }
        _ => dependency.clone(),
    }
}
