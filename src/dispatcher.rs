//! Concurrent identity resolution across a manifest
//!
//! One lookup task per remote source-control dependency, all joined
//! before returning. A failed lookup never fails the surrounding load;
//! it degrades to a warning and the dependency keeps its declared
//! identity. Dropping the returned future aborts every task still in
//! flight, so a cancelled load writes nothing.

use crate::domain::{Manifest, PackageIdentity};
use crate::mapper::IdentityMapper;
use crate::observability::{Diagnostic, ObservabilityHandle};
use std::collections::BTreeMap;
use tokio::task::JoinSet;

/// Resolves registry identities for every eligible dependency of
/// `manifest`.
///
/// The result maps dependency positions to resolved identities and
/// contains an entry only where a rewrite should occur. Collection order
/// is position order regardless of task completion order, and warnings
/// for absorbed failures are emitted in position order too.
pub async fn resolve_assignments(
    manifest: &Manifest,
    mapper: &IdentityMapper,
    scope: &ObservabilityHandle,
) -> BTreeMap<usize, PackageIdentity> {
    let mut lookups = JoinSet::new();

    for (position, dependency) in manifest.dependencies.iter().enumerate() {
        let Some(url) = dependency.remote_url() else {
            continue;
        };
        let url = url.clone();
        let mapper = mapper.clone();
        let scope = scope.clone();
        lookups.spawn(async move {
            let outcome = mapper.map(&url, &scope).await;
            (position, url, outcome)
        });
    }

    let mut outcomes = BTreeMap::new();
    while let Some(joined) = lookups.join_next().await {
        // A panicked lookup task surfaces here; that is a code bug in the
        // mapper, not a lookup failure, so propagate the panic.
        let (position, url, outcome) = joined.expect("identity lookup task panicked");
        outcomes.insert(position, (url, outcome));
    }

    let mut assignments = BTreeMap::new();
    for (position, (url, outcome)) in outcomes {
        match outcome {
            Ok(Some(identity)) => {
                assignments.insert(position, identity);
            }
            Ok(None) => {}
            Err(error) => {
                scope.emit(
                    Diagnostic::warning(format!(
                        "failed querying registry identity for '{}'",
                        url
                    ))
                    .with_underlying(&error),
                );
            }
        }
    }
    assignments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::IdentityCache;
    use crate::domain::{
        Dependency, PackageKind, SourceControlRequirement, SourceControlUrl, Target,
    };
    use crate::error::RegistryError;
    use crate::observability::{CollectingScope, Severity};
    use crate::registry::RegistryIdentityResolver;
    use async_trait::async_trait;
    use semver::Version;
    use std::collections::{BTreeMap as Map, BTreeSet};
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Resolver with one scripted answer per URL; unknown URLs fail
    struct TableResolver {
        answers: Map<String, Vec<&'static str>>,
    }

    #[async_trait]
    impl RegistryIdentityResolver for TableResolver {
        async fn lookup_identities(
            &self,
            url: &SourceControlUrl,
            _scope: &ObservabilityHandle,
        ) -> Result<BTreeSet<PackageIdentity>, RegistryError> {
            match self.answers.get(url.as_str()) {
                Some(identities) => Ok(identities.iter().map(PackageIdentity::new).collect()),
                None => Err(RegistryError::network(url.as_str(), "unreachable")),
            }
        }
    }

    fn manifest_with(dependencies: Vec<Dependency>) -> Manifest {
        Manifest {
            display_name: "app".to_string(),
            identity: PackageIdentity::new("app"),
            path: PathBuf::from("/app/Manifest.json"),
            kind: PackageKind::Root,
            location: "/app".to_string(),
            description: None,
            license: None,
            authors: Vec::new(),
            keywords: Vec::new(),
            readme: None,
            default_localization: None,
            platforms: Vec::new(),
            version: None,
            revision: None,
            tools_version: Version::new(6, 0, 0),
            dependencies,
            products: Vec::new(),
            targets: vec![Target::regular("App", Vec::new())],
            traits: BTreeSet::new(),
        }
    }

    fn exact(s: &str) -> SourceControlRequirement {
        SourceControlRequirement::Exact(Version::parse(s).unwrap())
    }

    fn mapper_over(answers: Map<String, Vec<&'static str>>) -> IdentityMapper {
        IdentityMapper::new(Arc::new(TableResolver { answers }), IdentityCache::new())
    }

    #[tokio::test]
    async fn test_only_remote_source_control_dependencies_are_looked_up() {
        let manifest = manifest_with(vec![
            Dependency::file_system("local", "/local/pkg"),
            Dependency::remote_source_control(
                "swift-nio",
                "swift-nio",
                SourceControlUrl::new("https://github.com/apple/swift-nio"),
                exact("2.0.0"),
            ),
        ]);
        let mapper = mapper_over(Map::from([(
            "https://github.com/apple/swift-nio".to_string(),
            vec!["apple.swift-nio"],
        )]));
        let scope: ObservabilityHandle = Arc::new(CollectingScope::new());

        let assignments = resolve_assignments(&manifest, &mapper, &scope).await;

        assert_eq!(
            assignments,
            Map::from([(1, PackageIdentity::new("apple.swift-nio"))])
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_warns_and_assigns_nothing() {
        let manifest = manifest_with(vec![Dependency::remote_source_control(
            "dead",
            "dead",
            SourceControlUrl::new("https://github.com/gone/dead"),
            exact("1.0.0"),
        )]);
        let mapper = mapper_over(Map::new());
        let collecting = CollectingScope::new();
        let scope: ObservabilityHandle = Arc::new(collecting.clone());

        let assignments = resolve_assignments(&manifest, &mapper, &scope).await;

        assert!(assignments.is_empty());
        let warnings = collecting.messages(Severity::Warning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0]
            .contains("failed querying registry identity for 'https://github.com/gone/dead'"));
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_the_other_assignments() {
        let manifest = manifest_with(vec![
            Dependency::remote_source_control(
                "dead",
                "dead",
                SourceControlUrl::new("https://github.com/gone/dead"),
                exact("1.0.0"),
            ),
            Dependency::remote_source_control(
                "swift-nio",
                "swift-nio",
                SourceControlUrl::new("https://github.com/apple/swift-nio"),
                exact("2.0.0"),
            ),
        ]);
        let mapper = mapper_over(Map::from([(
            "https://github.com/apple/swift-nio".to_string(),
            vec!["apple.swift-nio"],
        )]));
        let collecting = CollectingScope::new();
        let scope: ObservabilityHandle = Arc::new(collecting.clone());

        let assignments = resolve_assignments(&manifest, &mapper, &scope).await;

        assert_eq!(
            assignments,
            Map::from([(1, PackageIdentity::new("apple.swift-nio"))])
        );
        assert_eq!(collecting.messages(Severity::Warning).len(), 1);
    }

    #[tokio::test]
    async fn test_no_identity_answer_assigns_nothing_and_stays_quiet() {
        let manifest = manifest_with(vec![Dependency::remote_source_control(
            "unpublished",
            "unpublished",
            SourceControlUrl::new("https://github.com/me/unpublished"),
            exact("1.0.0"),
        )]);
        let mapper = mapper_over(Map::from([(
            "https://github.com/me/unpublished".to_string(),
            Vec::new(),
        )]));
        let collecting = CollectingScope::new();
        let scope: ObservabilityHandle = Arc::new(collecting.clone());

        let assignments = resolve_assignments(&manifest, &mapper, &scope).await;

        assert!(assignments.is_empty());
        assert!(collecting.diagnostics().is_empty());
    }
}
