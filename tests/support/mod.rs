//! Shared test doubles for the loader integration tests
//!
//! Both mocks follow the same shape: clonable handles over an
//! `Arc<Mutex<Inner>>`, scripted failures, and recorded operations so
//! tests can assert on what the decorator actually forwarded.

#![allow(dead_code)]

use async_trait::async_trait;
use regalign::domain::{
    Dependency, Manifest, PackageIdentity, PackageKind, SourceControlUrl, Target,
};
use regalign::error::{LoadError, RegistryError};
use regalign::loader::{ManifestLoadRequest, ManifestLoader};
use regalign::observability::ObservabilityHandle;
use regalign::registry::RegistryIdentityResolver;
use semver::Version;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Operation recorded by the mock loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderOperation {
    Load { path: PathBuf },
    ResetCache,
    PurgeCache,
}

#[derive(Default)]
struct LoaderInner {
    manifests: HashMap<PathBuf, Manifest>,
    fail_with: Option<String>,
    operations: Vec<LoaderOperation>,
}

/// In-memory manifest loader with scripted failures
#[derive(Clone, Default)]
pub struct MockManifestLoader {
    inner: Arc<Mutex<LoaderInner>>,
}

impl MockManifestLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `manifest` for its own path
    pub fn serve(&self, manifest: Manifest) {
        let mut inner = self.inner.lock().unwrap();
        inner.manifests.insert(manifest.path.clone(), manifest);
    }

    /// Makes every subsequent load fail with a parse error
    pub fn fail_loads(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_with = Some(message.into());
    }

    pub fn operations(&self) -> Vec<LoaderOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    pub fn load_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap()
            .operations
            .iter()
            .filter(|op| matches!(op, LoaderOperation::Load { .. }))
            .count()
    }
}

#[async_trait]
impl ManifestLoader for MockManifestLoader {
    async fn load(
        &self,
        request: ManifestLoadRequest,
        _scope: &ObservabilityHandle,
    ) -> Result<Manifest, LoadError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(LoaderOperation::Load {
            path: request.path.clone(),
        });
        if let Some(message) = &inner.fail_with {
            return Err(LoadError::parse(request.path, message.clone()));
        }
        inner
            .manifests
            .get(&request.path)
            .cloned()
            .ok_or_else(|| LoadError::not_found(request.path))
    }

    async fn reset_cache(&self, _scope: &ObservabilityHandle) {
        self.inner
            .lock()
            .unwrap()
            .operations
            .push(LoaderOperation::ResetCache);
    }

    async fn purge_cache(&self, _scope: &ObservabilityHandle) {
        self.inner
            .lock()
            .unwrap()
            .operations
            .push(LoaderOperation::PurgeCache);
    }
}

#[derive(Default)]
struct RegistryInner {
    answers: HashMap<String, Vec<String>>,
    failing: BTreeSet<String>,
    hanging: BTreeSet<String>,
    calls: HashMap<String, usize>,
}

/// Scripted registry: per-URL identity answers or failures, with call
/// counting for cache assertions
#[derive(Clone, Default)]
pub struct MockRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&self, url: &str, identities: &[&str]) {
        let mut inner = self.inner.lock().unwrap();
        inner.failing.remove(url);
        inner.hanging.remove(url);
        inner.answers.insert(
            url.to_string(),
            identities.iter().map(|s| s.to_string()).collect(),
        );
    }

    pub fn fail(&self, url: &str) {
        self.inner.lock().unwrap().failing.insert(url.to_string());
    }

    /// Makes lookups for `url` park forever, for cancellation tests
    pub fn hang(&self, url: &str) {
        self.inner.lock().unwrap().hanging.insert(url.to_string());
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .calls
            .get(url)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl RegistryIdentityResolver for MockRegistry {
    async fn lookup_identities(
        &self,
        url: &SourceControlUrl,
        _scope: &ObservabilityHandle,
    ) -> Result<BTreeSet<PackageIdentity>, RegistryError> {
        // The lock must not be held across the hanging await below.
        let outcome = {
            let mut inner = self.inner.lock().unwrap();
            *inner.calls.entry(url.as_str().to_string()).or_insert(0) += 1;
            if inner.hanging.contains(url.as_str()) {
                None
            } else if inner.failing.contains(url.as_str()) {
                Some(Err(RegistryError::network(url.as_str(), "connection reset")))
            } else {
                Some(match inner.answers.get(url.as_str()) {
                    Some(identities) => {
                        Ok(identities.iter().map(PackageIdentity::new).collect())
                    }
                    None => Ok(BTreeSet::new()),
                })
            }
        };
        match outcome {
            Some(result) => result,
            None => std::future::pending().await,
        }
    }
}

/// A root manifest with the given dependencies and targets and plausible
/// values everywhere else
pub fn manifest(path: &Path, dependencies: Vec<Dependency>, targets: Vec<Target>) -> Manifest {
    Manifest {
        display_name: "App".to_string(),
        identity: PackageIdentity::new("app"),
        path: path.to_path_buf(),
        kind: PackageKind::Root,
        location: path.parent().unwrap().display().to_string(),
        description: Some("application under test".to_string()),
        license: Some("Apache-2.0".to_string()),
        authors: vec!["app team".to_string()],
        keywords: Vec::new(),
        readme: None,
        default_localization: None,
        platforms: Vec::new(),
        version: None,
        revision: None,
        tools_version: Version::new(6, 0, 0),
        dependencies,
        products: Vec::new(),
        targets,
        traits: BTreeSet::new(),
    }
}

/// The load request matching a manifest produced by [`manifest`]
pub fn request_for(manifest: &Manifest) -> ManifestLoadRequest {
    ManifestLoadRequest {
        path: manifest.path.clone(),
        tools_version: manifest.tools_version.clone(),
        identity: manifest.identity.clone(),
        kind: manifest.kind,
        location: manifest.location.clone(),
        version: manifest.version.clone(),
    }
}
