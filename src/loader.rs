//! Manifest loading contract and the registry-aligning decorator
//!
//! `ManifestLoader` is the load/reset/purge contract the workspace's
//! manifest loading stack already speaks. `RegistryAligningLoader` wraps
//! any such loader and pipes every loaded manifest through identity
//! resolution and rewriting, leaving the rest of the contract untouched.

use crate::cache::{IdentityCache, DEFAULT_TTL};
use crate::config::TransformMode;
use crate::dispatcher;
use crate::domain::{Manifest, PackageIdentity, PackageKind};
use crate::error::LoadError;
use crate::mapper::IdentityMapper;
use crate::observability::ObservabilityHandle;
use crate::registry::RegistryIdentityResolver;
use crate::rewriter;
use async_trait::async_trait;
use semver::Version;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Per-load parameters handed to a manifest loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLoadRequest {
    /// Path of the manifest file to load
    pub path: PathBuf,
    /// Tooling version to interpret the manifest with
    pub tools_version: Version,
    /// Identity the workspace assigns to the package
    pub identity: PackageIdentity,
    pub kind: PackageKind,
    /// Location string the package came from (path or URL)
    pub location: String,
    /// Version, when loading a tagged snapshot
    pub version: Option<Version>,
}

/// Async manifest loading contract.
///
/// `reset_cache` drops in-memory manifest state; `purge_cache` also
/// drops whatever the loader persisted. Both are infallible by contract.
#[async_trait]
pub trait ManifestLoader: Send + Sync {
    async fn load(
        &self,
        request: ManifestLoadRequest,
        scope: &ObservabilityHandle,
    ) -> Result<Manifest, LoadError>;

    async fn reset_cache(&self, scope: &ObservabilityHandle);

    async fn purge_cache(&self, scope: &ObservabilityHandle);
}

/// Decorator that aligns loaded manifests with the registry.
///
/// Construction requires a `TransformMode`, which a disabled
/// configuration cannot produce; when transformation is off, callers
/// wire the underlying loader directly instead of building this type.
///
/// The identity cache inside the decorator is workspace-scoped state
/// keyed by URL, not manifest-content-derived state, so `reset_cache`
/// and `purge_cache` forward to the underlying loader without touching
/// it.
pub struct RegistryAligningLoader {
    underlying: Arc<dyn ManifestLoader>,
    mapper: IdentityMapper,
    mode: TransformMode,
}

impl RegistryAligningLoader {
    pub fn new(
        underlying: Arc<dyn ManifestLoader>,
        resolver: Arc<dyn RegistryIdentityResolver>,
        mode: TransformMode,
    ) -> Self {
        Self::with_cache_ttl(underlying, resolver, mode, DEFAULT_TTL)
    }

    /// Creates a decorator with a custom identity-cache expiry interval
    pub fn with_cache_ttl(
        underlying: Arc<dyn ManifestLoader>,
        resolver: Arc<dyn RegistryIdentityResolver>,
        mode: TransformMode,
        ttl: Duration,
    ) -> Self {
        Self {
            underlying,
            mapper: IdentityMapper::new(resolver, IdentityCache::with_ttl(ttl)),
            mode,
        }
    }

    pub fn mode(&self) -> TransformMode {
        self.mode
    }
}

#[async_trait]
impl ManifestLoader for RegistryAligningLoader {
    async fn load(
        &self,
        request: ManifestLoadRequest,
        scope: &ObservabilityHandle,
    ) -> Result<Manifest, LoadError> {
        let manifest = self.underlying.load(request, scope).await?;
        let assignments = dispatcher::resolve_assignments(&manifest, &self.mapper, scope).await;
        rewriter::apply(&manifest, &assignments, self.mode, scope.as_ref())
    }

    async fn reset_cache(&self, scope: &ObservabilityHandle) {
        self.underlying.reset_cache(scope).await;
    }

    async fn purge_cache(&self, scope: &ObservabilityHandle) {
        self.underlying.purge_cache(scope).await;
    }
}
