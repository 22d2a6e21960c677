//! Per-URL identity mapping
//!
//! One lookup: consult the cache, fall through to the registry, pick the
//! sorted-first identity, write the outcome back. Concurrent lookups for
//! the same URL are not coalesced; every writer computes an equivalent
//! answer and the cache interval bounds any disagreement.

use crate::cache::{CachedOutcome, IdentityCache};
use crate::domain::{PackageIdentity, SourceControlUrl};
use crate::error::RegistryError;
use crate::observability::ObservabilityHandle;
use crate::registry::RegistryIdentityResolver;
use std::sync::Arc;

/// Cheap-clone handle over the resolver and the shared cache
#[derive(Clone)]
pub struct IdentityMapper {
    resolver: Arc<dyn RegistryIdentityResolver>,
    cache: IdentityCache,
}

impl IdentityMapper {
    pub fn new(resolver: Arc<dyn RegistryIdentityResolver>, cache: IdentityCache) -> Self {
        Self { resolver, cache }
    }

    /// Resolves the registry identity for one source-control URL.
    ///
    /// `Ok(None)` covers two cases the caller treats identically: the
    /// registry knows no identity for the URL, or a previous lookup
    /// failed recently enough that asking again would only amplify the
    /// failure. A fresh lookup failure is stored and then propagated so
    /// the dispatcher can surface it once.
    pub async fn map(
        &self,
        url: &SourceControlUrl,
        scope: &ObservabilityHandle,
    ) -> Result<Option<PackageIdentity>, RegistryError> {
        match self.cache.lookup(url) {
            Some(CachedOutcome::Found(identity)) => return Ok(identity),
            Some(CachedOutcome::Failed) => return Ok(None),
            None => {}
        }

        match self.resolver.lookup_identities(url, scope).await {
            Ok(identities) => {
                // Sorted-first selection keeps multi-identity answers
                // deterministic; the set is already in canonical order.
                let picked = identities.into_iter().next();
                self.cache
                    .store(url, CachedOutcome::Found(picked.clone()));
                Ok(picked)
            }
            Err(error) => {
                self.cache.store(url, CachedOutcome::Failed);
                Err(error)
            }
        }
    }
}
