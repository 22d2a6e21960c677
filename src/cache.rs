//! Time-bounded memoization of identity lookups
//!
//! The cache remembers both outcomes of a registry lookup: "these are the
//! identities" and "the lookup failed". Failures are cached for the same
//! interval as successes, so a flaky registry is asked about a URL at
//! most once per interval no matter how many loads reference it.

use crate::domain::{PackageIdentity, SourceControlUrl};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// How long both success and failure outcomes stay fresh
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Remembered outcome of one identity lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedOutcome {
    /// The registry answered; `None` means it knows no identity
    Found(Option<PackageIdentity>),
    /// The lookup failed; treated as "no identity" until it expires
    Failed,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: CachedOutcome,
    expires_at: Instant,
}

/// Shared URL-to-outcome cache.
///
/// Clones share one map. The lock is only ever held for a point read or
/// write, never across an await. Entries are not evicted; a store after
/// expiry overwrites in place.
#[derive(Debug, Clone)]
pub struct IdentityCache {
    entries: Arc<Mutex<HashMap<SourceControlUrl, CacheEntry>>>,
    ttl: Duration,
}

impl Default for IdentityCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates a cache with a custom expiry interval
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the remembered outcome for `url` while it is still fresh
    pub fn lookup(&self, url: &SourceControlUrl) -> Option<CachedOutcome> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(url)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.outcome.clone())
    }

    /// Remembers `outcome` for `url`, fresh for one interval from now
    pub fn store(&self, url: &SourceControlUrl, outcome: CachedOutcome) {
        let entry = CacheEntry {
            outcome,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.lock().unwrap().insert(url.clone(), entry);
    }
}
