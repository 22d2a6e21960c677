//! Registry identity lookup contract
//!
//! The registry client itself (transport, authentication, retries) lives
//! outside this crate; the core only needs one question answered: which
//! package identities does the registry know for a source-control URL?

use crate::domain::{PackageIdentity, SourceControlUrl};
use crate::error::RegistryError;
use crate::observability::ObservabilityHandle;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Maps source-control URLs to the registry identities that publish them.
///
/// A URL may map to several identities (forks, renames, re-publications);
/// the set is returned sorted by canonical identity order and the caller
/// applies its own selection policy. An empty set is a successful "nobody
/// publishes this" answer, distinct from an error.
#[async_trait]
pub trait RegistryIdentityResolver: Send + Sync {
    async fn lookup_identities(
        &self,
        url: &SourceControlUrl,
        scope: &ObservabilityHandle,
    ) -> Result<BTreeSet<PackageIdentity>, RegistryError>;
}
