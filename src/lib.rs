//! regalign - Registry-aware manifest transformation
//!
//! This library rewrites parsed package manifests so that dependency
//! declarations mixing source-control and registry origins converge on a
//! single package identity:
//! - A loader decorator wraps any manifest loader and post-processes
//!   every loaded manifest
//! - Identity lookups run concurrently per manifest, memoized with a
//!   time-bounded cache for both success and failure
//! - The rewriter aligns identities in place or replaces source-control
//!   dependencies with registry dependencies, keeping target
//!   cross-references consistent

pub mod cache;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod loader;
pub mod mapper;
pub mod observability;
pub mod registry;
pub mod rewriter;

pub use config::{TransformConfig, TransformDisabled, TransformMode};
pub use loader::{ManifestLoadRequest, ManifestLoader, RegistryAligningLoader};
pub use registry::RegistryIdentityResolver;
