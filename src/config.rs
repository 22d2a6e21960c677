//! Transformation configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing switch for registry-backed manifest transformation.
///
/// Chosen once per workspace session, before any loader is built. With
/// `Disabled` the aligning loader must not be constructed at all; callers
/// wire the underlying loader directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformConfig {
    /// Leave manifests exactly as the underlying loader produced them
    #[default]
    Disabled,
    /// Align source-control dependency identities with the registry
    Identity,
    /// Replace source-control dependencies with registry dependencies
    /// where the requirement allows it
    Swizzle,
}

/// Transformation mode of a constructed aligning loader.
///
/// Deliberately has no disabled case, so "decorator built but disabled"
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    Identity,
    Swizzle,
}

/// Returned when converting a disabled configuration into a mode
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("registry transformation is disabled; use the underlying loader directly")]
pub struct TransformDisabled;

impl TryFrom<TransformConfig> for TransformMode {
    type Error = TransformDisabled;

    fn try_from(config: TransformConfig) -> Result<Self, Self::Error> {
        match config {
            TransformConfig::Disabled => Err(TransformDisabled),
            TransformConfig::Identity => Ok(TransformMode::Identity),
            TransformConfig::Swizzle => Ok(TransformMode::Swizzle),
        }
    }
}
