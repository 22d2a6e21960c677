//! Error types using thiserror
//!
//! Error hierarchy:
//! - RegistryError: identity lookup failures from the registry client
//! - LoadError: manifest loading failures, including the fatal internal
//!   invariant variant raised when the rewriter is handed impossible work
//!
//! Registry errors are recoverable inside the core (a failed lookup
//! degrades to a warning); load errors always surface to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the registry identity lookup contract
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry does not know the URL at all
    #[error("no package found for '{url}'")]
    NotFound { url: String },

    /// Network request failed
    #[error("failed to reach registry for '{url}': {message}")]
    Network { url: String, message: String },

    /// Rate limit exceeded
    #[error("registry rate limit exceeded while querying '{url}'")]
    RateLimited { url: String },

    /// The registry answered with something unusable
    #[error("invalid registry response for '{url}': {message}")]
    InvalidResponse { url: String, message: String },

    /// Timeout waiting on the registry
    #[error("timeout while querying registry for '{url}'")]
    Timeout { url: String },
}

impl RegistryError {
    /// Creates a new NotFound error
    pub fn not_found(url: impl Into<String>) -> Self {
        RegistryError::NotFound { url: url.into() }
    }

    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimited error
    pub fn rate_limited(url: impl Into<String>) -> Self {
        RegistryError::RateLimited { url: url.into() }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(url: impl Into<String>) -> Self {
        RegistryError::Timeout { url: url.into() }
    }
}

/// Errors from the manifest load contract
#[derive(Error, Debug)]
pub enum LoadError {
    /// Manifest file not found
    #[error("manifest not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the manifest file
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest contents did not parse
    #[error("failed to parse manifest {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The manifest parsed but violates its own contract
    #[error("invalid manifest {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    /// A code-bug invariant was violated; never user-recoverable
    #[error("internal error: {0}")]
    Internal(String),
}

impl LoadError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        LoadError::NotFound { path: path.into() }
    }

    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Parse error
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        LoadError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new Invalid error
    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        LoadError::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        LoadError::Internal(message.into())
    }
}
