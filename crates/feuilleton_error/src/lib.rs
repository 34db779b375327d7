//! Error types for the Feuilleton library.
//!
//! This crate provides the foundation error types used throughout the
//! Feuilleton workspace. Each error records the source location where it was
//! created via `#[track_caller]`, and all kinds aggregate into
//! [`FeuilletonError`] for propagation across crate boundaries.

mod backend;
mod config;
mod http;
mod json;
mod outline;
mod storage;

pub use backend::BackendError;
pub use config::ConfigError;
pub use http::HttpError;
pub use json::JsonError;
pub use outline::{OutlineError, OutlineErrorKind};
pub use storage::{StorageError, StorageErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum FeuilletonErrorKind {
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Generic backend error
    Backend(BackendError),
    /// Configuration error
    Config(ConfigError),
    /// File storage error
    Storage(StorageError),
    /// Outline or chapter sequencing error
    Outline(OutlineError),
}

impl std::fmt::Display for FeuilletonErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeuilletonErrorKind::Http(e) => write!(f, "{}", e),
            FeuilletonErrorKind::Json(e) => write!(f, "{}", e),
            FeuilletonErrorKind::Backend(e) => write!(f, "{}", e),
            FeuilletonErrorKind::Config(e) => write!(f, "{}", e),
            FeuilletonErrorKind::Storage(e) => write!(f, "{}", e),
            FeuilletonErrorKind::Outline(e) => write!(f, "{}", e),
        }
    }
}

/// Feuilleton error with kind discrimination.
#[derive(Debug)]
pub struct FeuilletonError(Box<FeuilletonErrorKind>);

impl FeuilletonError {
    /// Create a new error from a kind.
    pub fn new(kind: FeuilletonErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FeuilletonErrorKind {
        &self.0
    }
}

impl std::fmt::Display for FeuilletonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Feuilleton Error: {}", self.0)
    }
}

impl std::error::Error for FeuilletonError {}

// Generic From implementation for any type that converts to FeuilletonErrorKind
impl<T> From<T> for FeuilletonError
where
    T: Into<FeuilletonErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Feuilleton operations.
pub type FeuilletonResult<T> = std::result::Result<T, FeuilletonError>;
