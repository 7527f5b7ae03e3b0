//! Error types for pujan
//!
//! The catalog engine and cart ledger are total and never fail. Errors only
//! arise at the edges: loading a catalog, reading configuration, and the
//! sign-in flow.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::CatalogError;
use crate::domain::ports::AuthError;

/// Result type alias for pujan operations
pub type PujanResult<T> = Result<T, PujanError>;

/// Main error type for pujan operations
#[derive(Error, Debug)]
pub enum PujanError {
    /// Catalog data failed validation
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Catalog file is not valid JSON for the catalog schema
    #[error("invalid catalog file {file}: {message}")]
    CatalogFormat { file: PathBuf, message: String },

    /// Configuration file is not valid TOML for the config schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Sign-in flow rejected the input or the auth service failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No product with the requested id
    #[error("unknown product '{id}'")]
    UnknownProduct { id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
