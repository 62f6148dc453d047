//! CLI error types.

use airlens::airport::CatalogError;

/// Errors surfaced to the CLI user.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid extent '{0}': expected `min_lon min_lat max_lon max_lat`")]
    InvalidExtent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
