//! Error types for Octopack.

use thiserror::Error;

/// Result type alias for Octopack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing items, containers or packer configuration.
///
/// Failing to pack every item is not an error; it is reported through
/// [`PackingResult`](crate::result::PackingResult).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid item description.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid container description.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
