//! Error types for FilmBox.
//!
//! This module defines the centralized error type [`FilmBoxError`] and a type alias
//! [`Result`] used throughout the crate. Conditions that the catalog treats as
//! no-ops (removing an unknown favorite, updating an unknown note) or as a
//! recoverable degrade (malformed stored notes) never surface here.

use thiserror::Error;

/// The main error type for FilmBox operations.
///
/// # Examples
///
/// ```
/// use filmbox::FilmBoxError;
///
/// fn read_catalog() -> Result<(), FilmBoxError> {
///     Err(FilmBoxError::Catalog("duplicate film id 7".to_string()))
/// }
/// assert!(read_catalog().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FilmBoxError {
    /// Storage operation failed.
    ///
    /// Occurs when the key-value backend cannot serialize or persist data.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The film catalog could not be loaded or violates its invariants.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A note rating outside the 1..=5 range was supplied.
    #[error("Invalid note rating: {0} (expected 1-5)")]
    InvalidRating(i64),
}

/// A specialized `Result` type for FilmBox operations.
pub type Result<T> = std::result::Result<T, FilmBoxError>;
