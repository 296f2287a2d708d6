//! Error types for the vreg-core library.

use thiserror::Error;

/// Main error type for the vreg library.
///
/// Field extraction itself is infallible (a failed lookup degrades to the
/// unknown sentinel); errors here come from configuration handling.
#[derive(Error, Debug)]
pub enum VregError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the vreg library.
pub type Result<T> = std::result::Result<T, VregError>;
