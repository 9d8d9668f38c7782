//! Error types for the keymend library.
//!
//! All errors are represented by the [`KeymendError`] enum. Configuration
//! problems (a malformed alphabet, a malformed keyboard layout, an empty
//! frequency model) are surfaced at construction time; correction calls
//! themselves never fail.
//!
//! # Examples
//!
//! ```
//! use keymend::error::{KeymendError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KeymendError::configuration("keyboard layout plane is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for keymend operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum KeymendError {
    /// I/O errors (frequency file loading, saving, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (malformed alphabet or keyboard layout)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The supplied frequency model has no entries
    #[error("Frequency model is empty")]
    EmptyModel,

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KeymendError.
pub type Result<T> = std::result::Result<T, KeymendError>;

impl KeymendError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        KeymendError::Configuration(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KeymendError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KeymendError::Other(msg.into())
    }
}
