//! Errors for the host layer.
//!
//! Splitting text into paragraphs cannot fail. What can fail is everything
//! around it: reading configuration and writing to the terminal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output stream failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
