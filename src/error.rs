//! Error types for trueno-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
///
/// Kernel functions only ever fail with [`Error::UnsupportedAlgorithm`] or
/// [`Error::InvalidInput`]; the remaining variants belong to the scene,
/// script, configuration and output layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Algorithm tag not recognized for the given primitive kind.
    #[error("unsupported {kind} algorithm '{name}', expected one of: {expected}")]
    UnsupportedAlgorithm {
        /// Primitive kind the tag was given for (line, curve, clip).
        kind: &'static str,
        /// The tag as supplied by the caller.
        name: String,
        /// Comma separated list of accepted tags.
        expected: &'static str,
    },

    /// Malformed primitive input (too few points, etc.).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Operation not defined for the primitive kind.
    #[error("{operation} is not supported for {primitive} primitives")]
    UnsupportedOperation {
        /// The requested operation.
        operation: &'static str,
        /// The primitive kind it was requested on.
        primitive: &'static str,
    },

    /// No primitive stored under the identifier.
    #[error("unknown item '{0}'")]
    UnknownItem(String),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Command script parsing error with line number.
    #[error("script error at line {line}: {message}")]
    ScriptParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// A well-formed script command failed while executing.
    #[error("script command at line {line} failed: {source}")]
    ScriptExecution {
        /// Line number of the command (1-indexed).
        line: usize,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}
