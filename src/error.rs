//! Error types for decoding, transforming and displaying images

use thiserror::Error;

/// Errors that can occur while decoding, transforming or displaying an image
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// Decoder input does not match the expected token layout or ends early
    #[error("malformed image: {0}")]
    MalformedImage(String),

    /// Invalid parameter value (dimensions, steps, alpha, mismatched sizes)
    #[error("invalid parameter for {op}: {message}")]
    InvalidParameter { op: String, message: String },

    /// Underlying read or display failure
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl TransformError {
    /// Shorthand for building an [`TransformError::InvalidParameter`].
    pub fn invalid(op: impl Into<String>, message: impl Into<String>) -> Self {
        TransformError::InvalidParameter { op: op.into(), message: message.into() }
    }

    /// Shorthand for building a [`TransformError::MalformedImage`].
    pub fn malformed(message: impl Into<String>) -> Self {
        TransformError::MalformedImage(message.into())
    }
}

impl From<image::ImageError> for TransformError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => TransformError::Io(io),
            other => TransformError::MalformedImage(other.to_string()),
        }
    }
}
