//! Error types for pattern generation and image analysis.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` boilerplate from the `#[error(...)]`
//! attributes, so each variant reads like the message it prints.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong in the kolam library.
///
/// All variants are recoverable: callers decide how to present them.
#[derive(Error, Debug)]
pub enum KolamError {
    /// A request parameter is malformed or out of range.
    #[error("invalid parameter `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The pattern name does not match any known pattern kind.
    #[error("unsupported pattern kind: {0}")]
    UnsupportedPatternKind(String),

    /// The image path does not exist.
    #[error("image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    /// The source exists but is not a decodable image.
    #[error("failed to decode image {name}: {source}")]
    ImageDecode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    /// A request or image exceeds a configured safety ceiling.
    #[error("{what} {value} exceeds the limit of {limit}")]
    ResourceLimitExceeded { what: &'static str, value: u64, limit: u64 },

    /// Rasterizing or encoding a drawing failed.
    #[error("render failed: {0}")]
    Render(String),

    /// A configuration or request file could not be parsed.
    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KolamError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        KolamError::Validation { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, KolamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = KolamError::validation("spacing", "must be positive, got -1");
        assert_eq!(err.to_string(), "invalid parameter `spacing`: must be positive, got -1");

        let err = KolamError::ImageNotFound { path: PathBuf::from("missing.jpg") };
        assert!(err.to_string().contains("missing.jpg"));

        let err = KolamError::ResourceLimitExceeded { what: "fractal depth", value: 12, limit: 8 };
        assert_eq!(err.to_string(), "fractal depth 12 exceeds the limit of 8");
    }
}
