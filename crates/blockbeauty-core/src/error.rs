//! Error types for BlockBeauty

use thiserror::Error;

/// Failure reported by one of the export collaborators.
///
/// None of these ever reach the user: the exporter logs them and
/// leaves the card untouched.
#[derive(Error, Debug)]
pub enum ExportError {
    /// No usable monospace font could be loaded for rasterization
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    /// The card could not be captured into a pixel buffer
    #[error("Capture error: {0}")]
    Capture(String),

    /// Syntax highlighting failed for the card source
    #[error("Highlight error: {0}")]
    Highlight(String),

    /// PNG encoding failed
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the image to disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ExportError
pub type ExportResult<T> = Result<T, ExportError>;
