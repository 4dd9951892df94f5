//! Gallery error types

/// Errors that can occur while running the gallery.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Terminal I/O failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
