// ABOUTME: Error types for the lega-slides application
// ABOUTME: Provides structured error handling for state updates and export generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Export generation error: {0}")]
    ExportError(String),

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("Headless browser error: {message}")]
    BrowserError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Browser not found. Make sure Chrome/Chromium is installed.")]
    BrowserNotFound,

    #[error("Environment permission denied: {0}")]
    PermissionDenied(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our DeckError
impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::ExportError(format!("ZIP operation failed: {}", err))
    }
}

// Implement conversion from image decoding errors
impl From<image::ImageError> for DeckError {
    fn from(err: image::ImageError) -> Self {
        DeckError::AssetError(format!("Image decoding failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
