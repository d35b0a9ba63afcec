//! Error types for Bannerforge Core

use thiserror::Error;

/// Result type for Bannerforge Core operations
pub type Result<T> = std::result::Result<T, BannerError>;

/// Core error types
#[derive(Error, Debug)]
pub enum BannerError {
    /// The font resource for a supported style could not be read
    #[error("font resource for '{style}' unavailable: {source}")]
    FontUnavailable {
        style: String,
        #[source]
        source: std::io::Error,
    },

    /// Font name outside the supported set
    #[error("unknown font '{0}' (expected one of: standard, shadow, thinkertoy)")]
    UnknownFont(String),
}
