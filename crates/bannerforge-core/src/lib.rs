//! # Bannerforge Core
//!
//! The banner-art rendering engine for Bannerforge.
//!
//! This crate provides:
//! - Font resource loading with per-call glyph tables
//! - Text to multi-line block-letter composition
//! - CR-LF logical lines and 8-character chunk wrapping
//! - Unprintable-character detection alongside the rendered output
//!
//! ```text
//!  _
//! | |__   __ _ _ __  _ __   ___ _ __ ___
//! | '_ \ / _` | '_ \| '_ \ / _ \ '__/ __|
//! | |_) | (_| | | | | | | |  __/ |  \__ \
//! |_.__/ \__,_|_| |_|_| |_|\___|_|  |___/
//! ```

pub mod error;
pub mod font;
pub mod render;

pub use error::{BannerError, Result};
pub use font::{
    FontLoader, FontStyle, GlyphTable, BLOCK_HEIGHT, FIRST_CHAR, GLYPH_HEIGHT, LAST_CHAR,
};
pub use render::{BannerGenerator, Rendering, MAX_CHUNK};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core engine with default settings
pub fn init() -> Result<()> {
    tracing::info!("Initializing Bannerforge Core v{}", VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert!(init().is_ok());
    }
}
