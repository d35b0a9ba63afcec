//! Banner font loading.
//!
//! A font resource is a plain-text file of repeating 9-line blocks, one block
//! per printable character starting at code 32. The first line of each block
//! is a separator and is discarded; the remaining 8 lines are the glyph rows.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BannerError, Result};

/// Number of text rows in one glyph.
pub const GLYPH_HEIGHT: usize = 8;

/// Lines per font-resource block: one separator line plus the glyph rows.
pub const BLOCK_HEIGHT: usize = GLYPH_HEIGHT + 1;

/// First character code a font resource covers.
pub const FIRST_CHAR: u32 = 32;

/// Last character code a font resource covers.
pub const LAST_CHAR: u32 = 126;

/// Banner font styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Outlined letters drawn with slashes and underscores
    Standard,
    /// Heavy strokes with a drop-shadow feel
    Shadow,
    /// Dot-and-dash construction-toy look
    Thinkertoy,
}

impl FontStyle {
    /// Get all available font styles
    pub fn all() -> &'static [FontStyle] {
        &[FontStyle::Standard, FontStyle::Shadow, FontStyle::Thinkertoy]
    }

    /// Style identifier, as used in font names and file names
    pub fn name(&self) -> &'static str {
        match self {
            FontStyle::Standard => "standard",
            FontStyle::Shadow => "shadow",
            FontStyle::Thinkertoy => "thinkertoy",
        }
    }

    /// File name of this style's font resource
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontStyle {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(FontStyle::Standard),
            "shadow" => Ok(FontStyle::Shadow),
            "thinkertoy" => Ok(FontStyle::Thinkertoy),
            other => Err(BannerError::UnknownFont(other.to_string())),
        }
    }
}

/// Mapping from character to its glyph rows, built fresh per render call
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    glyphs: HashMap<char, Vec<String>>,
}

impl GlyphTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a glyph for a character
    pub fn insert(&mut self, ch: char, rows: Vec<String>) {
        self.glyphs.insert(ch, rows);
    }

    /// Glyph rows for a character, if the font defines one
    pub fn get(&self, ch: char) -> Option<&[String]> {
        self.glyphs.get(&ch).map(|rows| rows.as_slice())
    }

    /// Number of characters with a glyph
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True if no glyphs are mapped
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// True if every character in [32,126] has a glyph
    pub fn covers_printable_range(&self) -> bool {
        (FIRST_CHAR..=LAST_CHAR)
            .filter_map(char::from_u32)
            .all(|ch| self.glyphs.contains_key(&ch))
    }
}

/// Loads font resources from a directory of `<style>.txt` files
#[derive(Debug, Clone)]
pub struct FontLoader {
    fonts_dir: PathBuf,
}

impl FontLoader {
    /// Create a loader rooted at the given fonts directory
    pub fn new<P: AsRef<Path>>(fonts_dir: P) -> Self {
        Self {
            fonts_dir: fonts_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory the loader reads font resources from
    pub fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    /// Load the glyph table for a style.
    ///
    /// A read failure is a recoverable [`BannerError::FontUnavailable`]; the
    /// loader never terminates the process.
    pub fn load(&self, style: FontStyle) -> Result<GlyphTable> {
        let path = self.fonts_dir.join(style.file_name());
        let raw = fs::read_to_string(&path).map_err(|source| BannerError::FontUnavailable {
            style: style.name().to_string(),
            source,
        })?;
        tracing::debug!(style = style.name(), path = %path.display(), "loaded font resource");
        Ok(Self::parse(&raw, style))
    }

    /// Build a glyph table from raw font-resource text.
    ///
    /// Carriage returns are stripped, then lines are walked in blocks of
    /// [`BLOCK_HEIGHT`]. A block is only assigned when it ends before the
    /// final line of the resource; the last line is never assignable. The
    /// character code stops advancing past [`LAST_CHAR`], so blocks beyond
    /// the printable range all land on code 127 and are never looked up.
    fn parse(raw: &str, style: FontStyle) -> GlyphTable {
        let flat = raw.replace('\r', "");
        let lines: Vec<&str> = flat.split('\n').collect();

        let mut table = GlyphTable::new();
        let mut code = FIRST_CHAR;
        let mut i = 0;
        while i < lines.len() {
            if i + BLOCK_HEIGHT <= lines.len() - 1 {
                if let Some(ch) = char::from_u32(code) {
                    let rows = lines[i + 1..i + BLOCK_HEIGHT]
                        .iter()
                        .map(|row| row.to_string())
                        .collect();
                    table.insert(ch, rows);
                }
            }
            if code <= LAST_CHAR {
                code += 1;
            }
            i += BLOCK_HEIGHT;
        }

        if !table.covers_printable_range() {
            tracing::warn!(
                style = style.name(),
                glyphs = table.len(),
                "font resource does not cover the full printable range"
            );
        }
        table
    }
}
