//! Text to banner-art composition.
//!
//! Input is split into logical lines on CR-LF, each line into chunks of at
//! most [`MAX_CHUNK`] characters, and each chunk into 8 glyph rows followed
//! by one blank separator row.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::font::{FontLoader, FontStyle, GlyphTable, FIRST_CHAR, GLYPH_HEIGHT, LAST_CHAR};

/// Maximum characters per chunk; longer logical lines wrap.
pub const MAX_CHUNK: usize = 8;

/// Result of one render call
#[derive(Debug, Clone, Serialize)]
pub struct Rendering {
    /// The banner art
    #[serde(rename = "output")]
    pub art: String,
    /// True if any input character fell outside [32,126]
    #[serde(rename = "unprintable_warning")]
    pub has_unprintable: bool,
}

/// Banner-art generator
///
/// Stateless beyond its fonts directory: every call reloads the font and
/// builds its own glyph table, so concurrent renders are independent.
#[derive(Debug, Clone)]
pub struct BannerGenerator {
    loader: FontLoader,
}

impl BannerGenerator {
    /// Create a generator reading fonts from the given directory
    pub fn new<P: AsRef<Path>>(fonts_dir: P) -> Self {
        Self {
            loader: FontLoader::new(fonts_dir),
        }
    }

    /// Render text in the given style
    pub fn render(&self, text: &str, style: FontStyle) -> Result<Rendering> {
        let table = self.loader.load(style)?;
        let rendering = Self::render_with_table(text, &table);
        tracing::debug!(
            style = style.name(),
            chars = text.len(),
            unprintable = rendering.has_unprintable,
            "rendered banner"
        );
        Ok(rendering)
    }

    /// Render text with a font identified by name, failing fast on a name
    /// outside the supported set
    pub fn render_named(&self, text: &str, font_name: &str) -> Result<Rendering> {
        let style: FontStyle = font_name.parse()?;
        self.render(text, style)
    }

    /// Compose banner art from an already-loaded glyph table.
    ///
    /// This is the pure step: it never fails. Characters outside [32,126]
    /// contribute no width and raise the unprintable flag; printable
    /// characters missing from an incomplete table contribute no width and
    /// leave the flag alone.
    pub fn render_with_table(text: &str, table: &GlyphTable) -> Rendering {
        let logical_lines: Vec<&str> = text.split("\r\n").collect();

        let mut rows: Vec<String> = Vec::new();
        let mut has_unprintable = false;

        if logical_lines.iter().all(|line| line.is_empty()) {
            // Global short-circuit: an all-empty input renders as one bare
            // newline per logical line, with no glyph output at all.
            rows = vec![String::new(); logical_lines.len()];
        } else {
            for line in &logical_lines {
                let chars: Vec<char> = line.chars().collect();
                for chunk in chars.chunks(MAX_CHUNK) {
                    for row in 0..GLYPH_HEIGHT {
                        let mut out = String::new();
                        for &ch in chunk {
                            if !is_printable(ch) {
                                has_unprintable = true;
                                continue;
                            }
                            if let Some(glyph) = table.get(ch) {
                                out.push_str(&glyph[row]);
                            }
                        }
                        rows.push(out);
                    }
                    rows.push(String::new());
                }
            }
        }

        let mut art = rows.join("\n");
        art.push('\n');
        Rendering {
            art,
            has_unprintable,
        }
    }
}

fn is_printable(ch: char) -> bool {
    (FIRST_CHAR..=LAST_CHAR).contains(&(ch as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Table where row `r` of character `c` reads `[c r]`, for every
    /// printable character.
    fn marker_table() -> GlyphTable {
        let mut table = GlyphTable::new();
        for code in FIRST_CHAR..=LAST_CHAR {
            let ch = char::from_u32(code).unwrap();
            let rows = (0..GLYPH_HEIGHT).map(|r| format!("[{ch}{r}]")).collect();
            table.insert(ch, rows);
        }
        table
    }

    fn expected_chunk(chunk: &str) -> String {
        let mut rows = Vec::new();
        for r in 0..GLYPH_HEIGHT {
            let mut out = String::new();
            for ch in chunk.chars() {
                out.push_str(&format!("[{ch}{r}]"));
            }
            rows.push(out);
        }
        rows.push(String::new());
        rows.join("\n")
    }

    #[test]
    fn test_printable_input_sets_no_flag() {
        let table = marker_table();
        let rendering = BannerGenerator::render_with_table("Hello, world! 123", &table);
        assert!(!rendering.has_unprintable);
    }

    #[test]
    fn test_unprintable_chars_are_flagged_and_widthless() {
        let table = marker_table();
        let with_tab = BannerGenerator::render_with_table("a\tb", &table);
        let without = BannerGenerator::render_with_table("ab", &table);
        assert!(with_tab.has_unprintable);
        assert!(!without.has_unprintable);
        assert_eq!(with_tab.art, without.art);
    }

    #[test]
    fn test_single_char_round_trip() {
        let table = marker_table();
        let rendering = BannerGenerator::render_with_table("A", &table);
        assert_eq!(rendering.art, format!("{}\n", expected_chunk("A")));
    }

    #[test]
    fn test_empty_input_renders_single_newline() {
        let table = marker_table();
        let rendering = BannerGenerator::render_with_table("", &table);
        assert_eq!(rendering.art, "\n");
        assert!(!rendering.has_unprintable);
    }

    #[test]
    fn test_all_empty_lines_render_newline_per_line() {
        let table = marker_table();
        let rendering = BannerGenerator::render_with_table("\r\n\r\n\r\n", &table);
        // Four logical lines, all empty.
        assert_eq!(rendering.art, "\n\n\n\n");
    }

    #[test]
    fn test_blank_line_among_text_does_not_short_circuit() {
        let table = marker_table();
        let rendering = BannerGenerator::render_with_table("\r\nhi", &table);
        // The leading empty line produces no chunks; only "hi" renders.
        assert_eq!(rendering.art, format!("{}\n", expected_chunk("hi")));
    }

    #[test]
    fn test_two_logical_lines_render_as_two_groups() {
        let table = marker_table();
        let rendering = BannerGenerator::render_with_table("hi\r\nyo", &table);
        let expected = format!("{}\n{}\n", expected_chunk("hi"), expected_chunk("yo"));
        assert_eq!(rendering.art, expected);
        assert_eq!(rendering.art.matches('\n').count(), 18);
    }

    #[test]
    fn test_long_line_wraps_into_chunks() {
        let table = marker_table();
        let rendering = BannerGenerator::render_with_table("abcdefghij", &table);
        let expected = format!(
            "{}\n{}\n",
            expected_chunk("abcdefgh"),
            expected_chunk("ij")
        );
        assert_eq!(rendering.art, expected);
        assert_eq!(rendering.art.matches('\n').count(), 18);
    }

    #[test]
    fn test_chunk_arithmetic() {
        let table = marker_table();
        for len in 1..=25 {
            let text = "x".repeat(len);
            let rendering = BannerGenerator::render_with_table(&text, &table);
            let chunks = len.div_ceil(MAX_CHUNK);
            let lines = chunks * (GLYPH_HEIGHT + 1);
            assert_eq!(rendering.art.matches('\n').count(), lines, "len {len}");
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let table = marker_table();
        let first = BannerGenerator::render_with_table("same input\r\ntwice", &table);
        let second = BannerGenerator::render_with_table("same input\r\ntwice", &table);
        assert_eq!(first.art, second.art);
        assert_eq!(first.has_unprintable, second.has_unprintable);
    }

    #[test]
    fn test_missing_glyph_renders_nothing_without_flag() {
        let mut table = GlyphTable::new();
        // Only 'a' has a glyph.
        table.insert('a', (0..GLYPH_HEIGHT).map(|r| format!("[a{r}]")).collect());
        let rendering = BannerGenerator::render_with_table("az", &table);
        assert!(!rendering.has_unprintable);
        assert_eq!(rendering.art, format!("{}\n", expected_chunk("a")));
    }
}
