use crate::error::{Error, Result};

/// Geometry of a textual bitmap: `width` x `height` cells, `#` on, `.` off.
///
/// One instance describes the grid shape and converts between glyph strings
/// and the flat numeric vectors the network consumes. Encoding and rendering
/// are exact inverses for well-formed `#`/`.` glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGrid {
    pub width: usize,
    pub height: usize,
}

impl GlyphGrid {
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> GlyphGrid {
        assert!(width > 0 && height > 0, "grid needs positive dimensions");
        GlyphGrid { width, height }
    }

    /// Number of cells a glyph for this grid must have.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Maps a glyph string to a flat 0.0/1.0 vector in row-major order.
    ///
    /// Leading and trailing whitespace is stripped first; `#` becomes 1.0
    /// and every other character becomes 0.0. The trimmed glyph must have
    /// exactly `cell_count()` characters; a wrong-sized glyph is rejected
    /// rather than truncated or padded.
    pub fn encode(&self, glyph: &str) -> Result<Vec<f64>> {
        let trimmed = glyph.trim();
        let actual = trimmed.chars().count();
        if actual != self.cell_count() {
            return Err(Error::InvalidGlyphSize {
                expected: self.cell_count(),
                actual,
            });
        }
        Ok(trimmed
            .chars()
            .map(|c| if c == '#' { 1.0 } else { 0.0 })
            .collect())
    }

    /// Inverse of `encode`: values above 0.5 render as `#`, the rest as `.`.
    pub fn render(&self, pattern: &[f64]) -> Result<String> {
        if pattern.len() != self.cell_count() {
            return Err(Error::InvalidGlyphSize {
                expected: self.cell_count(),
                actual: pattern.len(),
            });
        }
        Ok(pattern
            .iter()
            .map(|&v| if v > 0.5 { '#' } else { '.' })
            .collect())
    }

    /// Renders a pattern as `height` rows of `width` characters each.
    pub fn render_lines(&self, pattern: &[f64]) -> Result<Vec<String>> {
        let flat: Vec<char> = self.render(pattern)?.chars().collect();
        Ok(flat
            .chunks(self.width)
            .map(|row| row.iter().collect())
            .collect())
    }
}
