//! Glyph-metrics capability consumed by pointer-to-column resolution.
//!
//! The core never measures pixels itself; the rendering collaborator supplies
//! an implementation of [`GlyphMetrics`] backed by its font. For tests and
//! terminal-like hosts, [`MonospaceMetrics`] provides fixed-advance metrics
//! with double-width CJK handled via `unicode-width`.

use unicode_width::UnicodeWidthChar;

/// Measures character and string pixel dimensions.
pub trait GlyphMetrics {
    /// Width of a single character in pixels.
    fn measure_char(&self, ch: char) -> f32;

    /// Line height in pixels.
    fn line_height(&self) -> f32;

    /// Width and height of a single-row string.
    ///
    /// The default sums per-character widths; font-backed implementations may
    /// override with kerning-aware measurement.
    fn measure_string(&self, s: &str) -> (f32, f32) {
        let width = s.chars().map(|ch| self.measure_char(ch)).sum();
        (width, self.line_height())
    }
}

/// Fixed-advance metrics: every cell is `char_width` wide, with wide
/// characters taking two cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    /// Create monospace metrics with the given cell dimensions.
    #[must_use]
    pub const fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn measure_char(&self, ch: char) -> f32 {
        let cells = ch.width().unwrap_or(0) as f32;
        cells * self.char_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
