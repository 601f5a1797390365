//! Font metrics as the layout engine sees them.
//!
//! The engine assumes a monospace face, so layout reduces to integer
//! division: columns per page from the glyph width, rows per page from the
//! line height. Measurement itself happens outside the engine; whatever
//! measures the font hands one of these across the boundary.

/// Metrics for a monospace font, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Advance width of a single glyph
    pub glyph_width_px: u32,
    /// Line height including leading
    pub line_height_px: u32,
}

impl FontMetrics {
    /// Returns how many character columns fit in `width_px`.
    ///
    /// Floors at 1 so a zero-width window (or degenerate metrics) still
    /// lays out one column instead of dividing by zero.
    pub fn cols_for_width(&self, width_px: u32) -> usize {
        if self.glyph_width_px == 0 {
            return 1;
        }
        ((width_px / self.glyph_width_px) as usize).max(1)
    }

    /// Returns how many text rows fit in `height_px`, floored at 1.
    pub fn rows_for_height(&self, height_px: u32) -> usize {
        if self.line_height_px == 0 {
            return 1;
        }
        ((height_px / self.line_height_px) as usize).max(1)
    }
}

impl Default for FontMetrics {
    /// Placeholder metrics used before the platform has measured anything:
    /// an 8x16 cell, the classic fixed-pitch raster size.
    fn default() -> Self {
        Self {
            glyph_width_px: 8,
            line_height_px: 16,
        }
    }
}
