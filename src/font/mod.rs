//! TTF-backed glyph rasterization via `fontdue`.
//!
//! Available when the `fontdue` feature is enabled.

use crate::engine::{GlyphRasterizer, RenderSpec};
use crate::raster::Raster;
use crate::util::{GlyphdexError, GlyphdexResult};
use std::path::Path;

/// Glyph rasterizer backed by a parsed TrueType/OpenType font.
pub struct FontEngine {
    font: fontdue::Font,
}

impl FontEngine {
    /// Parses a font from raw file bytes.
    pub fn from_bytes(data: &[u8]) -> GlyphdexResult<Self> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).map_err(
            |reason| GlyphdexError::FontLoad {
                reason: reason.to_string(),
            },
        )?;
        Ok(Self { font })
    }

    /// Reads and parses a font file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> GlyphdexResult<Self> {
        let data = std::fs::read(&path).map_err(|err| GlyphdexError::FontLoad {
            reason: format!("{}: {err}", path.as_ref().display()),
        })?;
        Self::from_bytes(&data)
    }

    fn single_char(glyph: &str) -> GlyphdexResult<char> {
        let mut chars = glyph.chars();
        let ch = chars.next().ok_or_else(|| GlyphdexError::Rasterization {
            glyph: glyph.to_string(),
            reason: "empty glyph string",
        })?;
        if chars.next().is_some() {
            return Err(GlyphdexError::Rasterization {
                glyph: glyph.to_string(),
                reason: "glyph is not a single character",
            });
        }
        Ok(ch)
    }
}

impl GlyphRasterizer for FontEngine {
    /// Rasterizes one character dark-on-light onto the canvas.
    ///
    /// The coverage bitmap is placed relative to the pen and baseline of
    /// `spec` using the glyph metrics, clipped to the canvas. Characters the
    /// font's cmap does not map are rejected up front; `fontdue` would
    /// otherwise substitute the .notdef glyph and a tofu box would end up in
    /// the index.
    fn rasterize(&self, glyph: &str, spec: &RenderSpec) -> GlyphdexResult<Raster> {
        let ch = Self::single_char(glyph)?;
        if self.font.lookup_glyph_index(ch) == 0 {
            return Err(GlyphdexError::Rasterization {
                glyph: glyph.to_string(),
                reason: "font has no glyph for this character",
            });
        }

        let mut canvas = Raster::filled(spec.canvas_width, spec.canvas_height, spec.background)?;
        let (metrics, coverage) = self.font.rasterize(ch, spec.font_size);

        // Glyph origin in canvas coordinates: xmin right of the pen, ymin
        // above the baseline (fontdue measures ymin from the baseline to the
        // bitmap's bottom edge, y growing up).
        let x0 = spec.pen_x() + metrics.xmin;
        let y0 = spec.baseline_y() - metrics.height as i32 - metrics.ymin;

        for (idx, &cov) in coverage.iter().enumerate() {
            if cov == 0 {
                continue;
            }
            let px = x0 + (idx % metrics.width) as i32;
            let py = y0 + (idx / metrics.width) as i32;
            if px < 0 || py < 0 {
                continue;
            }
            if let Some(pixel) = canvas.get_mut(px as usize, py as usize) {
                // Min-blend: heavier coverage wins where bitmaps overlap.
                *pixel = (*pixel).min(spec.background.saturating_sub(cov));
            }
        }

        Ok(canvas)
    }
}
