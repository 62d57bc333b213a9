//! Tight glyph bounding boxes.
//!
//! A bounding box is the minimal axis-aligned rectangle enclosing every
//! foreground pixel of a raster. Extraction is a single pass tracking running
//! minima and maxima, so it costs O(width * height) time and no extra memory
//! regardless of how much ink the glyph carries.

use crate::raster::RasterView;
use crate::util::{GlyphdexError, GlyphdexResult};

/// Pixel coordinate in raster space, `y` growing downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

/// Minimal rectangle enclosing all foreground pixels of a raster.
///
/// Both corners are inclusive pixel coordinates within the source raster, and
/// `min.x <= max.x`, `min.y <= max.y` always hold for an extracted box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Top-left extreme.
    pub min: Point,
    /// Bottom-right extreme.
    pub max: Point,
}

impl BoundingBox {
    /// Horizontal extent as the difference of extremes (`max.x - min.x`).
    ///
    /// This is the convention the aspect classifier consumes; a box covering
    /// a single column has extent 0. Use [`BoundingBox::span_x`] for the
    /// inclusive pixel count.
    pub fn extent_x(&self) -> usize {
        self.max.x - self.min.x
    }

    /// Vertical extent as the difference of extremes (`max.y - min.y`).
    pub fn extent_y(&self) -> usize {
        self.max.y - self.min.y
    }

    /// Inclusive horizontal pixel span (`max.x - min.x + 1`), used for cropping.
    pub fn span_x(&self) -> usize {
        self.max.x - self.min.x + 1
    }

    /// Inclusive vertical pixel span (`max.y - min.y + 1`), used for cropping.
    pub fn span_y(&self) -> usize {
        self.max.y - self.min.y + 1
    }
}

/// Decides whether a pixel counts as glyph ink or background.
///
/// Exact equality with the background is the default and matches aliased
/// rendering; a nonzero `tolerance` absorbs near-background values that
/// anti-aliasing engines leave along glyph edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForegroundRule {
    /// Background pixel value.
    pub background: u8,
    /// Maximum distance from the background still treated as background.
    pub tolerance: u8,
}

impl ForegroundRule {
    /// Exact-match rule for the given background value.
    pub fn exact(background: u8) -> Self {
        Self {
            background,
            tolerance: 0,
        }
    }

    /// Returns true if the pixel is foreground under this rule.
    #[inline]
    pub fn is_foreground(&self, value: u8) -> bool {
        value.abs_diff(self.background) > self.tolerance
    }
}

impl Default for ForegroundRule {
    /// White background, exact match.
    fn default() -> Self {
        Self::exact(u8::MAX)
    }
}

/// Extracts the tight bounding box of the foreground pixels in a view.
///
/// Returns [`GlyphdexError::EmptyGlyph`] when no pixel passes the foreground
/// rule, so callers never see a box fabricated from an empty pixel set. The
/// result depends only on the raster content, not on traversal order.
pub fn glyph_bounds(view: RasterView<'_>, rule: &ForegroundRule) -> GlyphdexResult<BoundingBox> {
    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0usize;
    let mut max_y = 0usize;
    let mut found = false;

    for y in 0..view.height() {
        let row = view.row(y).ok_or(GlyphdexError::BufferTooSmall {
            needed: (y + 1).saturating_mul(view.stride()),
            got: view.stride().saturating_mul(view.height()),
        })?;
        for (x, &value) in row.iter().enumerate() {
            if rule.is_foreground(value) {
                found = true;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }

    if !found {
        return Err(GlyphdexError::EmptyGlyph);
    }
    Ok(BoundingBox {
        min: Point { x: min_x, y: min_y },
        max: Point { x: max_x, y: max_y },
    })
}
